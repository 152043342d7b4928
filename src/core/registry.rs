use crate::core::config::LibraryDescription;
use crate::core::error::Result;
use crate::core::pbrt::*;
use crate::materials::create_material;

use std::collections::HashMap;
use std::sync::Arc;

use log::*;

pub type NamedMaterialMap = HashMap<String, Arc<dyn Material>>;

/// Named materials of one render session.
#[derive(Default)]
pub struct MaterialRegistry {
    materials: NamedMaterialMap,
    order: Vec<String>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every material of `lib` in declaration order, so a mix only
    /// sees the entries declared before it.
    pub fn from_library(lib: &LibraryDescription) -> Result<Self> {
        let mut registry = MaterialRegistry::new();
        for desc in lib.materials.iter() {
            let mat = create_material(desc, &registry)?;
            registry.add(&desc.name, mat)?;
        }
        return Ok(registry);
    }

    pub fn add(&mut self, name: &str, material: Arc<dyn Material>) -> Result<()> {
        if self.materials.contains_key(name) {
            return Err(ScatterError::DuplicateMaterial(name.to_string()));
        }
        debug!("Material \"{}\": {}", name, material.to_string());
        self.materials.insert(String::from(name), material);
        self.order.push(String::from(name));
        return Ok(());
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Material>> {
        return self.materials.get(name).map(Arc::clone);
    }

    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Material>> {
        return self
            .get(name)
            .ok_or_else(|| ScatterError::UnknownMaterial(name.to_string()));
    }

    pub fn len(&self) -> usize {
        return self.order.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.order.is_empty();
    }

    /// Names in insertion order.
    pub fn names(&self) -> &[String] {
        return &self.order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MatteMaterial;

    fn matte() -> Arc<dyn Material> {
        return Arc::new(MatteMaterial::new(&Spectrum::from(0.5), 0.0));
    }

    #[test]
    fn test_add_and_lookup() {
        let mut r = MaterialRegistry::new();
        assert!(r.is_empty());
        r.add("b", matte()).unwrap();
        r.add("a", matte()).unwrap();
        assert_eq!(r.len(), 2);
        assert_eq!(r.names(), &["b".to_string(), "a".to_string()]);
        assert!(r.get("a").is_some());
        assert!(r.get("c").is_none());
        match r.lookup("c") {
            Err(ScatterError::UnknownMaterial(n)) => assert_eq!(n, "c"),
            _ => panic!("expected UnknownMaterial"),
        }
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let mut r = MaterialRegistry::new();
        r.add("a", matte()).unwrap();
        match r.add("a", matte()) {
            Err(ScatterError::DuplicateMaterial(n)) => assert_eq!(n, "a"),
            _ => panic!("expected DuplicateMaterial"),
        }
        assert_eq!(r.len(), 1);
    }
}
