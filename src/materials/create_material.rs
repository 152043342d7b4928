use crate::core::config::*;
use crate::core::error::Result;
use crate::core::pbrt::*;
use crate::core::registry::MaterialRegistry;

use super::hair::*;
use super::matte::*;
use super::mix::*;
use super::plastic::*;

use std::sync::Arc;

/// `registry` resolves the names a mix refers to.
pub fn create_material(
    desc: &MaterialDescription,
    registry: &MaterialRegistry,
) -> Result<Arc<dyn Material>> {
    let name = desc.name.as_str();
    return match &desc.kind {
        MaterialKind::Hair(h) => create_hair_material(name, h),
        MaterialKind::Matte(m) => create_matte_material(name, m),
        MaterialKind::Plastic(p) => create_plastic_material(name, p),
        MaterialKind::Mix(m) => create_mix_material(name, m, registry),
    };
}
