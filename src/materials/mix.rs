use crate::core::config::MixDescription;
use crate::core::error::Result;
use crate::core::pbrt::*;
use crate::core::registry::MaterialRegistry;

use std::sync::Arc;

/// Blends two materials: `amount` scales the first, `1 - amount` the second.
pub struct MixMaterial {
    m1: Arc<dyn Material>,
    m2: Arc<dyn Material>,
    amount: Spectrum,
}

impl MixMaterial {
    pub fn new(m1: &Arc<dyn Material>, m2: &Arc<dyn Material>, amount: &Spectrum) -> Self {
        Self {
            m1: Arc::clone(m1),
            m2: Arc::clone(m2),
            amount: *amount,
        }
    }
}

impl Material for MixMaterial {
    fn compute_scattering_functions(&self, si: &SurfaceInteraction) -> Result<BSDF> {
        // Compute weights and component BSDFs for mix material
        let s1 = self.amount.clamp_zero();
        let s2 = (Spectrum::one() - s1).clamp_zero();

        let mut b1 = self.m1.compute_scattering_functions(si)?;
        let mut b2 = self.m2.compute_scattering_functions(si)?;
        b1.scale(&s1);
        b2.scale(&s2);
        b1.append(b2);
        return Ok(b1);
    }

    fn to_string(&self) -> String {
        return format!(
            "[ MixMaterial m1: {} m2: {} amount: {:?} ]",
            self.m1.to_string(),
            self.m2.to_string(),
            self.amount
        );
    }
}

pub fn create_mix_material(
    name: &str,
    desc: &MixDescription,
    registry: &MaterialRegistry,
) -> Result<Arc<dyn Material>> {
    let m1 = registry.lookup(&desc.materials[0])?;
    let m2 = registry.lookup(&desc.materials[1])?;
    let amount = desc.amount.to_spectrum();
    if !amount.is_valid() {
        return Err(ScatterError::invalid_parameter(
            name,
            "amount",
            "must be finite and non-negative",
        ));
    }
    return Ok(Arc::new(MixMaterial::new(&m1, &m2, &amount)));
}
