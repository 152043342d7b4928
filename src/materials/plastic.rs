use crate::core::config::PlasticDescription;
use crate::core::error::Result;
use crate::core::pbrt::*;

use std::sync::Arc;

/// Diffuse base under a glossy dielectric coat.
pub struct PlasticMaterial {
    kd: Spectrum,
    ks: Spectrum,
    roughness: Float,
    remaproughness: bool,
}

impl PlasticMaterial {
    pub fn new(kd: &Spectrum, ks: &Spectrum, roughness: Float, remaproughness: bool) -> Self {
        PlasticMaterial {
            kd: *kd,
            ks: *ks,
            roughness,
            remaproughness,
        }
    }
}

impl Material for PlasticMaterial {
    fn compute_scattering_functions(&self, si: &SurfaceInteraction) -> Result<BSDF> {
        si.check_frame()?;
        let mut b = BSDF::new(si, 1.0);

        // Initialize diffuse component of plastic material
        let kd = self.kd.clamp_zero();
        if !kd.is_black() {
            b.add(BxDFEnum::from(LambertianReflection::new(&kd)));
        }

        // Initialize specular component of plastic material
        let ks = self.ks.clamp_zero();
        if !ks.is_black() {
            let mut rough = self.roughness;
            if self.remaproughness {
                rough = TrowbridgeReitzDistribution::roughness_to_alpha(rough);
            }
            let fresnel: Arc<dyn Fresnel> = Arc::new(FresnelDielectric::new(1.5, 1.0));
            let distrib: Arc<dyn MicrofacetDistribution> =
                Arc::new(TrowbridgeReitzDistribution::new(rough, rough, true));
            b.add(BxDFEnum::from(MicrofacetReflection::new(
                &ks, distrib, fresnel,
            )));
        }
        return Ok(b);
    }

    fn to_string(&self) -> String {
        return format!(
            "[ PlasticMaterial Kd: {:?} Ks: {:?} roughness: {} ]",
            self.kd, self.ks, self.roughness
        );
    }
}

pub fn create_plastic_material(
    name: &str,
    desc: &PlasticDescription,
) -> Result<Arc<dyn Material>> {
    let kd = desc.kd.to_spectrum();
    let ks = desc.ks.to_spectrum();
    if !kd.is_valid() {
        return Err(ScatterError::invalid_parameter(
            name,
            "Kd",
            "must be finite and non-negative",
        ));
    }
    if !ks.is_valid() {
        return Err(ScatterError::invalid_parameter(
            name,
            "Ks",
            "must be finite and non-negative",
        ));
    }
    if !(desc.roughness > 0.0) || !desc.roughness.is_finite() {
        return Err(ScatterError::invalid_parameter(
            name,
            "roughness",
            "must be positive",
        ));
    }
    return Ok(Arc::new(PlasticMaterial::new(
        &kd,
        &ks,
        desc.roughness,
        desc.remaproughness,
    )));
}
