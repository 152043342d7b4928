use crate::core::config::MatteDescription;
use crate::core::error::Result;
use crate::core::pbrt::*;

use std::sync::Arc;

/// Diffuse surface: Lambertian, or Oren-Nayar when `sigma` is non-zero.
pub struct MatteMaterial {
    kd: Spectrum,
    sigma: Float,
}

impl MatteMaterial {
    pub fn new(kd: &Spectrum, sigma: Float) -> Self {
        MatteMaterial { kd: *kd, sigma }
    }
}

impl Material for MatteMaterial {
    fn compute_scattering_functions(&self, si: &SurfaceInteraction) -> Result<BSDF> {
        si.check_frame()?;
        let mut b = BSDF::new(si, 1.0);

        let r = self.kd.clamp_zero();
        let sig = Float::clamp(self.sigma, 0.0, 90.0);
        if !r.is_black() {
            if sig == 0.0 {
                b.add(BxDFEnum::from(LambertianReflection::new(&r)));
            } else {
                b.add(BxDFEnum::from(OrenNayar::new(&r, sig)));
            }
        }
        return Ok(b);
    }

    fn to_string(&self) -> String {
        return format!("[ MatteMaterial Kd: {:?} sigma: {} ]", self.kd, self.sigma);
    }
}

pub fn create_matte_material(name: &str, desc: &MatteDescription) -> Result<Arc<dyn Material>> {
    let kd = desc.kd.to_spectrum();
    if !kd.is_valid() {
        return Err(ScatterError::invalid_parameter(
            name,
            "Kd",
            "must be finite and non-negative",
        ));
    }
    if !desc.sigma.is_finite() {
        return Err(ScatterError::invalid_parameter(name, "sigma", "must be finite"));
    }
    return Ok(Arc::new(MatteMaterial::new(&kd, desc.sigma)));
}
