use crate::core::pbrt::*;

use std::mem::swap;

pub trait Fresnel: Send + Sync {
    fn evaluate(&self, cos_i: Float) -> Spectrum;
    fn to_string(&self) -> String {
        return "[Fresnel unknown]".to_string();
    }
}

/// Unpolarized reflectance of a dielectric interface, in `[0, 1]`.
///
/// A negative cosine means the ray arrives from the `eta_t` side.
pub fn fr_dielectric(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let mut cos_theta_i = Float::clamp(cos_theta_i, -1.0, 1.0);
    let mut eta_i = eta_i;
    let mut eta_t = eta_t;
    if cos_theta_i <= 0.0 {
        swap(&mut eta_i, &mut eta_t);
        cos_theta_i = Float::abs(cos_theta_i);
    }

    // Snell's law
    let sin_theta_i = safe_sqrt(1.0 - cos_theta_i * cos_theta_i);
    let sin_theta_t = eta_i / eta_t * sin_theta_i;
    if sin_theta_t >= 1.0 {
        // total internal reflection
        return 1.0;
    }
    let cos_theta_t = safe_sqrt(1.0 - sin_theta_t * sin_theta_t);
    let rparl = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
        / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
    let rperp = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
        / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
    let r = (rparl * rparl + rperp * rperp) / 2.0;
    if r.is_nan() {
        return 1.0;
    }
    return Float::clamp(r, 0.0, 1.0);
}

pub struct FresnelDielectric {
    eta_i: Float,
    eta_t: Float,
}

impl FresnelDielectric {
    pub fn new(eta_i: Float, eta_t: Float) -> Self {
        FresnelDielectric { eta_i, eta_t }
    }
}

impl Fresnel for FresnelDielectric {
    fn evaluate(&self, cos_i: Float) -> Spectrum {
        return Spectrum::from(fr_dielectric(cos_i, self.eta_i, self.eta_t));
    }

    fn to_string(&self) -> String {
        return format!(
            "[ FresnelDielectric etaI: {} etaT: {} ]",
            self.eta_i, self.eta_t
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_incidence() {
        // ((eta - 1) / (eta + 1))^2
        let f = fr_dielectric(1.0, 1.0, 1.55);
        assert!((f - 0.046_52).abs() < 1e-4, "{}", f);
        let f = fr_dielectric(1.0, 1.0, 1.5);
        assert!((f - 0.04).abs() < 1e-5, "{}", f);
    }

    #[test]
    fn test_grazing_and_tir() {
        assert!((fr_dielectric(0.0, 1.0, 1.5) - 1.0).abs() < 1e-5);
        // leaving the dense side at a shallow angle
        assert_eq!(fr_dielectric(-0.1, 1.0, 1.5), 1.0);
    }

    #[test]
    fn test_range() {
        for i in 0..=100 {
            let c = -1.0 + 2.0 * i as Float / 100.0;
            let f = fr_dielectric(c, 1.0, 1.55);
            assert!((0.0..=1.0).contains(&f), "{} {}", c, f);
        }
    }
}
