use super::microfacet::MicrofacetDistribution;
use crate::core::pbrt::*;

// Slopes of the visible normals of an isotropic unit-roughness surface,
// seen from a direction with the given cosine.
fn sample_visible_slopes_11(cos_theta: Float, u1: Float, u2: Float) -> (Float, Float) {
    if cos_theta > 0.9999 {
        let r = Float::sqrt(u1 / (1.0 - u1));
        let phi = 2.0 * PI * u2;
        return (r * Float::cos(phi), r * Float::sin(phi));
    }

    let sin_theta = safe_sqrt(1.0 - cos_theta * cos_theta);
    let tan_theta = sin_theta / cos_theta;
    let inv_tan = 1.0 / tan_theta;
    let g1 = 2.0 / (1.0 + Float::sqrt(1.0 + 1.0 / (inv_tan * inv_tan)));

    // slope x
    let a = 2.0 * u1 / g1 - 1.0;
    let tmp = Float::min(1e10, 1.0 / (a * a - 1.0));
    let b = tan_theta;
    let d = Float::sqrt(Float::max(b * b * tmp * tmp - (a * a - b * b) * tmp, 0.0));
    let slope_x_1 = b * tmp - d;
    let slope_x_2 = b * tmp + d;
    let slope_x = if a < 0.0 || slope_x_2 > inv_tan {
        slope_x_1
    } else {
        slope_x_2
    };

    // slope y
    let (s, u2) = if u2 > 0.5 {
        (1.0, 2.0 * (u2 - 0.5))
    } else {
        (-1.0, 2.0 * (0.5 - u2))
    };
    let z = (u2 * (u2 * (u2 * 0.27385 - 0.73369) + 0.46341))
        / (u2 * (u2 * (u2 * 0.093073 + 0.309420) - 1.000000) + 0.597999);
    let slope_y = s * z * Float::sqrt(1.0 + slope_x * slope_x);

    debug_assert!(slope_x.is_finite() && slope_y.is_finite());
    return (slope_x, slope_y);
}

fn sample_visible_normal(w: &Vector3f, alpha_x: Float, alpha_y: Float, u: &Point2f) -> Vector3f {
    let stretched = Vector3f::new(alpha_x * w.x, alpha_y * w.y, w.z).normalize();
    let (sx, sy) = sample_visible_slopes_11(cos_theta(&stretched), u[0], u[1]);

    let (cos_p, sin_p) = (cos_phi(&stretched), sin_phi(&stretched));
    let slope_x = (cos_p * sx - sin_p * sy) * alpha_x;
    let slope_y = (sin_p * sx + cos_p * sy) * alpha_y;

    return Vector3f::new(-slope_x, -slope_y, 1.0).normalize();
}

/// GGX distribution with optional visible-normal sampling.
pub struct TrowbridgeReitzDistribution {
    alphax: Float,
    alphay: Float,
    samplevis: bool,
}

impl TrowbridgeReitzDistribution {
    pub fn new(alphax: Float, alphay: Float, samplevis: bool) -> Self {
        TrowbridgeReitzDistribution {
            alphax: Float::max(0.001, alphax),
            alphay: Float::max(0.001, alphay),
            samplevis,
        }
    }

    /// Maps a perceptual roughness in `[0, 1]` onto `alpha`.
    pub fn roughness_to_alpha(roughness: Float) -> Float {
        let x = Float::ln(Float::max(roughness, 1e-3));
        return 1.62142
            + 0.819955 * x
            + 0.1734 * x * x
            + 0.0171201 * x * x * x
            + 0.000640711 * x * x * x * x;
    }

    fn sample_all_normals(&self, u: &Point2f) -> Vector3f {
        let u1 = u[0].clamp(1e-6, 1.0 - 1e-6);
        let u2 = u[1].clamp(1e-6, 1.0 - 1e-6);
        let (alphax, alphay) = (self.alphax, self.alphay);
        let (tan_2_theta, phi) = if alphax == alphay {
            (alphax * alphax * u1 / (1.0 - u1), 2.0 * PI * u2)
        } else {
            let mut phi = Float::atan(alphay / alphax * Float::tan(2.0 * PI * u2 + 0.5 * PI));
            if u2 > 0.5 {
                phi += PI;
            }
            let (sin_p, cos_p) = Float::sin_cos(phi);
            let alpha2 = 1.0 / (sqr(cos_p / alphax) + sqr(sin_p / alphay));
            (alpha2 * u1 / (1.0 - u1), phi)
        };
        let cos_theta = 1.0 / Float::sqrt(1.0 + tan_2_theta);
        let sin_theta = safe_sqrt(1.0 - cos_theta * cos_theta);
        return spherical_direction(sin_theta, cos_theta, phi).normalize();
    }
}

impl MicrofacetDistribution for TrowbridgeReitzDistribution {
    fn d(&self, wh: &Vector3f) -> Float {
        let tan_2_theta = tan_2_theta(wh);
        if !tan_2_theta.is_finite() {
            return 0.0;
        }
        let cos_4_theta = sqr(cos_2_theta(wh));
        let e = (cos_2_phi(wh) / sqr(self.alphax) + sin_2_phi(wh) / sqr(self.alphay)) * tan_2_theta;
        return 1.0 / (PI * self.alphax * self.alphay * cos_4_theta * sqr(1.0 + e));
    }

    fn lambda(&self, w: &Vector3f) -> Float {
        let abs_tan_theta = Float::abs(tan_theta(w));
        if !abs_tan_theta.is_finite() {
            return 0.0;
        }
        let alpha = Float::sqrt(
            cos_2_phi(w) * sqr(self.alphax) + sin_2_phi(w) * sqr(self.alphay),
        );
        return (-1.0 + Float::sqrt(1.0 + sqr(alpha * abs_tan_theta))) / 2.0;
    }

    fn sample_wh(&self, wo: &Vector3f, u: &Point2f) -> Vector3f {
        if self.samplevis {
            let flip = wo.z < 0.0;
            let w = if flip { -*wo } else { *wo };
            let wh = sample_visible_normal(&w, self.alphax, self.alphay, u);
            return if flip { -wh } else { wh };
        }
        let wh = self.sample_all_normals(u);
        return if same_hemisphere(wo, &wh) { wh } else { -wh };
    }

    fn pdf(&self, wo: &Vector3f, wh: &Vector3f) -> Float {
        if self.samplevis {
            return self.d(wh) * self.g1(wo) * Vector3f::abs_dot(wo, wh) / abs_cos_theta(wo);
        } else {
            return self.d(wh) * abs_cos_theta(wh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d_integrates_projected_area() {
        // int D(wh) cos(wh) dwh = 1 over the hemisphere
        let dist = TrowbridgeReitzDistribution::new(0.4, 0.4, false);
        let mut rng = RNG::new();
        let n = 200000;
        let mut sum = 0.0f64;
        for _ in 0..n {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let wh = uniform_sample_hemisphere(&u);
            sum += (dist.d(&wh) * abs_cos_theta(&wh) / uniform_hemisphere_pdf()) as f64;
        }
        let est = sum / n as f64;
        assert!((est - 1.0).abs() < 0.05, "{}", est);
    }

    #[test]
    fn test_sampled_normals_face_up() {
        let wo = Vector3f::new(0.3, 0.2, 0.9327379).normalize();
        for vis in [false, true] {
            let dist = TrowbridgeReitzDistribution::new(0.3, 0.3, vis);
            let mut rng = RNG::new_sequence(2);
            for _ in 0..1000 {
                let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
                let wh = dist.sample_wh(&wo, &u);
                assert!(wh.z > 0.0);
                assert!(!wh.has_nans());
            }
        }
    }
}
