use crate::core::pbrt::*;

/// Rough diffuse reflection; `sigma` is the facet slope deviation in degrees.
pub struct OrenNayar {
    pub r: Spectrum,
    pub a: Float,
    pub b: Float,
}

impl OrenNayar {
    pub fn new(r: &Spectrum, sigma: Float) -> Self {
        let sigma2 = sqr(radians(sigma));
        let a = 1.0 - (sigma2 / (2.0 * (sigma2 + 0.33)));
        let b = 0.45 * sigma2 / (sigma2 + 0.09);
        OrenNayar { r: *r, a, b }
    }
}

impl BxDF for OrenNayar {
    fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let sin_theta_i = sin_theta(wi);
        let sin_theta_o = sin_theta(wo);
        let max_cos = if sin_theta_i > 1e-4 && sin_theta_o > 1e-4 {
            let d_cos = cos_phi(wi) * cos_phi(wo) + sin_phi(wi) * sin_phi(wo);
            d_cos.max(0.0)
        } else {
            0.0
        };

        // alpha = max(theta_i, theta_o), beta = min(theta_i, theta_o)
        let (sin_alpha, tan_beta) = if abs_cos_theta(wi) > abs_cos_theta(wo) {
            (sin_theta_o, sin_theta_i / abs_cos_theta(wi))
        } else if abs_cos_theta(wo) > 0.0 {
            (sin_theta_i, sin_theta_o / abs_cos_theta(wo))
        } else {
            (sin_theta_i, 0.0)
        };

        return self.r * INV_PI * (self.a + self.b * max_cos * sin_alpha * tan_beta);
    }

    fn sample_f(
        &self,
        wo: &Vector3f,
        sample: &BsdfSample,
    ) -> Option<(Spectrum, Vector3f, Float, BxDFType)> {
        self.sample_f_default(wo, sample)
    }

    fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        self.pdf_default(wo, wi)
    }

    fn get_type(&self) -> BxDFType {
        return BSDF_REFLECTION | BSDF_DIFFUSE;
    }

    fn to_string(&self) -> String {
        return format!(
            "[ OrenNayar R: {:?} A: {} B: {} ]",
            self.r, self.a, self.b
        );
    }
}
