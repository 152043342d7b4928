use crate::core::pbrt::*;

use std::sync::Arc;

/// Torrance-Sparrow glossy reflection.
pub struct MicrofacetReflection {
    r: Spectrum,
    distribution: Arc<dyn MicrofacetDistribution>,
    fresnel: Arc<dyn Fresnel>,
}

impl MicrofacetReflection {
    pub fn new(
        r: &Spectrum,
        distribution: Arc<dyn MicrofacetDistribution>,
        fresnel: Arc<dyn Fresnel>,
    ) -> Self {
        MicrofacetReflection {
            r: *r,
            distribution,
            fresnel,
        }
    }
}

impl BxDF for MicrofacetReflection {
    fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let cos_theta_o = abs_cos_theta(wo);
        let cos_theta_i = abs_cos_theta(wi);
        if cos_theta_i == 0.0 || cos_theta_o == 0.0 {
            return Spectrum::zero();
        }
        let wh = *wi + *wo;
        if wh.x == 0.0 && wh.y == 0.0 && wh.z == 0.0 {
            return Spectrum::zero();
        }
        let wh = wh.normalize();

        // Fresnel is taken against the upper-hemisphere half vector so TIR is handled.
        let f = self.fresnel.evaluate(Vector3f::dot(
            wi,
            &face_forward(&wh, &Vector3f::new(0.0, 0.0, 1.0)),
        ));
        let distribution = self.distribution.as_ref();
        return self.r
            * f
            * (distribution.d(&wh) * distribution.g(wo, wi) / (4.0 * cos_theta_i * cos_theta_o));
    }

    fn sample_f(
        &self,
        wo: &Vector3f,
        sample: &BsdfSample,
    ) -> Option<(Spectrum, Vector3f, Float, BxDFType)> {
        if wo.z == 0.0 {
            return None;
        }
        let wh = self.distribution.sample_wh(wo, &sample.u2());
        if Vector3f::dot(wo, &wh) <= 0.0 {
            return None;
        }
        let wi = reflect(wo, &wh);
        if !same_hemisphere(wo, &wi) {
            return None;
        }
        let pdf = self.pdf(wo, &wi);
        if pdf <= 0.0 {
            return None;
        }
        return Some((self.f(wo, &wi), wi, pdf, self.get_type()));
    }

    fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        if !same_hemisphere(wo, wi) {
            return 0.0;
        }
        let wh = (*wo + *wi).normalize();
        let wo_dot_wh = Vector3f::dot(wo, &wh);
        if wo_dot_wh <= 0.0 {
            return 0.0;
        }
        return self.distribution.pdf(wo, &wh) / (4.0 * wo_dot_wh);
    }

    fn get_type(&self) -> BxDFType {
        return BSDF_REFLECTION | BSDF_GLOSSY;
    }

    fn to_string(&self) -> String {
        return format!(
            "[ MicrofacetReflection R: {:?} fresnel: {} ]",
            self.r,
            self.fresnel.to_string()
        );
    }
}
