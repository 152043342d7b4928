use crate::core::pbrt::*;

pub type BxDFType = u32;

pub const BSDF_REFLECTION: BxDFType = 1 << 0; //1
pub const BSDF_TRANSMISSION: BxDFType = 1 << 1; //2
pub const BSDF_DIFFUSE: BxDFType = 1 << 2; //4
pub const BSDF_GLOSSY: BxDFType = 1 << 3; //8
pub const BSDF_SPECULAR: BxDFType = 1 << 4; //16
pub const BSDF_ALL: BxDFType =
    BSDF_REFLECTION | BSDF_TRANSMISSION | BSDF_DIFFUSE | BSDF_GLOSSY | BSDF_SPECULAR;

/// One scattering model in its local frame.
///
/// `f` is the value an integrator multiplies by `|cos theta_i|` (z of the
/// local frame). `sample_f` returns `(f(wo, wi), wi, pdf, sampled type)` and
/// `None` when no direction with positive density can be drawn; the density
/// it reports must agree with `pdf` for the same pair.
pub trait BxDF: Send + Sync {
    fn matches_flags(&self, t: BxDFType) -> bool {
        let tp = self.get_type();
        return (tp & t) == tp;
    }

    fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum;

    fn sample_f(
        &self,
        wo: &Vector3f,
        sample: &BsdfSample,
    ) -> Option<(Spectrum, Vector3f, Float, BxDFType)>;

    fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float;

    /// Surface models have no response to an outgoing direction lying in
    /// the tangent plane.
    fn accepts_outgoing(&self, wo: &Vector3f) -> bool {
        return wo.z != 0.0;
    }

    /// Hemispherical-directional reflectance estimated with `sample_f`.
    fn rho(&self, wo: &Vector3f, samples: &[BsdfSample]) -> Spectrum {
        if samples.is_empty() {
            return Spectrum::zero();
        }
        let r = samples
            .iter()
            .map(|u| -> Spectrum {
                if let Some((f, wi, pdf, _)) = self.sample_f(wo, u) {
                    if pdf > 0.0 {
                        return f * (abs_cos_theta(&wi) / pdf);
                    }
                }
                return Spectrum::zero();
            })
            .fold(Spectrum::zero(), |a, b| a + b)
            * (1.0 / (samples.len() as Float));
        return r;
    }

    fn get_type(&self) -> BxDFType;

    fn to_string(&self) -> String {
        return format!("{:?}", self.get_type());
    }

    //default implementations

    fn sample_f_default(
        &self,
        wo: &Vector3f,
        sample: &BsdfSample,
    ) -> Option<(Spectrum, Vector3f, Float, BxDFType)> {
        let mut wi = cosine_sample_hemisphere(&sample.u2());
        if wo.z < 0.0 {
            wi.z *= -1.0;
        }
        let pdf = self.pdf(wo, &wi);
        if pdf <= 0.0 {
            return None;
        }
        let spc = self.f(wo, &wi);
        return Some((spc, wi, pdf, self.get_type()));
    }

    fn pdf_default(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        return if same_hemisphere(wo, wi) {
            abs_cos_theta(wi) * INV_PI
        } else {
            0.0
        };
    }
}
