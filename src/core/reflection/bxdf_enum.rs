use crate::core::pbrt::*;
use crate::materials::hair::HairBSDF;

use std::sync::Arc;

/// Closed set of scattering models held by a [`BSDF`].
///
/// `Dyn` takes any other [`BxDF`] implementation.
pub enum BxDFEnum {
    Dyn(Arc<dyn BxDF>),
    Hair(Arc<HairBSDF>),
    LambertianReflection(LambertianReflection),
    OrenNayar(OrenNayar),
    MicrofacetReflection(MicrofacetReflection),
}

impl BxDF for BxDFEnum {
    #[inline]
    fn f(&self, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        match self {
            BxDFEnum::Dyn(v) => v.f(wo, wi),
            BxDFEnum::Hair(v) => v.f(wo, wi),
            BxDFEnum::LambertianReflection(v) => v.f(wo, wi),
            BxDFEnum::OrenNayar(v) => v.f(wo, wi),
            BxDFEnum::MicrofacetReflection(v) => v.f(wo, wi),
        }
    }

    #[inline]
    fn sample_f(
        &self,
        wo: &Vector3f,
        sample: &BsdfSample,
    ) -> Option<(Spectrum, Vector3f, Float, BxDFType)> {
        match self {
            BxDFEnum::Dyn(v) => v.sample_f(wo, sample),
            BxDFEnum::Hair(v) => v.sample_f(wo, sample),
            BxDFEnum::LambertianReflection(v) => v.sample_f(wo, sample),
            BxDFEnum::OrenNayar(v) => v.sample_f(wo, sample),
            BxDFEnum::MicrofacetReflection(v) => v.sample_f(wo, sample),
        }
    }

    #[inline]
    fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        match self {
            BxDFEnum::Dyn(v) => v.pdf(wo, wi),
            BxDFEnum::Hair(v) => v.pdf(wo, wi),
            BxDFEnum::LambertianReflection(v) => v.pdf(wo, wi),
            BxDFEnum::OrenNayar(v) => v.pdf(wo, wi),
            BxDFEnum::MicrofacetReflection(v) => v.pdf(wo, wi),
        }
    }

    #[inline]
    fn accepts_outgoing(&self, wo: &Vector3f) -> bool {
        match self {
            BxDFEnum::Dyn(v) => v.accepts_outgoing(wo),
            BxDFEnum::Hair(v) => v.accepts_outgoing(wo),
            BxDFEnum::LambertianReflection(v) => v.accepts_outgoing(wo),
            BxDFEnum::OrenNayar(v) => v.accepts_outgoing(wo),
            BxDFEnum::MicrofacetReflection(v) => v.accepts_outgoing(wo),
        }
    }

    #[inline]
    fn rho(&self, wo: &Vector3f, samples: &[BsdfSample]) -> Spectrum {
        match self {
            BxDFEnum::Dyn(v) => v.rho(wo, samples),
            BxDFEnum::Hair(v) => v.rho(wo, samples),
            BxDFEnum::LambertianReflection(v) => v.rho(wo, samples),
            BxDFEnum::OrenNayar(v) => v.rho(wo, samples),
            BxDFEnum::MicrofacetReflection(v) => v.rho(wo, samples),
        }
    }

    #[inline]
    fn get_type(&self) -> BxDFType {
        match self {
            BxDFEnum::Dyn(v) => v.get_type(),
            BxDFEnum::Hair(v) => v.get_type(),
            BxDFEnum::LambertianReflection(v) => v.get_type(),
            BxDFEnum::OrenNayar(v) => v.get_type(),
            BxDFEnum::MicrofacetReflection(v) => v.get_type(),
        }
    }

    fn to_string(&self) -> String {
        match self {
            BxDFEnum::Dyn(v) => v.to_string(),
            BxDFEnum::Hair(v) => v.to_string(),
            BxDFEnum::LambertianReflection(v) => v.to_string(),
            BxDFEnum::OrenNayar(v) => v.to_string(),
            BxDFEnum::MicrofacetReflection(v) => v.to_string(),
        }
    }
}

impl From<Arc<HairBSDF>> for BxDFEnum {
    fn from(v: Arc<HairBSDF>) -> Self {
        BxDFEnum::Hair(v)
    }
}

impl From<LambertianReflection> for BxDFEnum {
    fn from(v: LambertianReflection) -> Self {
        BxDFEnum::LambertianReflection(v)
    }
}

impl From<OrenNayar> for BxDFEnum {
    fn from(v: OrenNayar) -> Self {
        BxDFEnum::OrenNayar(v)
    }
}

impl From<MicrofacetReflection> for BxDFEnum {
    fn from(v: MicrofacetReflection) -> Self {
        BxDFEnum::MicrofacetReflection(v)
    }
}
