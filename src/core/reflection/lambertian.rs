use crate::core::pbrt::*;

pub struct LambertianReflection {
    pub r: Spectrum,
}

impl LambertianReflection {
    pub fn new(r: &Spectrum) -> Self {
        LambertianReflection { r: *r }
    }
}

impl BxDF for LambertianReflection {
    fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> Spectrum {
        return self.r * INV_PI;
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

    fn rho(&self, _wo: &Vector3f, _samples: &[BsdfSample]) -> Spectrum {
        return self.r;
    }

    fn get_type(&self) -> BxDFType {
        return BSDF_REFLECTION | BSDF_DIFFUSE;
    }

    fn to_string(&self) -> String {
        return format!("[ LambertianReflection R: {:?} ]", self.r);
    }
}
