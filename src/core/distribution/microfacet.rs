use crate::core::pbrt::*;

/// Distribution of microfacet normals in the shading frame (z up).
pub trait MicrofacetDistribution: Send + Sync {
    fn d(&self, wh: &Vector3f) -> Float;
    fn lambda(&self, w: &Vector3f) -> Float;
    fn g1(&self, w: &Vector3f) -> Float {
        return 1.0 / (1.0 + self.lambda(w));
    }
    /// Height-correlated masking-shadowing; symmetric in its arguments.
    fn g(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        return 1.0 / (1.0 + self.lambda(wo) + self.lambda(wi));
    }
    fn sample_wh(&self, wo: &Vector3f, u: &Point2f) -> Vector3f;
    fn pdf(&self, wo: &Vector3f, wh: &Vector3f) -> Float;
}
