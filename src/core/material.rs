use crate::core::error::Result;
use crate::core::interaction::SurfaceInteraction;
use crate::core::reflection::BSDF;

/// Turns a hit point into the weighted scattering models found there.
pub trait Material: Send + Sync {
    fn compute_scattering_functions(&self, si: &SurfaceInteraction) -> Result<BSDF>;

    fn to_string(&self) -> String {
        return "[ Material ]".to_string();
    }
}
