pub mod bsdf_sample;
pub mod sampling;

pub use bsdf_sample::*;
pub use sampling::*;
