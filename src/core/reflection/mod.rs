pub mod bsdf;
pub mod bxdf;
pub mod bxdf_enum;
pub mod fresnel;
pub mod functions;
pub mod lambertian;
pub mod microfacet;
pub mod oren_nayar;

pub use bsdf::*;
pub use bxdf::*;
pub use bxdf_enum::*;
pub use fresnel::*;
pub use functions::*;
pub use lambertian::*;
pub use microfacet::*;
pub use oren_nayar::*;
