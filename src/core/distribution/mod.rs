pub mod microfacet;
pub mod trowbridge_reitz;

pub use microfacet::*;
pub use trowbridge_reitz::*;
