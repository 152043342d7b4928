pub mod constants;
pub mod functions;
pub mod types;

pub use super::distribution::*;
pub use super::error::ScatterError;
pub use super::geometry::*;
pub use super::interaction::*;
pub use super::material::*;
pub use super::misc::*;
pub use super::reflection::*;
pub use super::rng::*;
pub use super::sampling::*;
pub use super::spectrum::*;
pub use constants::*;
pub use functions::*;
pub use types::*;
