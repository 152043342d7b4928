pub mod direction;
pub mod vector2;
pub mod vector3;

pub use direction::*;
pub use vector2::*;
pub use vector3::*;
