pub mod create_material;
pub mod hair;
pub mod matte;
pub mod mix;
pub mod plastic;

pub use create_material::*;
pub use hair::*;
pub use matte::*;
pub use mix::*;
pub use plastic::*;
