pub mod misc;
pub mod special;

pub use misc::*;
pub use special::*;
