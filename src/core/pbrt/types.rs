use crate::core::geometry::{Vector2f, Vector3f};

#[cfg(not(feature = "float-as-double"))]
pub type Float = f32;
#[cfg(feature = "float-as-double")]
pub type Float = f64;

pub type Point2f = Vector2f;
pub type Point3f = Vector3f;
pub type Normal3f = Vector3f;
