use crate::core::pbrt::Float;
use std::ops;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector2f {
    pub x: Float,
    pub y: Float,
}

impl Vector2f {
    #[inline]
    pub fn new(x: Float, y: Float) -> Self {
        Vector2f { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Vector2f { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> Float {
        return self.x * rhs.x + self.y * rhs.y;
    }

    #[inline]
    pub fn length_squared(&self) -> Float {
        return self.dot(self);
    }
}

impl ops::Add<Vector2f> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn add(self, rhs: Vector2f) -> Vector2f {
        Vector2f::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub<Vector2f> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn sub(self, rhs: Vector2f) -> Vector2f {
        Vector2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::Mul<Float> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn mul(self, rhs: Float) -> Vector2f {
        Vector2f::new(self.x * rhs, self.y * rhs)
    }
}

impl ops::Index<usize> for Vector2f {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Float {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2f index out of range: {}", i),
        }
    }
}

impl ops::IndexMut<usize> for Vector2f {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Float {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2f index out of range: {}", i),
        }
    }
}

impl From<(Float, Float)> for Vector2f {
    #[inline]
    fn from(v: (Float, Float)) -> Self {
        Vector2f::new(v.0, v.1)
    }
}

impl From<[Float; 2]> for Vector2f {
    #[inline]
    fn from(v: [Float; 2]) -> Self {
        Vector2f::new(v[0], v[1])
    }
}
