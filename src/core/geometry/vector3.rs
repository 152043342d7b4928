use crate::core::pbrt::Float;
use std::ops;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    #[inline]
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Vector3f::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Vector3f::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> Float {
        return self.x * rhs.x + self.y * rhs.y + self.z * rhs.z;
    }

    #[inline]
    pub fn abs_dot(&self, rhs: &Self) -> Float {
        return Float::abs(self.dot(rhs));
    }

    #[inline]
    pub fn cross(v1: &Self, v2: &Self) -> Self {
        let v1x = v1.x as f64;
        let v1y = v1.y as f64;
        let v1z = v1.z as f64;
        let v2x = v2.x as f64;
        let v2y = v2.y as f64;
        let v2z = v2.z as f64;
        return Vector3f::new(
            ((v1y * v2z) - (v1z * v2y)) as Float,
            ((v1z * v2x) - (v1x * v2z)) as Float,
            ((v1x * v2y) - (v1y * v2x)) as Float,
        );
    }

    #[inline]
    pub fn length_squared(&self) -> Float {
        return self.dot(self);
    }

    #[inline]
    pub fn length(&self) -> Float {
        return Float::sqrt(self.length_squared());
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let l = self.length();
        if l == 0.0 {
            return *self;
        }
        return *self * (1.0 / l);
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        return self.x.is_nan() || self.y.is_nan() || self.z.is_nan();
    }
}

impl ops::Add<Vector3f> for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn add(self, rhs: Vector3f) -> Vector3f {
        Vector3f::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::Sub<Vector3f> for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn sub(self, rhs: Vector3f) -> Vector3f {
        Vector3f::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Mul<Float> for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn mul(self, rhs: Float) -> Vector3f {
        Vector3f::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl ops::Mul<Vector3f> for Float {
    type Output = Vector3f;
    #[inline]
    fn mul(self, rhs: Vector3f) -> Vector3f {
        rhs * self
    }
}

impl ops::Div<Float> for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn div(self, rhs: Float) -> Vector3f {
        Vector3f::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl ops::Neg for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn neg(self) -> Vector3f {
        Vector3f::new(-self.x, -self.y, -self.z)
    }
}

impl ops::AddAssign for Vector3f {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3f) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl ops::MulAssign<Float> for Vector3f {
    #[inline]
    fn mul_assign(&mut self, rhs: Float) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl ops::Index<usize> for Vector3f {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Float {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3f index out of range: {}", i),
        }
    }
}

impl ops::IndexMut<usize> for Vector3f {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Float {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3f index out of range: {}", i),
        }
    }
}

impl From<(Float, Float, Float)> for Vector3f {
    #[inline]
    fn from(v: (Float, Float, Float)) -> Self {
        Vector3f::new(v.0, v.1, v.2)
    }
}

impl From<[Float; 3]> for Vector3f {
    #[inline]
    fn from(v: [Float; 3]) -> Self {
        Vector3f::new(v[0], v[1], v[2])
    }
}
