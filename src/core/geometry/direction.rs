use crate::core::pbrt::*;

#[inline]
pub fn face_forward(n: &Vector3f, v: &Vector3f) -> Vector3f {
    if Vector3f::dot(n, v) < 0.0 {
        return *n * -1.0;
    } else {
        return *n;
    }
}

#[inline]
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    return Vector3f::new(
        Float::clamp(sin_theta, -1.0, 1.0) * Float::cos(phi),
        Float::clamp(sin_theta, -1.0, 1.0) * Float::sin(phi),
        Float::clamp(cos_theta, -1.0, 1.0),
    );
}
