use crate::core::pbrt::*;

// Shading-frame trigonometry; z is the shading normal.
#[inline]
pub fn cos_theta(w: &Vector3f) -> Float {
    return w.z;
}

#[inline]
pub fn cos_2_theta(w: &Vector3f) -> Float {
    return w.z * w.z;
}

#[inline]
pub fn abs_cos_theta(w: &Vector3f) -> Float {
    return Float::abs(w.z);
}

#[inline]
pub fn sin_2_theta(w: &Vector3f) -> Float {
    return Float::max(0.0, 1.0 - cos_2_theta(w));
}

#[inline]
pub fn sin_theta(w: &Vector3f) -> Float {
    return Float::sqrt(sin_2_theta(w));
}

#[inline]
pub fn tan_theta(w: &Vector3f) -> Float {
    return sin_theta(w) / cos_theta(w);
}

#[inline]
pub fn tan_2_theta(w: &Vector3f) -> Float {
    return sin_2_theta(w) / cos_2_theta(w);
}

#[inline]
pub fn cos_phi(w: &Vector3f) -> Float {
    let sin = sin_theta(w);
    return if sin == 0.0 {
        1.0
    } else {
        Float::clamp(w.x / sin, -1.0, 1.0)
    };
}

#[inline]
pub fn sin_phi(w: &Vector3f) -> Float {
    let sin = sin_theta(w);
    return if sin == 0.0 {
        0.0
    } else {
        Float::clamp(w.y / sin, -1.0, 1.0)
    };
}

#[inline]
pub fn cos_2_phi(w: &Vector3f) -> Float {
    return cos_phi(w) * cos_phi(w);
}

#[inline]
pub fn sin_2_phi(w: &Vector3f) -> Float {
    return sin_phi(w) * sin_phi(w);
}

#[inline]
pub fn reflect(wo: &Vector3f, n: &Vector3f) -> Vector3f {
    return 2.0 * Vector3f::dot(wo, n) * *n - *wo;
}

#[inline]
pub fn same_hemisphere(w: &Vector3f, wp: &Vector3f) -> bool {
    return w.z * wp.z > 0.0;
}
