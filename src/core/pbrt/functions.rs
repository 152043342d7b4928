use super::constants::*;
use super::types::Float;

#[inline]
pub fn sqr(x: Float) -> Float {
    return x * x;
}

#[inline]
pub fn radians(deg: Float) -> Float {
    return (PI / 180.0) * deg;
}

#[inline]
pub fn degrees(rad: Float) -> Float {
    return (180.0 / PI) * rad;
}

/// Square root that treats round-off below zero as zero.
#[inline]
pub fn safe_sqrt(x: Float) -> Float {
    debug_assert!(x >= -1e-3, "safe_sqrt: {}", x);
    return Float::sqrt(Float::max(0.0, x));
}

#[inline]
pub fn safe_asin(x: Float) -> Float {
    debug_assert!((-1.0001..=1.0001).contains(&x), "safe_asin: {}", x);
    return Float::asin(Float::clamp(x, -1.0, 1.0));
}
