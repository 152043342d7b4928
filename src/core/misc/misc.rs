use crate::core::pbrt::*;

/// Reduces an angle difference into `[-pi, pi]` by repeated whole turns.
#[inline]
pub fn remap_angle(mut dphi: Float) -> Float {
    if !dphi.is_finite() {
        return 0.0;
    }
    while dphi > PI {
        dphi -= 2.0 * PI;
    }
    while dphi < -PI {
        dphi += 2.0 * PI;
    }
    return dphi;
}
