use crate::core::pbrt::*;
use std::ops;

const YWEIGHT: [Float; 3] = [0.212671, 0.715160, 0.072169];

/// Three-channel linear RGB energy value.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RGBSpectrum {
    c: [Float; 3],
}

impl RGBSpectrum {
    pub const N_SAMPLES: usize = 3;

    #[inline]
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        RGBSpectrum { c: [r, g, b] }
    }

    #[inline]
    pub fn zero() -> Self {
        RGBSpectrum { c: [0.0, 0.0, 0.0] }
    }

    #[inline]
    pub fn one() -> Self {
        RGBSpectrum { c: [1.0, 1.0, 1.0] }
    }

    pub fn clamp(&self, low: Float, hi: Float) -> Self {
        return self.map(|x| Float::clamp(x, low, hi));
    }

    pub fn clamp_zero(&self) -> Self {
        return self.clamp(0.0, Float::INFINITY);
    }

    pub fn max_component_value(&self) -> Float {
        let c = &self.c;
        return Float::max(c[0], Float::max(c[1], c[2]));
    }

    /// Luminance.
    #[inline]
    pub fn y(&self) -> Float {
        let c = &self.c;
        return YWEIGHT[0] * c[0] + YWEIGHT[1] * c[1] + YWEIGHT[2] * c[2];
    }

    pub fn to_rgb(&self) -> [Float; 3] {
        return self.c;
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        return self.c.iter().all(|x| *x == 0.0);
    }

    /// No channel is NaN, infinite or negative.
    pub fn is_valid(&self) -> bool {
        return self.c.iter().all(|x| x.is_finite() && *x >= 0.0);
    }

    pub fn near_equal(a: &RGBSpectrum, b: &RGBSpectrum, eps: Float) -> bool {
        let s = a
            .c
            .iter()
            .zip(b.c.iter())
            .map(|(x, y)| -> Float { Float::abs(x - y) })
            .sum::<Float>()
            / 3.0;
        return s < eps;
    }

    #[inline]
    fn map<F: Fn(Float) -> Float>(&self, f: F) -> Self {
        let c = &self.c;
        return RGBSpectrum {
            c: [f(c[0]), f(c[1]), f(c[2])],
        };
    }

    pub fn sqrt(&self) -> Self {
        return self.map(Float::sqrt);
    }

    pub fn exp(&self) -> Self {
        return self.map(Float::exp);
    }

    pub fn powf(&self, e: Float) -> Self {
        return self.map(|x| Float::powf(x, e));
    }

    /// Per-channel division that yields zero where the denominator is not positive.
    pub fn safe_div(&self, d: &RGBSpectrum) -> Self {
        let mut r = RGBSpectrum::zero();
        for i in 0..3 {
            if d.c[i] > 0.0 {
                r.c[i] = self.c[i] / d.c[i];
            }
        }
        return r;
    }

    pub fn len(&self) -> usize {
        return 3;
    }

    pub fn is_empty(&self) -> bool {
        return false;
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        return &self.c[i];
    }
}

impl ops::IndexMut<usize> for RGBSpectrum {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        return &mut self.c[i];
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: Float) -> RGBSpectrum {
        return RGBSpectrum::from([self[0] * s, self[1] * s, self[2] * s]);
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        return RGBSpectrum::from([self * rhs[0], self * rhs[1], self * rhs[2]]);
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn div(self, s: Float) -> RGBSpectrum {
        return RGBSpectrum::from([self[0] / s, self[1] / s, self[2] / s]);
    }
}

impl ops::Add<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn add(self, s: RGBSpectrum) -> RGBSpectrum {
        let a = &self;
        let b = &s;
        return RGBSpectrum::from([a[0] + b[0], a[1] + b[1], a[2] + b[2]]);
    }
}

impl ops::Sub<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn sub(self, s: RGBSpectrum) -> RGBSpectrum {
        let a = &self;
        let b = &s;
        return RGBSpectrum::from([a[0] - b[0], a[1] - b[1], a[2] - b[2]]);
    }
}

impl ops::Mul<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: RGBSpectrum) -> RGBSpectrum {
        let a = &self;
        let b = &s;
        return RGBSpectrum::from([a[0] * b[0], a[1] * b[1], a[2] * b[2]]);
    }
}

impl ops::Div<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn div(self, s: RGBSpectrum) -> RGBSpectrum {
        let a = &self;
        let b = &s;
        return RGBSpectrum::from([a[0] / b[0], a[1] / b[1], a[2] / b[2]]);
    }
}

impl ops::AddAssign<RGBSpectrum> for RGBSpectrum {
    #[inline]
    fn add_assign(&mut self, s: RGBSpectrum) {
        for i in 0..3 {
            self.c[i] += s.c[i];
        }
    }
}

impl ops::MulAssign<Float> for RGBSpectrum {
    #[inline]
    fn mul_assign(&mut self, s: Float) {
        for i in 0..3 {
            self.c[i] *= s;
        }
    }
}

impl ops::MulAssign<RGBSpectrum> for RGBSpectrum {
    #[inline]
    fn mul_assign(&mut self, s: RGBSpectrum) {
        for i in 0..3 {
            self.c[i] *= s.c[i];
        }
    }
}

impl ops::Neg for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn neg(self) -> RGBSpectrum {
        return RGBSpectrum::from([-self[0], -self[1], -self[2]]);
    }
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Float> for RGBSpectrum {
    #[inline]
    fn from(v: Float) -> Self {
        RGBSpectrum { c: [v, v, v] }
    }
}

impl From<[Float; 3]> for RGBSpectrum {
    #[inline]
    fn from(c: [Float; 3]) -> Self {
        RGBSpectrum { c }
    }
}

impl From<(Float, Float, Float)> for RGBSpectrum {
    #[inline]
    fn from(c: (Float, Float, Float)) -> Self {
        RGBSpectrum { c: [c.0, c.1, c.2] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_of_white_is_one() {
        assert!((RGBSpectrum::one().y() - 1.0).abs() < 1e-6);
        assert_eq!(RGBSpectrum::zero().y(), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = RGBSpectrum::new(1.0, 2.0, 3.0);
        let b = RGBSpectrum::new(0.5, 0.5, 2.0);
        assert_eq!(a + b, RGBSpectrum::new(1.5, 2.5, 5.0));
        assert_eq!(a - b, RGBSpectrum::new(0.5, 1.5, 1.0));
        assert_eq!(a * b, RGBSpectrum::new(0.5, 1.0, 6.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a.powf(2.0), RGBSpectrum::new(1.0, 4.0, 9.0));
    }

    #[test]
    fn test_safe_div_and_validity() {
        let a = RGBSpectrum::new(1.0, 1.0, 1.0);
        let d = RGBSpectrum::new(2.0, 0.0, -1.0);
        assert_eq!(a.safe_div(&d), RGBSpectrum::new(0.5, 0.0, 0.0));
        assert!(a.is_valid());
        assert!(!RGBSpectrum::new(-0.1, 0.0, 0.0).is_valid());
        assert!(!RGBSpectrum::new(Float::NAN, 0.0, 0.0).is_valid());
        assert!(RGBSpectrum::zero().is_black());
        assert_eq!(RGBSpectrum::new(-1.0, 0.5, 2.0).clamp_zero(), RGBSpectrum::new(0.0, 0.5, 2.0));
    }

    #[test]
    fn test_exp_of_negative_stays_in_unit_range() {
        let t = (-RGBSpectrum::new(0.0, 1.0, 30.0)).exp();
        assert_eq!(t[0], 1.0);
        assert!(t[1] > 0.0 && t[1] < 1.0);
        assert!(t[2] >= 0.0 && t[2] < 1e-10);
    }
}
