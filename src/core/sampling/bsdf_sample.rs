use crate::core::pbrt::*;

/// Uniform draws handed to one `sample_f` call.
///
/// `u_component` picks the entry of an aggregate; `u` feeds the chosen model.
/// Surface models read `u[0]` and `u[1]`, the fiber model reads all four
/// (lobe choice, longitudinal angle, longitudinal azimuth, azimuthal offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsdfSample {
    pub u_component: Float,
    pub u: [Float; 4],
}

impl BsdfSample {
    pub fn new(u_component: Float, u: [Float; 4]) -> Self {
        for x in u.iter() {
            debug_assert!((0.0..1.0).contains(x), "sample out of range: {}", x);
        }
        BsdfSample { u_component, u }
    }

    pub fn from_source<S: UniformSource + ?Sized>(source: &mut S) -> Self {
        let u_component = source.uniform_float();
        let mut u = [0.0; 4];
        for x in u.iter_mut() {
            *x = source.uniform_float();
        }
        BsdfSample { u_component, u }
    }

    /// The first two draws as a 2D point.
    #[inline]
    pub fn u2(&self) -> Point2f {
        return Point2f::new(self.u[0], self.u[1]);
    }
}

impl From<&Point2f> for BsdfSample {
    fn from(u: &Point2f) -> Self {
        BsdfSample {
            u_component: 0.0,
            u: [u.x, u.y, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source_consumes_five_draws() {
        let mut a = RNG::new_sequence(5);
        let s = BsdfSample::from_source(&mut a);
        let mut b = RNG::new_sequence(5);
        let expected: Vec<Float> = (0..5).map(|_| b.uniform_float()).collect();
        assert_eq!(s.u_component, expected[0]);
        assert_eq!(s.u.to_vec(), expected[1..].to_vec());
        assert_eq!(a, b);
    }
}
