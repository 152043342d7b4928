use crate::core::pbrt::*;

/// Modified Bessel function of the first kind, order zero.
///
/// `I0(x) ~ sum_i x^(2i) / (4^i (i!)^2)` truncated after ten terms.
#[inline]
pub fn i0(x: Float) -> Float {
    let mut val = 0.0;
    let mut x2i = 1.0;
    let mut ifact: i64 = 1;
    let mut i4: i64 = 1;
    for i in 0..10 {
        if i > 1 {
            ifact *= i;
        }
        val += x2i / (i4 as Float * sqr(ifact as Float));
        x2i *= x * x;
        i4 *= 4;
    }
    return val;
}

/// `ln(I0(x))`, switching to the large-argument asymptote above 12.
#[inline]
pub fn log_i0(x: Float) -> Float {
    if x > 12.0 {
        return x + 0.5 * (-Float::ln(2.0 * PI) + Float::ln(1.0 / x) + 1.0 / (8.0 * x));
    } else {
        return Float::ln(i0(x));
    }
}

#[inline]
pub fn logistic(x: Float, s: Float) -> Float {
    let x = Float::abs(x);
    return Float::exp(-x / s) / (s * sqr(1.0 + Float::exp(-x / s)));
}

#[inline]
pub fn logistic_cdf(x: Float, s: Float) -> Float {
    return 1.0 / (1.0 + Float::exp(-x / s));
}

/// Logistic density renormalized to `[a, b]`.
#[inline]
pub fn trimmed_logistic(x: Float, s: Float, a: Float, b: Float) -> Float {
    debug_assert!(a < b);
    return logistic(x, s) / (logistic_cdf(b, s) - logistic_cdf(a, s));
}

/// Inverse CDF of [`trimmed_logistic`].
#[inline]
pub fn sample_trimmed_logistic(u: Float, s: Float, a: Float, b: Float) -> Float {
    debug_assert!(a < b);
    let k = logistic_cdf(b, s) - logistic_cdf(a, s);
    let x = -s * Float::ln(1.0 / (u * k + logistic_cdf(a, s)) - 1.0);
    if x.is_nan() {
        return 0.0;
    }
    return Float::clamp(x, a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i0_known_values() {
        assert!((i0(0.0) - 1.0).abs() < 1e-6);
        // I0(1) = 1.2660658..., I0(2) = 2.2795853...
        assert!((i0(1.0) - 1.266_065_8).abs() < 1e-5);
        assert!((i0(2.0) - 2.279_585_3).abs() < 1e-4);
    }

    #[test]
    fn test_log_i0_is_continuous_at_switch() {
        let below = log_i0(12.0);
        let above = log_i0(12.0001);
        assert!((below - above).abs() < 0.05, "{} {}", below, above);
        assert!(log_i0(1000.0).is_finite());
    }

    #[test]
    fn test_trimmed_logistic_normalized() {
        let s = 0.5;
        let n = 20000;
        let dx = 2.0 * PI / n as Float;
        let mut sum = 0.0f64;
        for i in 0..n {
            let x = -PI + (i as Float + 0.5) * dx;
            sum += (trimmed_logistic(x, s, -PI, PI) * dx) as f64;
        }
        assert!((sum - 1.0).abs() < 1e-3, "{}", sum);
    }

    #[test]
    fn test_sample_trimmed_logistic_inverts_cdf() {
        let s = 0.3;
        let k = logistic_cdf(PI, s) - logistic_cdf(-PI, s);
        for i in 1..10 {
            let u = i as Float / 10.0;
            let x = sample_trimmed_logistic(u, s, -PI, PI);
            assert!((-PI..=PI).contains(&x));
            let back = (logistic_cdf(x, s) - logistic_cdf(-PI, s)) / k;
            assert!((back - u).abs() < 1e-4, "{} {}", u, back);
        }
        assert!(sample_trimmed_logistic(0.0, s, -PI, PI) >= -PI);
    }
}
