use crate::Float;

/// An extension trait for floating point numbers.
///
/// It pre-computes the rounding factor for equality comparisons, which depends
/// on the floating point representation, and provides the rounding modes used
/// when serializing colors.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// Round to the nearest integer, with ties going towards positive infinity.
    ///
    /// Unlike [`f64::round`], which rounds ties away from zero, this method
    /// rounds `-2.5` to `-2`. The two only differ for negative ties.
    fn round_half_up(self) -> Self;

    /// Round to the nearest integer and convert to `i64` for display.
    ///
    /// Formatting the result avoids the `-0` that formatting a negative zero
    /// float would produce.
    fn to_display_int(self) -> i64;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;

    #[inline]
    fn round_half_up(self) -> Self {
        (self + 0.5).floor()
    }

    #[inline]
    fn to_display_int(self) -> i64 {
        self.round() as i64
    }
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;

    #[inline]
    fn round_half_up(self) -> Self {
        (self + 0.5).floor()
    }

    #[inline]
    fn to_display_int(self) -> i64 {
        self.round() as i64
    }
}

/// Format an alpha value with at most two decimals in shortest form.
///
/// That means `1` instead of `1.0` and `0.5` instead of `0.50`.
pub(crate) fn format_alpha(alpha: Float) -> String {
    let rounded = (alpha * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // Also catches negative zero
        "0".to_owned()
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod test {
    use super::{format_alpha, FloatExt};

    #[test]
    fn test_round_half_up() {
        assert_eq!((2.5 as crate::Float).round_half_up(), 3.0);
        assert_eq!((-2.5 as crate::Float).round_half_up(), -2.0);
        assert_eq!((-25.5 as crate::Float).round_half_up(), -25.0);
        assert_eq!((-25.6 as crate::Float).round_half_up(), -26.0);
        assert_eq!((-0.4 as crate::Float).to_display_int(), 0);
    }

    #[test]
    fn test_format_alpha() {
        assert_eq!(format_alpha(1.0), "1");
        assert_eq!(format_alpha(0.0), "0");
        assert_eq!(format_alpha(0.5), "0.5");
        assert_eq!(format_alpha(0.25), "0.25");
        assert_eq!(format_alpha(0.333), "0.33");
    }
}
