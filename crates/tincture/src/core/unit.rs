use crate::Float;

/// A color component as supplied by the user.
///
/// Colors accept their components either as numbers or as text. Text may
/// carry a percentage sign, as in `"50%"`, and is parsed leniently: Only the
/// longest numeric prefix counts, so `"12px"` has value 12. Text without a
/// numeric prefix has value not-a-number.
///
/// ```
/// # use tincture::Unit;
/// assert!(Unit::from(128).is_valid());
/// assert!(Unit::from("50%").is_valid());
/// assert!(!Unit::from("fifty").is_valid());
/// assert_eq!(Unit::from("12.5%").value(), 12.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Unit {
    Number(Float),
    Text(String),
}

impl Unit {
    /// Determine whether this unit is a valid CSS number or percentage.
    ///
    /// Numbers are valid when finite. Text is valid when it contains an
    /// integer or decimal number anywhere, optionally followed by a percent
    /// sign.
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Number(n) => n.is_finite(),
            Self::Text(ref text) => crate::core::string::is_css_unit(text),
        }
    }

    /// Get the numeric value of this unit.
    pub fn value(&self) -> Float {
        match *self {
            Self::Number(n) => n,
            Self::Text(ref text) => parse_float(text),
        }
    }

    /// Determine whether this unit is a percentage.
    pub fn is_percentage(&self) -> bool {
        matches!(*self, Self::Text(ref text) if text.contains('%'))
    }

    /// Determine whether this unit is text that ends with a percent sign.
    pub(crate) fn ends_with_percent(&self) -> bool {
        matches!(*self, Self::Text(ref text) if text.ends_with('%'))
    }

    /// Determine whether this unit is text like `"1.0"`, which stands for
    /// 100% and not for the number one.
    fn is_one_point_zero(&self) -> bool {
        matches!(*self, Self::Text(ref text) if text.contains('.') && parse_float(text) == 1.0)
    }
}

impl From<Float> for Unit {
    fn from(value: Float) -> Self {
        Self::Number(value)
    }
}

impl From<u8> for Unit {
    fn from(value: u8) -> Self {
        Self::Number(Float::from(value))
    }
}

impl From<i32> for Unit {
    fn from(value: i32) -> Self {
        Self::Number(value as Float)
    }
}

impl From<&str> for Unit {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(ref text) => f.write_str(text),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the longest prefix of the text that is a decimal number.
///
/// Leading whitespace is skipped. The prefix may have a sign, a fraction, an
/// exponent, or be `Infinity`. Without any digits, the result is not-a-number.
pub(crate) fn parse_float(text: &str) -> Float {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            Float::NEG_INFINITY
        } else {
            Float::INFINITY
        };
    }

    let start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - start;

    if end < len && bytes[end] == b'.' {
        let mut fraction = end + 1;
        while fraction < len && bytes[fraction].is_ascii_digit() {
            fraction += 1;
        }
        digits += fraction - end - 1;
        if 0 < digits {
            end = fraction;
        }
    }

    if digits == 0 {
        return Float::NAN;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exponent = end + 1;
        if exponent < len && (bytes[exponent] == b'+' || bytes[exponent] == b'-') {
            exponent += 1;
        }
        let exponent_start = exponent;
        while exponent < len && bytes[exponent].is_ascii_digit() {
            exponent += 1;
        }
        if exponent_start < exponent {
            end = exponent;
        }
    }

    text[..end].parse().unwrap_or(Float::NAN)
}

/// Bound an alpha value, resetting invalid values to one.
#[inline]
pub(crate) fn bound_alpha(value: Float) -> Float {
    if value.is_nan() || !(0.0..=1.0).contains(&value) {
        1.0
    } else {
        value
    }
}

/// Scale a unit from `0..=max` to `0..=1`.
///
/// Values are clamped first. Percentages are scaled to the maximum with the
/// product truncated to two decimals of a percent. Values within `1e-6` of
/// the maximum snap to one.
pub(crate) fn bound01(unit: &Unit, max: Float) -> Float {
    if unit.is_one_point_zero() {
        bound01_value(100.0, true, max)
    } else {
        bound01_value(unit.value(), unit.is_percentage(), max)
    }
}

/// Scale a number from `0..=max` to `0..=1`.
pub(crate) fn bound01_value(value: Float, is_percentage: bool, max: Float) -> Float {
    if value.is_nan() {
        return Float::NAN;
    }

    let mut n = value.max(0.0).min(max);
    if is_percentage {
        n = (n * max).trunc() / 100.0;
    }

    if (n - max).abs() < 0.000_001 {
        return 1.0;
    }

    (n % max) / max
}

/// Scale a hue from degrees to `0..=1`.
///
/// Unlike other components, plain hues wrap around the color wheel. So 400°
/// becomes 40° and -30° becomes 330°. Percentages are bounded like other
/// units.
pub(crate) fn bound_hue(unit: &Unit) -> Float {
    if unit.is_percentage() || unit.is_one_point_zero() {
        return bound01(unit, 360.0);
    }

    let degrees = unit.value();
    if degrees.is_finite() {
        bound01_value(degrees.rem_euclid(360.0), false, 360.0)
    } else {
        bound01_value(degrees, false, 360.0)
    }
}

/// Convert a fraction `0..=1` into a percentage.
///
/// The value is read leniently, so `"0.5%"` counts as one half and becomes
/// `"50%"`. Units with a larger value or without a numeric prefix are
/// returned unchanged.
pub(crate) fn convert_to_percentage(unit: Unit) -> Unit {
    let value = unit.value();
    if value <= 1.0 {
        Unit::Text(format!("{}%", value * 100.0))
    } else {
        unit
    }
}

/// Clamp the value to `0..=1`.
#[inline]
pub(crate) fn clamp01(value: Float) -> Float {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("50%"), 50.0);
        assert_eq!(parse_float("  -.5"), -0.5);
        assert_eq!(parse_float("+3."), 3.0);
        assert_eq!(parse_float("1e2px"), 100.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("-Infinity"), Float::NEG_INFINITY);
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("").is_nan());
    }

    #[test]
    fn test_validity() {
        assert!(Unit::from(0).is_valid());
        assert!(Unit::from("-.5").is_valid());
        assert!(Unit::from("+10%").is_valid());
        assert!(Unit::from("x10").is_valid());
        assert!(!Unit::from(Float::NAN).is_valid());
        assert!(!Unit::from(Float::INFINITY).is_valid());
        assert!(!Unit::from("").is_valid());
        assert!(!Unit::from("%").is_valid());
    }

    #[test]
    fn test_bound_alpha() {
        assert_eq!(bound_alpha(0.5), 0.5);
        assert_eq!(bound_alpha(0.0), 0.0);
        assert_eq!(bound_alpha(-0.1), 1.0);
        assert_eq!(bound_alpha(1.5), 1.0);
        assert_eq!(bound_alpha(Float::NAN), 1.0);
    }

    #[test]
    fn test_bound01() {
        assert_eq!(bound01(&Unit::from(255), 255.0), 1.0);
        assert_eq!(bound01(&Unit::from(300), 255.0), 1.0);
        assert_eq!(bound01(&Unit::from(-20), 255.0), 0.0);
        assert_close_enough!(bound01(&Unit::from(51), 255.0), 0.2);
        assert_eq!(bound01(&Unit::from("50%"), 100.0), 0.5);
        assert_eq!(bound01(&Unit::from("100%"), 255.0), 1.0);
        assert_eq!(bound01(&Unit::from("1.0"), 100.0), 1.0);
        assert_eq!(bound01(&Unit::from("1"), 100.0), 0.01);

        // Percentages lose precision below a hundredth of a percent
        assert_close_enough!(bound01(&Unit::from("33.339%"), 100.0), 0.3333);
        assert!(bound01(&Unit::from("abc5"), 255.0).is_nan());
    }

    #[test]
    fn test_bound_hue() {
        assert_close_enough!(bound_hue(&Unit::from(400)), 40.0 / 360.0);
        assert_close_enough!(bound_hue(&Unit::from(-30)), 330.0 / 360.0);
        assert_eq!(bound_hue(&Unit::from(360)), 0.0);
        assert_eq!(bound_hue(&Unit::from(180)), 0.5);
        assert_eq!(bound_hue(&Unit::from("50%")), 0.5);
    }

    #[test]
    fn test_convert_to_percentage() {
        assert_eq!(convert_to_percentage(Unit::from(0.5)), Unit::from("50%"));
        assert_eq!(convert_to_percentage(Unit::from(1)), Unit::from("100%"));
        assert_eq!(convert_to_percentage(Unit::from(0)), Unit::from("0%"));
        assert_eq!(convert_to_percentage(Unit::from("0.25")), Unit::from("25%"));
        assert_eq!(convert_to_percentage(Unit::from(128)), Unit::from(128));
        assert_eq!(convert_to_percentage(Unit::from("20%")), Unit::from("20%"));
        assert_eq!(convert_to_percentage(Unit::from("abc")), Unit::from("abc"));

        // Percent signs do not keep small values from being scaled
        assert_eq!(convert_to_percentage(Unit::from("1%")), Unit::from("100%"));
        assert_eq!(convert_to_percentage(Unit::from("0.5%")), Unit::from("50%"));
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.5), 0.5);
        assert_eq!(clamp01(1.5), 1.0);
    }
}
