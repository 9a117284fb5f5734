use super::unit::{bound01, bound01_value, bound_hue, Unit};
use crate::Float;

// Coordinates throughout this module are arrays of three floats. RGB
// channels range `0..=255` when they are inputs to or results of the
// public-facing conversions. Hue, saturation, lightness, and value range
// `0..=1`.

/// Convert possibly percentage-based RGB units to channels `0..=255`.
pub(crate) fn rgb_to_rgb(r: &Unit, g: &Unit, b: &Unit) -> [Float; 3] {
    [
        bound01(r, 255.0) * 255.0,
        bound01(g, 255.0) * 255.0,
        bound01(b, 255.0) * 255.0,
    ]
}

/// Compute the hue shared by HSL and HSV.
///
/// The branch depends on which channel equals the maximum, tested in order
/// red, green, blue. The hue for achromatic colors is zero.
fn to_hue(r: Float, g: Float, b: Float, max: Float, min: Float) -> Float {
    if max == min {
        return 0.0;
    }

    let d = max - min;
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    h / 6.0
}

fn normalize_rgb(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    [
        bound01_value(r, false, 255.0),
        bound01_value(g, false, 255.0),
        bound01_value(b, false, 255.0),
    ]
}

/// Convert RGB channels `0..=255` to HSL.
pub(crate) fn rgb_to_hsl(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = normalize_rgb(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let l = (max + min) / 2.0;
    let h = to_hue(r, g, b, max, min);
    let s = if max == min {
        0.0
    } else {
        let d = max - min;
        if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        }
    };

    [h, s, l]
}

/// Compute one RGB channel from HSL's intermediate values.
#[allow(clippy::suboptimal_flops)]
fn hue_to_rgb(p: Float, q: Float, t: Float) -> Float {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL units to RGB channels `0..=255`.
///
/// Hue is in degrees, saturation and lightness are percentages or fractions
/// of 100.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn hsl_to_rgb(h: &Unit, s: &Unit, l: &Unit) -> [Float; 3] {
    let h = bound_hue(h);
    let s = bound01(s, 100.0);
    let l = bound01(l, 100.0);

    let [r, g, b] = if s == 0.0 {
        [l, l, l]
    } else {
        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;
        [
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        ]
    };

    [r * 255.0, g * 255.0, b * 255.0]
}

/// Convert RGB channels `0..=255` to HSV.
pub(crate) fn rgb_to_hsv(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = normalize_rgb(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let h = to_hue(r, g, b, max, min);
    let s = if max == 0.0 { 0.0 } else { (max - min) / max };

    [h, s, max]
}

/// Convert HSV units to RGB channels `0..=255`.
///
/// Hue is in degrees, saturation and value are percentages or fractions of
/// 100.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn hsv_to_rgb(h: &Unit, s: &Unit, v: &Unit) -> [Float; 3] {
    let h = bound_hue(h) * 6.0;
    let s = bound01(s, 100.0);
    let v = bound01(v, 100.0);
    if h.is_nan() || s.is_nan() || v.is_nan() {
        return [Float::NAN; 3];
    }

    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let [r, g, b] = match (i as usize) % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    [r * 255.0, g * 255.0, b * 255.0]
}

// --------------------------------------------------------------------------------------------------------------------

/// Format a number `0..=255` as two lowercase hexadecimal digits.
fn to_hex_pair(value: Float) -> String {
    format!("{:02x}", value.round() as u8)
}

/// Determine whether every pair consists of two identical digits.
fn is_shortenable(pairs: &[String]) -> bool {
    pairs
        .iter()
        .all(|pair| matches!(*pair.as_bytes(), [first, second] if first == second))
}

fn join_pairs(pairs: &[String], allow_short: bool) -> String {
    if allow_short && is_shortenable(pairs) {
        pairs.iter().map(|pair| &pair[..1]).collect()
    } else {
        pairs.concat()
    }
}

/// Format RGB channels `0..=255` as six hexadecimal digits.
///
/// If `allow_short` is set and each pair of digits repeats the same digit,
/// the result has three digits only.
pub(crate) fn rgb_to_hex(rgb: &[Float; 3], allow_short: bool) -> String {
    let pairs = rgb.map(to_hex_pair);
    join_pairs(&pairs, allow_short)
}

/// Format RGB channels `0..=255` and alpha `0..=1` as eight hexadecimal
/// digits.
pub(crate) fn rgba_to_hex(rgb: &[Float; 3], alpha: Float, allow_short: bool) -> String {
    let [r, g, b] = *rgb;
    let pairs = [r, g, b, alpha * 255.0].map(to_hex_pair);
    join_pairs(&pairs, allow_short)
}

/// Format RGB channels `0..=255` and alpha `0..=1` as eight hexadecimal
/// digits with alpha first.
pub(crate) fn rgba_to_argb_hex(rgb: &[Float; 3], alpha: Float) -> String {
    let [r, g, b] = *rgb;
    [alpha * 255.0, r, g, b].map(to_hex_pair).concat()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    fn units(h: &str, s: &str, x: &str) -> [Unit; 3] {
        [Unit::from(h), Unit::from(s), Unit::from(x)]
    }

    #[test]
    fn test_rgb_to_rgb() {
        let [r, g, b] = rgb_to_rgb(&Unit::from(255), &Unit::from("50%"), &Unit::from(-3));
        assert_eq!(r, 255.0);
        assert_close_enough!(g, 127.5);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_eq!(rgb_to_hsl(&[255.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        assert_eq!(rgb_to_hsl(&[255.0, 255.0, 255.0]), [0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_hsl(&[0.0, 0.0, 255.0]), [4.0 / 6.0, 1.0, 0.5]);

        let [h, s, l] = rgb_to_hsl(&[0.0, 128.0, 0.0]);
        assert_close_enough!(h, 1.0 / 3.0);
        assert_eq!(s, 1.0);
        assert_close_enough!(l, 64.0 / 255.0);

        // Magenta takes the red branch with a negative difference
        let [h, _, _] = rgb_to_hsl(&[255.0, 0.0, 128.0]);
        assert_close_enough!(h, (6.0 - 128.0 / 255.0) / 6.0);
    }

    #[test]
    fn test_hsl_to_rgb() {
        let [h, s, l] = units("0", "100%", "50%");
        assert_eq!(hsl_to_rgb(&h, &s, &l), [255.0, 0.0, 0.0]);

        let [h, s, l] = units("120", "100%", "25%");
        let [r, g, b] = hsl_to_rgb(&h, &s, &l);
        assert_eq!(r, 0.0);
        assert_close_enough!(g, 127.5);
        assert_eq!(b, 0.0);

        let [h, s, l] = units("240", "0%", "50%");
        assert_eq!(hsl_to_rgb(&h, &s, &l), [127.5, 127.5, 127.5]);
    }

    #[test]
    fn test_rgb_to_hsv() {
        assert_eq!(rgb_to_hsv(&[255.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsv(&[0.0, 255.0, 0.0]), [2.0 / 6.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hsv_to_rgb() {
        let [h, s, v] = units("0", "100%", "100%");
        assert_eq!(hsv_to_rgb(&h, &s, &v), [255.0, 0.0, 0.0]);

        let [h, s, v] = units("180", "100%", "100%");
        assert_eq!(hsv_to_rgb(&h, &s, &v), [0.0, 255.0, 255.0]);

        let [h, s, v] = units("300", "100%", "50%");
        assert_eq!(hsv_to_rgb(&h, &s, &v), [127.5, 0.0, 127.5]);

        let [h, s, v] = units("abc", "100%", "50%");
        assert!(hsv_to_rgb(&h, &s, &v)[0].is_nan());
    }

    #[test]
    fn test_hex() {
        assert_eq!(rgb_to_hex(&[255.0, 0.0, 0.0], false), "ff0000");
        assert_eq!(rgb_to_hex(&[255.0, 0.0, 0.0], true), "f00");
        assert_eq!(rgb_to_hex(&[255.0, 1.0, 0.0], true), "ff0100");
        assert_eq!(rgb_to_hex(&[15.4, 15.6, 254.5], false), "0f10ff");

        assert_eq!(rgba_to_hex(&[255.0, 0.0, 0.0], 1.0, false), "ff0000ff");
        assert_eq!(rgba_to_hex(&[255.0, 0.0, 0.0], 0.0, true), "f000");
        assert_eq!(rgba_to_hex(&[255.0, 0.0, 0.0], 0.5, true), "ff000080");

        assert_eq!(rgba_to_argb_hex(&[255.0, 0.0, 0.0], 0.5), "80ff0000");
        assert_eq!(rgba_to_argb_hex(&[17.0, 34.0, 51.0], 1.0), "ff112233");
    }
}
