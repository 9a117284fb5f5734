use crate::Float;

/// The coefficients for computing relative luminance for sRGB coordinates.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The linearization threshold for gamma-encoded sRGB coordinates.
const LINEAR_THRESHOLD: Float = 0.03928;

/// Compute the relative luminance for the given 8-bit sRGB channels.
///
/// This is the WCAG 2 formula, with the sum evaluated left to right and
/// without fused multiply-adds. The contrast ratio of white on black is
/// exactly 21 only that way.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn to_luminance(channels: &[Float; 3]) -> Float {
    fn linearize(value: Float) -> Float {
        let value = value / 255.0;
        if value <= LINEAR_THRESHOLD {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *channels;

    c1 * linearize(r) + c2 * linearize(g) + c3 * linearize(b)
}

/// Compute the contrast ratio between two relative luminance values.
///
/// The ratio is symmetric and ranges from 1 to 21.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    (luminance1.max(luminance2) + 0.05) / (luminance1.min(luminance2) + 0.05)
}

/// Compute the perceived brightness for the given 8-bit sRGB channels.
///
/// The result ranges from 0 to 255.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn to_brightness(channels: &[Float; 3]) -> Float {
    let [r, g, b] = *channels;
    (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0
}

#[cfg(test)]
mod test {
    use super::{to_brightness, to_contrast_ratio, to_luminance};
    use crate::assert_close_enough;

    #[test]
    fn test_luminance() {
        assert_eq!(to_luminance(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(to_luminance(&[255.0, 255.0, 255.0]), 1.0);
        assert_close_enough!(to_luminance(&[255.0, 0.0, 0.0]), 0.2126);

        // Dark channels are linear
        assert_close_enough!(to_luminance(&[0.0, 0.0, 10.0]), 0.0722 * 10.0 / 255.0 / 12.92);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_eq!(to_contrast_ratio(1.0, 0.0), 21.0);
        assert_eq!(to_contrast_ratio(0.0, 1.0), 21.0);
        assert_eq!(to_contrast_ratio(0.5, 0.5), 1.0);
    }

    #[test]
    fn test_brightness() {
        assert_eq!(to_brightness(&[255.0, 255.0, 255.0]), 255.0);
        assert_eq!(to_brightness(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(to_brightness(&[255.0, 0.0, 0.0]), 76.245);
    }
}
