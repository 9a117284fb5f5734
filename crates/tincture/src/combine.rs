//! Generating color schemes from a single color.
//!
//! All schemes but the complement start with a copy of the original color,
//! followed by colors derived from it. Derived colors are created from HSL or
//! HSV coordinates and hence have that format.

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::PolyadError;
use crate::{Color, Float, Hsl, Hsv};

fn rotate(hsl: &Hsl, degrees: Float) -> Color {
    Color::new(Hsl {
        h: (hsl.h + degrees) % 360.0,
        ..*hsl
    })
}

/// Get the complement, i.e., the color with the opposite hue.
///
/// ```
/// # use tincture::{combine, Color};
/// let complement = combine::complement(&Color::new("red"));
/// assert_eq!(complement.to_hex_string(false), "#00ffff");
/// ```
pub fn complement(color: &Color) -> Color {
    rotate(&color.to_hsl(), 180.0)
}

/// Distribute the given number of colors evenly around the color wheel.
///
/// The result starts with the original color, followed by colors with the
/// same saturation, lightness, and alpha but hues `k * 360 / count` degrees
/// apart for `k = 1, 2, ...` while `k < count`.
///
/// # Errors
///
/// This function returns an error if the count is zero, negative, or
/// not-a-number.
pub fn polyad(color: &Color, count: Float) -> Result<Vec<Color>, PolyadError> {
    if count.is_nan() || count <= 0.0 {
        #[cfg(feature = "tracing")]
        debug!(count, "polyad rejects count");
        return Err(PolyadError { count });
    }

    Ok(polyad_unchecked(color, count))
}

fn polyad_unchecked(color: &Color, count: Float) -> Vec<Color> {
    let hsl = color.to_hsl();
    let step = 360.0 / count;

    let mut result = vec![color.duplicate()];
    let mut index: Float = 1.0;
    while index < count {
        result.push(rotate(&hsl, index * step));
        index += 1.0;
    }

    result
}

/// Get the triad, i.e., the color and two colors 120° and 240° apart.
///
/// ```
/// # use tincture::{combine, Color};
/// let triad = combine::triad(&Color::new("red"));
/// let hex: Vec<_> = triad.iter().map(|c| c.to_hex_string(false)).collect();
/// assert_eq!(hex, ["#ff0000", "#00ff00", "#0000ff"]);
/// ```
pub fn triad(color: &Color) -> Vec<Color> {
    polyad_unchecked(color, 3.0)
}

/// Get the tetrad, i.e., the color and three colors 90°, 180°, and 270°
/// apart.
pub fn tetrad(color: &Color) -> Vec<Color> {
    polyad_unchecked(color, 4.0)
}

/// Get the split complement, i.e., the color and two colors 72° and 216°
/// apart.
pub fn splitcomplement(color: &Color) -> Vec<Color> {
    let hsl = color.to_hsl();
    vec![color.duplicate(), rotate(&hsl, 72.0), rotate(&hsl, 216.0)]
}

/// Get analogous colors.
///
/// The color wheel is divided into `slices` parts, 30 by default. The
/// result holds `results` colors, 6 by default, with the original color
/// first. The others walk forward one slice at a time, starting about half
/// the covered arc before the original hue. Zero counts fall back on the
/// defaults.
pub fn analogous(color: &Color, results: Option<usize>, slices: Option<usize>) -> Vec<Color> {
    let results = results.filter(|&n| n != 0).unwrap_or(6);
    let slices = slices.filter(|&n| n != 0).unwrap_or(30);

    let mut hsl = color.to_hsl();
    let part = 360.0 / slices as Float;
    let offset = ((part * results as Float) as i32 >> 1) as Float;

    let mut colors = Vec::with_capacity(results);
    colors.push(color.duplicate());

    hsl.h = (hsl.h - offset + 720.0) % 360.0;
    for _ in 1..results {
        hsl.h = (hsl.h + part) % 360.0;
        colors.push(Color::new(hsl));
    }

    colors
}

/// Get monochromatic colors.
///
/// The result holds `results` opaque colors, 6 by default, with the hue and
/// saturation of the original color. Starting with the original value, each
/// subsequent color's value is increased by `1 / results`, wrapping around to
/// zero.
pub fn monochromatic(color: &Color, results: Option<usize>) -> Vec<Color> {
    let results = results.filter(|&n| n != 0).unwrap_or(6);
    let Hsv { h, s, mut v, .. } = color.to_hsv();
    let modification = 1.0 / results as Float;

    let mut colors = Vec::with_capacity(results);
    for _ in 0..results {
        colors.push(Color::new(Hsv { h, s, v, a: 1.0 }));
        v = (v + modification) % 1.0;
    }

    colors
}

impl Color {
    /// Get this color's complement. See [`complement`].
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn complement(&self) -> Color {
        complement(self)
    }

    /// Get this color's polyad. See [`polyad`].
    ///
    /// # Errors
    ///
    /// This method returns an error if the count is zero, negative, or
    /// not-a-number.
    pub fn polyad(&self, count: Float) -> Result<Vec<Color>, PolyadError> {
        polyad(self, count)
    }

    /// Get this color's triad. See [`triad`].
    pub fn triad(&self) -> Vec<Color> {
        triad(self)
    }

    /// Get this color's tetrad. See [`tetrad`].
    pub fn tetrad(&self) -> Vec<Color> {
        tetrad(self)
    }

    /// Get this color's split complement. See [`splitcomplement`].
    pub fn splitcomplement(&self) -> Vec<Color> {
        splitcomplement(self)
    }

    /// Get analogous colors. See [`analogous`].
    pub fn analogous(&self, results: Option<usize>, slices: Option<usize>) -> Vec<Color> {
        analogous(self, results, slices)
    }

    /// Get monochromatic colors. See [`monochromatic`].
    pub fn monochromatic(&self, results: Option<usize>) -> Vec<Color> {
        monochromatic(self, results)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ColorFormat;

    fn hex_strings(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.to_hex_string(false)).collect()
    }

    #[test]
    fn test_complement() {
        assert_eq!(Color::new("#00f").complement().to_hex_string(false), "#ffff00");
        let grey = Color::new("#808080");
        assert_eq!(grey.complement(), grey);
    }

    #[test]
    fn test_polyad() -> Result<(), PolyadError> {
        let red = Color::new("red");
        let colors = red.polyad(6.0)?;
        assert_eq!(
            hex_strings(&colors),
            ["#ff0000", "#ffff00", "#00ff00", "#00ffff", "#0000ff", "#ff00ff"]
        );
        assert_eq!(colors[0].format(), ColorFormat::Name);
        assert_eq!(colors[1].format(), ColorFormat::Hsl);

        assert_eq!(red.polyad(1.0)?.len(), 1);
        assert_eq!(red.polyad(2.5)?.len(), 3);

        assert_eq!(red.polyad(0.0), Err(PolyadError { count: 0.0 }));
        assert_eq!(red.polyad(-1.0), Err(PolyadError { count: -1.0 }));
        assert!(red.polyad(Float::NAN).is_err());

        let error = red.polyad(0.0).unwrap_err();
        assert_eq!(error.to_string(), "Argument to polyad must be a positive number");
        Ok(())
    }

    #[test]
    fn test_triad_tetrad() {
        let color = Color::new("hsl(30, 60%, 40%)");

        let triad = color.triad();
        assert_eq!(triad.len(), 3);
        let hues: Vec<_> = triad.iter().map(|c| c.to_hsl().h.round()).collect();
        assert_eq!(hues, [30.0, 150.0, 270.0]);

        let tetrad = color.tetrad();
        assert_eq!(tetrad.len(), 4);
        let hues: Vec<_> = tetrad.iter().map(|c| c.to_hsl().h.round()).collect();
        assert_eq!(hues, [30.0, 120.0, 210.0, 300.0]);
    }

    #[test]
    fn test_splitcomplement() {
        let colors = Color::new("red").splitcomplement();
        assert_eq!(hex_strings(&colors), ["#ff0000", "#ccff00", "#0066ff"]);
    }

    #[test]
    fn test_analogous() {
        let colors = Color::new("red").analogous(None, None);
        assert_eq!(
            hex_strings(&colors),
            ["#ff0000", "#ff0066", "#ff0033", "#ff0000", "#ff3300", "#ff6600"]
        );

        let colors = Color::new("red").analogous(Some(3), Some(12));
        assert_eq!(hex_strings(&colors), ["#ff0000", "#ff0040", "#ff4000"]);

        assert_eq!(Color::new("red").analogous(Some(0), Some(0)).len(), 6);
        assert_eq!(Color::new("red").analogous(Some(1), None).len(), 1);
    }

    #[test]
    fn test_monochromatic() {
        let colors = Color::new("rgba(255, 0, 0, 0.5)").monochromatic(None);
        assert_eq!(
            hex_strings(&colors),
            ["#ff0000", "#2a0000", "#550000", "#800000", "#aa0000", "#d40000"]
        );
        assert!(colors.iter().all(|c| c.alpha() == 1.0));

        let colors = Color::new("#000").monochromatic(Some(4));
        assert_eq!(hex_strings(&colors), ["#000000", "#404040", "#808080", "#bfbfbf"]);
    }
}
