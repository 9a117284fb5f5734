//! Deriving new colors by adjusting lightness, brightness, saturation, and hue.
//!
//! The functions in this module leave their argument unchanged and return a
//! new color. [`Color`] has in-place versions of the same operations, which
//! update the color's channels and alpha but keep its input and format.
//!
//! Amounts default to 10, since `None` and not-a-number are treated as
//! missing. An explicit zero is honored and results in the same color.
//!
//! ```
//! # use tincture::{modify, Color};
//! let red = Color::new("red");
//! assert_eq!(modify::lighten(&red, None).to_hex_string(false), "#ff3333");
//! assert_eq!(modify::lighten(&red, Some(0.0)), red);
//!
//! let mut color = Color::new("red");
//! color.darken(Some(20.0)).spin(Some(120.0));
//! assert_eq!(color.to_hex_string(false), "#009900");
//! assert_eq!(color.to_string(), "#009900");
//! ```

use crate::core::{clamp01, FloatExt};
use crate::object::amount_or;
use crate::{Color, Float, Hsl, Rgb};

const DEFAULT_AMOUNT: Float = 10.0;

fn adjust_hsl(color: &Color, adjust: impl FnOnce(&mut Hsl)) -> Color {
    let mut hsl = color.to_hsl();
    adjust(&mut hsl);
    Color::new(hsl)
}

/// Increase lightness by the given percentage points.
pub fn lighten(color: &Color, amount: Option<Float>) -> Color {
    let amount = amount_or(amount, DEFAULT_AMOUNT);
    adjust_hsl(color, |hsl| hsl.l = clamp01(hsl.l + amount / 100.0))
}

/// Decrease lightness by the given percentage points.
pub fn darken(color: &Color, amount: Option<Float>) -> Color {
    let amount = amount_or(amount, DEFAULT_AMOUNT);
    adjust_hsl(color, |hsl| hsl.l = clamp01(hsl.l - amount / 100.0))
}

/// Increase saturation by the given percentage points.
pub fn saturate(color: &Color, amount: Option<Float>) -> Color {
    let amount = amount_or(amount, DEFAULT_AMOUNT);
    adjust_hsl(color, |hsl| hsl.s = clamp01(hsl.s + amount / 100.0))
}

/// Decrease saturation by the given percentage points.
pub fn desaturate(color: &Color, amount: Option<Float>) -> Color {
    let amount = amount_or(amount, DEFAULT_AMOUNT);
    adjust_hsl(color, |hsl| hsl.s = clamp01(hsl.s - amount / 100.0))
}

/// Remove all saturation.
pub fn greyscale(color: &Color) -> Color {
    desaturate(color, Some(100.0))
}

/// Brighten the color by pushing its RGB channels towards 255.
///
/// Each rounded channel is increased by the amount's share of 255, itself
/// rounded. Negative amounts push channels towards zero instead.
pub fn brighten(color: &Color, amount: Option<Float>) -> Color {
    let amount = amount_or(amount, DEFAULT_AMOUNT);
    let delta = (255.0 * -(amount / 100.0)).round_half_up();
    let shift = |channel: Float| (channel - delta).min(255.0).max(0.0);

    let rgb = color.to_rgb();
    Color::new(Rgb {
        r: shift(rgb.r),
        g: shift(rgb.g),
        b: shift(rgb.b),
        a: rgb.a,
    })
}

/// Rotate the hue by the given degrees.
///
/// ```
/// # use tincture::{modify, Color};
/// let red = Color::new("red");
/// assert_eq!(modify::spin(&red, Some(-120.0)).to_hex_string(false), "#0000ff");
/// assert_eq!(modify::spin(&red, Some(360.0)), red);
/// ```
pub fn spin(color: &Color, amount: Option<Float>) -> Color {
    let amount = amount_or(amount, DEFAULT_AMOUNT);
    adjust_hsl(color, |hsl| {
        let hue = (hsl.h + amount) % 360.0;
        hsl.h = if hue < 0.0 { 360.0 + hue } else { hue };
    })
}

// ====================================================================================================================

/// A modification of a color.
///
/// Each variant names one of this module's functions together with its
/// amount. [`Color::modify`] applies a modification in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Modification {
    Lighten(Option<Float>),
    Brighten(Option<Float>),
    Darken(Option<Float>),
    Desaturate(Option<Float>),
    Saturate(Option<Float>),
    Greyscale,
    Spin(Option<Float>),
}

impl Modification {
    /// Apply this modification to the given color, returning a new color.
    pub fn apply_to(&self, color: &Color) -> Color {
        match *self {
            Self::Lighten(amount) => lighten(color, amount),
            Self::Brighten(amount) => brighten(color, amount),
            Self::Darken(amount) => darken(color, amount),
            Self::Desaturate(amount) => desaturate(color, amount),
            Self::Saturate(amount) => saturate(color, amount),
            Self::Greyscale => greyscale(color),
            Self::Spin(amount) => spin(color, amount),
        }
    }
}

impl Color {
    /// Apply the modification to this color.
    ///
    /// This method replaces this color's channels and alpha with those of the
    /// modified color. The original input, format, and validity do not
    /// change.
    pub fn modify(&mut self, modification: Modification) -> &mut Self {
        let modified = modification.apply_to(self);
        self.r = modified.r;
        self.g = modified.g;
        self.b = modified.b;
        self.set_alpha(modified.a)
    }

    /// Lighten this color in place.
    pub fn lighten(&mut self, amount: Option<Float>) -> &mut Self {
        self.modify(Modification::Lighten(amount))
    }

    /// Brighten this color in place.
    pub fn brighten(&mut self, amount: Option<Float>) -> &mut Self {
        self.modify(Modification::Brighten(amount))
    }

    /// Darken this color in place.
    pub fn darken(&mut self, amount: Option<Float>) -> &mut Self {
        self.modify(Modification::Darken(amount))
    }

    /// Desaturate this color in place.
    pub fn desaturate(&mut self, amount: Option<Float>) -> &mut Self {
        self.modify(Modification::Desaturate(amount))
    }

    /// Saturate this color in place.
    pub fn saturate(&mut self, amount: Option<Float>) -> &mut Self {
        self.modify(Modification::Saturate(amount))
    }

    /// Turn this color grey in place.
    pub fn greyscale(&mut self) -> &mut Self {
        self.modify(Modification::Greyscale)
    }

    /// Rotate this color's hue in place.
    pub fn spin(&mut self, amount: Option<Float>) -> &mut Self {
        self.modify(Modification::Spin(amount))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ColorFormat;

    fn hex(color: &Color) -> String {
        color.to_hex_string(false)
    }

    #[test]
    fn test_lighten_darken() {
        let red = Color::new("red");
        assert_eq!(hex(&lighten(&red, None)), "#ff3333");
        assert_eq!(hex(&lighten(&red, Some(20.0))), "#ff6666");
        assert_eq!(hex(&lighten(&red, Some(100.0))), "#ffffff");
        assert_eq!(hex(&darken(&red, None)), "#cc0000");
        assert_eq!(hex(&darken(&red, Some(100.0))), "#000000");
        assert_eq!(darken(&red, Some(0.0)), red);
        assert_eq!(darken(&red, Some(crate::Float::NAN)), darken(&red, None));
    }

    #[test]
    fn test_saturation() {
        let color = Color::new("hsl(0, 50%, 50%)");
        assert_eq!(saturate(&color, None).to_hsl_string(), "hsl(0, 60%, 50%)");
        assert_eq!(desaturate(&color, None).to_hsl_string(), "hsl(0, 40%, 50%)");
        assert_eq!(desaturate(&color, Some(80.0)).to_hsl_string(), "hsl(0, 0%, 50%)");
        assert_eq!(greyscale(&Color::new("red")), Color::new("#808080"));
    }

    #[test]
    fn test_brighten() {
        let red = Color::new("red");
        assert_eq!(hex(&brighten(&red, None)), "#ff1919");
        assert_eq!(hex(&brighten(&red, Some(100.0))), "#ffffff");
        assert_eq!(hex(&brighten(&red, Some(-10.0))), "#e50000");

        let translucent = Color::new("rgba(0, 0, 0, 0.5)");
        assert_eq!(brighten(&translucent, Some(20.0)).to_rgb_string(), "rgba(51, 51, 51, 0.5)");
    }

    #[test]
    fn test_spin() {
        let red = Color::new("red");
        assert_eq!(spin(&red, Some(360.0)), red);
        assert_eq!(spin(&red, Some(0.0)), red);
        assert_eq!(hex(&spin(&red, Some(120.0))), "#00ff00");
        assert_eq!(hex(&spin(&red, Some(-120.0))), "#0000ff");
        assert_eq!(spin(&red, Some(-360.0)), red);
        assert_eq!(spin(&red, None).to_hsl_string(), "hsl(10, 100%, 50%)");
    }

    #[test]
    fn test_modify_in_place() {
        let mut color = Color::new("red");
        color.lighten(Some(20.0));
        assert_eq!(hex(&color), "#ff6666");
        assert_eq!(color.format(), ColorFormat::Name);

        color.set_alpha(0.5).greyscale();
        assert_eq!(color.to_string(), "rgba(179, 179, 179, 0.5)");

        let mut color = Color::new("#00f");
        color.modify(Modification::Spin(Some(180.0)));
        assert_eq!(hex(&color), "#ffff00");
    }

    #[test]
    fn test_modification_is_pure() {
        let red = Color::new("red");
        let modification = Modification::Darken(Some(50.0));
        let dark = modification.apply_to(&red);
        assert_eq!(hex(&red), "#ff0000");
        assert_eq!(hex(&dark), "#000000");
    }
}
