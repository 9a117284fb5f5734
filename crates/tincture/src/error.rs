//! Utility module with tincture's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::Float;

/// An erroneous color format.
///
/// [`Color::new`](crate::Color::new) never fails and instead produces an
/// invalid color. This error only surfaces through the fallible conversions,
/// i.e., `str::parse::<Color>()`, `Color::try_from`, and parsing a
/// [`ColorFormat`](crate::ColorFormat) keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// An empty string or a string with only whitespace.
    Empty,

    /// A string that matches none of the supported notations, i.e., color
    /// names, `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, `hsva()`, and
    /// three, four, six, or eight hexadecimal digits.
    UnknownFormat,

    /// An output format keyword other than `rgb`, `prgb`, `hex`, `hex3`,
    /// `hex4`, `hex6`, `hex8`, `name`, `hsl`, and `hsv`.
    UnknownKeyword,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        let message = match *self {
            Empty => "color string is empty",
            UnknownFormat => "color string does not match any known notation",
            UnknownKeyword => "format keyword is not one of rgb, prgb, hex, hex3, hex4, hex6, hex8, name, hsl, hsv",
        };

        f.write_str(message)
    }
}

impl core::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An invalid number of colors for a polyad.
///
/// A polyad distributes hues evenly around the color wheel and hence requires
/// a positive count. Zero, negative numbers, and not-a-number are rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyadError {
    pub count: Float,
}

impl core::fmt::Display for PolyadError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("Argument to polyad must be a positive number")
    }
}

impl core::error::Error for PolyadError {}

#[cfg(feature = "pyffi")]
impl From<PolyadError> for PyErr {
    fn from(value: PolyadError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
