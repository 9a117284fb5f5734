//! # Tincture
//!
//! Tincture parses, converts, manipulates, and combines sRGB colors and
//! checks their readability.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Tincture's main abstractions are:
//!
//!   * [`Color`] is an **sRGB color with alpha**. It is created from almost
//!     anything that looks like a color, including CSS-like strings such as
//!     `"red"`, `"#f80"`, `"rgb(255 128 0)"`, or `"hsla(30, 100%, 50%, .5)"`,
//!     as well as [`ColorRecord`]s, [`Rgb`], [`Hsl`], and [`Hsv`]. Creating a
//!     color never fails. Input that does not describe a color results in an
//!     invalid, opaque black color. Colors serialize to RGB, percentage RGB,
//!     hexadecimal, HSL, HSV, and named formats.
//!   * The [`modify`] module **adjusts colors** by lightening, darkening,
//!     brightening, saturating, desaturating, or rotating the hue.
//!     [`Modification`] captures such an adjustment, and [`Color::modify`]
//!     applies it in place.
//!   * The [`combine`] module **generates color schemes**, i.e., the
//!     complement, triads, tetrads, polyads, split complements, analogous
//!     colors, and monochromatic colors.
//!   * The [`wcag`] module computes the **contrast ratio** between two colors
//!     and determines whether they are readable according to WCAG 2.
//!
//! ```
//! # use tincture::{Color, ColorFormat, ColorOptions};
//! let mut color = Color::new("hsl(30, 100%, 50%)");
//! assert_eq!(color.to_string(), "hsl(30, 100%, 50%)");
//! assert_eq!(color.to_hex_string(false), "#ff8000");
//!
//! color.lighten(Some(20.0)).set_alpha(0.5);
//! assert_eq!(color.to_string(), "hsla(30, 100%, 70%, 0.5)");
//!
//! let options = ColorOptions {
//!     format: Some(ColorFormat::Rgb),
//!     ..Default::default()
//! };
//! let red = Color::with_options("red", &options);
//! assert_eq!(red.to_string(), "rgb(255, 0, 0)");
//! assert_eq!(red.to_name(), Some("red"));
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! Tincture supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls tincture's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!   - **`tracing`** emits diagnostic events through the
//!     [tracing](https://crates.io/crates/tracing) crate, notably for
//!     strings that do not parse as colors. This feature is disabled by
//!     default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod combine;
mod core;
pub mod error;
pub mod modify;
mod object;
pub mod wcag;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{hex_names, names, Unit};
pub use modify::Modification;
pub use object::{
    Color, ColorFormat, ColorInput, ColorOptions, ColorRecord, Hsl, Hsv, PercentageRgb, Rgb,
};
pub use wcag::{is_readable, most_readable, readability};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn tincture(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(wcag::readability, m)?)?;
    m.add_function(wrap_pyfunction!(wcag::py_is_readable, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<ColorFormat>()?;

    Ok(())
}
