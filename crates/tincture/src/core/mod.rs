mod contrast;
mod conversion;
mod equality;
mod math;
mod names;
pub(crate) mod string;
mod unit;

// contrast
pub(crate) use contrast::{to_brightness, to_contrast_ratio, to_luminance};

// conversion
pub(crate) use conversion::{
    hsl_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_rgb, rgba_to_argb_hex,
    rgba_to_hex,
};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;

// math
pub(crate) use math::{format_alpha, FloatExt};

// names
pub use names::{hex_names, names};
pub(crate) use names::lookup_hex;

// string
pub(crate) use string::parse;

// unit
pub use unit::Unit;
pub(crate) use unit::{bound01_value, bound_alpha, clamp01, convert_to_percentage};
