#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::core::{
    bound01_value, bound_alpha, convert_to_percentage, format_alpha, hsl_to_rgb, hsv_to_rgb,
    lookup_hex, parse, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_rgb, rgba_to_argb_hex,
    rgba_to_hex, to_brightness, to_luminance, FloatExt, Unit,
};
use crate::error::ColorFormatError;
use crate::Float;

/// The output format of a color.
///
/// Every color has a default output format, which is inferred from its input
/// but can be overridden with [`ColorOptions`]. [`Color::to_format_string`]
/// also accepts an explicit format. The [`FromStr`](core::str::FromStr)
/// implementation recognizes the same lower-case keywords [`ColorFormat::name`]
/// returns.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "tincture")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `rgb(255, 0, 0)` or `rgba(255, 0, 0, 0.5)`
    #[default]
    Rgb,
    /// `rgb(100%, 0%, 0%)` or `rgba(100%, 0%, 0%, 0.5)`
    Prgb,
    /// `#ff0000`
    Hex,
    /// `#f00` if possible, otherwise `#ff0000`
    Hex3,
    /// `#f00f` if possible, otherwise `#ff0000ff`
    Hex4,
    /// `#ff0000`
    Hex6,
    /// `#ff0000ff`
    Hex8,
    /// `red`
    Name,
    /// `hsl(0, 100%, 50%)` or `hsla(0, 100%, 50%, 0.5)`
    Hsl,
    /// `hsv(0, 100%, 100%)` or `hsva(0, 100%, 100%, 0.5)`
    Hsv,
}

impl ColorFormat {
    /// Get this format's keyword.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Rgb => "rgb",
            Self::Prgb => "prgb",
            Self::Hex => "hex",
            Self::Hex3 => "hex3",
            Self::Hex4 => "hex4",
            Self::Hex6 => "hex6",
            Self::Hex8 => "hex8",
            Self::Name => "name",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
        }
    }
}

impl core::str::FromStr for ColorFormat {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = match s {
            "rgb" => Self::Rgb,
            "prgb" => Self::Prgb,
            "hex" => Self::Hex,
            "hex3" => Self::Hex3,
            "hex4" => Self::Hex4,
            "hex6" => Self::Hex6,
            "hex8" => Self::Hex8,
            "name" => Self::Name,
            "hsl" => Self::Hsl,
            "hsv" => Self::Hsv,
            _ => return Err(ColorFormatError::UnknownKeyword),
        };

        Ok(format)
    }
}

impl core::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// A loosely structured color.
///
/// A record is what the string parser produces and also serves as structured
/// input for [`Color::new`]. Its components are resolved in priority order:
/// If `r`, `g`, and `b` are valid units, the record is RGB. Otherwise, if `h`,
/// `s`, and `v` are valid units, the record is HSV. Otherwise, if `h`, `s`,
/// and `l` are valid units, the record is HSL. Otherwise, the resulting color
/// is invalid. Alpha is optional in all cases.
///
/// RGB components range `0..=255` and hue is in degrees. Saturation,
/// lightness, and value may be fractions `0..=1` or percentages `0..=100`.
///
/// ```
/// # use tincture::{Color, ColorRecord};
/// let color = Color::new(ColorRecord::hsl(120, 1, 0.25));
/// assert_eq!(color.to_hex_string(false), "#008000");
///
/// let color = Color::new(ColorRecord::rgba("100%", "0%", "0%", 0.5));
/// assert_eq!(color.to_string(), "rgba(100%, 0%, 0%, 0.5)");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorRecord {
    pub r: Option<Unit>,
    pub g: Option<Unit>,
    pub b: Option<Unit>,
    pub h: Option<Unit>,
    pub s: Option<Unit>,
    pub l: Option<Unit>,
    pub v: Option<Unit>,
    pub a: Option<Unit>,
    pub format: Option<ColorFormat>,
}

impl ColorRecord {
    /// Create a new RGB record.
    pub fn rgb<R, G, B>(r: R, g: G, b: B) -> Self
    where
        R: Into<Unit>,
        G: Into<Unit>,
        B: Into<Unit>,
    {
        Self {
            r: Some(r.into()),
            g: Some(g.into()),
            b: Some(b.into()),
            ..Default::default()
        }
    }

    /// Create a new RGB record with alpha.
    pub fn rgba<R, G, B, A>(r: R, g: G, b: B, a: A) -> Self
    where
        R: Into<Unit>,
        G: Into<Unit>,
        B: Into<Unit>,
        A: Into<Unit>,
    {
        Self::rgb(r, g, b).with_alpha(a)
    }

    /// Create a new HSL record.
    pub fn hsl<H, S, L>(h: H, s: S, l: L) -> Self
    where
        H: Into<Unit>,
        S: Into<Unit>,
        L: Into<Unit>,
    {
        Self {
            h: Some(h.into()),
            s: Some(s.into()),
            l: Some(l.into()),
            ..Default::default()
        }
    }

    /// Create a new HSL record with alpha.
    pub fn hsla<H, S, L, A>(h: H, s: S, l: L, a: A) -> Self
    where
        H: Into<Unit>,
        S: Into<Unit>,
        L: Into<Unit>,
        A: Into<Unit>,
    {
        Self::hsl(h, s, l).with_alpha(a)
    }

    /// Create a new HSV record.
    pub fn hsv<H, S, V>(h: H, s: S, v: V) -> Self
    where
        H: Into<Unit>,
        S: Into<Unit>,
        V: Into<Unit>,
    {
        Self {
            h: Some(h.into()),
            s: Some(s.into()),
            v: Some(v.into()),
            ..Default::default()
        }
    }

    /// Create a new HSV record with alpha.
    pub fn hsva<H, S, V, A>(h: H, s: S, v: V, a: A) -> Self
    where
        H: Into<Unit>,
        S: Into<Unit>,
        V: Into<Unit>,
        A: Into<Unit>,
    {
        Self::hsv(h, s, v).with_alpha(a)
    }

    /// Update this record with the given alpha.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn with_alpha<A: Into<Unit>>(self, a: A) -> Self {
        Self {
            a: Some(a.into()),
            ..self
        }
    }

    /// Update this record with the given format.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn with_format(self, format: ColorFormat) -> Self {
        Self {
            format: Some(format),
            ..self
        }
    }

    /// Treat all components but alpha as fractions `0..=1`.
    ///
    /// Components with a value up to one become percentages, with hue
    /// becoming a percentage of the full circle.
    fn into_ratios(self) -> Self {
        let convert = |unit: Option<Unit>| unit.map(convert_to_percentage);

        Self {
            r: convert(self.r),
            g: convert(self.g),
            b: convert(self.b),
            h: convert(self.h),
            s: convert(self.s),
            l: convert(self.l),
            v: convert(self.v),
            a: self.a,
            format: self.format,
        }
    }
}

/// A color's RGB channels with alpha.
///
/// Channels range `0..=255` and alpha `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    pub a: Float,
}

/// A color's RGB channels as percentage strings with alpha.
#[derive(Clone, Debug, PartialEq)]
pub struct PercentageRgb {
    pub r: String,
    pub g: String,
    pub b: String,
    pub a: Float,
}

/// A color's hue, saturation, and lightness with alpha.
///
/// Hue is in degrees `0..360`. Saturation, lightness, and alpha range `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
    pub a: Float,
}

/// A color's hue, saturation, and value with alpha.
///
/// Hue is in degrees `0..360`. Saturation, value, and alpha range `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
    pub a: Float,
}

impl From<Rgb> for ColorRecord {
    fn from(value: Rgb) -> Self {
        Self::rgba(value.r, value.g, value.b, value.a)
    }
}

impl From<Hsl> for ColorRecord {
    fn from(value: Hsl) -> Self {
        Self::hsla(value.h, value.s, value.l, value.a)
    }
}

impl From<Hsv> for ColorRecord {
    fn from(value: Hsv) -> Self {
        Self::hsva(value.h, value.s, value.v, value.a)
    }
}

// ====================================================================================================================

/// The input to a color's constructor.
///
/// The `From` implementations make it possible to pass strings, records,
/// [`Rgb`], [`Hsl`], [`Hsv`], and colors directly to [`Color::new`]. A color
/// passed by value is returned unchanged. A color passed by reference is
/// copied field by field.
#[derive(Clone, Debug, Default)]
pub enum ColorInput {
    /// No input at all, which results in an invalid color.
    #[default]
    Empty,
    /// A string to be parsed.
    Text(String),
    /// A structured RGB, HSL, or HSV record.
    Object(ColorRecord),
    /// An existing color.
    Color(Box<Color>),
}

impl ColorInput {
    /// Determine whether this input is missing, which includes empty strings.
    pub fn is_empty(&self) -> bool {
        match *self {
            Self::Empty => true,
            Self::Text(ref text) => text.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ColorRecord> for ColorInput {
    fn from(value: ColorRecord) -> Self {
        Self::Object(value)
    }
}

impl From<Rgb> for ColorInput {
    fn from(value: Rgb) -> Self {
        Self::Object(value.into())
    }
}

impl From<Hsl> for ColorInput {
    fn from(value: Hsl) -> Self {
        Self::Object(value.into())
    }
}

impl From<Hsv> for ColorInput {
    fn from(value: Hsv) -> Self {
        Self::Object(value.into())
    }
}

impl From<Color> for ColorInput {
    fn from(value: Color) -> Self {
        Self::Color(Box::new(value))
    }
}

impl From<&Color> for ColorInput {
    fn from(value: &Color) -> Self {
        Self::Color(Box::new(value.duplicate()))
    }
}

/// Options for creating a color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorOptions {
    /// The default output format, overriding the inferred format.
    pub format: Option<ColorFormat>,
    /// The gradient type used by [`Color::to_filter`].
    pub gradient_type: bool,
}

// ====================================================================================================================

/// The result of resolving a color input.
struct Resolved {
    rgb: [Float; 3],
    alpha: Float,
    format: ColorFormat,
    valid: bool,
}

impl Resolved {
    const INVALID: Self = Self {
        rgb: [0.0, 0.0, 0.0],
        alpha: 1.0,
        format: ColorFormat::Rgb,
        valid: false,
    };
}

fn valid_triple<'a>(
    x: Option<&'a Unit>,
    y: Option<&'a Unit>,
    z: Option<&'a Unit>,
) -> Option<(&'a Unit, &'a Unit, &'a Unit)> {
    match (x, y, z) {
        (Some(x), Some(y), Some(z)) if x.is_valid() && y.is_valid() && z.is_valid() => {
            Some((x, y, z))
        }
        _ => None,
    }
}

fn resolve_record(record: &ColorRecord) -> Resolved {
    let (rgb, format, valid) =
        if let Some((r, g, b)) =
            valid_triple(record.r.as_ref(), record.g.as_ref(), record.b.as_ref())
        {
            let inferred = if r.ends_with_percent() {
                ColorFormat::Prgb
            } else {
                ColorFormat::Rgb
            };
            (rgb_to_rgb(r, g, b), record.format.unwrap_or(inferred), true)
        } else if let Some((h, s, v)) =
            valid_triple(record.h.as_ref(), record.s.as_ref(), record.v.as_ref())
        {
            let s = convert_to_percentage(s.clone());
            let v = convert_to_percentage(v.clone());
            (hsv_to_rgb(h, &s, &v), ColorFormat::Hsv, true)
        } else if let Some((h, s, l)) =
            valid_triple(record.h.as_ref(), record.s.as_ref(), record.l.as_ref())
        {
            let s = convert_to_percentage(s.clone());
            let l = convert_to_percentage(l.clone());
            (hsl_to_rgb(h, &s, &l), ColorFormat::Hsl, true)
        } else {
            ([0.0; 3], ColorFormat::Rgb, false)
        };

    let alpha = bound_alpha(record.a.as_ref().map_or(1.0, Unit::value));

    Resolved {
        rgb: rgb.map(|c| c.max(0.0).min(255.0)),
        alpha,
        format,
        valid,
    }
}

fn resolve(input: &ColorInput) -> Resolved {
    match *input {
        ColorInput::Empty => Resolved::INVALID,
        ColorInput::Text(ref text) => parse(text).map_or_else(
            |_error| {
                #[cfg(feature = "tracing")]
                debug!(input = %text, error = %_error, "color string does not parse");
                Resolved::INVALID
            },
            |record| resolve_record(&record),
        ),
        ColorInput::Object(ref record) => resolve_record(record),
        ColorInput::Color(ref color) => Resolved {
            rgb: [color.r, color.g, color.b],
            alpha: color.a,
            format: color.format,
            valid: color.valid,
        },
    }
}

/// Pick the given amount or, if it is missing or not-a-number, the default.
#[inline]
pub(crate) fn amount_or(amount: Option<Float>, default: Float) -> Float {
    amount.filter(|value| !value.is_nan()).unwrap_or(default)
}

// ====================================================================================================================

/// A color value.
///
/// A color has RGB channels ranging `0..=255`, alpha ranging `0..=1`, a default
/// output format, and a flag for whether its input could be resolved at all.
/// Colors are created from strings, records, or other colors with
/// [`Color::new`] and [`Color::with_options`]. Creation never fails. Instead,
/// input that cannot be resolved results in opaque black with
/// [`Color::is_valid`] returning `false`.
///
/// ```
/// # use tincture::Color;
/// let color = Color::new("red");
/// assert!(color.is_valid());
/// assert_eq!(color.to_hex_string(false), "#ff0000");
/// assert_eq!(color.to_string(), "red");
///
/// let color = Color::new("not a color");
/// assert!(!color.is_valid());
/// assert_eq!(color.to_string(), "rgb(0, 0, 0)");
/// ```
///
/// Colors change only through [`Color::set_alpha`] and the in-place
/// modifications, such as [`Color::lighten`]. Cloning a color serializes it in
/// its default format and parses the result again. Two colors are equal if
/// their [`Color::to_rgb_string`] representations are equal.
#[cfg_attr(feature = "pyffi", pyclass(eq, str, module = "tincture"))]
#[derive(Debug)]
pub struct Color {
    original_input: ColorInput,
    pub(crate) r: Float,
    pub(crate) g: Float,
    pub(crate) b: Float,
    pub(crate) a: Float,
    rounded_alpha: Float,
    format: ColorFormat,
    gradient_type: bool,
    valid: bool,
}

impl Color {
    /// Create a new color from the given input.
    ///
    /// This is shorthand for [`Color::with_options`] with default options.
    pub fn new<C: Into<ColorInput>>(color: C) -> Self {
        Self::with_options(color, &ColorOptions::default())
    }

    /// Create a new color from the given input and options.
    ///
    /// Strings are trimmed and matched case-insensitively against color
    /// names, `transparent`, the functional notations `rgb()`, `rgba()`,
    /// `hsl()`, `hsla()`, `hsv()`, and `hsva()`, as well as three, four, six,
    /// and eight hexadecimal digits with optional `#`. Channels are clamped and
    /// hues wrap around. An invalid alpha becomes one. If the input is a
    /// color, it is returned as is and the options are ignored.
    ///
    /// ```
    /// # use tincture::{Color, ColorFormat, ColorOptions};
    /// let options = ColorOptions { format: Some(ColorFormat::Hsl), ..Default::default() };
    /// let color = Color::with_options("#00f", &options);
    /// assert_eq!(color.format(), ColorFormat::Hsl);
    /// assert_eq!(color.to_string(), "hsl(240, 100%, 50%)");
    /// ```
    pub fn with_options<C: Into<ColorInput>>(color: C, options: &ColorOptions) -> Self {
        let input = color.into();
        if let ColorInput::Color(color) = input {
            return *color;
        }

        let resolved = resolve(&input);
        Self::from_resolved(input, &resolved, options)
    }

    fn from_resolved(input: ColorInput, resolved: &Resolved, options: &ColorOptions) -> Self {
        let [r, g, b] = resolved.rgb.map(|c| {
            let c = if c.is_nan() { 0.0 } else { c };
            if c < 1.0 {
                c.round()
            } else {
                c
            }
        });

        Self {
            original_input: input,
            r,
            g,
            b,
            a: resolved.alpha,
            rounded_alpha: (100.0 * resolved.alpha).round() / 100.0,
            format: options.format.unwrap_or(resolved.format),
            gradient_type: options.gradient_type,
            valid: resolved.valid,
        }
    }

    /// Create a copy of this color field by field.
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            original_input: self.original_input.clone(),
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
            rounded_alpha: self.rounded_alpha,
            format: self.format,
            gradient_type: self.gradient_type,
            valid: self.valid,
        }
    }

    /// Create a new color from a record with fractional components.
    ///
    /// All components but alpha up to one are treated as fractions of their
    /// respective ranges. Hue is a fraction of the full circle. Other inputs
    /// are handled just like [`Color::with_options`] does.
    ///
    /// ```
    /// # use tincture::{Color, ColorOptions, ColorRecord};
    /// let color = Color::from_ratio(ColorRecord::rgb(1, 0, 0), &ColorOptions::default());
    /// assert_eq!(color.to_hex_string(false), "#ff0000");
    ///
    /// let color = Color::from_ratio(ColorRecord::hsl(0.5, 1, 0.5), &ColorOptions::default());
    /// assert_eq!(color.to_hex_string(false), "#00ffff");
    /// ```
    pub fn from_ratio<C: Into<ColorInput>>(color: C, options: &ColorOptions) -> Self {
        let input = match color.into() {
            ColorInput::Object(record) => ColorInput::Object(record.into_ratios()),
            other => other,
        };

        Self::with_options(input, options)
    }

    /// Determine whether the two inputs describe the same color.
    ///
    /// Missing inputs, including empty strings, are never equal.
    ///
    /// ```
    /// # use tincture::Color;
    /// assert!(Color::equals("red", "#f00"));
    /// assert!(Color::equals("red", "rgb(255, 0, 0)"));
    /// assert!(!Color::equals("red", "blue"));
    /// assert!(!Color::equals("", ""));
    /// ```
    pub fn equals<C1, C2>(color1: C1, color2: C2) -> bool
    where
        C1: Into<ColorInput>,
        C2: Into<ColorInput>,
    {
        let (color1, color2) = (color1.into(), color2.into());
        if color1.is_empty() || color2.is_empty() {
            return false;
        }

        Self::new(color1).to_rgb_string() == Self::new(color2).to_rgb_string()
    }

    /// Create a random opaque color.
    pub fn random() -> Self {
        let record = ColorRecord::rgba(
            rand::random::<Float>(),
            rand::random::<Float>(),
            rand::random::<Float>(),
            1,
        );
        Self::from_ratio(record, &ColorOptions::default())
    }

    /// Mix the two colors.
    ///
    /// This method linearly interpolates between the rounded RGB channels and
    /// alphas of both colors. The amount is the percentage of the second
    /// color, defaulting to 50. Zero produces the first color and 100 the
    /// second one.
    ///
    /// ```
    /// # use tincture::Color;
    /// let mix = Color::mix("#000", "#fff", None);
    /// assert_eq!(mix.to_hex_string(false), "#808080");
    ///
    /// let mix = Color::mix("red", "blue", Some(0.0));
    /// assert_eq!(mix.to_hex_string(false), "#ff0000");
    /// ```
    #[allow(clippy::suboptimal_flops)]
    pub fn mix<C1, C2>(color1: C1, color2: C2, amount: Option<Float>) -> Self
    where
        C1: Into<ColorInput>,
        C2: Into<ColorInput>,
    {
        let p = amount_or(amount, 50.0) / 100.0;
        let rgb1 = Self::new(color1).to_rgb();
        let rgb2 = Self::new(color2).to_rgb();

        Self::new(Rgb {
            r: (rgb2.r - rgb1.r) * p + rgb1.r,
            g: (rgb2.g - rgb1.g) * p + rgb1.g,
            b: (rgb2.b - rgb1.b) * p + rgb1.b,
            a: (rgb2.a - rgb1.a) * p + rgb1.a,
        })
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color could be resolved from its input.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Get the input this color was created from.
    #[inline]
    pub fn original_input(&self) -> &ColorInput {
        &self.original_input
    }

    /// Get this color's default output format.
    #[inline]
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Get this color's alpha.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.a
    }

    /// Set this color's alpha.
    ///
    /// Not-a-number and values outside `0..=1` become one.
    pub fn set_alpha(&mut self, alpha: Float) -> &mut Self {
        self.a = bound_alpha(alpha);
        self.rounded_alpha = (100.0 * self.a).round() / 100.0;
        self
    }

    /// Get this color's perceived brightness `0..=255`.
    pub fn brightness(&self) -> Float {
        to_brightness(&self.rounded_rgb())
    }

    /// Determine whether this color is dark, i.e., has brightness below 128.
    ///
    /// ```
    /// # use tincture::Color;
    /// assert!(Color::new("navy").is_dark());
    /// assert!(Color::new("yellow").is_light());
    /// ```
    pub fn is_dark(&self) -> bool {
        self.brightness() < 128.0
    }

    /// Determine whether this color is light.
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Get this color's relative luminance `0..=1` as defined by WCAG 2.
    pub fn luminance(&self) -> Float {
        to_luminance(&self.rounded_rgb())
    }

    #[inline]
    pub(crate) fn rgb(&self) -> [Float; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    fn rounded_rgb(&self) -> [Float; 3] {
        [self.r.round(), self.g.round(), self.b.round()]
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get this color's rounded RGB channels and alpha.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = self.rounded_rgb();
        Rgb { r, g, b, a: self.a }
    }

    /// Get this color's RGB channels as percentages and alpha.
    pub fn to_percentage_rgb(&self) -> PercentageRgb {
        let [r, g, b] = self.percentages();
        PercentageRgb {
            r: format!("{}%", r),
            g: format!("{}%", g),
            b: format!("{}%", b),
            a: self.a,
        }
    }

    fn percentages(&self) -> [i64; 3] {
        self.rgb()
            .map(|c| (bound01_value(c, false, 255.0) * 100.0).to_display_int())
    }

    /// Get this color's hue in degrees, saturation, lightness, and alpha.
    pub fn to_hsl(&self) -> Hsl {
        let [h, s, l] = rgb_to_hsl(&self.rgb());
        Hsl {
            h: h * 360.0,
            s,
            l,
            a: self.a,
        }
    }

    /// Get this color's hue in degrees, saturation, value, and alpha.
    pub fn to_hsv(&self) -> Hsv {
        let [h, s, v] = rgb_to_hsv(&self.rgb());
        Hsv {
            h: h * 360.0,
            s,
            v,
            a: self.a,
        }
    }

    /// Format this color as `rgb()` or, if not opaque, `rgba()`.
    ///
    /// ```
    /// # use tincture::Color;
    /// assert_eq!(Color::new("#f00").to_rgb_string(), "rgb(255, 0, 0)");
    /// assert_eq!(Color::new("#ff000080").to_rgb_string(), "rgba(255, 0, 0, 0.5)");
    /// ```
    pub fn to_rgb_string(&self) -> String {
        let [r, g, b] = self.rgb().map(FloatExt::to_display_int);
        if self.a == 1.0 {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                r,
                g,
                b,
                format_alpha(self.rounded_alpha)
            )
        }
    }

    /// Format this color as `rgb()` or `rgba()` with percentages.
    pub fn to_percentage_rgb_string(&self) -> String {
        let [r, g, b] = self.percentages();
        if self.a == 1.0 {
            format!("rgb({}%, {}%, {}%)", r, g, b)
        } else {
            format!(
                "rgba({}%, {}%, {}%, {})",
                r,
                g,
                b,
                format_alpha(self.rounded_alpha)
            )
        }
    }

    /// Format this color as `hsl()` or, if not opaque, `hsla()`.
    pub fn to_hsl_string(&self) -> String {
        let [h, s, l] = rgb_to_hsl(&self.rgb());
        let [h, s, l] = [h * 360.0, s * 100.0, l * 100.0].map(FloatExt::to_display_int);
        if self.a == 1.0 {
            format!("hsl({}, {}%, {}%)", h, s, l)
        } else {
            format!(
                "hsla({}, {}%, {}%, {})",
                h,
                s,
                l,
                format_alpha(self.rounded_alpha)
            )
        }
    }

    /// Format this color as `hsv()` or, if not opaque, `hsva()`.
    pub fn to_hsv_string(&self) -> String {
        let [h, s, v] = rgb_to_hsv(&self.rgb());
        let [h, s, v] = [h * 360.0, s * 100.0, v * 100.0].map(FloatExt::to_display_int);
        if self.a == 1.0 {
            format!("hsv({}, {}%, {}%)", h, s, v)
        } else {
            format!(
                "hsva({}, {}%, {}%, {})",
                h,
                s,
                v,
                format_alpha(self.rounded_alpha)
            )
        }
    }

    /// Format this color as six, or maybe three, hexadecimal digits without
    /// leading `#`.
    pub fn to_hex(&self, allow_short: bool) -> String {
        rgb_to_hex(&self.rgb(), allow_short)
    }

    /// Format this color as `#` followed by six, or maybe three, hexadecimal
    /// digits.
    ///
    /// ```
    /// # use tincture::Color;
    /// let color = Color::new("rgb(255, 255, 0)");
    /// assert_eq!(color.to_hex_string(false), "#ffff00");
    /// assert_eq!(color.to_hex_string(true), "#ff0");
    /// ```
    pub fn to_hex_string(&self, allow_short: bool) -> String {
        format!("#{}", self.to_hex(allow_short))
    }

    /// Format this color as eight, or maybe four, hexadecimal digits without
    /// leading `#`.
    pub fn to_hex8(&self, allow_short: bool) -> String {
        rgba_to_hex(&self.rgb(), self.a, allow_short)
    }

    /// Format this color as `#` followed by eight, or maybe four, hexadecimal
    /// digits.
    pub fn to_hex8_string(&self, allow_short: bool) -> String {
        format!("#{}", self.to_hex8(allow_short))
    }

    /// Get this color's name.
    ///
    /// Fully transparent colors are named `transparent`. Otherwise, only
    /// opaque colors in the name table have a name.
    ///
    /// ```
    /// # use tincture::Color;
    /// assert_eq!(Color::new("#f00").to_name(), Some("red"));
    /// assert_eq!(Color::new("#00000000").to_name(), Some("transparent"));
    /// assert_eq!(Color::new("#f008").to_name(), None);
    /// assert_eq!(Color::new("#123456").to_name(), None);
    /// ```
    pub fn to_name(&self) -> Option<&'static str> {
        if self.a == 0.0 {
            Some("transparent")
        } else if self.a < 1.0 {
            None
        } else {
            lookup_hex(&rgb_to_hex(&self.rgb(), true))
        }
    }

    /// Format this color as a legacy Internet Explorer gradient filter.
    ///
    /// Colors are written as `#AARRGGBB`. Without a second color, the gradient
    /// starts and ends with this color.
    ///
    /// ```
    /// # use tincture::Color;
    /// assert_eq!(
    ///     Color::new("red").to_filter(None),
    ///     "progid:DXImageTransform.Microsoft.gradient(startColorstr=#ffff0000,endColorstr=#ffff0000)"
    /// );
    /// ```
    pub fn to_filter(&self, second: Option<&Color>) -> String {
        let start = rgba_to_argb_hex(&self.rgb(), self.a);
        let end = second.map_or_else(
            || start.clone(),
            |color| rgba_to_argb_hex(&color.rgb(), color.a),
        );
        let gradient_type = if self.gradient_type {
            "GradientType = 1, "
        } else {
            ""
        };

        format!(
            "progid:DXImageTransform.Microsoft.gradient({}startColorstr=#{},endColorstr=#{})",
            gradient_type, start, end
        )
    }

    /// Format this color in the given format or, if missing, its default
    /// format.
    ///
    /// When falling back on the default format, colors that are not opaque
    /// and have a hexadecimal or name format are formatted as `rgba()`
    /// instead, since those formats cannot express alpha. The exception is a
    /// fully transparent color with name format, which is `transparent`. If
    /// the color has no name, the name format falls back on `#rrggbb`.
    ///
    /// ```
    /// # use tincture::{Color, ColorFormat};
    /// let color = Color::new("#ff000080");
    /// assert_eq!(color.format(), ColorFormat::Hex8);
    /// assert_eq!(color.to_format_string(None), "rgba(255, 0, 0, 0.5)");
    /// assert_eq!(color.to_format_string(Some(ColorFormat::Hex8)), "#ff000080");
    /// assert_eq!(color.to_format_string(Some(ColorFormat::Hsl)), "hsla(0, 100%, 50%, 0.5)");
    /// ```
    pub fn to_format_string(&self, format: Option<ColorFormat>) -> String {
        use ColorFormat::*;

        let explicit = format.is_some();
        let format = format.unwrap_or(self.format);
        let has_alpha = 0.0 <= self.a && self.a < 1.0;

        if !explicit && has_alpha && matches!(format, Hex | Hex3 | Hex4 | Hex6 | Hex8 | Name) {
            if format == Name && self.a == 0.0 {
                return "transparent".to_owned();
            }
            return self.to_rgb_string();
        }

        match format {
            Rgb => self.to_rgb_string(),
            Prgb => self.to_percentage_rgb_string(),
            Hex | Hex6 => self.to_hex_string(false),
            Hex3 => self.to_hex_string(true),
            Hex4 => self.to_hex8_string(true),
            Hex8 => self.to_hex8_string(false),
            Name => self
                .to_name()
                .map_or_else(|| self.to_hex_string(false), str::to_owned),
            Hsl => self.to_hsl_string(),
            Hsv => self.to_hsv_string(),
        }
    }
}

impl Clone for Color {
    /// Clone this color by formatting it in its default format and parsing
    /// the result again.
    fn clone(&self) -> Self {
        Self::new(self.to_string())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgb_string() == other.to_rgb_string()
    }
}

impl core::fmt::Display for Color {
    /// Format this color in its default format.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_format_string(None))
    }
}

impl core::str::FromStr for Color {
    type Err = ColorFormatError;

    /// Parse a color string.
    ///
    /// Unlike [`Color::new`], this method fails for strings that cannot be
    /// parsed. Structurally valid strings with out-of-range components still
    /// succeed with clamped components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record = parse(s)?;
        let resolved = resolve_record(&record);
        Ok(Self::from_resolved(
            ColorInput::Text(s.to_owned()),
            &resolved,
            &ColorOptions::default(),
        ))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(feature = "pyffi")]
#[pymethods]
impl Color {
    /// Create a new color from the given string and format. <i
    /// class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (color=None, format=None))]
    pub fn py_new(color: Option<String>, format: Option<ColorFormat>) -> Self {
        let options = ColorOptions {
            format,
            ..Default::default()
        };
        Self::with_options(color.map_or(ColorInput::Empty, ColorInput::Text), &options)
    }

    /// Determine whether this color is valid. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "is_valid")]
    pub fn py_is_valid(&self) -> bool {
        self.is_valid()
    }

    /// Determine whether this color is dark. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "is_dark")]
    pub fn py_is_dark(&self) -> bool {
        self.is_dark()
    }

    /// Get this color's alpha. <i class=python-only>Python only!</i>
    #[pyo3(name = "alpha")]
    pub fn py_alpha(&self) -> Float {
        self.alpha()
    }

    /// Set this color's alpha. <i class=python-only>Python only!</i>
    #[pyo3(name = "set_alpha")]
    pub fn py_set_alpha(&mut self, alpha: Float) {
        self.set_alpha(alpha);
    }

    /// Get this color's luminance. <i class=python-only>Python only!</i>
    #[pyo3(name = "luminance")]
    pub fn py_luminance(&self) -> Float {
        self.luminance()
    }

    /// Format this color in the given or default format. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "to_string", signature = (format=None))]
    pub fn py_to_string(&self, format: Option<ColorFormat>) -> String {
        self.to_format_string(format)
    }

    /// Format this color as hexadecimal. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hex_string", signature = (allow_short=false))]
    pub fn py_to_hex_string(&self, allow_short: bool) -> String {
        self.to_hex_string(allow_short)
    }

    /// Get this color's name. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_name")]
    pub fn py_to_name(&self) -> Option<&'static str> {
        self.to_name()
    }

    /// Mix this color with another. <i class=python-only>Python only!</i>
    #[must_use = "method returns a new color and does not mutate original value"]
    #[pyo3(name = "mix", signature = (other, amount=None))]
    pub fn py_mix(&self, other: &Color, amount: Option<Float>) -> Self {
        Self::mix(self, other, amount)
    }
}

// ====================================================================================================================
