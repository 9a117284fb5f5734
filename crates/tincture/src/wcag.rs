//! Readability of text and background colors according to WCAG 2.
//!
//! The contrast ratio between two colors is computed from their relative
//! luminance and ranges from 1, for identical colors, to 21, for black and
//! white. The [Web Content Accessibility
//! Guidelines](https://www.w3.org/TR/WCAG21/#contrast-minimum) require a ratio
//! of at least 4.5 for regular text at level AA and at least 7 at level AAA.
//! Large text gets by with 3 and 4.5, respectively.
//!
//! ```
//! # use tincture::{wcag, Color};
//! let white = Color::new("#fff");
//! let black = Color::new("#000");
//! assert_eq!(wcag::readability(&white, &black), 21.0);
//! assert!(wcag::is_readable(&white, &black, &Default::default()));
//! ```

use std::sync::LazyLock;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::core::to_contrast_ratio;
use crate::{Color, Float};

/// A WCAG 2 conformance level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Level {
    #[default]
    AA,
    AAA,
}

impl Level {
    /// Parse the level, ignoring case. Anything but `AAA` is `AA`.
    pub fn parse(level: &str) -> Self {
        if level.eq_ignore_ascii_case("AAA") {
            Self::AAA
        } else {
            Self::AA
        }
    }
}

/// The size of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Size {
    #[default]
    Small,
    Large,
}

impl Size {
    /// Parse the size, ignoring case. Anything but `large` is small.
    pub fn parse(size: &str) -> Self {
        if size.eq_ignore_ascii_case("large") {
            Self::Large
        } else {
            Self::Small
        }
    }
}

/// Options for [`is_readable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wcag2Options {
    pub level: Level,
    pub size: Size,
}

impl Wcag2Options {
    /// Create new options from optional strings.
    ///
    /// Missing or unrecognized values fall back on the defaults, level AA
    /// and small text.
    ///
    /// ```
    /// # use tincture::wcag::{Level, Size, Wcag2Options};
    /// let options = Wcag2Options::parse(Some("aaa"), Some("medium"));
    /// assert_eq!(options.level, Level::AAA);
    /// assert_eq!(options.size, Size::Small);
    /// ```
    pub fn parse(level: Option<&str>, size: Option<&str>) -> Self {
        Self {
            level: level.map(Level::parse).unwrap_or_default(),
            size: size.map(Size::parse).unwrap_or_default(),
        }
    }

    /// Get the minimum contrast ratio for these options.
    pub const fn threshold(&self) -> Float {
        match (self.level, self.size) {
            (Level::AA, Size::Small) | (Level::AAA, Size::Large) => 4.5,
            (Level::AA, Size::Large) => 3.0,
            (Level::AAA, Size::Small) => 7.0,
        }
    }
}

/// Options for [`most_readable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MostReadableOptions {
    pub wcag2: Wcag2Options,
    /// Fall back on white or black if no candidate is readable.
    pub include_fallback_colors: bool,
}

static FALLBACK_COLORS: LazyLock<[Color; 2]> =
    LazyLock::new(|| [Color::new("#fff"), Color::new("#000")]);

// --------------------------------------------------------------------------------------------------------------------

/// Compute the contrast ratio between the two colors.
///
/// The ratio is symmetric and ignores alpha.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn readability(color1: &Color, color2: &Color) -> Float {
    to_contrast_ratio(color1.luminance(), color2.luminance())
}

/// Determine whether the two colors are readable.
///
/// ```
/// # use tincture::{wcag, Color};
/// # use tincture::wcag::Wcag2Options;
/// let grey = Color::new("#767676");
/// let white = Color::new("#fff");
/// assert!(wcag::is_readable(&grey, &white, &Wcag2Options::default()));
/// assert!(!wcag::is_readable(&grey, &white, &Wcag2Options::parse(Some("AAA"), None)));
/// ```
pub fn is_readable(color1: &Color, color2: &Color, options: &Wcag2Options) -> bool {
    readability(color1, color2) >= options.threshold()
}

/// Find the candidate with the highest contrast to the base color.
///
/// On ties, the earlier candidate wins. If the best candidate is not readable
/// according to the options and fallback colors are included, this function
/// instead returns white or black, whichever has more contrast. It returns
/// `None` if there are no candidates and fallback colors are not included.
///
/// ```
/// # use tincture::{wcag, Color};
/// # use tincture::wcag::MostReadableOptions;
/// let base = Color::new("#123");
/// let candidates = [Color::new("#124"), Color::new("#125")];
///
/// let best = wcag::most_readable(&base, &candidates, &Default::default());
/// assert_eq!(best.map(|c| c.to_hex_string(false)), Some("#112255".to_owned()));
///
/// let options = MostReadableOptions {
///     include_fallback_colors: true,
///     ..Default::default()
/// };
/// let best = wcag::most_readable(&base, &candidates, &options);
/// assert_eq!(best.map(|c| c.to_hex_string(false)), Some("#ffffff".to_owned()));
/// ```
pub fn most_readable<'c>(
    base: &Color,
    candidates: &'c [Color],
    options: &MostReadableOptions,
) -> Option<&'c Color> {
    let best = find_best(base, candidates);

    let is_acceptable = best.is_some_and(|color| is_readable(base, color, &options.wcag2));
    if is_acceptable || !options.include_fallback_colors {
        return best;
    }

    #[cfg(feature = "tracing")]
    trace!(base = %base, "falling back on white or black");

    find_best(base, &*FALLBACK_COLORS)
}

fn find_best<'c>(base: &Color, candidates: &'c [Color]) -> Option<&'c Color> {
    let mut best = None;
    let mut best_score = 0.0;

    for candidate in candidates {
        let score = readability(base, candidate);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best
}

/// Determine whether the two colors are readable. <i class=python-only>Python
/// only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "is_readable", signature = (color1, color2, level=None, size=None))]
pub fn py_is_readable(
    color1: &Color,
    color2: &Color,
    level: Option<&str>,
    size: Option<&str>,
) -> bool {
    is_readable(color1, color2, &Wcag2Options::parse(level, size))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_readability() {
        let white = Color::new("white");
        let black = Color::new("black");
        assert_eq!(readability(&white, &black), 21.0);
        assert_eq!(readability(&black, &white), 21.0);
        assert_eq!(readability(&white, &white), 1.0);

        let translucent = Color::new("rgba(0, 0, 0, 0.1)");
        assert_eq!(readability(&white, &translucent), 21.0);

        assert_close_enough!(
            readability(&Color::new("red"), &white),
            1.05 / (0.2126 + 0.05)
        );
    }

    #[test]
    fn test_options() {
        assert_eq!(Wcag2Options::parse(None, None), Wcag2Options::default());
        assert_eq!(
            Wcag2Options::parse(Some("A"), Some("LARGE")),
            Wcag2Options {
                level: Level::AA,
                size: Size::Large
            }
        );

        let thresholds: Vec<_> = [
            ("AA", "small"),
            ("AA", "large"),
            ("AAA", "small"),
            ("AAA", "large"),
        ]
        .into_iter()
        .map(|(level, size)| Wcag2Options::parse(Some(level), Some(size)).threshold())
        .collect();
        assert_eq!(thresholds, [4.5, 3.0, 7.0, 4.5]);
    }

    #[test]
    fn test_is_readable() {
        let options = Wcag2Options::default();
        let white = Color::new("#fff");
        assert!(is_readable(&Color::new("#000"), &white, &options));
        assert!(!is_readable(&Color::new("#ff8080"), &white, &options));

        // Contrast against white is about 3.2
        let orange = Color::new("#e07000");
        assert!(!is_readable(&orange, &white, &options));
        let large = Wcag2Options {
            size: Size::Large,
            ..options
        };
        assert!(is_readable(&orange, &white, &large));
    }

    #[test]
    fn test_most_readable() {
        let base = Color::new("#000");
        let candidates = [Color::new("#f00"), Color::new("#0f0"), Color::new("#00f")];
        let best = most_readable(&base, &candidates, &Default::default());
        assert_eq!(best.map(|c| c.to_hex_string(false)), Some("#00ff00".to_owned()));

        // Ties go to the first candidate
        let candidates = [Color::new("#fff"), Color::new("white")];
        let best = most_readable(&base, &candidates, &Default::default());
        assert!(std::ptr::eq(best.unwrap(), &candidates[0]));

        assert!(most_readable(&base, &[], &Default::default()).is_none());

        let options = MostReadableOptions {
            include_fallback_colors: true,
            ..Default::default()
        };
        let best = most_readable(&base, &[], &options);
        assert_eq!(best.map(|c| c.to_hex_string(false)), Some("#ffffff".to_owned()));

        let dark = [Color::new("#111"), Color::new("#222")];
        let best = most_readable(&base, &dark, &options);
        assert_eq!(best.map(|c| c.to_hex_string(false)), Some("#ffffff".to_owned()));

        let best = most_readable(&Color::new("#fafafa"), &dark, &options);
        assert_eq!(best.map(|c| c.to_hex_string(false)), Some("#111111".to_owned()));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Color> {
        (any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(r, g, b)| Color::new(format!("rgb({}, {}, {})", r, g, b)))
    }

    proptest! {
        #[test]
        fn readability_is_symmetric(c1 in arb_color(), c2 in arb_color()) {
            prop_assert_eq!(readability(&c1, &c2), readability(&c2, &c1));
        }

        #[test]
        fn readability_is_bounded(c1 in arb_color(), c2 in arb_color()) {
            let ratio = readability(&c1, &c2);
            prop_assert!((1.0..=21.0).contains(&ratio));
        }

        #[test]
        fn default_readable_iff_ratio_at_least_4_5(c1 in arb_color(), c2 in arb_color()) {
            prop_assert_eq!(
                is_readable(&c1, &c2, &Wcag2Options::default()),
                readability(&c1, &c2) >= 4.5
            );
        }

        #[test]
        fn fallback_is_always_readable(base in arb_color(), other in arb_color()) {
            let options = MostReadableOptions {
                include_fallback_colors: true,
                ..Default::default()
            };
            let candidates = [other];
            let best = most_readable(&base, &candidates, &options);
            prop_assert!(best.is_some());
        }
    }
}
