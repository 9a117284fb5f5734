use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::names::lookup_name;
use super::unit::Unit;
use crate::error::ColorFormatError;
use crate::object::{ColorFormat, ColorRecord};
use crate::Float;

const CSS_INTEGER: &str = r"[-\+]?[0-9]+%?";
const CSS_NUMBER: &str = r"[-\+]?[0-9]*\.[0-9]+%?";

/// The compiled grammar for color strings.
///
/// The functional notations are permissive: Components may be separated by
/// commas or whitespace, the opening parenthesis may be replaced by
/// whitespace, and the closing parenthesis is optional. They also are
/// unanchored, so trailing text is ignored. Hexadecimal notations must match
/// the entire string.
struct Matchers {
    unit: Regex,
    rgb: Regex,
    rgba: Regex,
    hsl: Regex,
    hsla: Regex,
    hsv: Regex,
    hsva: Regex,
    hex3: Regex,
    hex6: Regex,
    hex4: Regex,
    hex8: Regex,
}

impl Matchers {
    fn new() -> Self {
        let unit = format!("(?:{})|(?:{})", CSS_NUMBER, CSS_INTEGER);
        let match3 = format!(
            r"[\s|\(]+({0})[,|\s]+({0})[,|\s]+({0})\s*\)?",
            unit
        );
        let match4 = format!(
            r"[\s|\(]+({0})[,|\s]+({0})[,|\s]+({0})[,|\s]+({0})\s*\)?",
            unit
        );

        let compile = |pattern: &str| Regex::new(pattern).expect("valid regex");
        let hex = |digits: usize| {
            let groups = if digits <= 4 {
                "([0-9a-fA-F]{1})".repeat(digits)
            } else {
                "([0-9a-fA-F]{2})".repeat(digits / 2)
            };
            compile(&format!("^#?{}$", groups))
        };

        Self {
            unit: compile(&unit),
            rgb: compile(&format!("rgb{}", match3)),
            rgba: compile(&format!("rgba{}", match4)),
            hsl: compile(&format!("hsl{}", match3)),
            hsla: compile(&format!("hsla{}", match4)),
            hsv: compile(&format!("hsv{}", match3)),
            hsva: compile(&format!("hsva{}", match4)),
            hex3: hex(3),
            hex6: hex(6),
            hex4: hex(4),
            hex8: hex(8),
        }
    }
}

static MATCHERS: LazyLock<Matchers> = LazyLock::new(Matchers::new);

/// Determine whether the text contains a CSS number or percentage.
pub(crate) fn is_css_unit(text: &str) -> bool {
    MATCHERS.unit.is_match(text)
}

// --------------------------------------------------------------------------------------------------------------------

fn text_unit(captures: &Captures, index: usize) -> Option<Unit> {
    captures.get(index).map(|m| Unit::Text(m.as_str().to_owned()))
}

fn hex_value(captures: &Captures, index: usize, doubled: bool) -> Float {
    let digits = captures.get(index).map_or("", |m| m.as_str());
    let value = if doubled {
        u8::from_str_radix(&digits.repeat(2), 16)
    } else {
        u8::from_str_radix(digits, 16)
    };
    Float::from(value.unwrap_or_default())
}

fn hex_record(captures: &Captures, doubled: bool, alpha: bool, format: ColorFormat) -> ColorRecord {
    let a = if alpha {
        Some(Unit::Number(hex_value(captures, 4, doubled) / 255.0))
    } else {
        None
    };

    ColorRecord {
        r: Some(Unit::Number(hex_value(captures, 1, doubled))),
        g: Some(Unit::Number(hex_value(captures, 2, doubled))),
        b: Some(Unit::Number(hex_value(captures, 3, doubled))),
        a,
        format: Some(format),
        ..Default::default()
    }
}

/// Parse the given string into a color record.
///
/// The string is trimmed and lower-cased first. Color names resolve through
/// the name table, and `transparent` is transparent black. Then the functional
/// notations `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, and `hsva()` are
/// tried in that order, followed by eight, six, four, and three hexadecimal
/// digits. Records for hexadecimal notations have format `name` if the string
/// was a color name and otherwise `hex` or `hex8`. Records for functional
/// notations carry no format.
pub(crate) fn parse(s: &str) -> Result<ColorRecord, ColorFormatError> {
    let lowered = s.trim().to_lowercase();
    if lowered.is_empty() {
        return Err(ColorFormatError::Empty);
    }

    let (color, named) =
        lookup_name(&lowered).map_or((lowered.as_str(), false), |hex| (hex, true));

    if color == "transparent" {
        return Ok(ColorRecord {
            r: Some(Unit::Number(0.0)),
            g: Some(Unit::Number(0.0)),
            b: Some(Unit::Number(0.0)),
            a: Some(Unit::Number(0.0)),
            format: Some(ColorFormat::Name),
            ..Default::default()
        });
    }

    let matchers = &*MATCHERS;

    if let Some(c) = matchers.rgb.captures(color) {
        return Ok(ColorRecord {
            r: text_unit(&c, 1),
            g: text_unit(&c, 2),
            b: text_unit(&c, 3),
            ..Default::default()
        });
    }
    if let Some(c) = matchers.rgba.captures(color) {
        return Ok(ColorRecord {
            r: text_unit(&c, 1),
            g: text_unit(&c, 2),
            b: text_unit(&c, 3),
            a: text_unit(&c, 4),
            ..Default::default()
        });
    }
    if let Some(c) = matchers.hsl.captures(color) {
        return Ok(ColorRecord {
            h: text_unit(&c, 1),
            s: text_unit(&c, 2),
            l: text_unit(&c, 3),
            ..Default::default()
        });
    }
    if let Some(c) = matchers.hsla.captures(color) {
        return Ok(ColorRecord {
            h: text_unit(&c, 1),
            s: text_unit(&c, 2),
            l: text_unit(&c, 3),
            a: text_unit(&c, 4),
            ..Default::default()
        });
    }
    if let Some(c) = matchers.hsv.captures(color) {
        return Ok(ColorRecord {
            h: text_unit(&c, 1),
            s: text_unit(&c, 2),
            v: text_unit(&c, 3),
            ..Default::default()
        });
    }
    if let Some(c) = matchers.hsva.captures(color) {
        return Ok(ColorRecord {
            h: text_unit(&c, 1),
            s: text_unit(&c, 2),
            v: text_unit(&c, 3),
            a: text_unit(&c, 4),
            ..Default::default()
        });
    }

    let (hex, hex8) = if named {
        (ColorFormat::Name, ColorFormat::Name)
    } else {
        (ColorFormat::Hex, ColorFormat::Hex8)
    };

    if let Some(c) = matchers.hex8.captures(color) {
        return Ok(hex_record(&c, false, true, hex8));
    }
    if let Some(c) = matchers.hex6.captures(color) {
        return Ok(hex_record(&c, false, false, hex));
    }
    if let Some(c) = matchers.hex4.captures(color) {
        return Ok(hex_record(&c, true, true, hex8));
    }
    if let Some(c) = matchers.hex3.captures(color) {
        return Ok(hex_record(&c, true, false, hex));
    }

    Err(ColorFormatError::UnknownFormat)
}

#[cfg(test)]
mod test {
    use super::{is_css_unit, parse};
    use crate::core::Unit;
    use crate::error::ColorFormatError;
    use crate::object::{ColorFormat, ColorRecord};

    #[test]
    fn test_parse_named() -> Result<(), ColorFormatError> {
        let red = parse("  RED ")?;
        assert_eq!(red.r, Some(Unit::Number(255.0)));
        assert_eq!(red.g, Some(Unit::Number(0.0)));
        assert_eq!(red.b, Some(Unit::Number(0.0)));
        assert_eq!(red.a, None);
        assert_eq!(red.format, Some(ColorFormat::Name));

        let purple = parse("rebeccapurple")?;
        assert_eq!(purple.r, Some(Unit::Number(102.0)));
        assert_eq!(purple.format, Some(ColorFormat::Name));

        let transparent = parse("transparent")?;
        assert_eq!(transparent.a, Some(Unit::Number(0.0)));
        assert_eq!(transparent.format, Some(ColorFormat::Name));

        Ok(())
    }

    #[test]
    fn test_parse_functional() -> Result<(), ColorFormatError> {
        assert_eq!(
            parse("rgb(255, 0, 0)")?,
            ColorRecord::rgb("255", "0", "0")
        );
        assert_eq!(parse("rgb 255 0 0")?, ColorRecord::rgb("255", "0", "0"));
        assert_eq!(
            parse("rgba(10%, 20%, 30%, .5)")?,
            ColorRecord::rgba("10%", "20%", "30%", ".5")
        );
        assert_eq!(
            parse("hsl(120, 100%, 25%)")?,
            ColorRecord::hsl("120", "100%", "25%")
        );
        assert_eq!(
            parse("hsla(120 1.0 0.5 0.25")?,
            ColorRecord::hsla("120", "1.0", "0.5", "0.25")
        );
        assert_eq!(
            parse("hsv(0, 100%, 100%)")?,
            ColorRecord::hsv("0", "100%", "100%")
        );
        assert_eq!(
            parse("HSVA(0 100% 100% 1)")?,
            ColorRecord::hsva("0", "100%", "100%", "1")
        );

        // Unanchored, so trailing components are ignored
        assert_eq!(parse("rgb(1, 2, 3, 4)")?, ColorRecord::rgb("1", "2", "3"));
        Ok(())
    }

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        let short = parse("#f0a")?;
        assert_eq!(short.r, Some(Unit::Number(255.0)));
        assert_eq!(short.g, Some(Unit::Number(0.0)));
        assert_eq!(short.b, Some(Unit::Number(170.0)));
        assert_eq!(short.format, Some(ColorFormat::Hex));

        let long = parse("0A0B0C")?;
        assert_eq!(long.r, Some(Unit::Number(10.0)));
        assert_eq!(long.g, Some(Unit::Number(11.0)));
        assert_eq!(long.b, Some(Unit::Number(12.0)));
        assert_eq!(long.format, Some(ColorFormat::Hex));

        let short_alpha = parse("#f008")?;
        assert_eq!(short_alpha.a, Some(Unit::Number(136.0 / 255.0)));
        assert_eq!(short_alpha.format, Some(ColorFormat::Hex8));

        let long_alpha = parse("#ff000080")?;
        assert_eq!(long_alpha.a, Some(Unit::Number(128.0 / 255.0)));
        assert_eq!(long_alpha.format, Some(ColorFormat::Hex8));

        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(""), Err(ColorFormatError::Empty));
        assert_eq!(parse("   "), Err(ColorFormatError::Empty));
        assert_eq!(parse("not a color"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse("#12"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse("#12345"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse("#ggg"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse("rgb()"), Err(ColorFormatError::UnknownFormat));
    }

    #[test]
    fn test_css_unit() {
        assert!(is_css_unit("12"));
        assert!(is_css_unit("-1.5%"));
        assert!(is_css_unit("px12"));
        assert!(!is_css_unit("."));
        assert!(!is_css_unit("abc"));
    }
}
