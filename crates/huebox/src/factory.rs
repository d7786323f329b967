#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{lookup, strip_prefix_ignore_case};
use crate::error::ColorFormatError;
use crate::{Color, ColorFormat};

/// The keyword for the fully transparent color.
const TRANSPARENT: &str = "transparent";

/// Parse a color string.
///
/// This function trims the string before trying, in order, color keywords,
/// `#rgb` and `#rrggbb`, `#rgba` and `#rrggbbaa`, `rgb()`, `rgba()`, `hsl()`,
/// `hsla()`, and `hsv()`. The first match determines the resulting color's
/// format. Keywords resolve to [`ColorFormat::Hex`]. Finally, `transparent`
/// also resolves to [`ColorFormat::Hex`], namely opaque black, since that
/// format has no alpha channel. Matching is ASCII case-insensitive throughout.
///
/// If the string matches no format, this function returns the error for the
/// format suggested by the string's leading `#` or function name, falling
/// back on [`ColorFormatError::UnknownFormat`].
///
/// ```
/// # use huebox::{from_string, Color, ColorFormat};
/// # use huebox::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// assert_eq!(from_string("red")?, Color::hex(255, 0, 0));
/// assert_eq!(from_string(" #F00 ")?.to_string(), "#ff0000");
/// assert_eq!(from_string("hsl(0, 100%, 50%)")?.format(), ColorFormat::Hsl);
/// assert_eq!(from_string("rgb(1,2,3,4)"), Err(ColorFormatError::TooManyCoordinates));
/// assert_eq!(from_string("not-a-color"), Err(ColorFormatError::UnknownFormat));
/// # Ok(())
/// # }
/// ```
pub fn from_string(s: &str) -> Result<Color, ColorFormatError> {
    let s = s.trim();

    if let Some(rgb) = lookup(s) {
        tracing::trace!(input = %s, "Resolved color keyword");
        return Ok(Color::Hex(rgb));
    }

    for format in ColorFormat::ALL {
        if let Ok(color) = Color::parse_as(format, s) {
            tracing::trace!(input = %s, format = %format, "Resolved color");
            return Ok(color);
        }
    }

    if s.eq_ignore_ascii_case(TRANSPARENT) {
        tracing::trace!(input = %s, "Resolved transparent as opaque black");
        return Ok(Color::Hex([0, 0, 0]));
    }

    let error = diagnose(s);
    tracing::trace!(input = %s, %error, "Unable to resolve color");
    Err(error)
}

/// Determine whether the string is a valid color, i.e., whether
/// [`from_string`] succeeds on it.
///
/// ```
/// # use huebox::is_valid_color;
/// assert!(is_valid_color("hsv(120, 50%, 50%)"));
/// assert!(is_valid_color("Transparent"));
/// assert!(!is_valid_color("rgb(300, 0, 0)"));
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn is_valid_color(s: &str) -> bool {
    from_string(s).is_ok()
}

/// Parse the color string and serialize it in the given format. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn convert_color(s: &str, format: ColorFormat) -> PyResult<String> {
    Ok(from_string(s)?.to(format).to_string())
}

/// Parse the color string and serialize it in canonical form for its format.
/// <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn normalize_color(s: &str) -> PyResult<String> {
    Ok(from_string(s)?.to_string())
}

/// Determine the error for a string that matches no color format.
///
/// The function names are ordered so that no name is a prefix of a later one.
fn diagnose(s: &str) -> ColorFormatError {
    let format = if s.starts_with('#') {
        match s.len() {
            5 | 9 => Some(ColorFormat::Hexa),
            _ => Some(ColorFormat::Hex),
        }
    } else {
        [
            ("rgba", ColorFormat::Rgba),
            ("rgb", ColorFormat::Rgb),
            ("hsla", ColorFormat::Hsla),
            ("hsl", ColorFormat::Hsl),
            ("hsv", ColorFormat::Hsv),
        ]
        .into_iter()
        .find(|&(name, _)| strip_prefix_ignore_case(s, name).is_some())
        .map(|(_, format)| format)
    };

    format
        .and_then(|format| Color::parse_as(format, s).err())
        .unwrap_or(ColorFormatError::UnknownFormat)
}

impl std::str::FromStr for Color {
    type Err = ColorFormatError;

    /// Parse a color string with [`from_string`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_string(s)
    }
}

// ====================================================================================================================
