//! Utility module with huebox's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// The enumeration only has unit variants, since PyO3 only supports unit
/// variants without associated state. The attendant loss of information is
/// rather limited, because color strings are short.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that is neither a color keyword nor starts with a known
    /// prefix such as `#`, `rgb(`, or `hsla(`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `rgb(1,2,3)x` has trailing garbage.
    UnexpectedCharacters,

    /// A functional color format without the opening parenthesis. For example,
    /// `rgb 1,2,3)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis. For example,
    /// `hsl(1,2%,3%` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is missing a coordinate. For example, `rgb(0,0)`
    /// is missing the third coordinate, whereas `rgb(0,,0)` is missing the
    /// second coordinate only.
    MissingCoordinate,

    /// A color format with too many coordinates. For example, `rgb(1,2,3,4)`
    /// has one coordinate too many.
    TooManyCoordinates,

    /// A hashed color format with a malformed hexadecimal digit. For example,
    /// `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format with a malformed integer coordinate. For example,
    /// `rgb(1.5,2,3)` has a fractional red coordinate.
    MalformedInteger,

    /// A color format with a malformed decimal coordinate. For example,
    /// `hsl(1..2,50%,50%)` has a malformed hue.
    MalformedFloat,

    /// A color format with a saturation, lightness, or value coordinate that
    /// lacks its percent sign. For example, `hsl(0,50,50%)`.
    MissingPercent,

    /// A color format with a coordinate outside its legal range, e.g., a
    /// channel above 255, a hue above 360, a percentage above 100, or an
    /// alpha above 1.
    OutOfRange,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str(
                "color format should be a color name or start with `#`, `rgb(`, `rgba(`, \
                `hsl(`, `hsla(`, or `hsv(`",
            ),
            UnexpectedCharacters => {
                f.write_str("color format should contain only expected characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            MissingCoordinate => {
                f.write_str("color format should have more coordinates but is missing one")
            }
            TooManyCoordinates => f.write_str("color format has more coordinates than it should"),
            MalformedHex => {
                f.write_str("color format digits should be hexadecimal but are not")
            }
            MalformedInteger => {
                f.write_str("color format channels should be decimal integers but are not")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be decimal numbers but are not")
            }
            MissingPercent => {
                f.write_str("color format percentages should end with `%` but do not")
            }
            OutOfRange => {
                f.write_str("color format coordinates should be within range but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An unknown color format tag.
///
/// Conversion with [`Color::to`](crate::Color::to) takes a
/// [`ColorFormat`](crate::ColorFormat) and hence cannot fail. This error arises
/// where a format tag enters as text instead, i.e., when parsing a format tag
/// other than `HEX`, `HEXa`, `RGB`, `RGBa`, `HSL`, `HSLa`, or `HSV`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedFormatError {
    pub name: String,
}

impl UnsupportedFormatError {
    /// Create a new unsupported format error.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for UnsupportedFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "`{}` should be one of HEX, HEXa, RGB, RGBa, HSL, HSLa, HSV but is not",
            self.name
        ))
    }
}

impl std::error::Error for UnsupportedFormatError {}

#[cfg(feature = "pyffi")]
impl From<UnsupportedFormatError> for PyErr {
    fn from(value: UnsupportedFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while parsing or editing a gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientError {
    /// A gradient that is not wrapped as `type(...)`, e.g., `linear-gradient`
    /// without parentheses.
    MalformedGradient,

    /// A gradient with fewer than two stops.
    TooFewStops,

    /// A stop whose color does not parse.
    MalformedStop(ColorFormatError),

    /// A stop position beyond 100%.
    PositionOutOfRange,
}

impl From<ColorFormatError> for GradientError {
    fn from(value: ColorFormatError) -> Self {
        Self::MalformedStop(value)
    }
}

impl std::fmt::Display for GradientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::MalformedGradient => {
                f.write_str("gradient should be written as `type(stop, stop, ...)` but is not")
            }
            Self::TooFewStops => f.write_str("gradient should have at least two stops"),
            Self::MalformedStop(_) => f.write_str("gradient stop should be a valid color"),
            Self::PositionOutOfRange => {
                f.write_str("gradient stop position should be between 0% and 100%")
            }
        }
    }
}

impl std::error::Error for GradientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::MalformedStop(ref error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<GradientError> for PyErr {
    fn from(value: GradientError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
