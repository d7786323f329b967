#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::UnsupportedFormatError;

/// The enumeration of supported color formats.
///
/// A color format determines how a [`Color`](crate::Color) serializes itself
/// and which coordinates it carries beyond the red, green, and blue channels
/// shared by all formats:
///
/// | Format | Tag    | Canonical form    | Native coordinates         |
/// | ------ | ------ | ----------------- | -------------------------- |
/// | Hex    | `HEX`  | `#rrggbb`         |                            |
/// | Hexa   | `HEXa` | `#rrggbbaa`       | alpha                      |
/// | Rgb    | `RGB`  | `rgb(r,g,b)`      |                            |
/// | Rgba   | `RGBa` | `rgba(r,g,b,a)`   | alpha                      |
/// | Hsl    | `HSL`  | `hsl(h,s%,l%)`    | hue, saturation, lightness |
/// | Hsla   | `HSLa` | `hsla(h,s%,l%,a)` | the same plus alpha        |
/// | Hsv    | `HSV`  | `hsv(h,s%,v%)`    | hue, saturation, value     |
///
/// The enumeration is closed. Consequently, conversion between formats with
/// [`Color::to`](crate::Color::to) is total. Tags only are checked when parsed
/// from strings, which fails with an [`UnsupportedFormatError`] for unknown
/// tags.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "huebox.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Hexa,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorFormat {
    /// Determine whether this color format carries an alpha channel.
    pub const fn has_alpha(&self) -> bool {
        matches!(*self, Self::Hexa | Self::Rgba | Self::Hsla)
    }

    /// Get the format with alpha channel corresponding to this format.
    ///
    /// HSV has no alpha-bearing counterpart and hence maps to RGBA.
    pub const fn with_alpha(&self) -> ColorFormat {
        match *self {
            Self::Hex | Self::Hexa => Self::Hexa,
            Self::Rgb | Self::Rgba | Self::Hsv => Self::Rgba,
            Self::Hsl | Self::Hsla => Self::Hsla,
        }
    }

    /// Get the tag for this color format.
    pub const fn tag(&self) -> &'static str {
        match *self {
            Self::Hex => "HEX",
            Self::Hexa => "HEXa",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBa",
            Self::Hsl => "HSL",
            Self::Hsla => "HSLa",
            Self::Hsv => "HSV",
        }
    }

    /// Parse a color format tag. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<ColorFormat, UnsupportedFormatError> {
        use std::str::FromStr;

        ColorFormat::from_str(s)
    }

    /// Create a human-readable representation for this color format. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorFormat {
    /// All color formats, in the order the factory tries them.
    pub const ALL: [ColorFormat; 7] = [
        Self::Hex,
        Self::Hexa,
        Self::Rgb,
        Self::Rgba,
        Self::Hsl,
        Self::Hsla,
        Self::Hsv,
    ];
}

impl std::str::FromStr for ColorFormat {
    type Err = UnsupportedFormatError;

    /// Parse a color format tag. Tags are matched without regard to ASCII case,
    /// so `HSLa`, `HSLA`, and `hsla` all denote [`ColorFormat::Hsla`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ColorFormat::ALL
            .iter()
            .find(|format| format.tag().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnsupportedFormatError::new(s))
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
