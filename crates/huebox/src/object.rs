use crate::core::{
    hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, scan_hex, scan_hexa,
    scan_hsl, scan_hsla, scan_hsv, scan_rgb, scan_rgba,
};
use crate::error::ColorFormatError;
use crate::{ColorFormat, Float};

/// Clamp the coordinate to `0..=max`.
#[inline]
fn clamp(value: Float, max: Float) -> Float {
    value.clamp(0.0, max)
}

/// Format a floating point coordinate without trailing zeros.
///
/// Rust's `Display` for floating point numbers already omits a zero fraction
/// but happily prints negative zero. That never is a meaningful coordinate.
fn write_coordinate(value: Float, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let value = if value == 0.0 { 0.0 } else { value };
    f.write_fmt(format_args!("{}", value))
}

// ====================================================================================================================
// Hsl and Hsv
// ====================================================================================================================

/// The coordinates of an HSL color.
///
/// An HSL color has hue `0..=360` as well as saturation and lightness
/// `0..=100`. It also caches the equivalent 24-bit RGB triple, which is
/// recomputed whenever a coordinate changes.
///
/// ```
/// # use huebox::{Hsl, HslCoordinate};
/// let red = Hsl::new(0.0, 100.0, 50.0);
/// assert_eq!(red.rgb(), [255, 0, 0]);
///
/// let green = red.with_hue(120.0);
/// assert_eq!(green.rgb(), [0, 255, 0]);
/// assert_eq!(green.update(HslCoordinate::Lightness, 100.0).rgb(), [255, 255, 255]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    rgb: [u8; 3],
    hue: Float,
    saturation: Float,
    lightness: Float,
}

/// The individually updatable coordinates of an HSL color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HslCoordinate {
    Hue,
    Saturation,
    Lightness,
}

impl Hsl {
    /// Create a new HSL color. This constructor clamps the coordinates to
    /// their ranges before computing the RGB triple.
    pub fn new(hue: Float, saturation: Float, lightness: Float) -> Self {
        let (hue, saturation, lightness) =
            (clamp(hue, 360.0), clamp(saturation, 100.0), clamp(lightness, 100.0));
        Self {
            rgb: hsl_to_rgb(hue, saturation, lightness),
            hue,
            saturation,
            lightness,
        }
    }

    /// Create a new HSL color from 24-bit RGB. The hue, saturation, and
    /// lightness are rounded to one decimal.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let [hue, saturation, lightness] = rgb_to_hsl(red, green, blue);
        Self {
            rgb: [red, green, blue],
            hue,
            saturation,
            lightness,
        }
    }

    /// Get the hue.
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Get the saturation.
    pub const fn saturation(&self) -> Float {
        self.saturation
    }

    /// Get the lightness.
    pub const fn lightness(&self) -> Float {
        self.lightness
    }

    /// Get the cached 24-bit RGB triple.
    pub const fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Update one coordinate and recompute the RGB triple.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn update(&self, coordinate: HslCoordinate, value: Float) -> Self {
        match coordinate {
            HslCoordinate::Hue => Self::new(value, self.saturation, self.lightness),
            HslCoordinate::Saturation => Self::new(self.hue, value, self.lightness),
            HslCoordinate::Lightness => Self::new(self.hue, self.saturation, value),
        }
    }

    /// Update the hue.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_hue(&self, hue: Float) -> Self {
        self.update(HslCoordinate::Hue, hue)
    }

    /// Update the saturation.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_saturation(&self, saturation: Float) -> Self {
        self.update(HslCoordinate::Saturation, saturation)
    }

    /// Update the lightness.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_lightness(&self, lightness: Float) -> Self {
        self.update(HslCoordinate::Lightness, lightness)
    }

    /// Reparametrize as HSV, keeping the RGB triple.
    fn to_hsv(self) -> Hsv {
        let [hue, saturation, value] = hsl_to_hsv(self.hue, self.saturation, self.lightness);
        Hsv {
            rgb: self.rgb,
            hue,
            saturation,
            value,
        }
    }
}

/// The coordinates of an HSV color.
///
/// An HSV color has hue `0..=360` as well as saturation and value `0..=100`.
/// Like [`Hsl`], it caches the equivalent 24-bit RGB triple.
///
/// ```
/// # use huebox::Hsv;
/// assert_eq!(Hsv::extract(0.0, 100.0, 100.0), [255, 0, 0]);
///
/// let red = Hsv::from_rgb(255, 0, 0);
/// assert_eq!((red.hue(), red.saturation(), red.value()), (0.0, 100.0, 100.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    rgb: [u8; 3],
    hue: Float,
    saturation: Float,
    value: Float,
}

impl Hsv {
    /// Create a new HSV color. This constructor clamps the coordinates to
    /// their ranges before computing the RGB triple.
    pub fn new(hue: Float, saturation: Float, value: Float) -> Self {
        let (hue, saturation, value) =
            (clamp(hue, 360.0), clamp(saturation, 100.0), clamp(value, 100.0));
        Self {
            rgb: Self::extract(hue, saturation, value),
            hue,
            saturation,
            value,
        }
    }

    /// Create a new HSV color from 24-bit RGB.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let [hue, saturation, value] = rgb_to_hsv(red, green, blue);
        Self {
            rgb: [red, green, blue],
            hue,
            saturation,
            value,
        }
    }

    /// Create a new HSV color from HSL coordinates. The RGB triple is derived
    /// from the resulting HSV coordinates.
    pub fn from_hsl(hue: Float, saturation: Float, lightness: Float) -> Self {
        let [hue, saturation, value] = hsl_to_hsv(
            clamp(hue, 360.0),
            clamp(saturation, 100.0),
            clamp(lightness, 100.0),
        );
        Self::new(hue, saturation, value)
    }

    /// Compute the 24-bit RGB triple for the HSV coordinates.
    pub fn extract(hue: Float, saturation: Float, value: Float) -> [u8; 3] {
        hsv_to_rgb(hue, saturation, value)
    }

    /// Get the hue.
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Get the saturation.
    pub const fn saturation(&self) -> Float {
        self.saturation
    }

    /// Get the value.
    pub const fn value(&self) -> Float {
        self.value
    }

    /// Get the cached 24-bit RGB triple.
    pub const fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Reparametrize as HSL, keeping the RGB triple.
    fn to_hsl(self) -> Hsl {
        let [hue, saturation, lightness] = hsv_to_hsl(self.hue, self.saturation, self.value);
        Hsl {
            rgb: self.rgb,
            hue,
            saturation,
            lightness,
        }
    }
}

// ====================================================================================================================
// Color
// ====================================================================================================================

/// A color in one of seven [`ColorFormat`]s.
///
/// Every color has 24-bit red, green, and blue channels as well as an alpha
/// channel `0..=1`, which is 1 for formats without alpha. The HSL and HSV
/// variants additionally carry their native coordinates, with the RGB triple
/// cached alongside.
///
/// # Conversion
///
/// [`Color::to`] converts between any two formats. Since all variants carry
/// the same RGB triple, conversions preserve red, green, and blue exactly.
/// Converting to a format with alpha from a format without sets alpha to 1,
/// whereas converting to a format without alpha drops alpha.
///
/// ```
/// # use huebox::{Color, ColorFormat};
/// # use std::str::FromStr;
/// # fn main() -> Result<(), huebox::error::ColorFormatError> {
/// let green = Color::from_str("hsl(120,100%,50%)")?;
/// assert_eq!(green.to(ColorFormat::Rgb), Color::rgb(0, 255, 0));
/// assert_eq!(green.to(ColorFormat::Hex).to_string(), "#00ff00");
/// assert_eq!(green.to(ColorFormat::Hsv).to_string(), "hsv(120,100%,100%)");
/// # Ok(())
/// # }
/// ```
///
/// # Alpha
///
/// [`Color::add_alpha`] consumes the color. Formats with alpha update alpha in
/// place and return the very same value, whereas formats without alpha produce
/// a value of their alpha-bearing counterpart, as determined by
/// [`ColorFormat::with_alpha`]. [`Color::set_alpha`] only updates formats with
/// alpha.
///
/// # Serialization
///
/// `Color`'s [`Display`](std::fmt::Display) implementation produces the
/// canonical form for each format, e.g., `#rrggbb` or `hsla(h,s%,l%,a)`, with
/// lowercase two-digit hexadecimal channels and no white space.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Hex([u8; 3]),
    Hexa([u8; 3], Float),
    Rgb([u8; 3]),
    Rgba([u8; 3], Float),
    Hsl(Hsl),
    Hsla(Hsl, Float),
    Hsv(Hsv),
}

impl Color {
    /// Create a new color in `#rrggbb` format.
    pub const fn hex(red: u8, green: u8, blue: u8) -> Self {
        Self::Hex([red, green, blue])
    }

    /// Create a new color in `#rrggbbaa` format. Alpha is clamped to `0..=1`.
    pub fn hexa(red: u8, green: u8, blue: u8, alpha: Float) -> Self {
        Self::Hexa([red, green, blue], clamp(alpha, 1.0))
    }

    /// Create a new color in `rgb()` format.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::Rgb([red, green, blue])
    }

    /// Create a new color in `rgba()` format. Alpha is clamped to `0..=1`.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: Float) -> Self {
        Self::Rgba([red, green, blue], clamp(alpha, 1.0))
    }

    /// Create a new color in `hsl()` format.
    pub fn hsl(hue: Float, saturation: Float, lightness: Float) -> Self {
        Self::Hsl(Hsl::new(hue, saturation, lightness))
    }

    /// Create a new color in `hsla()` format.
    pub fn hsla(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self::Hsla(Hsl::new(hue, saturation, lightness), clamp(alpha, 1.0))
    }

    /// Create a new color in `hsv()` format.
    pub fn hsv(hue: Float, saturation: Float, value: Float) -> Self {
        Self::Hsv(Hsv::new(hue, saturation, value))
    }

    /// Parse the string as a color in the given format.
    ///
    /// Unlike [`Color as FromStr`](enum.Color.html#impl-FromStr-for-Color),
    /// which tries all formats in turn, this method only accepts the grammar
    /// of the given format. It fails if the string does not match that
    /// grammar or if a coordinate is out of range.
    ///
    /// ```
    /// # use huebox::{Color, ColorFormat};
    /// # use huebox::error::ColorFormatError;
    /// assert_eq!(
    ///     Color::parse_as(ColorFormat::Rgba, "rgba(1, 2, 3, 0.5)"),
    ///     Ok(Color::rgba(1, 2, 3, 0.5))
    /// );
    /// assert_eq!(
    ///     Color::parse_as(ColorFormat::Rgb, "rgb(256, 0, 0)"),
    ///     Err(ColorFormatError::OutOfRange)
    /// );
    /// ```
    pub fn parse_as(format: ColorFormat, s: &str) -> Result<Self, ColorFormatError> {
        let color = match format {
            ColorFormat::Hex => Self::Hex(scan_hex(s)?),
            ColorFormat::Hexa => {
                let (rgb, alpha) = scan_hexa(s)?;
                Self::Hexa(rgb, alpha)
            }
            ColorFormat::Rgb => Self::Rgb(scan_rgb(s)?),
            ColorFormat::Rgba => {
                let (rgb, alpha) = scan_rgba(s)?;
                Self::Rgba(rgb, alpha)
            }
            ColorFormat::Hsl => {
                let [h, s, l] = scan_hsl(s)?;
                Self::hsl(h, s, l)
            }
            ColorFormat::Hsla => {
                let ([h, s, l], alpha) = scan_hsla(s)?;
                Self::hsla(h, s, l, alpha)
            }
            ColorFormat::Hsv => {
                let [h, s, v] = scan_hsv(s)?;
                Self::hsv(h, s, v)
            }
        };

        Ok(color)
    }

    /// Get this color's format.
    pub const fn format(&self) -> ColorFormat {
        match *self {
            Self::Hex(_) => ColorFormat::Hex,
            Self::Hexa(..) => ColorFormat::Hexa,
            Self::Rgb(_) => ColorFormat::Rgb,
            Self::Rgba(..) => ColorFormat::Rgba,
            Self::Hsl(_) => ColorFormat::Hsl,
            Self::Hsla(..) => ColorFormat::Hsla,
            Self::Hsv(_) => ColorFormat::Hsv,
        }
    }

    /// Get this color's 24-bit RGB triple.
    pub const fn to_24bit(&self) -> [u8; 3] {
        match *self {
            Self::Hex(rgb) | Self::Hexa(rgb, _) | Self::Rgb(rgb) | Self::Rgba(rgb, _) => rgb,
            Self::Hsl(hsl) | Self::Hsla(hsl, _) => hsl.rgb,
            Self::Hsv(hsv) => hsv.rgb,
        }
    }

    /// Get the red channel.
    pub const fn red(&self) -> u8 {
        self.to_24bit()[0]
    }

    /// Get the green channel.
    pub const fn green(&self) -> u8 {
        self.to_24bit()[1]
    }

    /// Get the blue channel.
    pub const fn blue(&self) -> u8 {
        self.to_24bit()[2]
    }

    /// Get the alpha channel, which is 1 for formats without alpha.
    pub const fn alpha(&self) -> Float {
        match *self {
            Self::Hexa(_, alpha) | Self::Rgba(_, alpha) | Self::Hsla(_, alpha) => alpha,
            _ => 1.0,
        }
    }

    /// Determine whether this color is not fully opaque.
    pub fn has_alpha(&self) -> bool {
        self.alpha() != 1.0
    }

    /// Get the HSL coordinates of HSL and HSLA colors.
    pub const fn as_hsl(&self) -> Option<&Hsl> {
        match *self {
            Self::Hsl(ref hsl) | Self::Hsla(ref hsl, _) => Some(hsl),
            _ => None,
        }
    }

    /// Get the HSV coordinates of HSV colors.
    pub const fn as_hsv(&self) -> Option<&Hsv> {
        match *self {
            Self::Hsv(ref hsv) => Some(hsv),
            _ => None,
        }
    }

    /// Get this color's HSL coordinates, converting if necessary.
    fn hsl_coordinates(&self) -> Hsl {
        match *self {
            Self::Hsl(hsl) | Self::Hsla(hsl, _) => hsl,
            Self::Hsv(hsv) => hsv.to_hsl(),
            _ => {
                let [r, g, b] = self.to_24bit();
                Hsl::from_rgb(r, g, b)
            }
        }
    }

    /// Get this color's HSV coordinates, converting if necessary.
    fn hsv_coordinates(&self) -> Hsv {
        match *self {
            Self::Hsv(hsv) => hsv,
            Self::Hsl(hsl) | Self::Hsla(hsl, _) => hsl.to_hsv(),
            _ => {
                let [r, g, b] = self.to_24bit();
                Hsv::from_rgb(r, g, b)
            }
        }
    }

    /// Convert this color to the given format.
    ///
    /// Converting to the same format returns an equal copy. Converting from
    /// a format without alpha to one with alpha sets alpha to 1. Converting
    /// from a format with alpha to one without drops alpha. HSL and HSV
    /// coordinates carry over their hue when converted into each other and
    /// are computed from the RGB triple otherwise.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, format: ColorFormat) -> Self {
        let rgb = self.to_24bit();
        let alpha = self.alpha();

        match format {
            ColorFormat::Hex => Self::Hex(rgb),
            ColorFormat::Hexa => Self::Hexa(rgb, alpha),
            ColorFormat::Rgb => Self::Rgb(rgb),
            ColorFormat::Rgba => Self::Rgba(rgb, alpha),
            ColorFormat::Hsl => Self::Hsl(self.hsl_coordinates()),
            ColorFormat::Hsla => Self::Hsla(self.hsl_coordinates(), alpha),
            ColorFormat::Hsv => Self::Hsv(self.hsv_coordinates()),
        }
    }

    /// Add alpha to this color.
    ///
    /// For formats with alpha, this method updates alpha in place and returns
    /// the same color. For formats without alpha, this method returns a new
    /// color in the corresponding format with alpha, i.e., HEXA for HEX, RGBA
    /// for RGB and HSV, and HSLA for HSL. Alpha is clamped to `0..=1`.
    ///
    /// ```
    /// # use huebox::{Color, ColorFormat};
    /// let red = Color::hex(255, 0, 0).add_alpha(0.5);
    /// assert_eq!(red.format(), ColorFormat::Hexa);
    /// assert_eq!(red.to_string(), "#ff000080");
    ///
    /// let purple = Color::hsv(300.0, 100.0, 50.0).add_alpha(0.25);
    /// assert_eq!(purple.to_string(), "rgba(128,0,128,0.25)");
    /// ```
    #[must_use = "method consumes the color and returns the one with alpha"]
    pub fn add_alpha(mut self, alpha: Float) -> Self {
        if !self.set_alpha(alpha) {
            self = self.to(self.format().with_alpha());
            self.set_alpha(alpha);
        }
        self
    }

    /// Update alpha in place, clamping it to `0..=1`. This method returns
    /// `true` for formats with alpha and `false`, without changing the color,
    /// for formats without.
    pub fn set_alpha(&mut self, alpha: Float) -> bool {
        match *self {
            Self::Hexa(_, ref mut a) | Self::Rgba(_, ref mut a) | Self::Hsla(_, ref mut a) => {
                *a = clamp(alpha, 1.0);
                true
            }
            _ => false,
        }
    }

    /// Update one HSL coordinate of this color.
    ///
    /// For HSL and HSLA colors, this method updates the coordinate and
    /// recomputes the RGB triple in one step. For all other formats, it
    /// updates the equivalent HSL coordinates and converts the result back
    /// into this color's format, preserving alpha.
    ///
    /// ```
    /// # use huebox::{Color, HslCoordinate};
    /// let red = Color::hsla(0.0, 100.0, 50.0, 0.5);
    /// let blue = red.update(HslCoordinate::Hue, 240.0);
    /// assert_eq!(blue.to_string(), "hsla(240,100%,50%,0.5)");
    /// assert_eq!(blue.to_24bit(), [0, 0, 255]);
    ///
    /// let white = Color::hex(255, 0, 0).update(HslCoordinate::Lightness, 100.0);
    /// assert_eq!(white.to_string(), "#ffffff");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn update(&self, coordinate: HslCoordinate, value: Float) -> Self {
        match *self {
            Self::Hsl(hsl) => Self::Hsl(hsl.update(coordinate, value)),
            Self::Hsla(hsl, alpha) => Self::Hsla(hsl.update(coordinate, value), alpha),
            _ => {
                let hsl = self.hsl_coordinates().update(coordinate, value);
                Self::Hsla(hsl, self.alpha()).to(self.format())
            }
        }
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Self::Hsv(value)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Hex([r, g, b]) => f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b)),
            Self::Hexa([r, g, b], alpha) => f.write_fmt(format_args!(
                "#{:02x}{:02x}{:02x}{:02x}",
                r,
                g,
                b,
                (alpha * 255.0).round() as u8
            )),
            Self::Rgb([r, g, b]) => f.write_fmt(format_args!("rgb({},{},{})", r, g, b)),
            Self::Rgba([r, g, b], alpha) => {
                f.write_fmt(format_args!("rgba({},{},{},", r, g, b))?;
                write_coordinate(alpha, f)?;
                f.write_str(")")
            }
            Self::Hsl(hsl) | Self::Hsla(hsl, _) => {
                f.write_str(if self.format().has_alpha() {
                    "hsla("
                } else {
                    "hsl("
                })?;
                write_coordinate(hsl.hue, f)?;
                f.write_str(",")?;
                write_coordinate(hsl.saturation, f)?;
                f.write_str("%,")?;
                write_coordinate(hsl.lightness, f)?;
                f.write_str("%")?;
                if let Self::Hsla(_, alpha) = *self {
                    f.write_str(",")?;
                    write_coordinate(alpha, f)?;
                }
                f.write_str(")")
            }
            Self::Hsv(hsv) => {
                f.write_str("hsv(")?;
                write_coordinate(hsv.hue, f)?;
                f.write_str(",")?;
                write_coordinate(hsv.saturation, f)?;
                f.write_str("%,")?;
                write_coordinate(hsv.value, f)?;
                f.write_str("%)")
            }
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, Hsl, HslCoordinate, Hsv};
    use crate::error::ColorFormatError;
    use crate::{ColorFormat, Float};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Generate a random color in the given format. Coordinates use the same
    /// precision as the canonical serialization.
    fn random_color(rng: &mut StdRng, format: ColorFormat) -> Color {
        let mut decimal = |max: u32| rng.random_range(0..=max * 10) as Float / 10.0;
        let (h, s, l) = (decimal(360), decimal(100), decimal(100));
        let alpha = rng.random_range(0..=100) as Float / 100.0;
        let [r, g, b]: [u8; 3] = [rng.random(), rng.random(), rng.random()];

        match format {
            ColorFormat::Hex => Color::hex(r, g, b),
            ColorFormat::Hexa => Color::hexa(r, g, b, (alpha * 255.0).round() / 255.0),
            ColorFormat::Rgb => Color::rgb(r, g, b),
            ColorFormat::Rgba => Color::rgba(r, g, b, alpha),
            ColorFormat::Hsl => Color::hsl(h, s, l),
            ColorFormat::Hsla => Color::hsla(h, s, l, alpha),
            ColorFormat::Hsv => Color::hsv(h, s, l),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::hex(0, 10, 255).to_string(), "#000aff");
        assert_eq!(Color::hexa(0, 10, 255, 0.5).to_string(), "#000aff80");
        assert_eq!(Color::hexa(0, 10, 255, 1.0).to_string(), "#000affff");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "rgb(1,2,3)");
        assert_eq!(Color::rgba(1, 2, 3, 0.25).to_string(), "rgba(1,2,3,0.25)");
        assert_eq!(Color::rgba(1, 2, 3, 1.0).to_string(), "rgba(1,2,3,1)");
        assert_eq!(Color::hsl(120.0, 100.0, 50.0).to_string(), "hsl(120,100%,50%)");
        assert_eq!(
            Color::hsla(33.5, 12.5, 0.0, 0.0).to_string(),
            "hsla(33.5,12.5%,0%,0)"
        );
        assert_eq!(Color::hsv(0.0, 100.0, 100.0).to_string(), "hsv(0,100%,100%)");
    }

    #[test]
    fn test_parse_as() -> Result<(), ColorFormatError> {
        let hsl = Color::parse_as(ColorFormat::Hsl, "hsl(120, 100%, 50%)")?;
        assert_eq!(hsl.to_24bit(), [0, 255, 0]);
        assert_eq!(hsl.as_hsl().map(Hsl::hue), Some(120.0));

        let hsv = Color::parse_as(ColorFormat::Hsv, "hsv(240,100%,100%)")?;
        assert_eq!(hsv.to_24bit(), [0, 0, 255]);

        let hexa = Color::parse_as(ColorFormat::Hexa, "#0000ff80")?;
        assert_eq!(hexa.alpha(), 128.0 / 255.0);
        assert_eq!(hexa.to_string(), "#0000ff80");

        assert_eq!(
            Color::parse_as(ColorFormat::Hex, "rgb(1,2,3)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            Color::parse_as(ColorFormat::Hsla, "hsl(1,2%,3%)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            Color::parse_as(ColorFormat::Hsla, "hsla 1,2%,3%,1)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            Color::parse_as(ColorFormat::Hsla, "hsla(1,2%,3%,1"),
            Err(ColorFormatError::NoClosingParenthesis)
        );

        Ok(())
    }

    #[test]
    fn test_conversion() {
        let red = Color::hex(255, 0, 0);
        assert_eq!(red.to(ColorFormat::Hexa), Color::hexa(255, 0, 0, 1.0));
        assert_eq!(red.to(ColorFormat::Rgba).to_string(), "rgba(255,0,0,1)");
        assert_eq!(red.to(ColorFormat::Hsl).to_string(), "hsl(0,100%,50%)");
        assert_eq!(red.to(ColorFormat::Hsla).to_string(), "hsla(0,100%,50%,1)");
        assert_eq!(red.to(ColorFormat::Hsv).to_string(), "hsv(0,100%,100%)");

        let faded = Color::hsla(240.0, 100.0, 50.0, 0.5);
        assert_eq!(faded.to(ColorFormat::Hex).to_string(), "#0000ff");
        assert_eq!(faded.to(ColorFormat::Rgb).to_string(), "rgb(0,0,255)");
        assert_eq!(faded.to(ColorFormat::Hsl).to_string(), "hsl(240,100%,50%)");
        assert_eq!(faded.to(ColorFormat::Rgba).to_string(), "rgba(0,0,255,0.5)");
        assert_eq!(faded.to(ColorFormat::Hsv).to_string(), "hsv(240,100%,100%)");

        let red = Hsv::from_hsl(0.0, 100.0, 50.0);
        assert_eq!((red.hue(), red.saturation(), red.value()), (0.0, 100.0, 100.0));
        assert_eq!(red.rgb(), [255, 0, 0]);
        assert_eq!(Color::from(red).to_string(), "hsv(0,100%,100%)");

        let navy = Hsv::from_hsl(240.0, 100.0, 25.0);
        assert_eq!((navy.hue(), navy.saturation(), navy.value()), (240.0, 100.0, 50.0));
        assert_eq!(navy.rgb(), [0, 0, 128]);

        // Hue survives reparametrization even for achromatic colors.
        let gray = Color::hsl(200.0, 0.0, 50.0);
        let as_hsv = gray.to(ColorFormat::Hsv);
        assert_eq!(as_hsv.as_hsv().map(Hsv::hue), Some(200.0));
        assert_eq!(as_hsv.to(ColorFormat::Hsl), gray);

        // Conversions from RGB compute achromatic hue as zero.
        assert_eq!(
            Color::rgb(128, 128, 128).to(ColorFormat::Hsl).to_string(),
            "hsl(0,0%,50.2%)"
        );
    }

    #[test]
    fn test_alpha() {
        let hex = Color::hex(1, 2, 3);
        assert!(!hex.has_alpha());
        assert_eq!(hex.clone().add_alpha(0.5), Color::hexa(1, 2, 3, 0.5));
        assert_eq!(Color::rgb(1, 2, 3).add_alpha(0.5), Color::rgba(1, 2, 3, 0.5));
        assert_eq!(
            Color::hsl(0.0, 100.0, 50.0).add_alpha(0.5),
            Color::hsla(0.0, 100.0, 50.0, 0.5)
        );
        assert_eq!(
            Color::hsv(0.0, 100.0, 100.0).add_alpha(0.5),
            Color::rgba(255, 0, 0, 0.5)
        );
        assert_eq!(
            Color::hsla(0.0, 100.0, 50.0, 0.5).add_alpha(2.0),
            Color::hsla(0.0, 100.0, 50.0, 1.0)
        );

        let mut color = Color::rgba(1, 2, 3, 0.5);
        assert!(color.set_alpha(0.75));
        assert_eq!(color.alpha(), 0.75);
        assert!(color.has_alpha());

        let mut color = hex;
        assert!(!color.set_alpha(0.75));
        assert_eq!(color, Color::hex(1, 2, 3));
    }

    #[test]
    fn test_update() {
        let color = Color::hsla(0.0, 100.0, 50.0, 0.5);
        let updated = color.update(HslCoordinate::Saturation, 0.0);
        assert_eq!(updated.to_24bit(), [128, 128, 128]);
        assert_eq!(updated.alpha(), 0.5);
        assert_eq!(color.to_24bit(), [255, 0, 0]);

        let hsv = Color::hsv(0.0, 100.0, 100.0).update(HslCoordinate::Hue, 120.0);
        assert_eq!(hsv.format(), ColorFormat::Hsv);
        assert_eq!(hsv.to_24bit(), [0, 255, 0]);

        let clamped = Hsl::new(0.0, 100.0, 50.0).with_lightness(150.0);
        assert_eq!(clamped.lightness(), 100.0);
        assert_eq!(clamped.rgb(), [255, 255, 255]);
    }

    #[test]
    fn test_round_trip() -> Result<(), ColorFormatError> {
        let mut rng = StdRng::seed_from_u64(0x7275_6e64);

        for format in ColorFormat::ALL {
            for _ in 0..200 {
                let color = random_color(&mut rng, format);
                let text = color.to_string();
                let parsed = Color::parse_as(format, &text)?;
                assert_eq!(parsed.format(), format, "{}", text);

                for (a, b) in color.to_24bit().iter().zip(parsed.to_24bit().iter()) {
                    assert!(a.abs_diff(*b) <= 1, "{} vs {}", color, parsed);
                }
                assert!((color.alpha() - parsed.alpha()).abs() < 1e-6, "{}", text);
                if let (Some(c), Some(p)) = (color.as_hsl(), parsed.as_hsl()) {
                    assert!((c.hue() - p.hue()).abs() <= 0.1, "{}", text);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn test_idempotence_and_closure() {
        let mut rng = StdRng::seed_from_u64(0x636c_6f73);

        for source in ColorFormat::ALL {
            for _ in 0..50 {
                let color = random_color(&mut rng, source);
                assert_eq!(color.to(source), color);
                assert_eq!(color.clone(), color.to(color.format()));

                for via in ColorFormat::ALL {
                    for target in ColorFormat::ALL {
                        let direct = color.to(target).to_24bit();
                        let indirect = color.to(via).to(target).to_24bit();
                        for (a, b) in direct.iter().zip(indirect.iter()) {
                            assert!(a.abs_diff(*b) <= 2, "{} via {} to {}", color, via, target);
                        }
                    }
                }
            }
        }
    }
}
