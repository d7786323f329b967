use super::names::lookup;
use super::string::{scan_hex, scan_hexa, scan_hsl, scan_hsla, scan_hsv, scan_rgb, scan_rgba};

/// Determine whether the string is a color keyword such as `red` or
/// `rebeccapurple`.
pub fn is_named(s: &str) -> bool {
    lookup(s.trim()).is_some()
}

/// Determine whether the string is a 3 or 6 digit hashed hexadecimal color.
pub fn is_hex(s: &str) -> bool {
    scan_hex(s).is_ok()
}

/// Determine whether the string is a 4 or 8 digit hashed hexadecimal color,
/// i.e., with alpha.
pub fn is_hexa(s: &str) -> bool {
    scan_hexa(s).is_ok()
}

/// Determine whether the string is an `rgb()` color with integer channels
/// `0..=255`.
pub fn is_rgb(s: &str) -> bool {
    scan_rgb(s).is_ok()
}

/// Determine whether the string is an `rgba()` color with integer channels
/// `0..=255` and alpha `0..=1`.
pub fn is_rgba(s: &str) -> bool {
    scan_rgba(s).is_ok()
}

/// Determine whether the string is an `hsl()` color with hue `0..=360` as
/// well as saturation and lightness `0%..=100%`.
pub fn is_hsl(s: &str) -> bool {
    scan_hsl(s).is_ok()
}

/// Determine whether the string is an `hsla()` color, i.e., an `hsl()` color
/// with additional alpha `0..=1`.
pub fn is_hsla(s: &str) -> bool {
    scan_hsla(s).is_ok()
}

/// Determine whether the string is an `hsv()` color with hue `0..=360` as well
/// as saturation and value `0%..=100%`.
pub fn is_hsv(s: &str) -> bool {
    scan_hsv(s).is_ok()
}
