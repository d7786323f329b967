mod conversion;
mod detect;
mod names;
mod string;

// conversion
pub(crate) use conversion::{hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};

// detect
pub use detect::{is_hex, is_hexa, is_hsl, is_hsla, is_hsv, is_named, is_rgb, is_rgba};

// names
pub(crate) use names::lookup;

// string
pub(crate) use string::{
    scan_hex, scan_hexa, scan_hsl, scan_hsla, scan_hsv, scan_rgb, scan_rgba,
    strip_prefix_ignore_case,
};
