use crate::Float;

/// Round the number to the given number of decimals.
#[inline]
fn round_to(value: Float, decimals: i32) -> Float {
    let factor = (10.0 as Float).powi(decimals);
    (value * factor).round() / factor
}

/// Convert a unit-range coordinate to a byte, rounding and clamping as
/// necessary.
#[inline]
fn to_byte(value: Float) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert a byte to a unit-range coordinate.
#[inline]
fn from_byte(value: u8) -> Float {
    value as Float / 255.0
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSL to 24-bit RGB.
///
/// The hue ranges `0..=360`, saturation and lightness `0..=100`. Achromatic
/// colors, i.e., colors with zero saturation, are gray tones. Otherwise, this
/// function decomposes the color into chroma and the hue's 60º sector.
pub(crate) fn hsl_to_rgb(hue: Float, saturation: Float, lightness: Float) -> [u8; 3] {
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    if s == 0.0 {
        let gray = to_byte(l);
        return [gray, gray, gray];
    }

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let [r, g, b] = if hue < 60.0 {
        [c, x, 0.0]
    } else if hue < 120.0 {
        [x, c, 0.0]
    } else if hue < 180.0 {
        [0.0, c, x]
    } else if hue < 240.0 {
        [0.0, x, c]
    } else if hue < 300.0 {
        [x, 0.0, c]
    } else {
        [c, 0.0, x]
    };

    [to_byte(r + m), to_byte(g + m), to_byte(b + m)]
}

/// Convert 24-bit RGB to HSL.
///
/// The result has a hue `0..360` as well as saturation and lightness
/// `0..=100`, each rounded to one decimal. Achromatic colors have zero hue and
/// saturation.
pub(crate) fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> [Float; 3] {
    let [r, g, b] = [from_byte(red), from_byte(green), from_byte(blue)];

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (mut h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let delta = max - min;
        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        (h, s)
    };

    if h < 0.0 {
        h += 360.0;
    }

    let h = round_to(h, 1);
    [
        if h >= 360.0 { h - 360.0 } else { h },
        round_to(s * 100.0, 1),
        round_to(l * 100.0, 1),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSV to 24-bit RGB.
///
/// The hue ranges `0..=360`, saturation and value `0..=100`. This function
/// uses the six 60º sectors of the hue circle, computed as `floor(hue / 60)
/// mod 6`.
pub(crate) fn hsv_to_rgb(hue: Float, saturation: Float, value: Float) -> [u8; 3] {
    let h = hue / 360.0;
    let s = saturation / 100.0;
    let v = value / 100.0;

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let [r, g, b] = match (i as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    [to_byte(r), to_byte(g), to_byte(b)]
}

/// Convert 24-bit RGB to HSV.
///
/// The result has a hue `0..360` as well as saturation and value `0..=100`,
/// each rounded to one decimal. Achromatic colors have zero hue.
pub(crate) fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> [Float; 3] {
    let [r, g, b] = [from_byte(red), from_byte(green), from_byte(blue)];

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };

    let sector = if max == min {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    let h = round_to(sector * 60.0, 1);
    [
        if h >= 360.0 { h - 360.0 } else { h },
        round_to(s * 100.0, 1),
        round_to(max * 100.0, 1),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSL to HSV.
///
/// The hue carries over unchanged. Value and saturation follow from `v = l +
/// s·min(l, 1−l)` and `sv = 0 if v == 0 else 2(1 − l/v)`, rounded to one
/// decimal.
pub(crate) fn hsl_to_hsv(hue: Float, saturation: Float, lightness: Float) -> [Float; 3] {
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let v = l + s * l.min(1.0 - l);
    let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

    [hue, round_to(sv * 100.0, 1), round_to(v * 100.0, 1)]
}

/// Convert HSV to HSL.
///
/// This is the inverse reparametrization of [`hsl_to_hsv`] with `l = v(1 −
/// sv/2)` and `s = 0 if l ∈ {0, 1} else (v − l) / min(l, 1 − l)`.
pub(crate) fn hsv_to_hsl(hue: Float, saturation: Float, value: Float) -> [Float; 3] {
    let s = saturation / 100.0;
    let v = value / 100.0;

    let l = v * (1.0 - s / 2.0);
    let m = l.min(1.0 - l);
    let sl = if m <= 0.0 { 0.0 } else { (v - l) / m };

    [hue, round_to(sl * 100.0, 1), round_to(l * 100.0, 1)]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, round_to};
    use crate::Float;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_hsl() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(77.0, 0.0, 50.0), [128, 128, 128]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 100.0), [255, 255, 255]);

        assert_eq!(rgb_to_hsl(255, 0, 0), [0.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl(0, 255, 0), [120.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl(0, 0, 255), [240.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl(255, 0, 255), [300.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl(128, 128, 128), [0.0, 0.0, 50.2]);
        assert_eq!(rgb_to_hsl(0, 0, 0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsv() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(360.0, 100.0, 100.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(200.0, 0.0, 50.0), [128, 128, 128]);

        assert_eq!(rgb_to_hsv(255, 0, 0), [0.0, 100.0, 100.0]);
        assert_eq!(rgb_to_hsv(0, 0, 255), [240.0, 100.0, 100.0]);
        assert_eq!(rgb_to_hsv(255, 255, 255), [0.0, 0.0, 100.0]);
        assert_eq!(rgb_to_hsv(0, 0, 0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_reparametrization() {
        assert_eq!(hsl_to_hsv(0.0, 100.0, 50.0), [0.0, 100.0, 100.0]);
        assert_eq!(hsl_to_hsv(210.0, 0.0, 0.0), [210.0, 0.0, 0.0]);
        assert_eq!(hsl_to_hsv(90.0, 0.0, 100.0), [90.0, 0.0, 100.0]);
        assert_eq!(hsv_to_hsl(0.0, 100.0, 100.0), [0.0, 100.0, 50.0]);
        assert_eq!(hsv_to_hsl(90.0, 0.0, 100.0), [90.0, 0.0, 100.0]);
        assert_eq!(hsv_to_hsl(45.0, 50.0, 0.0), [45.0, 0.0, 0.0]);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.333, 1), 33.3);
        assert_eq!(round_to(66.66, 1), 66.7);
        assert_eq!(round_to(0.5, 0), 1.0);
    }

    #[test]
    fn test_inverse_laws() {
        let mut rng = StdRng::seed_from_u64(0x4853_4c21);

        for _ in 0..1_000 {
            let rgb: [u8; 3] = [rng.random(), rng.random(), rng.random()];

            let [h, s, l] = rgb_to_hsl(rgb[0], rgb[1], rgb[2]);
            let back = hsl_to_rgb(h, s, l);
            for (a, b) in rgb.iter().zip(back.iter()) {
                assert!(a.abs_diff(*b) <= 1, "{:?} vs {:?} via hsl", rgb, back);
            }

            let [h, s, v] = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
            let back = hsv_to_rgb(h, s, v);
            for (a, b) in rgb.iter().zip(back.iter()) {
                assert!(a.abs_diff(*b) <= 1, "{:?} vs {:?} via hsv", rgb, back);
            }
        }

        // Achromatic inputs come back with zero hue and saturation.
        for level in [0.0 as Float, 12.5, 50.0, 87.5, 100.0] {
            let [r, g, b] = hsl_to_rgb(180.0, 0.0, level);
            let [h, s, l] = rgb_to_hsl(r, g, b);
            assert_eq!((h, s), (0.0, 0.0), "hue and saturation for {}", level);
            // One byte is 0.39% lightness, so 50% comes back as 50.2%.
            assert!((l - level).abs() <= 0.25, "{} vs {}", l, level);
        }
    }
}
