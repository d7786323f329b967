use crate::error::ColorFormatError;
use crate::Float;

/// Strip the prefix from the string, ignoring ASCII case.
pub(crate) fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in hashed hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes and, for the four and eight
/// digit forms, the alpha channel as unsigned byte, too. It transparently
/// handles single-digit coordinates.
pub(crate) fn parse_hashed(s: &str) -> Result<([u8; 3], Option<u8>), ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    let (factor, count) = match digits.len() {
        3 => (1, 3),
        4 => (1, 4),
        6 => (2, 3),
        8 => (2, 4),
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    let parse_coordinate = |index: usize| -> Result<u8, ColorFormatError> {
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let rgb = [parse_coordinate(0)?, parse_coordinate(1)?, parse_coordinate(2)?];
    let alpha = if count == 4 {
        Some(parse_coordinate(3)?)
    } else {
        None
    };

    Ok((rgb, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the body of a functional color format. This function strips the
/// function name, ignoring case, and the parentheses, while tolerating white
/// space before the opening parenthesis. It returns the comma-separated
/// arguments, each trimmed of white space.
fn parse_function<'a, const N: usize>(
    s: &'a str,
    name: &str,
) -> Result<[&'a str; N], ColorFormatError> {
    let rest = strip_prefix_ignore_case(s, name).ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    let mut iter = body.split(',').map(str::trim);
    let mut arguments = [""; N];
    for argument in arguments.iter_mut() {
        match iter.next() {
            Some(t) if !t.is_empty() => *argument = t,
            _ => return Err(ColorFormatError::MissingCoordinate),
        }
    }
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok(arguments)
}

/// Parse an 8-bit channel written as decimal integer.
fn parse_channel(s: &str) -> Result<u8, ColorFormatError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColorFormatError::MalformedInteger);
    }

    // All digits, so the only possible failure is overflow.
    let n: u32 = s.parse().map_err(|_| ColorFormatError::OutOfRange)?;
    u8::try_from(n).map_err(|_| ColorFormatError::OutOfRange)
}

/// Parse an unsigned decimal number with optional fraction, e.g., `12` or
/// `12.5`. Signs and exponents are not part of the grammar.
fn parse_decimal(s: &str) -> Result<Float, ColorFormatError> {
    let (integral, fraction) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };

    let is_digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(integral) || !fraction.map_or(true, is_digits) {
        return Err(ColorFormatError::MalformedFloat);
    }

    s.parse().map_err(|_| ColorFormatError::MalformedFloat)
}

/// Parse a decimal number and check that it falls within `0..=max`.
fn parse_bounded(s: &str, max: Float) -> Result<Float, ColorFormatError> {
    let n = parse_decimal(s)?;
    if (0.0..=max).contains(&n) {
        Ok(n)
    } else {
        Err(ColorFormatError::OutOfRange)
    }
}

/// Parse a percentage `0%..=100%`. The percent sign must immediately follow
/// the number.
fn parse_percentage(s: &str) -> Result<Float, ColorFormatError> {
    let number = s.strip_suffix('%').ok_or(ColorFormatError::MissingPercent)?;
    parse_bounded(number, 100.0)
}

#[inline]
fn parse_hue(s: &str) -> Result<Float, ColorFormatError> {
    parse_bounded(s, 360.0)
}

#[inline]
fn parse_alpha(s: &str) -> Result<Float, ColorFormatError> {
    parse_bounded(s, 1.0)
}

// --------------------------------------------------------------------------------------------------------------------

/// Scan `#rgb` or `#rrggbb`.
pub(crate) fn scan_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    match parse_hashed(s.trim())? {
        (rgb, None) => Ok(rgb),
        (_, Some(_)) => Err(ColorFormatError::UnexpectedCharacters),
    }
}

/// Scan `#rgba` or `#rrggbbaa`. The alpha channel is scaled to unit range.
pub(crate) fn scan_hexa(s: &str) -> Result<([u8; 3], Float), ColorFormatError> {
    match parse_hashed(s.trim())? {
        (rgb, Some(alpha)) => Ok((rgb, alpha as Float / 255.0)),
        (_, None) => Err(ColorFormatError::UnexpectedCharacters),
    }
}

/// Scan `rgb(r, g, b)`.
pub(crate) fn scan_rgb(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let [r, g, b] = parse_function::<3>(s.trim(), "rgb")?;
    Ok([parse_channel(r)?, parse_channel(g)?, parse_channel(b)?])
}

/// Scan `rgba(r, g, b, a)`.
pub(crate) fn scan_rgba(s: &str) -> Result<([u8; 3], Float), ColorFormatError> {
    let [r, g, b, a] = parse_function::<4>(s.trim(), "rgba")?;
    Ok((
        [parse_channel(r)?, parse_channel(g)?, parse_channel(b)?],
        parse_alpha(a)?,
    ))
}

/// Scan `hsl(h, s%, l%)`.
pub(crate) fn scan_hsl(s: &str) -> Result<[Float; 3], ColorFormatError> {
    let [h, s, l] = parse_function::<3>(s.trim(), "hsl")?;
    Ok([parse_hue(h)?, parse_percentage(s)?, parse_percentage(l)?])
}

/// Scan `hsla(h, s%, l%, a)`.
pub(crate) fn scan_hsla(s: &str) -> Result<([Float; 3], Float), ColorFormatError> {
    let [h, s, l, a] = parse_function::<4>(s.trim(), "hsla")?;
    Ok((
        [parse_hue(h)?, parse_percentage(s)?, parse_percentage(l)?],
        parse_alpha(a)?,
    ))
}

/// Scan `hsv(h, s%, v%)`.
pub(crate) fn scan_hsv(s: &str) -> Result<[Float; 3], ColorFormatError> {
    let [h, s, v] = parse_function::<3>(s.trim(), "hsv")?;
    Ok([parse_hue(h)?, parse_percentage(s)?, parse_percentage(v)?])
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        parse_decimal, parse_hashed, scan_hex, scan_hexa, scan_hsl, scan_hsla, scan_hsv, scan_rgb,
        scan_rgba, ColorFormatError,
    };

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, ([0x11_u8, 0x22, 0x33], None));
        assert_eq!(parse_hashed("#112233")?, ([0x11_u8, 0x22, 0x33], None));
        assert_eq!(parse_hashed("#1234")?, ([0x11_u8, 0x22, 0x33], Some(0x44)));
        assert_eq!(
            parse_hashed("#AbCdEf80")?,
            ([0xab_u8, 0xcd, 0xef], Some(0x80))
        );
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#12345"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#+10"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_scan_hex() -> Result<(), ColorFormatError> {
        assert_eq!(scan_hex("  #fff ")?, [255_u8, 255, 255]);
        assert_eq!(scan_hex("#ffff"), Err(ColorFormatError::UnexpectedCharacters));

        let (rgb, alpha) = scan_hexa("#ff000080")?;
        assert_eq!(rgb, [255_u8, 0, 0]);
        assert_eq!(alpha, 128.0 / 255.0);
        assert_eq!(scan_hexa("#f00"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(scan_hexa("#f008")?.1, 136.0 / 255.0);

        Ok(())
    }

    #[test]
    fn test_scan_rgb() -> Result<(), ColorFormatError> {
        assert_eq!(scan_rgb("rgb(255,0,0)")?, [255_u8, 0, 0]);
        assert_eq!(scan_rgb("RGB( 1 , 2 ,3 )")?, [1_u8, 2, 3]);
        assert_eq!(scan_rgb("rgb (1,2,3)")?, [1_u8, 2, 3]);
        assert_eq!(scan_rgb("rgb(256,0,0)"), Err(ColorFormatError::OutOfRange));
        assert_eq!(
            scan_rgb("rgb(99999999999,0,0)"),
            Err(ColorFormatError::OutOfRange)
        );
        assert_eq!(
            scan_rgb("rgb(1.5,0,0)"),
            Err(ColorFormatError::MalformedInteger)
        );
        assert_eq!(scan_rgb("rgb(-1,0,0)"), Err(ColorFormatError::MalformedInteger));
        assert_eq!(scan_rgb("rgb(1,2)"), Err(ColorFormatError::MissingCoordinate));
        assert_eq!(scan_rgb("rgb(1,,2)"), Err(ColorFormatError::MissingCoordinate));
        assert_eq!(
            scan_rgb("rgb(1,2,3,4)"),
            Err(ColorFormatError::TooManyCoordinates)
        );
        assert_eq!(
            scan_rgb("rgb 1,2,3)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            scan_rgb("rgb(1,2,3"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(scan_rgb("rgba(1,2,3,1)"), Err(ColorFormatError::NoOpeningParenthesis));
        assert_eq!(scan_rgb("cmy(1,2,3)"), Err(ColorFormatError::UnknownFormat));

        assert_eq!(scan_rgba("rgba(1, 2, 3, 0.5)")?, ([1_u8, 2, 3], 0.5));
        assert_eq!(scan_rgba("rgba(1,2,3,1)")?, ([1_u8, 2, 3], 1.0));
        assert_eq!(scan_rgba("rgba(1,2,3,1.5)"), Err(ColorFormatError::OutOfRange));
        assert_eq!(scan_rgba("rgba(1,2,3)"), Err(ColorFormatError::MissingCoordinate));

        Ok(())
    }

    #[test]
    fn test_scan_hsl() -> Result<(), ColorFormatError> {
        assert_eq!(scan_hsl("hsl(120,100%,50%)")?, [120.0, 100.0, 50.0]);
        assert_eq!(scan_hsl("hsl( 33.5 , 12.25% , 0% )")?, [33.5, 12.25, 0.0]);
        assert_eq!(scan_hsl("hsl(361,0%,0%)"), Err(ColorFormatError::OutOfRange));
        assert_eq!(scan_hsl("hsl(0,101%,0%)"), Err(ColorFormatError::OutOfRange));
        assert_eq!(scan_hsl("hsl(0,50,50%)"), Err(ColorFormatError::MissingPercent));
        assert_eq!(scan_hsl("hsl(0,50 %,50%)"), Err(ColorFormatError::MalformedFloat));
        assert_eq!(scan_hsl("hsl(0deg,50%,50%)"), Err(ColorFormatError::MalformedFloat));

        assert_eq!(
            scan_hsla("hsla(240, 100%, 50%, 0.25)")?,
            ([240.0, 100.0, 50.0], 0.25)
        );
        assert_eq!(
            scan_hsla("hsla(240,100%,50%,2)"),
            Err(ColorFormatError::OutOfRange)
        );

        assert_eq!(scan_hsv("hsv(0,100%,100%)")?, [0.0, 100.0, 100.0]);
        assert_eq!(scan_hsv("hsv(0,100%)"), Err(ColorFormatError::MissingCoordinate));

        Ok(())
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("12"), Ok(12.0));
        assert_eq!(parse_decimal("0.125"), Ok(0.125));
        assert_eq!(parse_decimal("1."), Err(ColorFormatError::MalformedFloat));
        assert_eq!(parse_decimal(".5"), Err(ColorFormatError::MalformedFloat));
        assert_eq!(parse_decimal("1e3"), Err(ColorFormatError::MalformedFloat));
        assert_eq!(parse_decimal("+1"), Err(ColorFormatError::MalformedFloat));
        assert_eq!(parse_decimal("1.2.3"), Err(ColorFormatError::MalformedFloat));
    }
}
