/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a number to an array index if and only if it names one exactly.
///
/// The value must be finite, non-negative, integral and no larger than
/// [`MAX_SAFE_U64_INT`].
///
/// ## Example
/// ```
/// use meth::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(2.0), Some(2));
/// assert_eq!(f64_to_index(1.5), None);
/// assert_eq!(f64_to_index(-1.0), None);
/// assert_eq!(f64_to_index(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss)]
pub fn f64_to_index(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_SAFE_U64_INT as f64
    {
        return None;
    }
    usize::try_from(value as u64).ok()
}

/// Converts a length or position to a number value.
///
/// Lengths beyond `2^53` lose precision; no in-memory collection gets there.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Resolves a relative offset against a length.
///
/// Negative offsets count back from `len`, fractions are truncated, and the
/// result is clamped to `0..=len`. `NaN` counts as zero.
///
/// ## Example
/// ```
/// use meth::util::num::relative_offset;
///
/// assert_eq!(relative_offset(1.0, 5), 1);
/// assert_eq!(relative_offset(-2.0, 5), 3);
/// assert_eq!(relative_offset(-9.0, 5), 0);
/// assert_eq!(relative_offset(40.0, 5), 5);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss)]
pub fn relative_offset(value: f64, len: usize) -> usize {
    if value.is_nan() {
        return 0;
    }
    let offset = value.trunc();
    let len_f = len as f64;
    let absolute = if offset < 0.0 { (len_f + offset).max(0.0) } else { offset.min(len_f) };

    absolute as usize
}

/// Formats a number the way scripts print it.
///
/// Follows JavaScript's `Number.prototype.toString`: the shortest digits
/// that round-trip, in positional notation for magnitudes from `1e-6` up to
/// `1e21` and in exponential notation outside that range. `-0` prints as
/// `0`, and the non-finite values print as `NaN`, `Infinity` and
/// `-Infinity`.
///
/// ## Example
/// ```
/// use meth::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1e20), "100000000000000000000");
/// assert_eq!(format_number(0.000_001), "0.000001");
/// assert_eq!(format_number(-1.5e-7), "-1.5e-7");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value}");
    };
    let digits = mantissa.replace('.', "");
    // Position of the decimal point, counted in digits from the left.
    let point = exponent + 1;

    let body = match usize::try_from(point) {
        Ok(point) if point <= 21 && point >= digits.len() => {
            format!("{digits}{}", "0".repeat(point - digits.len()))
        },
        Ok(point) if (1..=21).contains(&point) => format!("{}.{}", &digits[..point], &digits[point..]),
        _ if point > -6 && point <= 0 => {
            format!("0.{}{digits}", "0".repeat(usize::try_from(-point).unwrap_or_default()))
        },
        _ => {
            let (head, tail) = digits.split_at(1);
            let fraction = if tail.is_empty() { String::new() } else { format!(".{tail}") };
            let exponent_sign = if exponent < 0 { "-" } else { "+" };
            format!("{head}{fraction}e{exponent_sign}{}", exponent.abs())
        },
    };

    format!("{sign}{body}")
}

/// Parses the longest numeric prefix of a string.
///
/// Leading whitespace is skipped. A prefix is an optional sign, digits with
/// an optional fractional part, and an optional exponent; `Infinity` is
/// accepted too. Returns `None` when no prefix parses.
///
/// ## Example
/// ```
/// use meth::util::num::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("42"), Some(42.0));
/// assert_eq!(parse_float_prefix("  3.5kg"), Some(3.5));
/// assert_eq!(parse_float_prefix("-.5"), Some(-0.5));
/// assert_eq!(parse_float_prefix("1e3x"), Some(1000.0));
/// assert_eq!(parse_float_prefix("abc"), None);
/// ```
#[must_use]
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return text[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            end = exponent_end;
        }
    }

    text[..end].parse().ok()
}
