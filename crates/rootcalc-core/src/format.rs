//! `%g`-style general float formatting.

/// Significant digits used by `%g` when no precision is given.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest precision accepted by the settings layer.
pub const MAX_PRECISION: usize = 17;

/// Formats `value` like C's `printf("%.*g", precision, value)`.
///
/// Fixed notation is used when the decimal exponent `X` (after rounding to
/// `precision` significant digits) satisfies `precision > X >= -4`, otherwise
/// exponential notation with at least two exponent digits. Trailing zeros and
/// a dangling decimal point are removed.
///
/// ```
/// use rootcalc_core::format_general;
///
/// assert_eq!(format_general(2.0_f64.sqrt(), 6), "1.41421");
/// assert_eq!(format_general(1e10, 6), "1e+10");
/// ```
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        let token = if value.is_sign_negative() { "-nan" } else { "nan" };
        return token.to_string();
    }
    if value.is_infinite() {
        let token = if value < 0.0 { "-inf" } else { "inf" };
        return token.to_string();
    }
    if value == 0.0 {
        let token = if value.is_sign_negative() { "-0" } else { "0" };
        return token.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let significant = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= significant {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (significant - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
