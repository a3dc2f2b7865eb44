//! Number parsing with the forgiving semantics of C `atof`.
//!
//! The longest numeric prefix of the text is converted and anything after it
//! is ignored. Text without a numeric prefix becomes `0.0`. The strict
//! variant uses the same grammar but requires the whole text to be consumed.

use crate::error::InputError;

/// Longest numeric prefix found in a string.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Prefix {
    value: f64,
    /// Byte offset just past the prefix.
    end: usize,
}

/// Parses `text` the way `atof` does. Never fails.
pub fn parse_number(text: &str) -> f64 {
    match scan(text) {
        Some(prefix) => {
            if prefix.end < text.len() {
                log::debug!(
                    "ignoring trailing input {:?} after number",
                    &text[prefix.end..]
                );
            }
            prefix.value
        }
        None => {
            log::debug!("no numeric prefix in {:?}, using 0", text);
            0.0
        }
    }
}

/// Parses `text` requiring that it is a number and nothing else.
///
/// Leading whitespace is allowed, trailing characters are not.
pub fn parse_number_strict(text: &str) -> Result<f64, InputError> {
    match scan(text) {
        Some(prefix) if prefix.end == text.len() => Ok(prefix.value),
        _ => Err(InputError::InvalidNumber {
            text: text.to_string(),
        }),
    }
}

fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn scan(text: &str) -> Option<Prefix> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while bytes.get(i).is_some_and(|b| is_c_space(*b)) {
        i += 1;
    }

    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let (magnitude, end) = scan_special(bytes, i)
        .or_else(|| scan_hex(bytes, i))
        .or_else(|| scan_decimal(text, i))?;

    let value = if negative { -magnitude } else { magnitude };
    Some(Prefix { value, end })
}

fn starts_with_ignore_case(bytes: &[u8], at: usize, word: &str) -> bool {
    bytes
        .get(at..at + word.len())
        .is_some_and(|s| s.eq_ignore_ascii_case(word.as_bytes()))
}

/// `inf`, `infinity`, `nan` and `nan(chars)`.
fn scan_special(bytes: &[u8], at: usize) -> Option<(f64, usize)> {
    if starts_with_ignore_case(bytes, at, "infinity") {
        return Some((f64::INFINITY, at + 8));
    }
    if starts_with_ignore_case(bytes, at, "inf") {
        return Some((f64::INFINITY, at + 3));
    }
    if starts_with_ignore_case(bytes, at, "nan") {
        let mut end = at + 3;
        if bytes.get(end) == Some(&b'(') {
            let mut j = end + 1;
            while bytes
                .get(j)
                .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
            {
                j += 1;
            }
            if bytes.get(j) == Some(&b')') {
                end = j + 1;
            }
        }
        return Some((f64::NAN, end));
    }
    None
}

/// Exponent suffix such as `e-7` or `p+3`. Only consumed when it has digits.
fn scan_exponent(bytes: &[u8], at: usize, marker: u8) -> Option<(i64, usize)> {
    if !bytes.get(at).is_some_and(|b| b.eq_ignore_ascii_case(&marker)) {
        return None;
    }
    let mut i = at + 1;
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let digits_start = i;
    let mut value: i64 = 0;
    while let Some(&b) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    Some((if negative { -value } else { value }, i))
}

/// Hex digits collected into an integer mantissa and a binary exponent.
///
/// Holds at most 64 significant bits. Digits past that only move the
/// exponent, and any nonzero one sets the lowest bit so rounding to `f64`
/// still sees it.
#[derive(Debug, Default)]
struct HexMantissa {
    bits: u64,
    exponent: i64,
    sticky: bool,
}

impl HexMantissa {
    fn push(&mut self, digit: u32, fractional: bool) {
        if self.bits >> 60 == 0 {
            self.bits = self.bits << 4 | u64::from(digit);
            if fractional {
                self.exponent -= 4;
            }
        } else {
            self.sticky |= digit != 0;
            if !fractional {
                self.exponent += 4;
            }
        }
    }

    fn value(&self, binary_exponent: i64) -> f64 {
        if self.bits == 0 {
            return 0.0;
        }
        let bits = self.bits | u64::from(self.sticky);
        scale_by_pow2(bits as f64, self.exponent.saturating_add(binary_exponent))
    }
}

/// `value * 2^exponent` without the intermediate power over- or underflowing.
fn scale_by_pow2(mut value: f64, exponent: i64) -> f64 {
    const STEP: i64 = 1000;
    let mut exponent = exponent.clamp(-4 * STEP, 4 * STEP);
    while exponent > STEP && value.is_finite() {
        value *= 2f64.powi(STEP as i32);
        exponent -= STEP;
    }
    while exponent < -STEP && value != 0.0 {
        value *= 2f64.powi(-STEP as i32);
        exponent += STEP;
    }
    value * 2f64.powi(exponent as i32)
}

/// Hexadecimal float: `0x1.8p3`, `0xff`, `0x.4`.
fn scan_hex(bytes: &[u8], at: usize) -> Option<(f64, usize)> {
    if bytes.get(at) != Some(&b'0') || !matches!(bytes.get(at + 1), Some(b'x' | b'X')) {
        return None;
    }

    let hex_digit = |i: usize| bytes.get(i).and_then(|b| char::from(*b).to_digit(16));

    let mut i = at + 2;
    let mut mantissa = HexMantissa::default();
    let mut digits = 0;
    while let Some(d) = hex_digit(i) {
        mantissa.push(d, false);
        digits += 1;
        i += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        let mut j = i + 1;
        while let Some(d) = hex_digit(j) {
            mantissa.push(d, true);
            digits += 1;
            j += 1;
        }
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        // "0x" alone: only the leading zero is a number
        return Some((0.0, at + 1));
    }

    let mut binary_exponent = 0;
    if let Some((exponent, end)) = scan_exponent(bytes, i, b'p') {
        binary_exponent = exponent;
        i = end;
    }

    Some((mantissa.value(binary_exponent), i))
}

fn scan_decimal(text: &str, at: usize) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let mut i = at;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - at;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if let Some((_, end)) = scan_exponent(bytes, i, b'e') {
        i = end;
    }

    text[at..i].parse::<f64>().ok().map(|v| (v, i))
}
