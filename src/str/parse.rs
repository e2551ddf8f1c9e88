use crate::constants::POWERS_10;
use crate::decimal::Decimal;
use crate::error::ParseResult;
use crate::types::TypeDesc;

/// Parses an ASCII decimal literal against a target type.
///
/// Grammar: optional surrounding whitespace, an optional `+`/`-`, digits
/// with at most one `.`, at least one digit, no exponent. Leading zeros do
/// not count toward precision. More integer digits than
/// `precision - scale` is overflow; fractional digits beyond `scale` are
/// dropped toward zero and reported as underflow with the truncated value.
pub(crate) fn parse_bytes(bytes: &[u8], ty: &TypeDesc) -> ParseResult {
    let whole_digits_allowed = (ty.precision() - ty.scale()) as u32;
    let scale = ty.scale() as u32;

    let mut start = 0;
    let mut end = bytes.len();
    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    if start == end {
        return ParseResult::Invalid;
    }

    let mut negative = false;
    match bytes[start] {
        b'-' => {
            negative = true;
            start += 1;
        }
        b'+' => start += 1,
        _ => {}
    }

    let mut value: u128 = 0;
    let mut seen_digit = false;
    let mut seen_point = false;
    let mut whole_digits: u32 = 0;
    let mut frac_digits: u32 = 0;
    let mut truncated = false;

    for &b in &bytes[start..end] {
        match b {
            b'0'..=b'9' => {
                let digit = (b - b'0') as u128;
                seen_digit = true;
                if seen_point {
                    if frac_digits < scale {
                        value = value * 10 + digit;
                        frac_digits += 1;
                    } else {
                        // Truncation toward zero: the digit is discarded.
                        truncated = true;
                    }
                } else if value != 0 || digit != 0 {
                    whole_digits += 1;
                    if whole_digits > whole_digits_allowed {
                        return ParseResult::Overflow;
                    }
                    value = value * 10 + digit;
                }
            }
            b'.' if !seen_point => seen_point = true,
            _ => return ParseResult::Invalid,
        }
    }
    if !seen_digit {
        return ParseResult::Invalid;
    }

    // Shift up to the declared scale; the digit-count checks above keep the
    // accumulator within 10^precision - 1.
    value *= POWERS_10[(scale - frac_digits) as usize] as u128;
    debug_assert!(value <= ty.max_unscaled() as u128);

    let unscaled = if negative { -(value as i128) } else { value as i128 };
    let parsed = Decimal::from_unscaled(ty.byte_width(), unscaled);
    if truncated {
        ParseResult::Underflow(parsed)
    } else {
        ParseResult::Exact(parsed)
    }
}
