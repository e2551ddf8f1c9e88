use crate::constants::MAX_STR_BUFFER_SIZE;
use crate::decimal::Decimal;
use crate::types::TypeDesc;

use arrayvec::{ArrayString, ArrayVec};

// Canonical rendering: sign, whole digits, a point with exactly `scale`
// digits after it (none when the scale is zero), zero-padded so a value
// below one keeps a leading zero. No trailing-zero stripping, no grouping;
// the output round-trips through parse exactly. The buffer never
// allocates; the owned `String` the public API returns is built from it.
pub(crate) fn to_str_internal(value: &Decimal, ty: &TypeDesc) -> ArrayString<MAX_STR_BUFFER_SIZE> {
    let scale = ty.scale() as usize;

    let mut digits = ArrayVec::<u8, MAX_STR_BUFFER_SIZE>::new();
    let mut working = value.unscaled().unsigned_abs();
    while working != 0 {
        digits.push(b'0' + (working % 10) as u8);
        working /= 10;
    }
    // Pad so at least one digit lands before the point.
    while digits.len() <= scale {
        digits.push(b'0');
    }

    let mut rep = ArrayString::new();
    if value.is_negative() {
        rep.push('-');
    }
    for i in (0..digits.len()).rev() {
        rep.push(char::from(digits[i]));
        if scale > 0 && i == scale {
            rep.push('.');
        }
    }
    rep
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::MAX_UNSCALED;

    fn fmt(value: Decimal, precision: u8, scale: u8) -> String {
        to_str_internal(&value, &TypeDesc::new(precision, scale)).to_string()
    }

    #[test]
    fn pads_values_below_one() {
        assert_eq!(fmt(Decimal::D8(-45), 10, 2), "-0.45");
        assert_eq!(fmt(Decimal::D8(45), 10, 2), "0.45");
        assert_eq!(fmt(Decimal::D4(5), 9, 4), "0.0005");
    }

    #[test]
    fn zero_scale_omits_the_point() {
        assert_eq!(fmt(Decimal::D4(1_234), 9, 0), "1234");
        assert_eq!(fmt(Decimal::D4(0), 9, 0), "0");
        assert_eq!(fmt(Decimal::D4(-7), 9, 0), "-7");
    }

    #[test]
    fn zero_keeps_its_scale_digits() {
        assert_eq!(fmt(Decimal::D4(0), 9, 2), "0.00");
        assert_eq!(fmt(Decimal::D16(0), 38, 5), "0.00000");
    }

    #[test]
    fn point_placement() {
        assert_eq!(fmt(Decimal::D4(123_456), 8, 3), "123.456");
        assert_eq!(fmt(Decimal::D8(12_345_678), 8, 3), "12345.678");
        assert_eq!(fmt(Decimal::D8(-12_345_678), 8, 3), "-12345.678");
    }

    #[test]
    fn no_trailing_zero_stripping() {
        assert_eq!(fmt(Decimal::D4(1_000), 9, 3), "1.000");
    }

    #[test]
    fn widest_value_fits_the_buffer() {
        assert_eq!(
            fmt(Decimal::D16(-MAX_UNSCALED[38]), 38, 38),
            format!("-0.{}", "9".repeat(38))
        );
    }
}
