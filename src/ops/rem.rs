use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::ops::common::{align_up, check_and_store, check_and_store_i256, i256_pow10};
use crate::types::TypeDesc;

use ethnum::I256;

// Both operands align to the common scale, then the integer remainder keeps
// the sign of the dividend. Alignment of a 16-byte operand can leave 128
// bits; the 256-bit remainder still narrows back through the magnitude
// check because it is bounded by the aligned dividend.
pub(crate) fn mod_impl(
    x: &Decimal,
    x_type: &TypeDesc,
    y: &Decimal,
    y_type: &TypeDesc,
    result_type: &TypeDesc,
) -> Result<Decimal, DecimalError> {
    if y.is_zero() {
        return Err(DecimalError::DivideByZero);
    }

    let result_scale = result_type.scale();
    debug_assert_eq!(result_scale, x_type.scale().max(y_type.scale()));

    let x_aligned = align_up(x.unscaled(), x_type.scale(), result_scale);
    let y_aligned = align_up(y.unscaled(), y_type.scale(), result_scale);
    match (x_aligned, y_aligned) {
        (Some(a), Some(b)) => check_and_store(a % b, result_type),
        _ => {
            let a = I256::from(x.unscaled())
                * i256_pow10((result_scale - x_type.scale()) as u32);
            let b = I256::from(y.unscaled())
                * i256_pow10((result_scale - y_type.scale()) as u32);
            check_and_store_i256(a % b, result_type)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::POWERS_10;

    #[test]
    fn remainder_at_the_common_scale() {
        // 7.3 mod 2 = 1.3
        let xt = TypeDesc::new(3, 1);
        let yt = TypeDesc::new(1, 0);
        let rt = TypeDesc::for_mod(&xt, &yt);
        assert_eq!((rt.precision(), rt.scale()), (2, 1));
        let r = mod_impl(&Decimal::D4(73), &xt, &Decimal::D4(2), &yt, &rt).unwrap();
        assert_eq!(r, Decimal::D4(13));
    }

    #[test]
    fn remainder_takes_the_dividend_sign() {
        let t = TypeDesc::new(2, 0);
        let rt = TypeDesc::for_mod(&t, &t);
        let r = mod_impl(&Decimal::D4(-7), &t, &Decimal::D4(3), &t, &rt).unwrap();
        assert_eq!(r.unscaled(), -1);
        let r = mod_impl(&Decimal::D4(7), &t, &Decimal::D4(-3), &t, &rt).unwrap();
        assert_eq!(r.unscaled(), 1);
    }

    #[test]
    fn zero_divisor_is_nan() {
        let t = TypeDesc::new(4, 0);
        let rt = TypeDesc::for_mod(&t, &t);
        assert_eq!(
            mod_impl(&Decimal::D4(10), &t, &Decimal::D4(0), &t, &rt),
            Err(DecimalError::DivideByZero)
        );
    }

    #[test]
    fn wide_alignment_widens_to_256_bits() {
        // Aligning a 38-digit integer to scale 38 leaves 128 bits.
        let xt = TypeDesc::new(38, 0);
        let yt = TypeDesc::new(38, 38);
        let rt = TypeDesc::for_mod(&xt, &yt);
        assert_eq!((rt.precision(), rt.scale()), (38, 38));
        let x = Decimal::D16(POWERS_10[20]);
        let y = Decimal::D16(POWERS_10[30]);
        // 10^20 aligned is 10^58; 10^58 mod 10^30 = 0.
        let r = mod_impl(&x, &xt, &y, &yt, &rt).unwrap();
        assert_eq!(r.unscaled(), 0);
        // A divisor that does not divide it evenly leaves the remainder.
        let y = Decimal::D16(3);
        let r = mod_impl(&x, &xt, &y, &yt, &rt).unwrap();
        assert_eq!(r.unscaled(), 1);
    }
}
