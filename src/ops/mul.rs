use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::ops::common::{check_and_store, check_and_store_i256, i256_pow10};
use crate::types::TypeDesc;

use ethnum::I256;

// The product's natural scale is the sum of the operand scales, so no
// realignment happens on the common path. The product runs in 128 bits when
// it fits there; 16-byte operands fall back to an exact 256-bit product
// that narrows with the magnitude check. When the planner clamped the
// declared scale below the natural one, the surplus fractional digits drop
// with truncation toward zero.
pub(crate) fn mul_impl(
    x: &Decimal,
    x_type: &TypeDesc,
    y: &Decimal,
    y_type: &TypeDesc,
    result_type: &TypeDesc,
) -> Result<Decimal, DecimalError> {
    let product_scale = x_type.scale() as u32 + y_type.scale() as u32;
    let result_scale = result_type.scale() as u32;
    debug_assert!(result_scale <= product_scale);
    let shift = product_scale - result_scale;

    if shift == 0 {
        if let Some(product) = x.unscaled().checked_mul(y.unscaled()) {
            return check_and_store(product, result_type);
        }
    }

    let mut product = I256::from(x.unscaled()) * I256::from(y.unscaled());
    if shift > 0 {
        product /= i256_pow10(shift);
    }
    check_and_store_i256(product, result_type)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::MAX_UNSCALED;
    use crate::types::Width;

    #[test]
    fn exact_product_at_the_summed_scale() {
        // 12345.6789 * 23.456 at scales 4 and 3
        let xt = TypeDesc::new(9, 4);
        let yt = TypeDesc::new(8, 3);
        let rt = TypeDesc::for_mul(&xt, &yt);
        assert_eq!((rt.precision(), rt.scale()), (18, 7));
        let r = mul_impl(&Decimal::D4(123_456_789), &xt, &Decimal::D4(23_456), &yt, &rt).unwrap();
        assert_eq!(r.width(), Width::W8);
        assert_eq!(r.unscaled(), 123_456_789i128 * 23_456);
    }

    #[test]
    fn sign_follows_the_operands() {
        let xt = TypeDesc::new(9, 4);
        let yt = TypeDesc::new(8, 3);
        let rt = TypeDesc::for_mul(&xt, &yt);
        let r = mul_impl(&Decimal::D4(123_456_789), &xt, &Decimal::D4(-23_456), &yt, &rt).unwrap();
        assert_eq!(r.unscaled(), -(123_456_789i128 * 23_456));
    }

    #[test]
    fn wide_product_widens_to_256_bits() {
        let t = TypeDesc::new(38, 0);
        let rt = TypeDesc::for_mul(&t, &t);
        let big = Decimal::D16(MAX_UNSCALED[38]);
        // MAX * MAX needs 256 bits and cannot fit 38 digits.
        assert_eq!(mul_impl(&big, &t, &big, &t, &rt), Err(DecimalError::Overflow));
        // MAX * 1 survives the same path exactly.
        assert_eq!(
            mul_impl(&big, &t, &Decimal::D16(1), &t, &rt),
            Ok(Decimal::D16(MAX_UNSCALED[38]))
        );
        // MAX * 0 collapses to zero.
        assert_eq!(
            mul_impl(&big, &t, &Decimal::D16(0), &t, &rt),
            Ok(Decimal::D16(0))
        );
    }

    #[test]
    fn clamped_scale_drops_surplus_fraction_toward_zero() {
        // Two scale-20 operands: the natural product scale 40 clamps to 38,
        // so two fractional digits drop.
        let t = TypeDesc::new(20, 20);
        let rt = TypeDesc::for_mul(&t, &t);
        assert_eq!((rt.precision(), rt.scale()), (38, 38));
        let r = mul_impl(&Decimal::D16(199), &t, &Decimal::D16(1), &t, &rt).unwrap();
        assert_eq!(r.unscaled(), 1);
        let r = mul_impl(&Decimal::D16(-199), &t, &Decimal::D16(1), &t, &rt).unwrap();
        assert_eq!(r.unscaled(), -1);
    }
}
