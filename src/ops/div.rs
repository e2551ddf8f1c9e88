use crate::constants::POWERS_10;
use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::ops::common::{check_and_store, check_and_store_i256, i256_pow10};
use crate::types::TypeDesc;

use ethnum::I256;

// Divide pre-multiplies the numerator by 10^(result_scale + s2 - s1) so the
// integer quotient lands at the result scale, then truncates toward zero.
// The shift is always positive under the planner contract. 16-byte
// numerators widen to 256 bits; a pre-multiplication that exceeds even that
// range reports overflow, 256-bit intermediates being the ceiling.
pub(crate) fn div_impl(
    x: &Decimal,
    x_type: &TypeDesc,
    y: &Decimal,
    y_type: &TypeDesc,
    result_type: &TypeDesc,
) -> Result<Decimal, DecimalError> {
    if y.is_zero() {
        return Err(DecimalError::DivideByZero);
    }

    let shift = result_type.scale() as i32 + y_type.scale() as i32 - x_type.scale() as i32;
    debug_assert!(shift >= 0);
    let shift = shift as u32;

    if shift <= 38 {
        if let Some(numerator) = x.unscaled().checked_mul(POWERS_10[shift as usize]) {
            return check_and_store(numerator / y.unscaled(), result_type);
        }
    }

    let numerator = I256::from(x.unscaled())
        .checked_mul(i256_pow10(shift))
        .ok_or(DecimalError::Overflow)?;
    check_and_store_i256(numerator / I256::from(y.unscaled()), result_type)
}
