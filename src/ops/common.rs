use crate::constants::POWERS_10;
use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::types::TypeDesc;

use ethnum::I256;

/// `10^n` for `n` up to 76, the largest shift a divide's numerator
/// pre-multiplication can require (result scale 38 plus divisor scale 38).
pub(in crate::ops) fn i256_pow10(n: u32) -> I256 {
    debug_assert!(n <= 76);
    if n <= 38 {
        I256::from(POWERS_10[n as usize])
    } else {
        I256::from(POWERS_10[38]) * I256::from(POWERS_10[(n - 38) as usize])
    }
}

/// Multiplies an unscaled value up to a finer scale. `None` means the
/// product left the 128-bit range (possible only for 16-byte operands).
pub(in crate::ops) fn align_up(v: i128, from: u8, to: u8) -> Option<i128> {
    debug_assert!(to >= from);
    v.checked_mul(POWERS_10[(to - from) as usize])
}

/// Magnitude-checks a finished kernel result against the declared result
/// precision and stores it at the declared width.
pub(in crate::ops) fn check_and_store(v: i128, result_type: &TypeDesc) -> Result<Decimal, DecimalError> {
    if v.unsigned_abs() > result_type.max_unscaled() as u128 {
        return Err(DecimalError::Overflow);
    }
    Ok(Decimal::from_unscaled(result_type.byte_width(), v))
}

/// The 256-bit variant: anything beyond `MAX_UNSCALED[precision]` is
/// overflow, so the narrowing back to 128 bits can never truncate.
pub(in crate::ops) fn check_and_store_i256(v: I256, result_type: &TypeDesc) -> Result<Decimal, DecimalError> {
    let max = I256::from(result_type.max_unscaled());
    if v > max || v < -max {
        return Err(DecimalError::Overflow);
    }
    Ok(Decimal::from_unscaled(result_type.byte_width(), v.as_i128()))
}
