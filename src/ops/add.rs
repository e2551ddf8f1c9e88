use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::ops::common::{align_up, check_and_store};
use crate::types::TypeDesc;

// Addition and subtraction share one kernel: both operands align to the
// result scale, then the signed integers combine. The planner sizes the
// result with one extra whole digit, so with valid operands only a 16-byte
// result can overflow — either while aligning or in the final sum.
pub(crate) fn add_impl(
    x: &Decimal,
    x_type: &TypeDesc,
    y: &Decimal,
    y_type: &TypeDesc,
    result_type: &TypeDesc,
    subtract: bool,
) -> Result<Decimal, DecimalError> {
    debug_assert_eq!(result_type.scale(), x_type.scale().max(y_type.scale()));

    let result_scale = result_type.scale();
    let x_aligned =
        align_up(x.unscaled(), x_type.scale(), result_scale).ok_or(DecimalError::Overflow)?;
    let mut y_aligned =
        align_up(y.unscaled(), y_type.scale(), result_scale).ok_or(DecimalError::Overflow)?;
    if subtract {
        y_aligned = -y_aligned;
    }

    let sum = x_aligned.checked_add(y_aligned).ok_or(DecimalError::Overflow)?;
    check_and_store(sum, result_type)
}
