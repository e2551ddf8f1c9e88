use crate::constants::POWERS_10;
use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::ops::common::{align_up, check_and_store};
use crate::round::{round_delta, RoundMode};
use crate::types::TypeDesc;

// Re-scales a value between two declared types. Scaling up multiplies by a
// power of ten and can overflow; scaling down divides, dropping digits per
// the caller's mode (casts use truncation). The result is magnitude-checked
// against the destination precision and stored at the destination width.
pub(crate) fn scale_impl(
    x: &Decimal,
    src: &TypeDesc,
    dst: &TypeDesc,
    mode: RoundMode,
) -> Result<Decimal, DecimalError> {
    let v = x.unscaled();
    let scaled = if dst.scale() >= src.scale() {
        align_up(v, src.scale(), dst.scale()).ok_or(DecimalError::Overflow)?
    } else {
        let base = POWERS_10[(src.scale() - dst.scale()) as usize];
        let retained = v / base;
        retained + round_delta(v % base, base, retained, mode)
    };
    check_and_store(scaled, dst)
}
