use crate::constants::{MAX_PRECISION, MAX_UNSCALED, POWERS_10};
use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::ops;
use crate::types::{TypeDesc, Width};

/// How dropped digits adjust the retained value when a scale is reduced.
///
/// `Truncate` drops toward zero. `HalfUp` rounds away from zero at the
/// midpoint, e.g. 6.5 -> 7 and -6.5 -> -7. `HalfEven` resolves the midpoint
/// toward the even neighbour, e.g. 6.5 -> 6 and 7.5 -> 8. `Ceiling` rounds
/// toward positive infinity, `Floor` toward negative infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundMode {
    Truncate,
    HalfUp,
    HalfEven,
    Ceiling,
    Floor,
}

// The unit to add to the truncated value: -1, 0 or +1. `frac` is the
// dropped digits with the sign of the source value, `base` the power of ten
// that was divided out, `retained` the truncated result (its low digit
// decides HalfEven ties). Powers of ten above one are even, so the midpoint
// tests compare against `base / 2` without doubling `frac`.
pub(crate) fn round_delta(frac: i128, base: i128, retained: i128, mode: RoundMode) -> i128 {
    if frac == 0 {
        return 0;
    }
    let sign = if frac < 0 { -1 } else { 1 };
    match mode {
        RoundMode::Truncate => 0,
        RoundMode::HalfUp => {
            if frac.abs() >= base / 2 {
                sign
            } else {
                0
            }
        }
        RoundMode::HalfEven => {
            let magnitude = frac.abs();
            let half = base / 2;
            if magnitude > half || (magnitude == half && retained & 1 != 0) {
                sign
            } else {
                0
            }
        }
        RoundMode::Ceiling => {
            if frac > 0 {
                1
            } else {
                0
            }
        }
        RoundMode::Floor => {
            if frac < 0 {
                -1
            } else {
                0
            }
        }
    }
}

// Rounds to `result_type.scale()`: a truncating cast plus the delta from
// the dropped digits. The delta add cannot overflow — when it is nonzero at
// least one digit was dropped, and the planner sizes the result with a
// digit to spare.
pub(crate) fn round(
    x: &Decimal,
    x_type: &TypeDesc,
    result_type: &TypeDesc,
    mode: RoundMode,
) -> Result<Decimal, DecimalError> {
    let cast = ops::scale_impl(x, x_type, result_type, RoundMode::Truncate)?;
    if result_type.scale() >= x_type.scale() {
        return Ok(cast);
    }

    let base = POWERS_10[(x_type.scale() - result_type.scale()) as usize];
    let v = x.unscaled();
    let delta = round_delta(v % base, base, v / base, mode);
    if delta == 0 {
        return Ok(cast);
    }
    Ok(Decimal::from_unscaled(
        result_type.byte_width(),
        cast.unscaled() + delta,
    ))
}

// Rounds to a negative target scale, i.e. to whole tens, hundreds, ... of
// `10^rounding_scale` units. `result_type` carries scale zero; the rounding
// happens on the cast value modulo the base. Only the 16-byte case can
// overflow here — the planner picks a high enough precision for the others.
pub(crate) fn round_negative_scale(
    x: &Decimal,
    x_type: &TypeDesc,
    result_type: &TypeDesc,
    rounding_scale: u8,
    mode: RoundMode,
) -> Result<Decimal, DecimalError> {
    debug_assert_eq!(result_type.scale(), 0);
    debug_assert!(rounding_scale >= 1 && rounding_scale <= MAX_PRECISION);

    let cast = ops::scale_impl(x, x_type, result_type, RoundMode::Truncate)?;
    let base = POWERS_10[rounding_scale as usize];
    let v = cast.unscaled();
    let rem = v % base;
    let delta = round_delta(rem, base, v / base, mode) * base - rem;
    if cast.width() == Width::W16
        && MAX_UNSCALED[MAX_PRECISION as usize] - delta.abs() < v.abs()
    {
        return Err(DecimalError::Overflow);
    }
    Ok(Decimal::from_unscaled(result_type.byte_width(), v + delta))
}
