use crate::constants::POWERS_10;
use crate::decimal::Decimal;
use crate::ops::common::i256_pow10;
use crate::types::{TypeDesc, Width};

use core::cmp::Ordering;
use ethnum::I256;

// Comparison aligns both operands to the finer scale and compares the
// signed integers. The aligned values of 4- and 8-byte operands always fit
// 128 bits; a 16-byte operand routes through 256 bits instead, so no
// information is ever lost and nothing overflows.
pub(crate) fn cmp_impl(
    x: &Decimal,
    x_type: &TypeDesc,
    y: &Decimal,
    y_type: &TypeDesc,
) -> Ordering {
    // Sign differences settle it without any alignment.
    let x_sign = x.unscaled().signum();
    let y_sign = y.unscaled().signum();
    if x_sign != y_sign {
        return x_sign.cmp(&y_sign);
    }
    if x_sign == 0 {
        return Ordering::Equal;
    }

    let scale = x_type.scale().max(y_type.scale());
    if x_type.byte_width() != Width::W16 && y_type.byte_width() != Width::W16 {
        let a = x.unscaled() * POWERS_10[(scale - x_type.scale()) as usize];
        let b = y.unscaled() * POWERS_10[(scale - y_type.scale()) as usize];
        a.cmp(&b)
    } else {
        let a = I256::from(x.unscaled()) * i256_pow10((scale - x_type.scale()) as u32);
        let b = I256::from(y.unscaled()) * i256_pow10((scale - y_type.scale()) as u32);
        a.cmp(&b)
    }
}
