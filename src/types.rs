use crate::constants::{MAX_PRECISION, MAX_PRECISION_D4, MAX_PRECISION_D8, MAX_UNSCALED};
use core::fmt;

/// Storage width of a decimal's unscaled integer, in bytes.
///
/// The original engine dispatched on a raw byte count recovered from opaque
/// payload pointers; here the three-way split is an exhaustive enum so every
/// width switch is checked by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Width {
    W4,
    W8,
    W16,
}

impl Width {
    /// Byte size of the storage integer.
    pub const fn bytes(self) -> usize {
        match self {
            Width::W4 => 4,
            Width::W8 => 8,
            Width::W16 => 16,
        }
    }
}

/// A decimal type descriptor: `(precision, scale)`.
///
/// `precision` is the maximum count of significant base-10 digits
/// (`1..=38`); `scale` is the number of digits right of the decimal point
/// (`0..=precision`). Values never carry their descriptor at rest — it
/// travels alongside them through every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDesc {
    precision: u8,
    scale: u8,
}

impl TypeDesc {
    /// Creates a type descriptor.
    ///
    /// # Panics
    ///
    /// Panics when `precision` is outside `1..=38` or `scale` exceeds
    /// `precision`. Descriptors come from the planner, which guarantees
    /// both; a violation here is a caller bug, not a data error.
    pub const fn new(precision: u8, scale: u8) -> TypeDesc {
        assert!(precision >= 1 && precision <= MAX_PRECISION, "precision must be 1..=38");
        assert!(scale <= precision, "scale must not exceed precision");
        TypeDesc { precision, scale }
    }

    pub const fn precision(&self) -> u8 {
        self.precision
    }

    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// The storage width that holds `10^precision - 1`.
    pub const fn byte_width(&self) -> Width {
        if self.precision <= MAX_PRECISION_D4 {
            Width::W4
        } else if self.precision <= MAX_PRECISION_D8 {
            Width::W8
        } else {
            Width::W16
        }
    }

    /// The largest unscaled magnitude a value of this type may carry.
    pub(crate) const fn max_unscaled(&self) -> i128 {
        MAX_UNSCALED[self.precision as usize]
    }

    /// Result type of `add`/`sub`: enough whole digits for either operand
    /// plus one carry digit, at the finer scale.
    pub fn for_add(x: &TypeDesc, y: &TypeDesc) -> TypeDesc {
        let scale = x.scale.max(y.scale);
        let whole = (x.precision - x.scale).max(y.precision - y.scale);
        Self::clamped(whole as u32 + scale as u32 + 1, scale as u32)
    }

    /// Result type of `mul`: exact product digits, summed scales.
    pub fn for_mul(x: &TypeDesc, y: &TypeDesc) -> TypeDesc {
        Self::clamped(
            x.precision as u32 + y.precision as u32 + 1,
            x.scale as u32 + y.scale as u32,
        )
    }

    /// Result type of `div`: at least four fractional digits, enough whole
    /// digits for the extreme quotient.
    pub fn for_div(x: &TypeDesc, y: &TypeDesc) -> TypeDesc {
        let scale = 4u32.max(x.scale as u32 + y.precision as u32 + 1);
        let precision = (x.precision - x.scale) as u32 + y.scale as u32 + scale;
        Self::clamped(precision, scale)
    }

    /// Result type of `mod`: bounded by the smaller operand's whole digits.
    pub fn for_mod(x: &TypeDesc, y: &TypeDesc) -> TypeDesc {
        let scale = x.scale.max(y.scale);
        let whole = (x.precision - x.scale).min(y.precision - y.scale);
        Self::clamped(whole as u32 + scale as u32, scale as u32)
    }

    // Precision clamps to 38 first; scale then clamps to the clamped
    // precision so `scale <= precision` always holds.
    fn clamped(precision: u32, scale: u32) -> TypeDesc {
        let precision = precision.clamp(1, MAX_PRECISION as u32) as u8;
        let scale = (scale as u8).min(precision);
        TypeDesc { precision, scale }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decimal({},{})", self.precision, self.scale)
    }
}
