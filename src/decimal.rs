use crate::constants::POWERS_10;
use crate::error::{DecimalError, ParseResult};
use crate::ops;
use crate::round::RoundMode;
use crate::types::{TypeDesc, Width};

use core::cmp::Ordering;

/// A fixed-point decimal value: a signed unscaled integer at one of three
/// storage widths.
///
/// The logical numeric value is `unscaled * 10^(-scale)`, where the scale
/// comes from the [`TypeDesc`] the caller passes into every operation —
/// values do not carry their descriptor at rest. The original engine passed
/// operand payloads as opaque pointers re-cast by byte width; this sum type
/// replaces that with explicit extraction.
///
/// Derived equality is representation equality: `D4(1)` and `D8(1)` are
/// different values of different widths. Logical comparison across widths
/// and scales goes through [`Decimal::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decimal {
    D4(i32),
    D8(i64),
    D16(i128),
}

impl Decimal {
    /// Zero at the given storage width.
    pub const fn zero(width: Width) -> Decimal {
        match width {
            Width::W4 => Decimal::D4(0),
            Width::W8 => Decimal::D8(0),
            Width::W16 => Decimal::D16(0),
        }
    }

    /// Builds a value of `ty`'s width from an unscaled integer, reporting
    /// overflow when the magnitude exceeds what `ty.precision()` permits.
    pub fn checked_new(ty: &TypeDesc, unscaled: i128) -> Result<Decimal, DecimalError> {
        if unscaled.unsigned_abs() > ty.max_unscaled() as u128 {
            return Err(DecimalError::Overflow);
        }
        Ok(Self::from_unscaled(ty.byte_width(), unscaled))
    }

    // The value is known to fit the width; kernels call this after their own
    // magnitude checks.
    pub(crate) fn from_unscaled(width: Width, unscaled: i128) -> Decimal {
        match width {
            Width::W4 => {
                debug_assert!(i32::try_from(unscaled).is_ok());
                Decimal::D4(unscaled as i32)
            }
            Width::W8 => {
                debug_assert!(i64::try_from(unscaled).is_ok());
                Decimal::D8(unscaled as i64)
            }
            Width::W16 => Decimal::D16(unscaled),
        }
    }

    /// The stored unscaled integer, sign-extended to 128 bits.
    pub const fn unscaled(&self) -> i128 {
        match *self {
            Decimal::D4(v) => v as i128,
            Decimal::D8(v) => v as i128,
            Decimal::D16(v) => v,
        }
    }

    /// The storage width of this value.
    pub const fn width(&self) -> Width {
        match self {
            Decimal::D4(_) => Width::W4,
            Decimal::D8(_) => Width::W8,
            Decimal::D16(_) => Width::W16,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.unscaled() == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.unscaled() < 0
    }

    /// Magnitude at the same width. Cannot overflow: valid values stay
    /// within `10^precision - 1`, well below each width's two's-complement
    /// minimum.
    pub fn abs(&self) -> Decimal {
        match *self {
            Decimal::D4(v) => Decimal::D4(v.abs()),
            Decimal::D8(v) => Decimal::D8(v.abs()),
            Decimal::D16(v) => Decimal::D16(v.abs()),
        }
    }

    /// Sign-extends to a wider storage width. Lossless.
    ///
    /// # Panics
    ///
    /// Panics when `width` is narrower than the current width; narrowing
    /// must go through [`Decimal::narrow_to`] so overflow is reported.
    pub fn widen_to(&self, width: Width) -> Decimal {
        assert!(width >= self.width(), "widen_to cannot narrow; use narrow_to");
        Self::from_unscaled(width, self.unscaled())
    }

    /// Converts to a narrower (or equal) storage width, reporting overflow
    /// when the value does not fit the target integer.
    pub fn narrow_to(&self, width: Width) -> Result<Decimal, DecimalError> {
        let v = self.unscaled();
        match width {
            Width::W4 => i32::try_from(v)
                .map(Decimal::D4)
                .map_err(|_| DecimalError::Overflow),
            Width::W8 => i64::try_from(v)
                .map(Decimal::D8)
                .map_err(|_| DecimalError::Overflow),
            Width::W16 => Ok(Decimal::D16(v)),
        }
    }

    /// The digits left of the decimal point, truncated toward zero.
    pub fn whole_part(&self, ty: &TypeDesc) -> i128 {
        self.unscaled() / POWERS_10[ty.scale() as usize]
    }

    /// Magnitude of the digits right of the decimal point.
    pub fn fractional_part(&self, ty: &TypeDesc) -> i128 {
        (self.unscaled() % POWERS_10[ty.scale() as usize]).abs()
    }

    /// Adds `other` under the planner-supplied result type.
    ///
    /// With operands valid under their declared types, only a 16-byte
    /// result can overflow.
    pub fn add(
        &self,
        this_type: &TypeDesc,
        other: &Decimal,
        other_type: &TypeDesc,
        result_type: &TypeDesc,
    ) -> Result<Decimal, DecimalError> {
        ops::add_impl(self, this_type, other, other_type, result_type, false)
    }

    /// Subtracts `other` under the planner-supplied result type.
    pub fn sub(
        &self,
        this_type: &TypeDesc,
        other: &Decimal,
        other_type: &TypeDesc,
        result_type: &TypeDesc,
    ) -> Result<Decimal, DecimalError> {
        ops::add_impl(self, this_type, other, other_type, result_type, true)
    }

    /// Multiplies by `other`, widening to 256 bits when the exact product
    /// cannot be held in 128.
    pub fn mul(
        &self,
        this_type: &TypeDesc,
        other: &Decimal,
        other_type: &TypeDesc,
        result_type: &TypeDesc,
    ) -> Result<Decimal, DecimalError> {
        ops::mul_impl(self, this_type, other, other_type, result_type)
    }

    /// Divides by `other` with truncation toward zero at the result scale.
    ///
    /// A zero divisor reports [`DecimalError::DivideByZero`]; the caller
    /// surfaces it as NULL.
    pub fn div(
        &self,
        this_type: &TypeDesc,
        other: &Decimal,
        other_type: &TypeDesc,
        result_type: &TypeDesc,
    ) -> Result<Decimal, DecimalError> {
        ops::div_impl(self, this_type, other, other_type, result_type)
    }

    /// Remainder with the sign of the dividend. Zero divisor policy matches
    /// [`Decimal::div`].
    pub fn modulo(
        &self,
        this_type: &TypeDesc,
        other: &Decimal,
        other_type: &TypeDesc,
        result_type: &TypeDesc,
    ) -> Result<Decimal, DecimalError> {
        ops::mod_impl(self, this_type, other, other_type, result_type)
    }

    /// Compares two values of possibly different widths and scales.
    /// Comparisons never lose information and never overflow.
    pub fn compare(
        &self,
        this_type: &TypeDesc,
        other: &Decimal,
        other_type: &TypeDesc,
    ) -> Ordering {
        ops::cmp_impl(self, this_type, other, other_type)
    }

    /// Re-scales and re-widths this value from `this_type` to `target_type`.
    /// Scale reduction drops digits per `mode`; the cast default is
    /// [`RoundMode::Truncate`].
    pub fn scale_to(
        &self,
        this_type: &TypeDesc,
        target_type: &TypeDesc,
        mode: RoundMode,
    ) -> Result<Decimal, DecimalError> {
        ops::scale_impl(self, this_type, target_type, mode)
    }

    /// Rounds to `result_type.scale()` with the given mode.
    pub fn round(
        &self,
        this_type: &TypeDesc,
        result_type: &TypeDesc,
        mode: RoundMode,
    ) -> Result<Decimal, DecimalError> {
        crate::round::round(self, this_type, result_type, mode)
    }

    /// Rounds to `10^rounding_scale` units (tens, hundreds, ...).
    /// `result_type` must carry scale zero.
    pub fn round_negative_scale(
        &self,
        this_type: &TypeDesc,
        result_type: &TypeDesc,
        rounding_scale: u8,
        mode: RoundMode,
    ) -> Result<Decimal, DecimalError> {
        crate::round::round_negative_scale(self, this_type, result_type, rounding_scale, mode)
    }

    /// Parses an ASCII decimal literal into `ty`'s width and scale.
    pub fn parse_str(input: &str, ty: &TypeDesc) -> ParseResult {
        crate::str::parse_bytes(input.as_bytes(), ty)
    }

    /// Parses a raw byte slice (a columnar string payload) into `ty`.
    pub fn parse_bytes(input: &[u8], ty: &TypeDesc) -> ParseResult {
        crate::str::parse_bytes(input, ty)
    }

    /// Canonical ASCII rendering under `ty`. Round-trip exact with
    /// [`Decimal::parse_str`].
    pub fn format(&self, ty: &TypeDesc) -> String {
        crate::str::to_str_internal(self, ty).to_string()
    }
}
