use crate::constants::POWERS_10;
use crate::decimal::Decimal;
use crate::error::DecimalError;
use crate::round::RoundMode;
use crate::types::TypeDesc;

/// The cast matrix. Integer sources funnel through `i64` (the engine
/// promotes every integral operand there first); float sources truncate
/// toward zero; decimal targets are magnitude-checked; decimal-to-integer
/// reproduces the engine's truncating cast bit for bit.
impl Decimal {
    /// Integer to decimal: scale up and magnitude-check against the target
    /// precision.
    pub fn from_int(ty: &TypeDesc, value: i64) -> Result<Decimal, DecimalError> {
        let scaled = (value as i128)
            .checked_mul(POWERS_10[ty.scale() as usize])
            .ok_or(DecimalError::Overflow)?;
        Decimal::checked_new(ty, scaled)
    }

    /// Float to decimal with truncation toward zero. NaN and the infinities
    /// report overflow.
    pub fn from_f64(ty: &TypeDesc, value: f64) -> Result<Decimal, DecimalError> {
        let scaled = value * POWERS_10[ty.scale() as usize] as f64;
        // A NaN fails this comparison and falls through to the error.
        if scaled.abs() < POWERS_10[ty.precision() as usize] as f64 {
            Ok(Decimal::from_unscaled(ty.byte_width(), scaled.trunc() as i128))
        } else {
            Err(DecimalError::Overflow)
        }
    }

    pub fn from_f32(ty: &TypeDesc, value: f32) -> Result<Decimal, DecimalError> {
        Self::from_f64(ty, value as f64)
    }

    /// Decimal to `i64`: the whole part with a truncating cast and **no
    /// range check**, matching the engine evaluator's contract. A whole
    /// part outside the target range wraps silently.
    pub fn to_i64(&self, ty: &TypeDesc) -> i64 {
        self.whole_part(ty) as i64
    }

    pub fn to_i32(&self, ty: &TypeDesc) -> i32 {
        self.whole_part(ty) as i32
    }

    pub fn to_i16(&self, ty: &TypeDesc) -> i16 {
        self.whole_part(ty) as i16
    }

    pub fn to_i8(&self, ty: &TypeDesc) -> i8 {
        self.whole_part(ty) as i8
    }

    /// Decimal to double: exact to within one ulp for precisions up to 15.
    pub fn to_f64(&self, ty: &TypeDesc) -> f64 {
        self.unscaled() as f64 / POWERS_10[ty.scale() as usize] as f64
    }

    pub fn to_f32(&self, ty: &TypeDesc) -> f32 {
        self.to_f64(ty) as f32
    }

    pub fn to_bool(&self) -> bool {
        !self.is_zero()
    }

    /// Decimal to timestamp: the double value interpreted as seconds since
    /// the Unix epoch (the surrounding engine's contract).
    pub fn to_timestamp_seconds(&self, ty: &TypeDesc) -> f64 {
        self.to_f64(ty)
    }

    /// Decimal to decimal: a truncating rescale. Truncation is the stable
    /// cast contract; the rounding variants stay available through
    /// [`Decimal::round`].
    pub fn cast_to(&self, this_type: &TypeDesc, target_type: &TypeDesc) -> Result<Decimal, DecimalError> {
        self.scale_to(this_type, target_type, RoundMode::Truncate)
    }
}
