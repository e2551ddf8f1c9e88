//! Fixed-point decimal arithmetic kernels for an analytical query engine.
//!
//! Values are signed unscaled integers at one of three storage widths (4, 8
//! or 16 bytes) interpreted through an external `(precision, scale)` type
//! descriptor, with precision up to 38 digits. The crate provides parsing,
//! formatting, scale and width conversion, add/sub/mul/div/mod, comparison,
//! five rounding modes and the cast matrix against integers, floats, bool,
//! timestamp and strings.
//!
//! Every operation is a pure function: results are exact under the
//! planner-declared result type or reported as [`DecimalError::Overflow`] /
//! [`DecimalError::DivideByZero`] — never silently truncated. Intermediate
//! products widen to 256 bits when 16-byte operands require it.
//!
//! ```
//! use decimal_core::{Decimal, ParseResult, TypeDesc};
//!
//! let ty = TypeDesc::new(10, 2);
//! let price = match Decimal::parse_str("123.45", &ty) {
//!     ParseResult::Exact(v) => v,
//!     other => panic!("unexpected parse outcome: {other:?}"),
//! };
//! let result_type = TypeDesc::for_add(&ty, &ty);
//! let doubled = price.add(&ty, &price, &ty, &result_type).unwrap();
//! assert_eq!(doubled.format(&result_type), "246.90");
//! ```

mod cast;
mod constants;
mod decimal;
mod error;
mod ops;
mod round;
mod str;
mod types;

pub use constants::MAX_PRECISION;
pub use decimal::Decimal;
pub use error::{DecimalError, ParseResult};
pub use round::RoundMode;
pub use types::{TypeDesc, Width};
