//! Native integers that fail loudly.
//!
//! [`Checked<T>`] holds one primitive (`u8`..`u128`, `usize`, `i8`..`i128`,
//! `isize` or `bool`) and performs every operation under the native integer
//! rules, except that a result which does not fit is reported instead of
//! being wrapped, truncated or left undefined.
//!
//! A binary operation between two kinds executes in their common kind:
//! identical kinds stay as they are, otherwise both sides are promoted
//! (anything narrower than `i32` becomes `i32`) and the wider side wins, an
//! unsigned side winning a tie. Shifts and unary operators execute in the
//! promoted kind of their left operand.
//!
//! ```
//! use checked_int::{checked, Checked, Op};
//!
//! let a = checked(-1i32);
//! let b = checked(1u32);
//! // -1 has no value in the common kind `u32`
//! assert_eq!(a.try_add(b).unwrap_err().op(), Op::Cast);
//!
//! let n: Checked<u64> = checked(7u8).into();
//! assert_eq!(n * 6u32, 42u64);
//! ```
//!
//! Booleans never take part in arithmetic:
//!
//! ```compile_fail
//! use checked_int::checked;
//!
//! let _ = checked(true) + checked(1u8);
//! ```

#[cfg(feature = "borsh_support")]
#[doc(hidden)]
pub use borsh;
#[cfg(feature = "serde_support")]
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use static_assertions;

#[macro_use]
mod error;
#[macro_use]
mod kind;
mod arith;
mod checked;
mod promote;
mod traits;

pub use arith::{Arith, Bitwise};
pub use checked::{checked, checked_cast, select, Checked};
pub use error::{raise, Op, OverflowError};
pub use kind::traits::{Integer, Primitive, Widen};
pub use kind::{is_lossless, is_nothrow, Kind, Signedness, Wide, INT};
pub use promote::{Common, CommonChecked, CommonWith};
pub use traits::Operand;
