#[macro_use]
pub(crate) mod macros;

use crate::{Integer, Op, OverflowError};

/// Native operations of a working kind, each performed only after proving
/// that the exact result is representable in `Self`.
///
/// Unsigned and signed kinds use separate rule sets; see the two
/// implementing macros. Shift amounts are plain `usize`: converting the right
/// operand is the caller's job.
pub trait Arith: Integer {
    fn try_add(self, other: Self) -> Result<Self, OverflowError>;
    fn try_sub(self, other: Self) -> Result<Self, OverflowError>;
    fn try_mul(self, other: Self) -> Result<Self, OverflowError>;
    fn try_div(self, other: Self) -> Result<Self, OverflowError>;
    fn try_rem(self, other: Self) -> Result<Self, OverflowError>;
    fn try_neg(self) -> Result<Self, OverflowError>;
    fn try_shl(self, amount: usize) -> Result<Self, OverflowError>;
    fn try_shr(self, amount: usize) -> Result<Self, OverflowError>;
}

/// Bit-level operations. Only unsigned kinds have a representation-independent
/// meaning for these, so signed kinds do not implement this trait and any
/// attempt to use a bitwise operator in a signed working kind is rejected by
/// the compiler.
pub trait Bitwise: Arith {
    fn bit_and(self, other: Self) -> Self;
    fn bit_or(self, other: Self) -> Self;
    fn bit_xor(self, other: Self) -> Self;
    fn bit_not(self) -> Self;
}

#[inline(always)]
fn fail<T>(op: Op) -> Result<T, OverflowError> {
    Err(OverflowError::new(op))
}

impl_unsigned_arith!(u8, u16, u32, u64, u128, usize);
impl_signed_arith!(i8, i16, i32, i64, i128, isize);
