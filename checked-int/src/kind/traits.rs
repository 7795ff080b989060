use super::{Kind, Wide};
use crate::arith::Arith;
use crate::traits::private::Sealed;

/// A native primitive that can be held by a `Checked` value.
pub trait Primitive:
    Sealed
    + Sized
    + Clone
    + Copy
    + Default
    + std::cmp::PartialEq
    + std::cmp::Eq
    + std::cmp::PartialOrd
    + std::cmp::Ord
    + std::hash::Hash
    + std::fmt::Debug
    + std::fmt::Display
    + std::str::FromStr
    + Send
    + Sync
    + 'static
{
    const KIND: Kind;
}

/// A primitive with a defined signedness. `bool` is a `Primitive` but not an
/// `Integer`, so no arithmetic is ever available on it.
pub trait Integer:
    Primitive
    + std::fmt::LowerHex
    + std::fmt::UpperHex
    + std::fmt::Binary
    + std::fmt::Octal
{
    /// Kind of `+self` in native arithmetic.
    type Promoted: Arith;

    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;

    fn promote(self) -> Self::Promoted;

    fn to_wide(self) -> Wide;

    /// `None` when `w` lies outside `[MIN, MAX]`.
    fn from_wide(w: Wide) -> Option<Self>;
}

/// Conversion into `T` that is proven lossless, so it cannot fail.
pub trait Widen<T: Primitive>: Primitive {
    fn widen(self) -> T;
}

impl<T: Primitive> Widen<T> for T {
    #[inline]
    fn widen(self) -> T {
        self
    }
}
