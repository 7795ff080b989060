#[macro_use]
pub(crate) mod macros;

use crate::{
    is_nothrow, Arith, Bitwise, Common, CommonChecked, CommonWith, Integer, Kind, Op, Operand,
    OverflowError, Primitive, Widen,
};
use ref_cast::RefCast;
use std::cmp::Ordering;

#[cfg(feature = "borsh_support")]
use crate::borsh::{BorshDeserialize, BorshSerialize};

#[cfg(feature = "serde_support")]
use crate::serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A primitive value whose every operation either yields the exact
/// mathematical result or fails.
///
/// Conversions that can never lose information are plain `From`/`Into`.
/// Everything else goes through [`Checked::cast`] or one of the `try_*`
/// constructors, which return [`OverflowError`] instead of truncating.
/// Operators panic with that error; use the `try_*` method of the same name
/// to handle it at a particular call site.
///
/// ```
/// use checked_int::{checked, Checked};
///
/// let len = Checked::new(200u8);
/// assert!(len.try_add(checked(100u8)).is_err());
///
/// // mixed kinds execute in their common kind
/// let total = Checked::new(10i32) + Checked::new(20i64);
/// assert_eq!(total.get(), 30i64);
/// ```
///
/// Narrowing is never implicit:
///
/// ```compile_fail
/// use checked_int::Checked;
///
/// let wide = Checked::new(7i64);
/// let narrow: i32 = wide.into();
/// ```
///
/// Bitwise operators do not exist for signed working kinds:
///
/// ```compile_fail
/// use checked_int::Checked;
///
/// let _ = Checked::new(6i32) & Checked::new(3i32);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, Hash, RefCast)]
pub struct Checked<T: Primitive>(T);

#[inline]
pub fn checked<T: Primitive>(v: T) -> Checked<T> {
    Checked::new(v)
}

/// The only narrowing path: promote `v`, then range-check it against `U`.
#[inline]
pub fn checked_cast<U: Integer, T: Integer>(v: Checked<T>) -> Result<Checked<U>, OverflowError> {
    v.cast()
}

/// Picks one of two operands of possibly different kinds, as a value of
/// their common kind.
pub fn select<L, R>(cond: bool, lhs: L, rhs: R) -> Result<CommonChecked<L, R>, OverflowError>
where
    L: Operand,
    R: Operand,
    L::Int: CommonWith<R::Int>,
{
    if cond {
        lhs.into_checked().cast()
    } else {
        rhs.into_checked().cast()
    }
}

impl<T: Primitive> Checked<T> {
    #[inline]
    pub const fn new(v: T) -> Self {
        Self(v)
    }

    #[inline]
    pub fn get(self) -> T {
        self.0
    }

    #[inline]
    pub const fn kind() -> Kind {
        T::KIND
    }

    /// Views existing storage as a checked value.
    #[inline]
    pub fn from_ref(v: &T) -> &Self {
        Self::ref_cast(v)
    }

    #[inline]
    pub fn from_mut(v: &mut T) -> &mut Self {
        Self::ref_cast_mut(v)
    }

    /// Construction that is statically known not to fail.
    #[inline]
    pub fn from_lossless<U: Widen<T>>(v: U) -> Self {
        Self(v.widen())
    }

    #[inline]
    pub fn widen<U: Primitive>(self) -> Checked<U>
    where
        T: Widen<U>,
    {
        Checked(self.0.widen())
    }

    /// Whether casting to `U` can ever fail.
    #[inline]
    pub const fn cast_is_infallible<U: Primitive>() -> bool {
        is_nothrow(T::KIND, U::KIND)
    }
}

impl<T: Integer> Checked<T> {
    pub const MIN: Self = Self(T::MIN);
    pub const MAX: Self = Self(T::MAX);
    pub const ZERO: Self = Self(T::ZERO);
    pub const ONE: Self = Self(T::ONE);

    /// Explicit, fallible construction from any integer operand.
    #[inline]
    pub fn try_from_int<R: Operand>(v: R) -> Result<Self, OverflowError> {
        v.into_checked().cast()
    }

    /// Assigns `v` if it fits; `self` is untouched otherwise.
    #[inline]
    pub fn try_assign<R: Operand>(&mut self, v: R) -> Result<(), OverflowError> {
        *self = Self::try_from_int(v)?;
        Ok(())
    }

    #[inline]
    pub fn cast<U: Integer>(self) -> Result<Checked<U>, OverflowError> {
        U::from_wide(self.0.promote().to_wide())
            .map(Checked)
            .ok_or(OverflowError::new(Op::Cast))
    }

    /// Unary plus.
    #[inline]
    pub fn promote(self) -> Checked<T::Promoted> {
        Checked(self.0.promote())
    }

    /// Both operands converted into the kind a binary operation between
    /// them executes in.
    #[inline]
    pub fn to_common<R: Operand>(
        self,
        rhs: R,
    ) -> Result<(Checked<Common<T, R::Int>>, Checked<Common<T, R::Int>>), OverflowError>
    where
        T: CommonWith<R::Int>,
    {
        Ok((self.cast()?, rhs.into_checked().cast()?))
    }

    impl_try_binop!(try_add, try_sub, try_mul, try_div, try_rem);
    impl_try_bitop!(try_bitand: bit_and, try_bitor: bit_or, try_bitxor: bit_xor);
    impl_try_shift!(try_shl, try_shr);

    #[inline]
    pub fn try_neg(self) -> Result<Checked<T::Promoted>, OverflowError> {
        Arith::try_neg(self.0.promote()).map(Checked)
    }

    #[inline]
    pub fn try_eq<R: Operand>(self, rhs: R) -> Result<bool, OverflowError>
    where
        T: CommonWith<R::Int>,
    {
        let (l, r) = self.to_common(rhs)?;
        Ok(l.0 == r.0)
    }

    #[inline]
    pub fn try_cmp<R: Operand>(self, rhs: R) -> Result<Ordering, OverflowError>
    where
        T: CommonWith<R::Int>,
    {
        let (l, r) = self.to_common(rhs)?;
        Ok(l.0.cmp(&r.0))
    }
}

impl<T: Primitive> From<T> for Checked<T> {
    #[inline]
    fn from(v: T) -> Self {
        Self(v)
    }
}

impl_checked_binop!(Add, add, AddAssign, add_assign, try_add, Arith);
impl_checked_binop!(Sub, sub, SubAssign, sub_assign, try_sub, Arith);
impl_checked_binop!(Mul, mul, MulAssign, mul_assign, try_mul, Arith);
impl_checked_binop!(Div, div, DivAssign, div_assign, try_div, Arith);
impl_checked_binop!(Rem, rem, RemAssign, rem_assign, try_rem, Arith);
impl_checked_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, try_bitand, Bitwise);
impl_checked_binop!(BitOr, bitor, BitOrAssign, bitor_assign, try_bitor, Bitwise);
impl_checked_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, try_bitxor, Bitwise);

impl_checked_shift!(Shl, shl, ShlAssign, shl_assign, try_shl);
impl_checked_shift!(Shr, shr, ShrAssign, shr_assign, try_shr);

impl_raw_lhs_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T: Integer> std::ops::Neg for Checked<T> {
    type Output = Checked<T::Promoted>;

    #[inline]
    #[track_caller]
    fn neg(self) -> Self::Output {
        panic_on_overflow!(self.try_neg())
    }
}

impl<'a, T: Integer> std::ops::Neg for &'a Checked<T> {
    type Output = Checked<T::Promoted>;

    #[inline]
    #[track_caller]
    fn neg(self) -> Self::Output {
        panic_on_overflow!((*self).try_neg())
    }
}

impl<T: Integer> std::ops::Not for Checked<T>
where
    T::Promoted: Bitwise,
{
    type Output = Checked<T::Promoted>;

    #[inline]
    fn not(self) -> Self::Output {
        Checked(self.0.promote().bit_not())
    }
}

impl<T: Integer, R: Operand> std::cmp::PartialEq<R> for Checked<T>
where
    T: CommonWith<R::Int>,
{
    #[inline]
    #[track_caller]
    fn eq(&self, other: &R) -> bool {
        panic_on_overflow!(self.try_eq(*other))
    }
}

impl<T: Integer> std::cmp::Eq for Checked<T> where T: CommonWith<T> {}

impl<T: Integer, R: Operand> std::cmp::PartialOrd<R> for Checked<T>
where
    T: CommonWith<R::Int>,
{
    #[inline]
    #[track_caller]
    fn partial_cmp(&self, other: &R) -> Option<Ordering> {
        Some(panic_on_overflow!(self.try_cmp(*other)))
    }
}

impl<T: Integer> std::cmp::Ord for Checked<T>
where
    T: CommonWith<T>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> std::iter::Sum for Checked<T>
where
    T: Integer + Arith + CommonWith<T, Output = T>,
{
    #[track_caller]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl<T> std::iter::Product for Checked<T>
where
    T: Integer + Arith + CommonWith<T, Output = T>,
{
    #[track_caller]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, v| acc * v)
    }
}

// bool only ever meets bool

impl std::cmp::PartialEq for Checked<bool> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl std::cmp::PartialEq<bool> for Checked<bool> {
    #[inline]
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}

impl std::cmp::Eq for Checked<bool> {}

impl std::ops::Not for Checked<bool> {
    type Output = Checked<bool>;

    #[inline]
    fn not(self) -> Self::Output {
        Checked(!self.0)
    }
}

impl<T: Primitive> std::fmt::Debug for Checked<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0, f)
    }
}

impl<T: Primitive> std::fmt::Display for Checked<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl_checked_fmt!(LowerHex, UpperHex, Binary, Octal);

impl<T: Primitive> std::str::FromStr for Checked<T> {
    type Err = <T as std::str::FromStr>::Err;

    fn from_str(value: &str) -> Result<Checked<T>, Self::Err> {
        Ok(Checked(T::from_str(value)?))
    }
}

#[cfg(feature = "serde_support")]
impl<T: Primitive + Serialize> Serialize for Checked<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde_support")]
impl<'de, T: Primitive + Deserialize<'de>> Deserialize<'de> for Checked<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Checked(T::deserialize(deserializer)?))
    }
}

#[cfg(feature = "borsh_support")]
impl<T: Primitive + BorshSerialize> BorshSerialize for Checked<T> {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        BorshSerialize::serialize(&self.0, writer)
    }
}

#[cfg(feature = "borsh_support")]
impl<T: Primitive + BorshDeserialize> BorshDeserialize for Checked<T> {
    fn deserialize(buf: &mut &[u8]) -> Result<Self, std::io::Error> {
        Ok(Checked(T::deserialize(buf)?))
    }
}
