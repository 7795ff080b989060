//! Usual arithmetic conversions at the type level.
//!
//! `Integer::Promoted` answers "what does `+x` execute in"; this module answers
//! the same for a pair of operands. The table below is the whole resolver:
//! identical kinds stay put, everything else is promoted and the wider side
//! wins, unsigned winning a tie. Every row is proven against `Kind::common`
//! while compiling, so the type-level and value-level answers cannot drift.

use crate::{Arith, Checked, Integer, Operand, Primitive};

/// Working kind of a binary operation between `Self` and `U`.
pub trait CommonWith<U: Integer>: Integer {
    type Output: Arith;
}

/// `common(T, U)`.
pub type Common<T, U> = <T as CommonWith<U>>::Output;

/// The `Checked` kind that two operands of any shape unify to.
pub type CommonChecked<L, R> =
    Checked<Common<<L as Operand>::Int, <R as Operand>::Int>>;

macro_rules! impl_common {
    ($($l:ty: [$($r:ty => $out:ty),*]);* $(;)?) => {$($(
        impl CommonWith<$r> for $l {
            type Output = $out;
        }

        $crate::static_assertions::const_assert!(
            <$l as Primitive>::KIND.common(<$r as Primitive>::KIND).same_repr(<$out as Primitive>::KIND)
        );
    )*)*};
}

impl_common! {
    u8: [u8 => u8, u16 => i32, u32 => u32, u64 => u64, u128 => u128, i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128];
    u16: [u8 => i32, u16 => u16, u32 => u32, u64 => u64, u128 => u128, i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128];
    u32: [u8 => u32, u16 => u32, u32 => u32, u64 => u64, u128 => u128, i8 => u32, i16 => u32, i32 => u32, i64 => i64, i128 => i128];
    u64: [u8 => u64, u16 => u64, u32 => u64, u64 => u64, u128 => u128, i8 => u64, i16 => u64, i32 => u64, i64 => u64, i128 => i128];
    u128: [u8 => u128, u16 => u128, u32 => u128, u64 => u128, u128 => u128, i8 => u128, i16 => u128, i32 => u128, i64 => u128, i128 => u128];
    i8: [u8 => i32, u16 => i32, u32 => u32, u64 => u64, u128 => u128, i8 => i8, i16 => i32, i32 => i32, i64 => i64, i128 => i128];
    i16: [u8 => i32, u16 => i32, u32 => u32, u64 => u64, u128 => u128, i8 => i32, i16 => i16, i32 => i32, i64 => i64, i128 => i128];
    i32: [u8 => i32, u16 => i32, u32 => u32, u64 => u64, u128 => u128, i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128];
    i64: [u8 => i64, u16 => i64, u32 => i64, u64 => u64, u128 => u128, i8 => i64, i16 => i64, i32 => i64, i64 => i64, i128 => i128];
    i128: [u8 => i128, u16 => i128, u32 => i128, u64 => i128, u128 => u128, i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128];
}

#[cfg(target_pointer_width = "64")]
impl_common! {
    u8: [usize => usize, isize => isize];
    u16: [usize => usize, isize => isize];
    u32: [usize => usize, isize => isize];
    u64: [usize => u64, isize => u64];
    u128: [usize => u128, isize => u128];
    usize: [u8 => usize, u16 => usize, u32 => usize, u64 => u64, u128 => u128, usize => usize, i8 => usize, i16 => usize, i32 => usize, i64 => usize, i128 => i128, isize => usize];
    i8: [usize => usize, isize => isize];
    i16: [usize => usize, isize => isize];
    i32: [usize => usize, isize => isize];
    i64: [usize => usize, isize => i64];
    i128: [usize => i128, isize => i128];
    isize: [u8 => isize, u16 => isize, u32 => isize, u64 => u64, u128 => u128, usize => usize, i8 => isize, i16 => isize, i32 => isize, i64 => i64, i128 => i128, isize => isize];
}

#[cfg(target_pointer_width = "32")]
impl_common! {
    u8: [usize => usize, isize => i32];
    u16: [usize => usize, isize => i32];
    u32: [usize => u32, isize => u32];
    u64: [usize => u64, isize => u64];
    u128: [usize => u128, isize => u128];
    usize: [u8 => usize, u16 => usize, u32 => u32, u64 => u64, u128 => u128, usize => usize, i8 => usize, i16 => usize, i32 => usize, i64 => i64, i128 => i128, isize => usize];
    i8: [usize => usize, isize => i32];
    i16: [usize => usize, isize => i32];
    i32: [usize => usize, isize => i32];
    i64: [usize => i64, isize => i64];
    i128: [usize => i128, isize => i128];
    isize: [u8 => i32, u16 => i32, u32 => u32, u64 => u64, u128 => u128, usize => usize, i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128, isize => isize];
}
