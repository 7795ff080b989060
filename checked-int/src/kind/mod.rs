#[macro_use]
pub(crate) mod macros;
pub(crate) mod traits;

use crate::Checked;
use traits::{Integer, Primitive, Widen};

/// Sign classification of a kind. Only `Unsigned` and `Signed` kinds take
/// part in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    Unsigned,
    Signed,
    Unspecified,
}

/// Compile-time description of a primitive representation.
///
/// The bounds are stored widened to 128 bits so that any two kinds can be
/// compared without another conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Unsigned { bits: u32, max: u128 },
    Signed { bits: u32, min: i128, max: i128 },
}

/// The native `int`: every narrower kind is promoted to it.
pub const INT: Kind = Kind::Signed {
    bits: i32::BITS,
    min: i32::MIN as i128,
    max: i32::MAX as i128,
};

/// Any primitive integer value, without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wide {
    Unsigned(u128),
    Signed(i128),
}

impl Kind {
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Kind::Bool => 1,
            Kind::Unsigned { bits, .. } | Kind::Signed { bits, .. } => bits,
        }
    }

    #[inline]
    pub const fn signedness(self) -> Signedness {
        match self {
            Kind::Bool => Signedness::Unspecified,
            Kind::Unsigned { .. } => Signedness::Unsigned,
            Kind::Signed { .. } => Signedness::Signed,
        }
    }

    /// Same width and signedness. `u64` and `usize` on a 64-bit target are
    /// the same representation.
    #[inline]
    pub const fn same_repr(self, other: Kind) -> bool {
        match (self, other) {
            (Kind::Bool, Kind::Bool) => true,
            (Kind::Unsigned { bits: a, .. }, Kind::Unsigned { bits: b, .. }) => a == b,
            (Kind::Signed { bits: a, .. }, Kind::Signed { bits: b, .. }) => a == b,
            _ => false,
        }
    }

    /// Whether `v` lies in `[min, max]` of this kind. Nothing is contained in
    /// `Bool`: booleans never cross into numeric kinds.
    #[inline]
    pub const fn contains(self, v: Wide) -> bool {
        match (self, v) {
            (Kind::Bool, _) => false,
            (Kind::Unsigned { max, .. }, Wide::Unsigned(v)) => v <= max,
            (Kind::Unsigned { max, .. }, Wide::Signed(v)) => v >= 0 && v as u128 <= max,
            (Kind::Signed { max, .. }, Wide::Unsigned(v)) => v <= max as u128,
            (Kind::Signed { min, max, .. }, Wide::Signed(v)) => min <= v && v <= max,
        }
    }

    /// The kind a unary operation on `self` executes in.
    #[inline]
    pub const fn promoted(self) -> Kind {
        match self {
            Kind::Bool => INT,
            k if k.bits() < INT.bits() => INT,
            k => k,
        }
    }

    /// The kind a binary operation between `self` and `other` executes in.
    ///
    /// Identical kinds stay as they are. Otherwise both sides are promoted
    /// and the wider one wins; at equal width the unsigned one wins.
    pub const fn common(self, other: Kind) -> Kind {
        if self.same_repr(other) {
            return self;
        }
        let (l, r) = (self.promoted(), other.promoted());
        if l.bits() != r.bits() {
            if l.bits() > r.bits() {
                l
            } else {
                r
            }
        } else if matches!(r, Kind::Unsigned { .. }) {
            r
        } else {
            l
        }
    }
}

/// Every value of `src` is representable in `dst`.
pub const fn is_lossless(src: Kind, dst: Kind) -> bool {
    match (src, dst) {
        (Kind::Bool, Kind::Bool) => true,
        (Kind::Bool, _) | (_, Kind::Bool) => false,
        (Kind::Unsigned { bits: s, .. }, Kind::Unsigned { bits: d, .. }) => d >= s,
        (Kind::Signed { bits: s, .. }, Kind::Signed { bits: d, .. }) => d >= s,
        // one more bit is needed for the sign
        (Kind::Unsigned { bits: s, .. }, Kind::Signed { bits: d, .. }) => d > s,
        (Kind::Signed { .. }, Kind::Unsigned { .. }) => false,
    }
}

/// A conversion from `src` to `dst` can never raise.
///
/// Kinds sharing a representation are already lossless, so over the native
/// kinds this coincides with `is_lossless`.
pub const fn is_nothrow(src: Kind, dst: Kind) -> bool {
    is_lossless(src, dst)
}

impl_integer!(Unsigned, u128;
	u8 => i32, u16 => i32, u32 => u32, u64 => u64, u128 => u128, usize => usize);
impl_integer!(Signed, i128;
	i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128, isize => isize);

impl crate::traits::private::Sealed for bool {}

impl Primitive for bool {
    const KIND: Kind = Kind::Bool;
}

impl_unwrap!(bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl_lossless! {
    u8 => [u16, u32, u64, u128, i16, i32, i64, i128];
    u16 => [u32, u64, u128, i32, i64, i128];
    u32 => [u64, u128, i64, i128];
    u64 => [u128, i128];
    i8 => [i16, i32, i64, i128];
    i16 => [i32, i64, i128];
    i32 => [i64, i128];
    i64 => [i128];
}

#[cfg(target_pointer_width = "64")]
impl_lossless! {
    u8 => [usize, isize];
    u16 => [usize, isize];
    u32 => [usize, isize];
    u64 => [usize];
    usize => [u64, u128, i128];
    i8 => [isize];
    i16 => [isize];
    i32 => [isize];
    i64 => [isize];
    isize => [i64, i128];
}

#[cfg(target_pointer_width = "32")]
impl_lossless! {
    u8 => [usize, isize];
    u16 => [usize, isize];
    u32 => [usize];
    usize => [u32, u64, u128, i64, i128];
    i8 => [isize];
    i16 => [isize];
    i32 => [isize];
    isize => [i32, i64, i128];
}
