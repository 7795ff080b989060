use crate::{Checked, Integer};

pub(crate) mod private {
    pub trait Sealed {}
}

/// Anything that can stand on either side of a checked operation: a
/// `Checked` value, a raw integer, or a reference to either.
pub trait Operand: Copy {
    type Int: Integer;

    fn into_checked(self) -> Checked<Self::Int>;
}

impl<T: Integer> Operand for Checked<T> {
    type Int = T;

    #[inline]
    fn into_checked(self) -> Checked<T> {
        self
    }
}

impl<'a, T: Integer> Operand for &'a Checked<T> {
    type Int = T;

    #[inline]
    fn into_checked(self) -> Checked<T> {
        *self
    }
}

macro_rules! impl_operand {
    ($($t:ty),*) => {$(
        impl Operand for $t {
            type Int = $t;

            #[inline]
            fn into_checked(self) -> Checked<$t> {
                Checked::new(self)
            }
        }

        impl<'a> Operand for &'a $t {
            type Int = $t;

            #[inline]
            fn into_checked(self) -> Checked<$t> {
                Checked::new(*self)
            }
        }
    )*};
}

impl_operand!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
