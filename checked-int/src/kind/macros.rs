#![allow(unused_macros)]

macro_rules! impl_integer {
	($sign:ident, $wide_ty:ty; $($t:ty => $promoted:ty),*) => {$(
		impl $crate::traits::private::Sealed for $t {}

		impl Primitive for $t {
			const KIND: Kind = impl_integer!(@kind $sign, $t);
		}

		impl Integer for $t {
			type Promoted = $promoted;

			const MIN: Self = <$t>::MIN;
			const MAX: Self = <$t>::MAX;
			const ZERO: Self = 0;
			const ONE: Self = 1;

			#[inline]
			fn promote(self) -> $promoted {
				self as $promoted
			}

			#[inline]
			fn to_wide(self) -> Wide {
				Wide::$sign(self as $wide_ty)
			}

			#[inline]
			fn from_wide(w: Wide) -> Option<Self> {
				if !Self::KIND.contains(w) {
					return None;
				}
				Some(match w {
					Wide::Unsigned(v) => v as $t,
					Wide::Signed(v) => v as $t,
				})
			}
		}

		$crate::static_assertions::const_assert!(
			is_lossless(<$t as Primitive>::KIND, <$promoted as Primitive>::KIND)
		);
		$crate::static_assertions::const_assert!(
			<$t as Primitive>::KIND.promoted().same_repr(<$promoted as Primitive>::KIND)
		);
	)*};

	(@kind Unsigned, $t:ty) => {
		Kind::Unsigned { bits: <$t>::BITS, max: <$t>::MAX as u128 }
	};
	(@kind Signed, $t:ty) => {
		Kind::Signed { bits: <$t>::BITS, min: <$t>::MIN as i128, max: <$t>::MAX as i128 }
	};
}

/// Rows of `source => [destinations]` for which every source value fits the
/// destination. Generates the `Widen` bridge and the implicit `From`
/// conversions, and proves each row against `is_lossless`.
macro_rules! impl_lossless {
	($($src:ty => [$($dst:ty),*]);* $(;)?) => {$($(
		impl Widen<$dst> for $src {
			#[inline]
			fn widen(self) -> $dst {
				self as $dst
			}
		}

		impl From<$src> for Checked<$dst> {
			#[inline]
			fn from(v: $src) -> Self {
				Checked::new(v.widen())
			}
		}

		impl From<Checked<$src>> for Checked<$dst> {
			#[inline]
			fn from(v: Checked<$src>) -> Self {
				Checked::new(v.get().widen())
			}
		}

		impl From<Checked<$src>> for $dst {
			#[inline]
			fn from(v: Checked<$src>) -> Self {
				v.get().widen()
			}
		}

		$crate::static_assertions::const_assert!(
			is_lossless(<$src as Primitive>::KIND, <$dst as Primitive>::KIND)
		);
	)*)*};
}

/// Identity unwrap `Checked<T> -> T`, one impl per primitive.
macro_rules! impl_unwrap {
	($($t:ty),*) => {$(
		impl From<Checked<$t>> for $t {
			#[inline]
			fn from(v: Checked<$t>) -> Self {
				v.get()
			}
		}
	)*};
}
