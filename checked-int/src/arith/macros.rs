#![allow(unused_macros)]

macro_rules! impl_unsigned_arith {
	($($t:ty),*) => {$(
		impl Arith for $t {
			#[inline]
			fn try_add(self, other: Self) -> Result<Self, OverflowError> {
				if <$t>::MAX - self < other {
					return fail(Op::Add);
				}
				Ok(self + other)
			}

			#[inline]
			fn try_sub(self, other: Self) -> Result<Self, OverflowError> {
				if self < other {
					return fail(Op::Sub);
				}
				Ok(self - other)
			}

			#[inline]
			fn try_mul(self, other: Self) -> Result<Self, OverflowError> {
				if other != 0 && <$t>::MAX / other < self {
					return fail(Op::Mul);
				}
				Ok(self * other)
			}

			#[inline]
			fn try_div(self, other: Self) -> Result<Self, OverflowError> {
				if other == 0 {
					return fail(Op::Div);
				}
				Ok(self / other)
			}

			#[inline]
			fn try_rem(self, other: Self) -> Result<Self, OverflowError> {
				if other == 0 {
					return fail(Op::Rem);
				}
				Ok(self % other)
			}

			// -0 is the only negation with an unsigned result
			#[inline]
			fn try_neg(self) -> Result<Self, OverflowError> {
				if self != 0 {
					return fail(Op::Neg);
				}
				Ok(0)
			}

			#[inline]
			fn try_shl(self, amount: usize) -> Result<Self, OverflowError> {
				if amount >= <$t>::BITS as usize {
					return fail(Op::Shl);
				}
				Ok(self << amount)
			}

			#[inline]
			fn try_shr(self, amount: usize) -> Result<Self, OverflowError> {
				if amount >= <$t>::BITS as usize {
					return fail(Op::Shr);
				}
				Ok(self >> amount)
			}
		}

		impl Bitwise for $t {
			#[inline]
			fn bit_and(self, other: Self) -> Self {
				self & other
			}

			#[inline]
			fn bit_or(self, other: Self) -> Self {
				self | other
			}

			#[inline]
			fn bit_xor(self, other: Self) -> Self {
				self ^ other
			}

			#[inline]
			fn bit_not(self) -> Self {
				!self
			}
		}
	)*};
}

macro_rules! impl_signed_arith {
	($($t:ty),*) => {$(
		impl Arith for $t {
			#[inline]
			fn try_add(self, other: Self) -> Result<Self, OverflowError> {
				if (self > 0 && <$t>::MAX - self < other) || (self < 0 && <$t>::MIN - self > other) {
					return fail(Op::Add);
				}
				Ok(self + other)
			}

			#[inline]
			fn try_sub(self, other: Self) -> Result<Self, OverflowError> {
				if (self < 0 && other > 0 && self < <$t>::MIN + other)
					|| (self >= 0 && other < 0 && <$t>::MAX + other < self)
				{
					return fail(Op::Sub);
				}
				Ok(self - other)
			}

			// Each sign combination is bounded by a division, so the product
			// is only formed once it is known to fit.
			#[inline]
			fn try_mul(self, other: Self) -> Result<Self, OverflowError> {
				let (l, r) = (self, other);
				if (l > 0 && r > 0 && <$t>::MAX / l < r)
					|| (l < 0 && r < 0 && l < <$t>::MAX / r)
					|| (l > 0 && r < 0 && <$t>::MIN / l > r)
					|| (l < 0 && r > 0 && <$t>::MIN / r > l)
				{
					return fail(Op::Mul);
				}
				Ok(l * r)
			}

			#[inline]
			fn try_div(self, other: Self) -> Result<Self, OverflowError> {
				if other == 0 || (other == -1 && self == <$t>::MIN) {
					return fail(Op::Div);
				}
				Ok(self / other)
			}

			#[inline]
			fn try_rem(self, other: Self) -> Result<Self, OverflowError> {
				if other == 0 || (other == -1 && self == <$t>::MIN) {
					return fail(Op::Rem);
				}
				Ok(self % other)
			}

			#[inline]
			fn try_neg(self) -> Result<Self, OverflowError> {
				if self == <$t>::MIN {
					return fail(Op::Neg);
				}
				Ok(-self)
			}

			// A negative left operand, or a set bit reaching the sign bit,
			// has no exact result.
			#[inline]
			fn try_shl(self, amount: usize) -> Result<Self, OverflowError> {
				if self < 0 || amount >= <$t>::BITS as usize || (<$t>::MAX >> amount) < self {
					return fail(Op::Shl);
				}
				Ok(self << amount)
			}

			#[inline]
			fn try_shr(self, amount: usize) -> Result<Self, OverflowError> {
				if amount >= <$t>::BITS as usize {
					return fail(Op::Shr);
				}
				Ok(self >> amount)
			}
		}
	)*};
}
