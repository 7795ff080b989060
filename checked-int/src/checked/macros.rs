#![allow(unused_macros)]

macro_rules! impl_try_binop {
	($($method:ident),*) => {$(
		#[inline]
		pub fn $method<R: Operand>(self, rhs: R) -> Result<Checked<Common<T, R::Int>>, OverflowError>
		where
			T: CommonWith<R::Int>,
		{
			let (l, r) = self.to_common(rhs)?;
			Arith::$method(l.0, r.0).map(Checked)
		}
	)*};
}

macro_rules! impl_try_bitop {
	($($method:ident: $native:ident),*) => {$(
		/// Never fails once both operands fit their common kind.
		#[inline]
		pub fn $method<R: Operand>(self, rhs: R) -> Result<Checked<Common<T, R::Int>>, OverflowError>
		where
			T: CommonWith<R::Int>,
			Common<T, R::Int>: Bitwise,
		{
			let (l, r) = self.to_common(rhs)?;
			Ok(Checked(Bitwise::$native(l.0, r.0)))
		}
	)*};
}

// The amount is range-checked into `usize`, so a negative amount is a
// conversion failure rather than a shift failure.
macro_rules! impl_try_shift {
	($($method:ident),*) => {$(
		#[inline]
		pub fn $method<R: Operand>(self, rhs: R) -> Result<Checked<T::Promoted>, OverflowError> {
			let amount = rhs.into_checked().cast::<usize>()?.0;
			Arith::$method(self.0.promote(), amount).map(Checked)
		}
	)*};
}

macro_rules! impl_checked_binop {
	($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $try_method:ident, $bound:ident) => {
		impl<T: Integer, R: Operand> std::ops::$op<R> for Checked<T>
		where
			T: CommonWith<R::Int>,
			Common<T, R::Int>: $bound,
		{
			type Output = Checked<Common<T, R::Int>>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: R) -> Self::Output {
				panic_on_overflow!(self.$try_method(rhs))
			}
		}

		impl<'a, T: Integer, R: Operand> std::ops::$op<R> for &'a Checked<T>
		where
			T: CommonWith<R::Int>,
			Common<T, R::Int>: $bound,
		{
			type Output = Checked<Common<T, R::Int>>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: R) -> Self::Output {
				panic_on_overflow!((*self).$try_method(rhs))
			}
		}

		impl<T: Integer, R: Operand> std::ops::$op_assign<R> for Checked<T>
		where
			T: CommonWith<R::Int>,
			Common<T, R::Int>: $bound,
		{
			#[inline]
			#[track_caller]
			fn $method_assign(&mut self, rhs: R) {
				*self = panic_on_overflow!((*self).$try_method(rhs).and_then(|v| v.cast()));
			}
		}
	};
}

macro_rules! impl_checked_shift {
	($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $try_method:ident) => {
		impl<T: Integer, R: Operand> std::ops::$op<R> for Checked<T> {
			type Output = Checked<T::Promoted>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: R) -> Self::Output {
				panic_on_overflow!(self.$try_method(rhs))
			}
		}

		impl<'a, T: Integer, R: Operand> std::ops::$op<R> for &'a Checked<T> {
			type Output = Checked<T::Promoted>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: R) -> Self::Output {
				panic_on_overflow!((*self).$try_method(rhs))
			}
		}

		impl<T: Integer, R: Operand> std::ops::$op_assign<R> for Checked<T> {
			#[inline]
			#[track_caller]
			fn $method_assign(&mut self, rhs: R) {
				*self = panic_on_overflow!((*self).$try_method(rhs).and_then(|v| v.cast()));
			}
		}
	};
}

/// Operators with a raw primitive on the left and a `Checked` value on the
/// right. They wrap the primitive and defer to the `Checked` impls.
macro_rules! impl_raw_lhs_ops {
	($($t:ty),*) => {$(
		impl_raw_lhs_binop!($t;
			Add, add, Arith;
			Sub, sub, Arith;
			Mul, mul, Arith;
			Div, div, Arith;
			Rem, rem, Arith;
			BitAnd, bitand, Bitwise;
			BitOr, bitor, Bitwise;
			BitXor, bitxor, Bitwise
		);
		impl_raw_lhs_shift!($t; Shl, shl; Shr, shr);
		impl_raw_lhs_cmp!($t);
	)*};
}

macro_rules! impl_raw_lhs_binop {
	($t:ty; $($op:ident, $method:ident, $bound:ident);*) => {$(
		impl<U: Integer> std::ops::$op<Checked<U>> for $t
		where
			$t: CommonWith<U>,
			Common<$t, U>: $bound,
		{
			type Output = Checked<Common<$t, U>>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: Checked<U>) -> Self::Output {
				std::ops::$op::$method(Checked::new(self), rhs)
			}
		}

		impl<'a, U: Integer> std::ops::$op<&'a Checked<U>> for $t
		where
			$t: CommonWith<U>,
			Common<$t, U>: $bound,
		{
			type Output = Checked<Common<$t, U>>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: &'a Checked<U>) -> Self::Output {
				std::ops::$op::$method(Checked::new(self), *rhs)
			}
		}
	)*};
}

macro_rules! impl_raw_lhs_shift {
	($t:ty; $($op:ident, $method:ident);*) => {$(
		impl<U: Integer> std::ops::$op<Checked<U>> for $t {
			type Output = Checked<<$t as Integer>::Promoted>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: Checked<U>) -> Self::Output {
				std::ops::$op::$method(Checked::new(self), rhs)
			}
		}

		impl<'a, U: Integer> std::ops::$op<&'a Checked<U>> for $t {
			type Output = Checked<<$t as Integer>::Promoted>;

			#[inline]
			#[track_caller]
			fn $method(self, rhs: &'a Checked<U>) -> Self::Output {
				std::ops::$op::$method(Checked::new(self), *rhs)
			}
		}
	)*};
}

macro_rules! impl_raw_lhs_cmp {
	($t:ty) => {
		impl<U: Integer> std::cmp::PartialEq<Checked<U>> for $t
		where
			$t: CommonWith<U>,
		{
			#[inline]
			#[track_caller]
			fn eq(&self, other: &Checked<U>) -> bool {
				panic_on_overflow!(Checked::new(*self).try_eq(*other))
			}
		}

		impl<U: Integer> std::cmp::PartialOrd<Checked<U>> for $t
		where
			$t: CommonWith<U>,
		{
			#[inline]
			#[track_caller]
			fn partial_cmp(&self, other: &Checked<U>) -> Option<std::cmp::Ordering> {
				Some(panic_on_overflow!(Checked::new(*self).try_cmp(*other)))
			}
		}
	};
}

macro_rules! impl_checked_fmt {
	($($fmt:ident),*) => {$(
		impl<T: Integer> std::fmt::$fmt for Checked<T> {
			fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
				std::fmt::$fmt::fmt(&self.0, f)
			}
		}
	)*};
}
