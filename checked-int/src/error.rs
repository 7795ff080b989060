use core::fmt;

/// The operation that could not produce a representable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Neg,
    Shl,
    Shr,
    /// Range check of a conversion between two kinds.
    Cast,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Op::Add => "addition",
            Op::Sub => "subtraction",
            Op::Mul => "multiplication",
            Op::Div => "division",
            Op::Rem => "remainder",
            Op::Neg => "negation",
            Op::Shl => "left shift",
            Op::Shr => "right shift",
            Op::Cast => "conversion",
        })
    }
}

/// The single failure of this crate: an exact result that does not fit its
/// kind, or an operation that has no result at all (division by zero, shift
/// by the bit width or more).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("arithmetic operation overflow in {op}")]
pub struct OverflowError {
    op: Op,
}

impl OverflowError {
    #[inline]
    pub const fn new(op: Op) -> Self {
        Self { op }
    }

    #[inline]
    pub const fn op(&self) -> Op {
        self.op
    }
}

#[cold]
#[inline(never)]
#[track_caller]
#[doc(hidden)]
pub fn raise(e: OverflowError) -> ! {
    panic!("{}", e)
}

#[macro_export]
#[doc(hidden)]
macro_rules! panic_on_overflow {
    ($res: expr) => {
        match $res {
            Ok(v) => v,
            Err(e) => $crate::raise(e),
        }
    };
}
