use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

use log::trace;

use crate::number::{
    error::{div_zero_error, NumberResult},
    integer::BigInteger,
};

pub trait NumberCasting<T> {
    /// Upcasts the value to the given reference size
    fn upcast(&self, to_size: BitSize) -> T;

    /// Returns the smallest possible type that can hold the current value without loss of precision or overflow.
    /// Unsigned values stay unsigned and negative values stay signed.
    fn optimize(self) -> T;
}

pub trait ArithmeticOperations<T> {
    fn add(lhs: &T, rhs: &T) -> T;
    fn sub(lhs: &T, rhs: &T) -> T;
    fn mul(lhs: &T, rhs: &T) -> T;
    fn div(lhs: &T, rhs: &T) -> NumberResult<T>;
}

pub trait ComparisonOperations<T> {
    fn cmp(lhs: &T, rhs: &T) -> Ordering;
}

/// Represents the size of a number
/// The size is used to determine the maximum and minimum values that can be stored in the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BitSize {
    Bit32 = 32,
    Bit64 = 64,
    /// Variable size (arbitrary precision) represented as the maximum value of i32
    BitVar = i32::MAX as isize,
}

/// The native operations the promotion policy intercepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeOp {
    Add,
    Sub,
    Mul,
}

impl Display for NativeOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NativeOp::Add => write!(f, "+"),
            NativeOp::Sub => write!(f, "-"),
            NativeOp::Mul => write!(f, "*"),
        }
    }
}

/// Overflow-detecting native arithmetic.
/// `None` means the result does not fit at this width and the operation must be promoted.
pub trait CheckedNative: Sized + Copy {
    fn checked(op: NativeOp, lhs: Self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_native {
    ($($t:ty),*) => {$(
        impl CheckedNative for $t {
            fn checked(op: NativeOp, lhs: Self, rhs: Self) -> Option<Self> {
                match op {
                    NativeOp::Add => lhs.checked_add(rhs),
                    NativeOp::Sub => lhs.checked_sub(rhs),
                    NativeOp::Mul => lhs.checked_mul(rhs),
                }
            }
        }
    )*};
}

checked_native!(i32, u32, i64, u64);

pub fn checked_native<T: CheckedNative>(op: NativeOp, lhs: T, rhs: T) -> Option<T> {
    T::checked(op, lhs, rhs)
}

/// Native fixed width integers, promoted to an arbitrary sized integer when an operation overflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeInteger {
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    IntVar(BigInteger), // Arbitrary sized integers (variable size)
}

impl NativeInteger {
    pub fn get_size(&self) -> BitSize {
        match self {
            NativeInteger::Int32(_) | NativeInteger::UInt32(_) => BitSize::Bit32,
            NativeInteger::Int64(_) | NativeInteger::UInt64(_) => BitSize::Bit64,
            NativeInteger::IntVar(_) => BitSize::BitVar,
        }
    }

    fn is_unsigned(&self) -> bool {
        matches!(self, NativeInteger::UInt32(_) | NativeInteger::UInt64(_))
    }

    pub fn to_big(&self) -> BigInteger {
        match self {
            NativeInteger::Int32(v) => BigInteger::from(*v),
            NativeInteger::UInt32(v) => BigInteger::from(*v),
            NativeInteger::Int64(v) => BigInteger::from(*v),
            NativeInteger::UInt64(v) => BigInteger::from(*v),
            NativeInteger::IntVar(v) => v.clone(),
        }
    }

    /// The width both operands are brought to before an operation.
    /// Mixed signedness meets at `Int64` when both fit in 32 bits, otherwise at `BitVar`.
    fn common_size(lhs: &NativeInteger, rhs: &NativeInteger) -> BitSize {
        let size = lhs.get_size().max(rhs.get_size());
        if lhs.is_unsigned() == rhs.is_unsigned() || size == BitSize::BitVar {
            size
        } else if size == BitSize::Bit32 {
            BitSize::Bit64
        } else {
            BitSize::BitVar
        }
    }

    /// Bring both operands to their common width.
    /// Mixed signedness at 64 bits lands on the signed side.
    fn coerce(lhs: &NativeInteger, rhs: &NativeInteger) -> (NativeInteger, NativeInteger) {
        let size = NativeInteger::common_size(lhs, rhs);
        if lhs.is_unsigned() != rhs.is_unsigned() && size == BitSize::Bit64 {
            return (lhs.to_signed64(), rhs.to_signed64());
        }
        (lhs.upcast(size), rhs.upcast(size))
    }

    /// Only valid for values of at most 32 bits.
    fn to_signed64(&self) -> NativeInteger {
        match self {
            NativeInteger::Int32(v) => NativeInteger::Int64(*v as i64),
            NativeInteger::UInt32(v) => NativeInteger::Int64(*v as i64),
            _ => self.clone(),
        }
    }
}

impl NumberCasting<NativeInteger> for NativeInteger {
    /// Upcasts the value to the given reference size, keeping its signedness
    /// # Note
    /// This function does not check if the reference size is smaller or equal to the current size
    /// This is the responsibility of the caller
    fn upcast(&self, to_size: BitSize) -> NativeInteger {
        match (self, to_size) {
            (NativeInteger::Int32(v), BitSize::Bit64) => NativeInteger::Int64(*v as i64),
            (NativeInteger::UInt32(v), BitSize::Bit64) => NativeInteger::UInt64(*v as u64),
            (NativeInteger::IntVar(_), _) => self.clone(),
            (_, BitSize::BitVar) => NativeInteger::IntVar(self.to_big()),
            _ => self.clone(),
        }
    }

    fn optimize(self) -> NativeInteger {
        match self {
            NativeInteger::Int32(_) | NativeInteger::UInt32(_) => self,
            NativeInteger::Int64(v) => {
                if let Ok(v) = i32::try_from(v) {
                    NativeInteger::Int32(v)
                } else {
                    self
                }
            }
            NativeInteger::UInt64(v) => {
                if let Ok(v) = u32::try_from(v) {
                    NativeInteger::UInt32(v)
                } else {
                    self
                }
            }
            NativeInteger::IntVar(ref v) => {
                if let Ok(v) = v.to_i32() {
                    NativeInteger::Int32(v)
                } else if let Ok(v) = v.to_i64() {
                    NativeInteger::Int64(v)
                } else if let Ok(v) = v.to_u64() {
                    NativeInteger::UInt64(v)
                } else {
                    self
                }
            }
        }
    }
}

/// Apply `op` at the operands' own width, then at the next wider native width,
/// and finally on `BigInteger`, which cannot overflow.
fn promote(op: NativeOp, lhs: &NativeInteger, rhs: &NativeInteger) -> NativeInteger {
    let (lhs, rhs) = NativeInteger::coerce(lhs, rhs);
    match (&lhs, &rhs) {
        (NativeInteger::Int32(l), NativeInteger::Int32(r)) => {
            if let Some(res) = checked_native(op, *l, *r) {
                return NativeInteger::Int32(res);
            }
            trace!("{} {} {} overflows i32, widening to i64", l, op, r);
            if let Some(res) = checked_native(op, *l as i64, *r as i64) {
                return NativeInteger::Int64(res);
            }
        }
        (NativeInteger::UInt32(l), NativeInteger::UInt32(r)) => {
            if let Some(res) = checked_native(op, *l, *r) {
                return NativeInteger::UInt32(res);
            }
            // An unsigned difference can go below zero, so it widens to the signed side
            if op == NativeOp::Sub {
                trace!("{} {} {} overflows u32, widening to i64", l, op, r);
                if let Some(res) = checked_native(op, *l as i64, *r as i64) {
                    return NativeInteger::Int64(res);
                }
            } else {
                trace!("{} {} {} overflows u32, widening to u64", l, op, r);
                if let Some(res) = checked_native(op, *l as u64, *r as u64) {
                    return NativeInteger::UInt64(res);
                }
            }
        }
        (NativeInteger::Int64(l), NativeInteger::Int64(r)) => {
            if let Some(res) = checked_native(op, *l, *r) {
                return NativeInteger::Int64(res);
            }
        }
        (NativeInteger::UInt64(l), NativeInteger::UInt64(r)) => {
            if let Some(res) = checked_native(op, *l, *r) {
                return NativeInteger::UInt64(res);
            }
        }
        _ => {}
    }
    if lhs.get_size() != BitSize::BitVar {
        trace!("{:?} {} {:?} overflows 64 bits, promoting to BigInteger", lhs, op, rhs);
    }
    let (l, r) = (lhs.to_big(), rhs.to_big());
    NativeInteger::IntVar(match op {
        NativeOp::Add => &l + &r,
        NativeOp::Sub => &l - &r,
        NativeOp::Mul => &l * &r,
    })
}

impl ArithmeticOperations<NativeInteger> for NativeInteger {
    fn add(lhs: &NativeInteger, rhs: &NativeInteger) -> NativeInteger {
        promote(NativeOp::Add, lhs, rhs)
    }

    fn sub(lhs: &NativeInteger, rhs: &NativeInteger) -> NativeInteger {
        promote(NativeOp::Sub, lhs, rhs)
    }

    fn mul(lhs: &NativeInteger, rhs: &NativeInteger) -> NativeInteger {
        promote(NativeOp::Mul, lhs, rhs)
    }

    /// Truncated division. `i32::MIN / -1` and `i64::MIN / -1` are the only overflowing cases
    /// and are promoted like the other operations.
    fn div(lhs: &NativeInteger, rhs: &NativeInteger) -> NumberResult<NativeInteger> {
        let (lhs, rhs) = NativeInteger::coerce(lhs, rhs);
        Ok(match (&lhs, &rhs) {
            (_, NativeInteger::Int32(0))
            | (_, NativeInteger::UInt32(0))
            | (_, NativeInteger::Int64(0))
            | (_, NativeInteger::UInt64(0)) => return div_zero_error(),
            (NativeInteger::Int32(l), NativeInteger::Int32(r)) => match l.checked_div(*r) {
                Some(res) => NativeInteger::Int32(res),
                None => NativeInteger::Int64(*l as i64 / *r as i64),
            },
            (NativeInteger::UInt32(l), NativeInteger::UInt32(r)) => NativeInteger::UInt32(l / r),
            (NativeInteger::Int64(l), NativeInteger::Int64(r)) => match l.checked_div(*r) {
                Some(res) => NativeInteger::Int64(res),
                None => NativeInteger::IntVar(BigInteger::from(*l).checked_div(&BigInteger::from(*r))?),
            },
            (NativeInteger::UInt64(l), NativeInteger::UInt64(r)) => NativeInteger::UInt64(l / r),
            _ => NativeInteger::IntVar(lhs.to_big().checked_div(&rhs.to_big())?),
        })
    }
}

impl ComparisonOperations<NativeInteger> for NativeInteger {
    fn cmp(lhs: &NativeInteger, rhs: &NativeInteger) -> Ordering {
        match NativeInteger::coerce(lhs, rhs) {
            (NativeInteger::Int32(l), NativeInteger::Int32(r)) => l.cmp(&r),
            (NativeInteger::UInt32(l), NativeInteger::UInt32(r)) => l.cmp(&r),
            (NativeInteger::Int64(l), NativeInteger::Int64(r)) => l.cmp(&r),
            (NativeInteger::UInt64(l), NativeInteger::UInt64(r)) => l.cmp(&r),
            (l, r) => l.to_big().cmp(&r.to_big()),
        }
    }
}

impl Display for NativeInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NativeInteger::Int32(i) => write!(f, "{}", i),
            NativeInteger::UInt32(i) => write!(f, "{}", i),
            NativeInteger::Int64(i) => write!(f, "{}", i),
            NativeInteger::UInt64(i) => write!(f, "{}", i),
            NativeInteger::IntVar(i) => write!(f, "{}", i),
        }
    }
}

macro_rules! from_native {
    ($($t:ty => $variant:ident),*) => {$(
        impl From<$t> for NativeInteger {
            fn from(value: $t) -> Self {
                NativeInteger::$variant(value)
            }
        }
    )*};
}

from_native!(i32 => Int32, u32 => UInt32, i64 => Int64, u64 => UInt64, BigInteger => IntVar);
