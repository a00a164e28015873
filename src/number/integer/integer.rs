use std::{
    cmp::Ordering,
    ops::{Add, Mul, Neg, Sub},
};

use crate::number::error::{div_zero_error, NumberError, NumberResult};

use super::magnitude;

/// Sign of a `BigInteger`. The discriminants are the numeric value of the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (l, r) if l == r => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// An arbitrary precision signed integer.
///
/// The magnitude is a little-endian vector of 32-bit words and is always kept canonical:
/// no high-order zero words, and `sign == Sign::Zero` exactly when the magnitude is empty.
/// Because of that, the derived equality and hash are equality and hash of the value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    pub(super) sign: Sign,
    pub(super) magnitude: Vec<u32>,
}

impl BigInteger {
    pub fn zero() -> Self {
        BigInteger {
            sign: Sign::Zero,
            magnitude: Vec::new(),
        }
    }

    pub fn one() -> Self {
        BigInteger {
            sign: Sign::Positive,
            magnitude: vec![1],
        }
    }

    /// Build a value from a sign and a little-endian word vector.
    /// The words are canonicalized; a zero magnitude always yields zero regardless of `sign`,
    /// and a non-zero magnitude with `Sign::Zero` is taken as positive.
    pub fn from_parts(sign: Sign, words: Vec<u32>) -> Self {
        let mut magnitude = words;
        magnitude::normalize(&mut magnitude);
        let sign = match (magnitude.is_empty(), sign) {
            (true, _) => Sign::Zero,
            (false, Sign::Zero) => Sign::Positive,
            (false, s) => s,
        };
        BigInteger { sign, magnitude }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The little-endian magnitude words.
    pub fn words(&self) -> &[u32] {
        &self.magnitude
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude == [1]
    }

    pub fn is_even(&self) -> bool {
        self.magnitude.first().map_or(true, |w| w & 1 == 0)
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Number of significant bits in the magnitude.
    pub fn bits(&self) -> usize {
        magnitude::bits(&self.magnitude)
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> BigInteger {
        match self.sign {
            Sign::Zero => BigInteger::zero(),
            s => BigInteger {
                sign: s,
                magnitude: vec![1],
            },
        }
    }

    pub fn abs(&self) -> BigInteger {
        match self.sign {
            Sign::Negative => BigInteger {
                sign: Sign::Positive,
                magnitude: self.magnitude.clone(),
            },
            _ => self.clone(),
        }
    }

    /// Truncated division.
    /// The quotient is rounded toward zero and the remainder takes the sign of the dividend.
    pub fn div_rem(&self, rhs: &BigInteger) -> NumberResult<(BigInteger, BigInteger)> {
        if rhs.is_zero() {
            return div_zero_error();
        }
        Ok(self.truncated_div_rem(rhs))
    }

    /// `div_rem` for callers that already know the divisor is non-zero.
    /// A zero divisor yields a zero quotient and the dividend as remainder.
    pub(crate) fn truncated_div_rem(&self, rhs: &BigInteger) -> (BigInteger, BigInteger) {
        if rhs.is_zero() {
            return (BigInteger::zero(), self.clone());
        }
        let (q, r) = magnitude::div_rem(&self.magnitude, &rhs.magnitude);
        (
            BigInteger::from_parts(self.sign * rhs.sign, q),
            BigInteger::from_parts(self.sign, r),
        )
    }

    pub fn checked_div(&self, rhs: &BigInteger) -> NumberResult<BigInteger> {
        Ok(self.div_rem(rhs)?.0)
    }

    pub fn checked_rem(&self, rhs: &BigInteger) -> NumberResult<BigInteger> {
        Ok(self.div_rem(rhs)?.1)
    }

    /// Raise to a non-negative power.
    pub fn pow(&self, exponent: i64) -> NumberResult<BigInteger> {
        if exponent < 0 {
            return Err(NumberError::domain_error(format!(
                "cannot raise an integer to the negative power {}",
                exponent
            )));
        }
        Ok(self.pow_u64(exponent as u64))
    }

    /// Repeated squaring over the full `u64` exponent range.
    pub(crate) fn pow_u64(&self, exponent: u64) -> BigInteger {
        if self.is_zero() || self.is_one() {
            return if exponent == 0 { BigInteger::one() } else { self.clone() };
        }
        let mut exp = exponent;
        let mut base = self.clone();
        let mut acc = BigInteger::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Greatest common divisor by the Euclidean algorithm, always non-negative.
    pub fn gcd(&self, other: &BigInteger) -> BigInteger {
        let mut a = self.magnitude.clone();
        let mut b = other.magnitude.clone();
        while !b.is_empty() {
            let (_, r) = magnitude::div_rem(&a, &b);
            a = b;
            b = r;
        }
        BigInteger::from_parts(Sign::Positive, a)
    }

    /// Least common multiple `|a * b| / gcd(a, b)`, zero if either operand is zero.
    pub fn lcm(&self, other: &BigInteger) -> BigInteger {
        if self.is_zero() || other.is_zero() {
            return BigInteger::zero();
        }
        let gcd = self.gcd(other);
        let (q, _) = magnitude::div_rem(&self.magnitude, &gcd.magnitude);
        BigInteger::from_parts(Sign::Positive, magnitude::mul(&q, &other.magnitude))
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::zero()
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Zero => Ordering::Equal,
                Sign::Positive => magnitude::cmp(&self.magnitude, &other.magnitude),
                Sign::Negative => magnitude::cmp(&other.magnitude, &self.magnitude),
            },
            ord => ord,
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//--------------------------------------------------------------------------------------//
//                                     Arithmetic                                       //
//--------------------------------------------------------------------------------------//

fn add_signed(lhs: &BigInteger, rhs: &BigInteger, rhs_sign: Sign) -> BigInteger {
    match (lhs.sign, rhs_sign) {
        (_, Sign::Zero) => lhs.clone(),
        (Sign::Zero, s) => BigInteger {
            sign: s,
            magnitude: rhs.magnitude.clone(),
        },
        (l, r) if l == r => BigInteger {
            sign: l,
            magnitude: magnitude::add(&lhs.magnitude, &rhs.magnitude),
        },
        (l, r) => match magnitude::cmp(&lhs.magnitude, &rhs.magnitude) {
            Ordering::Equal => BigInteger::zero(),
            Ordering::Greater => BigInteger::from_parts(
                l,
                magnitude::sub(&lhs.magnitude, &rhs.magnitude),
            ),
            Ordering::Less => BigInteger::from_parts(
                r,
                magnitude::sub(&rhs.magnitude, &lhs.magnitude),
            ),
        },
    }
}

impl<'a, 'b> Add<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &BigInteger) -> BigInteger {
        add_signed(self, rhs, rhs.sign)
    }
}

impl<'a, 'b> Sub<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &BigInteger) -> BigInteger {
        add_signed(self, rhs, -rhs.sign)
    }
}

impl<'a, 'b> Mul<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &BigInteger) -> BigInteger {
        BigInteger::from_parts(
            self.sign * rhs.sign,
            magnitude::mul(&self.magnitude, &rhs.magnitude),
        )
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger {
            sign: -self.sign,
            magnitude: self.magnitude.clone(),
        }
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger {
            sign: -self.sign,
            magnitude: self.magnitude,
        }
    }
}

forward_owned_binop!(BigInteger; Add::add, Sub::sub, Mul::mul);
