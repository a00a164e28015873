//! Bitwise operators with infinite two's complement semantics.
//! A negative value behaves as if it had an infinite run of leading one-bits.

use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use super::{
    integer::{BigInteger, Sign},
    magnitude,
};

/// Two's complement image of `value` in exactly `len` words.
/// `len` must leave room for the sign bit.
fn to_twos_complement(value: &BigInteger, len: usize) -> Vec<u32> {
    let mut words = value.magnitude.clone();
    words.resize(len, 0);
    if value.is_negative() {
        let mut carry = true;
        for word in words.iter_mut() {
            *word = !*word;
            if carry {
                let (sum, overflow) = word.overflowing_add(1);
                *word = sum;
                carry = overflow;
            }
        }
    }
    words
}

fn from_twos_complement(mut words: Vec<u32>) -> BigInteger {
    let negative = words.last().is_some_and(|&top| top & 0x8000_0000 != 0);
    if !negative {
        return BigInteger::from_parts(Sign::Positive, words);
    }
    let mut carry = true;
    for word in words.iter_mut() {
        *word = !*word;
        if carry {
            let (sum, overflow) = word.overflowing_add(1);
            *word = sum;
            carry = overflow;
        }
    }
    BigInteger::from_parts(Sign::Negative, words)
}

fn bitwise(lhs: &BigInteger, rhs: &BigInteger, op: impl Fn(u32, u32) -> u32) -> BigInteger {
    let len = lhs.magnitude.len().max(rhs.magnitude.len()) + 1;
    let l = to_twos_complement(lhs, len);
    let r = to_twos_complement(rhs, len);
    from_twos_complement(l.iter().zip(r.iter()).map(|(&a, &b)| op(a, b)).collect())
}

impl<'a, 'b> BitAnd<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn bitand(self, rhs: &BigInteger) -> BigInteger {
        bitwise(self, rhs, |a, b| a & b)
    }
}

impl<'a, 'b> BitOr<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn bitor(self, rhs: &BigInteger) -> BigInteger {
        bitwise(self, rhs, |a, b| a | b)
    }
}

impl<'a, 'b> BitXor<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn bitxor(self, rhs: &BigInteger) -> BigInteger {
        bitwise(self, rhs, |a, b| a ^ b)
    }
}

forward_owned_binop!(BigInteger; BitAnd::bitand, BitOr::bitor, BitXor::bitxor);

/// `!x == -x - 1`
impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        -(self + &BigInteger::one())
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        !&self
    }
}

impl Shl<usize> for &BigInteger {
    type Output = BigInteger;

    /// Multiplication by `2^bits`, exact for both signs.
    fn shl(self, bits: usize) -> BigInteger {
        BigInteger::from_parts(self.sign, magnitude::shl(&self.magnitude, bits))
    }
}

impl Shr<usize> for &BigInteger {
    type Output = BigInteger;

    /// Arithmetic shift, i.e. floor division by `2^bits`.
    fn shr(self, bits: usize) -> BigInteger {
        match self.sign {
            Sign::Negative => {
                // floor(-m / 2^k) == -(((m - 1) >> k) + 1)
                let m_minus_one = magnitude::sub(&self.magnitude, &[1]);
                let shifted = magnitude::shr(&m_minus_one, bits);
                BigInteger::from_parts(Sign::Negative, magnitude::add(&shifted, &[1]))
            }
            _ => BigInteger::from_parts(self.sign, magnitude::shr(&self.magnitude, bits)),
        }
    }
}

impl Shl<usize> for BigInteger {
    type Output = BigInteger;

    fn shl(self, bits: usize) -> BigInteger {
        &self << bits
    }
}

impl Shr<usize> for BigInteger {
    type Output = BigInteger;

    fn shr(self, bits: usize) -> BigInteger {
        &self >> bits
    }
}
