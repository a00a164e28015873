//! Conversions between `BigInteger` and `num_bigint::BigInt`.
//! Both keep a little-endian `u32` magnitude, so the words are moved across unchanged.

use num_bigint::{BigInt, Sign as BigIntSign};

use super::integer::{BigInteger, Sign};

impl From<&BigInteger> for BigInt {
    fn from(value: &BigInteger) -> Self {
        let sign = match value.sign() {
            Sign::Negative => BigIntSign::Minus,
            Sign::Zero => BigIntSign::NoSign,
            Sign::Positive => BigIntSign::Plus,
        };
        BigInt::from_slice(sign, value.words())
    }
}

impl From<BigInteger> for BigInt {
    fn from(value: BigInteger) -> Self {
        BigInt::from(&value)
    }
}

impl From<&BigInt> for BigInteger {
    fn from(value: &BigInt) -> Self {
        let (sign, words) = value.to_u32_digits();
        let sign = match sign {
            BigIntSign::Minus => Sign::Negative,
            BigIntSign::NoSign => Sign::Zero,
            BigIntSign::Plus => Sign::Positive,
        };
        BigInteger::from_parts(sign, words)
    }
}

impl From<BigInt> for BigInteger {
    fn from(value: BigInt) -> Self {
        BigInteger::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use crate::number::integer::BigInteger;

    #[test]
    fn test_interop_round_trip() {
        for text in ["0", "1", "-1", "4294967296", "-340282366920938463463374607431768211457"] {
            let ours = BigInteger::parse(text).unwrap();
            let theirs: BigInt = text.parse().unwrap();
            assert_eq!(BigInt::from(&ours), theirs);
            assert_eq!(BigInteger::from(&theirs), ours);
        }
    }
}
