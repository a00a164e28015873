use std::cmp::Ordering;

use log::debug;

use crate::number::error::{NumberError, NumberResult};

use super::{
    integer::{BigInteger, Sign},
    magnitude,
};

//--------------------------------------------------------------------------------------//
//                                  Widening (native)                                   //
//--------------------------------------------------------------------------------------//

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(value: $t) -> Self {
                BigInteger::from_parts(Sign::Positive, magnitude::from_u128(value as u128))
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                BigInteger::from_parts(sign, magnitude::from_u128(value.unsigned_abs() as u128))
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
from_signed!(i8, i16, i32, i64, i128, isize);

impl BigInteger {
    /// Convert a double, truncating toward zero.
    ///
    /// Magnitudes of 2^64 and above are not cast natively: the IEEE-754 bit pattern is split
    /// into its 53-bit significand and binary exponent and the significand is shifted into place.
    pub fn from_f64(value: f64) -> NumberResult<BigInteger> {
        if !value.is_finite() {
            return Err(NumberError::domain_error(format!(
                "cannot convert {} to an integer",
                value
            )));
        }
        let truncated = value.trunc();
        if truncated.abs() < 18446744073709551616.0 {
            let magnitude = truncated.abs() as u64;
            let sign = if truncated < 0.0 {
                Sign::Negative
            } else {
                Sign::Positive
            };
            return Ok(BigInteger::from_parts(sign, magnitude::from_u128(magnitude as u128)));
        }

        let bits = value.to_bits();
        let exponent = ((bits >> 52) & 0x7ff) as i64 - 1075;
        let significand = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
        let sign = if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        // |value| >= 2^64 so the exponent is at least 12 and the value is an integer
        Ok(BigInteger::from_parts(
            sign,
            magnitude::shl(&magnitude::from_u128(significand as u128), exponent as usize),
        ))
    }

    /// Convert to the nearest double.
    ///
    /// Values beyond the finite double range clamp to `f64::MAX` (or `-f64::MAX`) instead of
    /// overflowing to infinity.
    pub fn to_f64(&self) -> f64 {
        let bits = self.bits();
        let abs = if bits <= 64 {
            magnitude::to_u64(&self.magnitude).unwrap_or(u64::MAX) as f64
        } else {
            // Keep the top 64 bits and fold everything below into a sticky bit
            // so the single u64 -> f64 rounding is correct.
            let shift = bits - 64;
            let mut top = magnitude::to_u64(&magnitude::shr(&self.magnitude, shift)).unwrap_or(u64::MAX);
            if magnitude::any_low_bits(&self.magnitude, shift) {
                top |= 1;
            }
            if shift > 1023 {
                f64::INFINITY
            } else {
                top as f64 * 2f64.powi(shift as i32)
            }
        };
        let abs = if abs.is_infinite() {
            debug!("clamping {}-bit integer to the largest finite double", bits);
            f64::MAX
        } else {
            abs
        };
        match self.sign {
            Sign::Negative => -abs,
            _ => abs,
        }
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    pub fn to_i32(&self) -> NumberResult<i32> {
        i32::try_from(self)
    }

    pub fn to_i64(&self) -> NumberResult<i64> {
        i64::try_from(self)
    }

    pub fn to_u32(&self) -> NumberResult<u32> {
        u32::try_from(self)
    }

    pub fn to_u64(&self) -> NumberResult<u64> {
        u64::try_from(self)
    }

    /// Signed value if it fits in an `i128`.
    pub(crate) fn to_i128(&self) -> Option<i128> {
        if self.magnitude.len() > 4 {
            return None;
        }
        let abs = self
            .magnitude
            .iter()
            .rev()
            .fold(0u128, |acc, &w| (acc << 32) | w as u128);
        match self.sign {
            Sign::Negative if abs <= i128::MAX as u128 + 1 => Some((abs as i128).wrapping_neg()),
            Sign::Negative => None,
            _ => i128::try_from(abs).ok(),
        }
    }
}

//--------------------------------------------------------------------------------------//
//                                 Narrowing (native)                                   //
//--------------------------------------------------------------------------------------//

macro_rules! try_into_native {
    ($($t:ty),*) => {$(
        impl TryFrom<&BigInteger> for $t {
            type Error = NumberError;

            fn try_from(value: &BigInteger) -> Result<Self, Self::Error> {
                value
                    .to_i128()
                    .and_then(|v| <$t>::try_from(v).ok())
                    .ok_or_else(|| {
                        NumberError::out_of_range(format!(
                            "{} does not fit in {}",
                            value,
                            stringify!($t)
                        ))
                    })
            }
        }

        impl TryFrom<BigInteger> for $t {
            type Error = NumberError;

            fn try_from(value: BigInteger) -> Result<Self, Self::Error> {
                <$t>::try_from(&value)
            }
        }
    )*};
}

try_into_native!(i32, i64, u32, u64);

//--------------------------------------------------------------------------------------//
//                              Comparison with natives                                 //
//--------------------------------------------------------------------------------------//

impl BigInteger {
    /// Compare against a native value given as sign and magnitude, without allocating.
    fn cmp_native(&self, negative: bool, abs: u64) -> Ordering {
        let other_sign = match (abs, negative) {
            (0, _) => Sign::Zero,
            (_, true) => Sign::Negative,
            (_, false) => Sign::Positive,
        };
        match self.sign.cmp(&other_sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        // A magnitude wider than two words is larger than any native value
        let mag_ord = match magnitude::to_u64(&self.magnitude) {
            Some(mine) => mine.cmp(&abs),
            None => Ordering::Greater,
        };
        match self.sign {
            Sign::Negative => mag_ord.reverse(),
            Sign::Zero => Ordering::Equal,
            Sign::Positive => mag_ord,
        }
    }
}

macro_rules! cmp_native {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for BigInteger {
            fn eq(&self, other: &$t) -> bool {
                self.partial_cmp(other) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd<$t> for BigInteger {
            #[allow(unused_comparisons)]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp_native(*other < 0, (*other as i128).unsigned_abs() as u64))
            }
        }
    )*};
}

cmp_native!(i32, i64, u32, u64);
