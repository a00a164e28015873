use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use lazy_regex::regex_captures;

use crate::number::{
    error::{div_zero_error, NumberError, NumberResult},
    integer::{BigInteger, Sign},
};

/// An exact fraction of two `BigInteger`s.
///
/// Always reduced to lowest terms with a positive denominator; zero is `0/1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInteger,
    denominator: BigInteger,
}

impl Rational {
    /// Build `numerator / denominator`, reduced and with the sign moved to the numerator.
    pub fn new(numerator: BigInteger, denominator: BigInteger) -> NumberResult<Rational> {
        if denominator.is_zero() {
            return div_zero_error();
        }
        Ok(Rational::reduce(numerator, denominator))
    }

    /// `denominator` must be non-zero.
    fn reduce(numerator: BigInteger, denominator: BigInteger) -> Rational {
        if numerator.is_zero() {
            return Rational::zero();
        }
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let gcd = numerator.gcd(&denominator);
        if gcd.is_one() {
            return Rational {
                numerator,
                denominator,
            };
        }
        // The gcd divides both exactly
        Rational {
            numerator: numerator.truncated_div_rem(&gcd).0,
            denominator: denominator.truncated_div_rem(&gcd).0,
        }
    }

    pub fn zero() -> Rational {
        Rational {
            numerator: BigInteger::zero(),
            denominator: BigInteger::one(),
        }
    }

    pub fn one() -> Rational {
        Rational::from(BigInteger::one())
    }

    /// Exact value of a finite double, taken from its IEEE-754 bit pattern.
    pub fn from_f64(value: f64) -> NumberResult<Rational> {
        if !value.is_finite() {
            return Err(NumberError::domain_error(format!(
                "cannot convert {} to a rational",
                value
            )));
        }
        if value == 0.0 {
            return Ok(Rational::zero());
        }
        let bits = value.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);
        // Subnormals have no implicit leading bit and the minimum exponent
        let (significand, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };
        let mut numerator = BigInteger::from(significand);
        if value < 0.0 {
            numerator = -numerator;
        }
        if exponent >= 0 {
            Ok(Rational::from(numerator << exponent as usize))
        } else {
            Ok(Rational::reduce(
                numerator,
                BigInteger::one() << exponent.unsigned_abs() as usize,
            ))
        }
    }

    /// Parse `"N"` or `"N/D"`, where `N` is an optionally negative decimal integer
    /// and `D` an unsigned one.
    pub fn parse(text: &str) -> NumberResult<Rational> {
        let Some((_, numerator, _, denominator)) = regex_captures!(r"^(-?[0-9]+)(/([0-9]+))?$", text)
        else {
            return Err(NumberError::format_error(format!(
                "'{}' is not a rational literal",
                text
            )));
        };
        let numerator = BigInteger::parse(numerator)?;
        if denominator.is_empty() {
            return Ok(Rational::from(numerator));
        }
        Rational::new(numerator, BigInteger::parse(denominator)?)
    }

    pub fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn signum(&self) -> Sign {
        self.numerator.sign()
    }

    pub fn abs(&self) -> Rational {
        Rational {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Add exactly one whole unit.
    pub fn increment(&self) -> Rational {
        Rational {
            numerator: &self.numerator + &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    /// Subtract exactly one whole unit.
    pub fn decrement(&self) -> Rational {
        Rational {
            numerator: &self.numerator - &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    pub fn recip(&self) -> NumberResult<Rational> {
        Rational::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn checked_div(&self, rhs: &Rational) -> NumberResult<Rational> {
        if rhs.is_zero() {
            return div_zero_error();
        }
        Ok(Rational::reduce(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    /// Integer power, a negative exponent raises the reciprocal.
    pub fn pow(&self, exponent: i64) -> NumberResult<Rational> {
        let base = if exponent < 0 { self.recip()? } else { self.clone() };
        let exponent = exponent.unsigned_abs();
        // Powers of coprime values stay coprime, no reduction needed
        Ok(Rational {
            numerator: base.numerator.pow_u64(exponent),
            denominator: base.denominator.pow_u64(exponent),
        })
    }

    /// Round toward zero.
    pub fn trunc(&self) -> BigInteger {
        let (q, _) = self.div_rem_parts();
        q
    }

    /// Round toward negative infinity.
    pub fn floor(&self) -> BigInteger {
        let (q, r) = self.div_rem_parts();
        if r.is_negative() {
            q - BigInteger::one()
        } else {
            q
        }
    }

    /// Round toward positive infinity.
    pub fn ceil(&self) -> BigInteger {
        let (q, r) = self.div_rem_parts();
        if r.is_positive() {
            q + BigInteger::one()
        } else {
            q
        }
    }

    fn div_rem_parts(&self) -> (BigInteger, BigInteger) {
        self.numerator.truncated_div_rem(&self.denominator)
    }

    /// Both parts are converted to doubles and divided, which loses precision
    /// once either part exceeds the double range.
    pub fn to_f64(&self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl From<BigInteger> for Rational {
    fn from(value: BigInteger) -> Self {
        Rational {
            numerator: value,
            denominator: BigInteger::one(),
        }
    }
}

macro_rules! from_native {
    ($($t:ty),*) => {$(
        impl From<$t> for Rational {
            fn from(value: $t) -> Self {
                Rational::from(BigInteger::from(value))
            }
        }
    )*};
}

from_native!(i32, i64, u32, u64);

impl Ord for Rational {
    /// Cross multiplication, the denominators are positive so the order is preserved.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//--------------------------------------------------------------------------------------//
//                                     Arithmetic                                       //
//--------------------------------------------------------------------------------------//

impl<'a, 'b> Add<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        if self.denominator == rhs.denominator {
            return Rational::reduce(&self.numerator + &rhs.numerator, self.denominator.clone());
        }
        Rational::reduce(
            &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator),
            &self.denominator * &rhs.denominator,
        )
    }
}

impl<'a, 'b> Sub<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduce(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

forward_owned_binop!(Rational; Add::add, Sub::sub, Mul::mul);

//--------------------------------------------------------------------------------------//
//                                    Formatting                                        //
//--------------------------------------------------------------------------------------//

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Debug for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl FromStr for Rational {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rational::parse(s)
    }
}
