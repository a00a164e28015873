use crate::number::{error::NumberResult, integer::BigInteger, rational::Rational};

use super::{complex::Complex, double::DoubleComplex};

/// Complex number with exact rational components.
pub type ExactComplex = Complex<Rational>;

impl From<Rational> for ExactComplex {
    fn from(value: Rational) -> Self {
        Complex::from_real(value)
    }
}

impl From<BigInteger> for ExactComplex {
    fn from(value: BigInteger) -> Self {
        Complex::from_real(Rational::from(value))
    }
}

macro_rules! from_native {
    ($($t:ty),*) => {$(
        impl From<$t> for ExactComplex {
            fn from(value: $t) -> Self {
                Complex::from_real(Rational::from(value))
            }
        }
    )*};
}

from_native!(i32, i64, u32, u64);

impl ExactComplex {
    /// Nearest double complex, componentwise.
    pub fn to_double(&self) -> DoubleComplex {
        Complex::new(self.re.to_f64(), self.im.to_f64())
    }

    /// Exact value of a double complex, both components must be finite.
    pub fn from_double(value: &DoubleComplex) -> NumberResult<ExactComplex> {
        Ok(Complex::new(
            Rational::from_f64(value.re)?,
            Rational::from_f64(value.im)?,
        ))
    }
}
