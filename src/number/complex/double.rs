use std::f64::consts::LN_10;

use crate::number::error::{NumberError, NumberResult};

use super::complex::Complex;

/// Complex number with IEEE-754 double components.
pub type DoubleComplex = Complex<f64>;

macro_rules! from_real {
    ($($t:ty),*) => {$(
        impl From<$t> for DoubleComplex {
            fn from(value: $t) -> Self {
                Complex::from_real(f64::from(value))
            }
        }
    )*};
}

from_real!(f32, i32, u32);

impl From<f64> for DoubleComplex {
    fn from(value: f64) -> Self {
        Complex::from_real(value)
    }
}

impl From<i64> for DoubleComplex {
    fn from(value: i64) -> Self {
        Complex::from_real(value as f64)
    }
}

impl From<u64> for DoubleComplex {
    fn from(value: u64) -> Self {
        Complex::from_real(value as f64)
    }
}

/// Transcendental functions are only defined over doubles.
/// Each one is composed from `exp` in a fixed order so results are reproducible bit for bit.
impl DoubleComplex {
    /// Argument of the number in `(-pi, pi]`.
    pub fn angle(&self) -> f64 {
        self.im.atan2(self.re)
    }

    pub fn exp(&self) -> DoubleComplex {
        if self.im == 0.0 {
            return Complex::from_real(self.re.exp());
        }
        let magnitude = self.re.exp();
        Complex::new(magnitude * self.im.cos(), magnitude * self.im.sin())
    }

    /// Natural logarithm on the principal branch.
    pub fn ln(&self) -> DoubleComplex {
        Complex::new(self.magnitude().ln(), self.angle())
    }

    pub fn log10(&self) -> DoubleComplex {
        Complex::new(self.magnitude().ln() / LN_10, self.angle())
    }

    /// Only the modulus term is scaled by the base.
    pub fn log(&self, base: f64) -> DoubleComplex {
        Complex::new(self.magnitude().ln() / base.ln(), self.angle())
    }

    pub fn sqrt(&self) -> DoubleComplex {
        if self.im == 0.0 {
            return Complex::from_real(self.re.sqrt());
        }
        let r = self.magnitude();
        let y = ((r - self.re) / 2.0).sqrt();
        let x = self.im / (2.0 * y);
        if x < 0.0 {
            Complex::new(-x, -y)
        } else {
            Complex::new(x, y)
        }
    }

    /// `(exp(iz) - exp(-iz)) / 2i`
    pub fn sin(&self) -> DoubleComplex {
        let iz = self.inverse();
        let diff = iz.exp() - (-iz).exp();
        // Dividing by 2i rotates (p, q) to (q, -p) / 2
        Complex::new(diff.im / 2.0, -diff.re / 2.0)
    }

    /// `(exp(iz) + exp(-iz)) / 2`
    pub fn cos(&self) -> DoubleComplex {
        let iz = self.inverse();
        let sum = iz.exp() + (-iz).exp();
        Complex::new(sum.re / 2.0, sum.im / 2.0)
    }

    pub fn tan(&self) -> NumberResult<DoubleComplex> {
        self.sin().checked_div(&self.cos())
    }

    /// `(exp(z) - exp(-z)) / 2`
    pub fn sinh(&self) -> DoubleComplex {
        let diff = self.exp() - (-self).exp();
        Complex::new(diff.re / 2.0, diff.im / 2.0)
    }

    /// `(exp(z) + exp(-z)) / 2`
    pub fn cosh(&self) -> DoubleComplex {
        let sum = self.exp() + (-self).exp();
        Complex::new(sum.re / 2.0, sum.im / 2.0)
    }

    pub fn tanh(&self) -> NumberResult<DoubleComplex> {
        self.sinh().checked_div(&self.cosh())
    }

    /// Complex power through the polar form of `self`.
    ///
    /// Zero raised to a power with a negative real part or any imaginary part
    /// is undefined and reported as a domain error.
    pub fn pow(&self, power: &DoubleComplex) -> NumberResult<DoubleComplex> {
        if power.is_zero() {
            return Ok(Complex::one());
        }
        if self.is_zero() {
            if power.im != 0.0 || power.re < 0.0 {
                return Err(NumberError::domain_error(format!(
                    "zero cannot be raised to the power {}",
                    power
                )));
            }
            return Ok(Complex::zero());
        }
        let modulus = self.magnitude();
        let base_angle = self.angle();
        let mut length = modulus.powf(power.re);
        let mut phase = base_angle * power.re;
        if power.im != 0.0 {
            length /= (base_angle * power.im).exp();
            phase += power.im * modulus.ln();
        }
        Ok(Complex::new(length * phase.cos(), length * phase.sin()))
    }

    pub fn powf(&self, power: f64) -> NumberResult<DoubleComplex> {
        self.pow(&Complex::from_real(power))
    }
}
