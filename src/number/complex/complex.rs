use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use crate::number::error::{div_zero_error, NumberError, NumberResult};

use super::scalar::Scalar;

/// A complex number over the field `T`.
///
/// Equality is exact componentwise equality, no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T: Scalar> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }

    /// A real number, the imaginary part is zero.
    pub fn from_real(re: T) -> Self {
        Complex { re, im: T::zero() }
    }

    pub fn zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }

    pub fn one() -> Self {
        Complex::new(T::one(), T::zero())
    }

    /// The imaginary unit
    pub fn i() -> Self {
        Complex::new(T::zero(), T::one())
    }

    pub fn real(&self) -> &T {
        &self.re
    }

    pub fn imaginary(&self) -> &T {
        &self.im
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    pub fn conjugate(&self) -> Self {
        Complex::new(self.re.clone(), -self.im.clone())
    }

    /// Multiplication by the imaginary unit: `(re, im) -> (-im, re)`.
    pub fn inverse(&self) -> Self {
        Complex::new(-self.im.clone(), self.re.clone())
    }

    /// `|z|` as a double, computed with `hypot` so extreme components neither overflow
    /// nor underflow in the intermediate squares.
    pub fn magnitude(&self) -> f64 {
        self.re.to_f64().hypot(self.im.to_f64())
    }

    /// Division scaled by the larger divisor component (Smith's algorithm),
    /// which keeps the intermediate products in range.
    pub fn checked_div(&self, rhs: &Self) -> NumberResult<Self> {
        if rhs.is_zero() {
            return div_zero_error();
        }
        let (a, b) = (self.re.clone(), self.im.clone());
        let (c, d) = (rhs.re.clone(), rhs.im.clone());
        if c.abs() >= d.abs() {
            let ratio = d.checked_div(&c)?;
            let denom = c + d * ratio.clone();
            let re = a.clone() + b.clone() * ratio.clone();
            let im = b - a * ratio;
            Ok(Complex::new(re.checked_div(&denom)?, im.checked_div(&denom)?))
        } else {
            let ratio = c.checked_div(&d)?;
            let denom = d + c * ratio.clone();
            let re = a.clone() * ratio.clone() + b.clone();
            let im = b * ratio - a;
            Ok(Complex::new(re.checked_div(&denom)?, im.checked_div(&denom)?))
        }
    }

    /// Parse `a`, `bi`, `i`, `a+bi` or `a-bi`, with each part in the component's own
    /// literal syntax.
    pub fn parse(text: &str) -> NumberResult<Self> {
        let Some(body) = text.strip_suffix('i') else {
            return Ok(Complex::from_real(T::parse_component(text)?));
        };
        match split_imaginary(body) {
            Some(split) => {
                let re = T::parse_component(&body[..split])?;
                let im = parse_imaginary(&body[split..])?;
                Ok(Complex::new(re, im))
            }
            None => Ok(Complex::new(T::zero(), parse_imaginary(body)?)),
        }
    }
}

/// Index of the sign separating the real from the imaginary part, skipping a leading sign
/// and exponent signs such as the one in `1e-5`.
fn split_imaginary(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&k| matches!(bytes[k], b'+' | b'-') && !matches!(bytes[k - 1], b'e' | b'E'))
}

/// A signed imaginary coefficient, a bare sign stands for one.
fn parse_imaginary<T: Scalar>(part: &str) -> NumberResult<T> {
    let (negative, digits) = match part.as_bytes().first() {
        Some(b'-') => (true, &part[1..]),
        Some(b'+') => (false, &part[1..]),
        _ => (false, part),
    };
    let value = if digits.is_empty() {
        T::one()
    } else {
        T::parse_component(digits)?
    };
    Ok(if negative { -value } else { value })
}

impl<T: Scalar> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.im.is_negative() {
            write!(f, "{}-{}i", self.re, self.im.abs())
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl<T: Scalar> FromStr for Complex<T> {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complex::parse(s)
    }
}

//--------------------------------------------------------------------------------------//
//                                     Arithmetic                                       //
//--------------------------------------------------------------------------------------//

impl<T: Scalar> Add for Complex<T> {
    type Output = Complex<T>;

    fn add(self, rhs: Complex<T>) -> Complex<T> {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Complex<T>;

    fn sub(self, rhs: Complex<T>) -> Complex<T> {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Scalar> Mul for Complex<T> {
    type Output = Complex<T>;

    /// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    fn mul(self, rhs: Complex<T>) -> Complex<T> {
        let (a, b, c, d) = (self.re, self.im, rhs.re, rhs.im);
        Complex::new(
            a.clone() * c.clone() - b.clone() * d.clone(),
            a * d + b * c,
        )
    }
}

impl<T: Scalar> Neg for Complex<T> {
    type Output = Complex<T>;

    fn neg(self) -> Complex<T> {
        Complex::new(-self.re, -self.im)
    }
}

impl<T: Scalar> Neg for &Complex<T> {
    type Output = Complex<T>;

    fn neg(self) -> Complex<T> {
        -self.clone()
    }
}

macro_rules! forward_ref_binop {
    ($($imp:ident :: $method:ident),*) => {$(
        impl<'a, 'b, T: Scalar> $imp<&'b Complex<T>> for &'a Complex<T> {
            type Output = Complex<T>;

            fn $method(self, rhs: &Complex<T>) -> Complex<T> {
                self.clone().$method(rhs.clone())
            }
        }

        impl<'a, T: Scalar> $imp<&'a Complex<T>> for Complex<T> {
            type Output = Complex<T>;

            fn $method(self, rhs: &Complex<T>) -> Complex<T> {
                self.$method(rhs.clone())
            }
        }
    )*};
}

forward_ref_binop!(Add::add, Sub::sub, Mul::mul);
