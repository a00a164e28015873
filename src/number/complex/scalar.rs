use std::{
    fmt::Display,
    ops::{Add, Mul, Neg, Sub},
};

use crate::number::{
    error::{NumberError, NumberResult},
    rational::Rational,
};

/// The field a `Complex` number is built over.
pub trait Scalar:
    Clone
    + PartialEq
    + PartialOrd
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    /// Used for formatting, so a negative zero counts as negative where the field has one
    fn is_negative(&self) -> bool;
    fn abs(&self) -> Self;
    fn checked_div(&self, rhs: &Self) -> NumberResult<Self>;
    fn to_f64(&self) -> f64;
    fn parse_component(text: &str) -> NumberResult<Self>;
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_negative(&self) -> bool {
        self.is_sign_negative()
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    /// IEEE-754 division, never fails.
    fn checked_div(&self, rhs: &Self) -> NumberResult<Self> {
        Ok(self / rhs)
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn parse_component(text: &str) -> NumberResult<Self> {
        text.parse::<f64>().map_err(|_| {
            NumberError::format_error(format!("'{}' is not a floating point number", text))
        })
    }
}

impl Scalar for Rational {
    fn zero() -> Self {
        Rational::zero()
    }

    fn one() -> Self {
        Rational::one()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        Rational::is_negative(self)
    }

    fn abs(&self) -> Self {
        Rational::abs(self)
    }

    fn checked_div(&self, rhs: &Self) -> NumberResult<Self> {
        Rational::checked_div(self, rhs)
    }

    fn to_f64(&self) -> f64 {
        Rational::to_f64(self)
    }

    fn parse_component(text: &str) -> NumberResult<Self> {
        Rational::parse(text)
    }
}
