use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use lazy_regex::regex_is_match;

use crate::number::error::{NumberError, NumberResult};

use super::{
    integer::{BigInteger, Sign},
    magnitude, DECIMAL_CHUNK, DECIMAL_CHUNK_DIGITS, MAX_RADIX, MIN_RADIX,
};

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn check_radix(radix: u32) -> NumberResult<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(NumberError::domain_error(format!(
            "radix must be between {} and {}, got {}",
            MIN_RADIX, MAX_RADIX, radix
        )))
    }
}

impl BigInteger {
    /// Parse a decimal integer literal: an optional `-` followed by one or more digits.
    /// The value is accumulated by repeated multiplication by ten.
    pub fn parse(text: &str) -> NumberResult<BigInteger> {
        if !regex_is_match!(r"^-?[0-9]+$", text) {
            return Err(NumberError::format_error(format!(
                "'{}' is not a decimal integer",
                text
            )));
        }
        BigInteger::accumulate(text, 10)
    }

    /// Parse an integer written in `radix`, digits above 9 are letters in either case.
    pub fn parse_radix(text: &str, radix: u32) -> NumberResult<BigInteger> {
        check_radix(radix)?;
        let digits = text.strip_prefix('-').unwrap_or(text);
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(NumberError::format_error(format!(
                "'{}' is not a base {} integer",
                text, radix
            )));
        }
        BigInteger::accumulate(text, radix)
    }

    /// `text` must already be validated for `radix`.
    fn accumulate(text: &str, radix: u32) -> NumberResult<BigInteger> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let mut words: Vec<u32> = Vec::new();
        let radix_word = [radix];
        for c in digits.chars() {
            let digit = c.to_digit(radix).ok_or_else(|| {
                NumberError::format_error(format!("invalid digit '{}' in '{}'", c, text))
            })?;
            words = magnitude::add(&magnitude::mul(&words, &radix_word), &[digit]);
        }
        let sign = if negative {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Ok(BigInteger::from_parts(sign, words))
    }

    /// Render in `radix` by repeated division, uppercase letters above 9.
    pub fn to_string_radix(&self, radix: u32) -> NumberResult<String> {
        check_radix(radix)?;
        if self.is_zero() {
            return Ok("0".to_string());
        }
        let mut digits = Vec::new();
        let mut rest = self.magnitude.clone();
        while !rest.is_empty() {
            let (q, r) = magnitude::div_rem_word(&rest, radix);
            digits.push(DIGITS[r as usize]);
            rest = q;
        }
        if self.is_negative() {
            digits.push(b'-');
        }
        digits.reverse();
        Ok(digits.into_iter().map(char::from).collect())
    }

    /// Decimal chunks of `DECIMAL_CHUNK_DIGITS` digits, least significant first.
    fn decimal_chunks(&self) -> Vec<u32> {
        let mut chunks = Vec::new();
        let mut rest = self.magnitude.clone();
        while !rest.is_empty() {
            let (q, r) = magnitude::div_rem_word(&rest, DECIMAL_CHUNK);
            chunks.push(r);
            rest = q;
        }
        chunks
    }
}

impl Display for BigInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let chunks = self.decimal_chunks();
        let Some((top, rest)) = chunks.split_last() else {
            return write!(f, "0");
        };
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", top)?;
        for chunk in rest.iter().rev() {
            write!(f, "{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS)?;
        }
        Ok(())
    }
}

impl Debug for BigInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}

impl FromStr for BigInteger {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInteger::parse(s)
    }
}
