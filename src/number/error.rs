use thiserror::Error;

/// Errors raised by the numeric tower.
/// None of them carry partial results, the operation that failed produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// Malformed literal handed to one of the `parse` routines
    #[error("FormatError: {0}")]
    Format(String),

    /// Integer, rational or complex division by an exact zero
    #[error("DivisionByZero: division by zero")]
    DivisionByZero,

    /// Argument outside the domain of the operation (negative integer exponent, 0^-1, ...)
    #[error("DomainError: {0}")]
    Domain(String),

    /// Narrowing conversion of a value that does not fit the target type
    #[error("OutOfRange: {0}")]
    OutOfRange(String),
}

impl NumberError {
    pub fn format_error<S: Into<String>>(msg: S) -> Self {
        NumberError::Format(msg.into())
    }

    pub fn domain_error<S: Into<String>>(msg: S) -> Self {
        NumberError::Domain(msg.into())
    }

    pub fn out_of_range<S: Into<String>>(msg: S) -> Self {
        NumberError::OutOfRange(msg.into())
    }
}

pub type NumberResult<T> = Result<T, NumberError>;

pub fn div_zero_error<T>() -> NumberResult<T> {
    Err(NumberError::DivisionByZero)
}
