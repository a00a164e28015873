//! Unbounded signed integers over a little-endian vector of 32-bit words.

mod bitwise;
mod convert;
mod format;
mod integer;
mod magnitude;

#[cfg(test)]
mod tests;

pub use integer::{BigInteger, Sign};

/// Bits per magnitude word
pub const WORD_BITS: usize = 32;

/// Largest power of ten below 2^32, used to format decimal output a chunk at a time
pub const DECIMAL_CHUNK: u32 = 1_000_000_000;
pub const DECIMAL_CHUNK_DIGITS: usize = 9;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;
