//! Overflow promotion for native fixed width integer arithmetic.

mod native;

#[cfg(test)]
mod tests;

pub use native::{
    checked_native, ArithmeticOperations, BitSize, CheckedNative, ComparisonOperations,
    NativeInteger, NativeOp, NumberCasting,
};
