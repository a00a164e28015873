//! Complex numbers over doubles and over exact rationals.

mod complex;
mod double;
mod exact;
mod scalar;


pub use complex::Complex;
pub use double::DoubleComplex;
pub use exact::ExactComplex;
pub use scalar::Scalar;
