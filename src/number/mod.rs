#[macro_use]
mod macros;

pub mod complex;
pub mod error;
pub mod integer;
pub mod interop;
pub mod native;
pub mod rational;
