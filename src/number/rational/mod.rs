//! Exact fractions over `BigInteger`.

mod rational;


pub use rational::Rational;
