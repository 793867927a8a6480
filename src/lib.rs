//! # Rationals
//!
//! Exact arithmetic on fractions of two arbitrary precision integers.
//!
//! Values are kept exactly as constructed: the constructor neither reduces
//! nor moves signs around, and the operators return unreduced results.
//! Reduction to lowest terms happens on demand, when a value is formatted
//! or compared for equality.
pub use rational::ParseRationalError;
pub use rational::Rational;
pub use rational::RationalRange;

pub mod rational;

/// Shorthand for constructing [`Rational`] values.
///
/// `R!(n)` is the integer `n`, `R!(n, d)` is the fraction `n/d`.
#[macro_export]
macro_rules! R {
    ($numerator:expr) => {
        $crate::Rational::from($numerator)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Rational::new($numerator, $denominator)
    };
}
