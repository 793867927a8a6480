//! # Parsing from text
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use num::bigint::ParseBigIntError;
use num::BigInt;
use num::One;

use super::Rational;

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `numerator/denominator`, splitting at the last `/`. Text
    /// without a slash is a bare integer with denominator 1.
    ///
    /// Neither side is checked beyond integer syntax: `"2/0"` parses into a
    /// zero-denominator value, and `"1/2/3"` fails because `"1/2"` is not an
    /// integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('/') {
            Some((numerator, denominator)) => Ok(Self::new(
                BigInt::from_str(numerator)?,
                BigInt::from_str(denominator)?,
            )),
            None => Ok(Self::new(BigInt::from_str(s)?, BigInt::one())),
        }
    }
}

/// A numerator or denominator substring was not a valid integer literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRationalError {
    source: ParseBigIntError,
}

impl fmt::Display for ParseRationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid rational number: {}", self.source)
    }
}

impl Error for ParseRationalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl From<ParseBigIntError> for ParseRationalError {
    fn from(source: ParseBigIntError) -> Self {
        Self { source }
    }
}
