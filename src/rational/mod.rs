//! # Rational numbers
//!
//! The value type and its operators. Construction is raw: whatever
//! numerator and denominator the caller supplies are stored untouched,
//! and every operator produces a new raw instance. Lowest-terms form is
//! computed by [`Rational::reduced`] where it is needed.
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::BigInt;
use num::Integer;
use num::One;
use num::Signed;
use num::ToPrimitive;
use num::Zero;

pub use parse::ParseRationalError;
pub use range::RationalRange;

#[macro_use]
mod macros;
mod parse;
mod range;
mod with_primitive;


/// A fraction of two [`BigInt`]s.
///
/// The fields are not an invariant-bearing canonical form: the denominator
/// may be negative and numerator and denominator may share a common factor
/// until [`Rational::reduced`] is applied. A zero denominator is never
/// guarded against; it panics on the first division it reaches.
#[derive(Clone, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Creates a rational from a numerator and a denominator, taken as-is.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numerator: N, denominator: D) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// The lowest-terms form of this value.
    ///
    /// Both fields are divided by their greatest common divisor. The sign
    /// stays in the field that carried it: `2/-4` reduces to `1/-2`, not
    /// `-1/2`. Sign placement is a formatting concern.
    pub fn reduced(&self) -> Self {
        let divisor = self.numerator.gcd(&self.denominator);

        Self {
            numerator: &self.numerator / &divisor,
            denominator: &self.denominator / &divisor,
        }
    }

    fn quotient_f64(&self) -> f64 {
        let numerator = self.numerator.to_f64().unwrap_or(f64::NAN);
        let denominator = self.denominator.to_f64().unwrap_or(f64::NAN);

        numerator / denominator
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::new(value, BigInt::one())
    }
}

impl fmt::Display for Rational {
    /// Renders integer-valued fractions as the bare integer quotient,
    /// everything else reduced as `numerator/denominator` with the sign
    /// emitted once, through the numerator.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denominator.is_one() || (&self.numerator % &self.denominator).is_zero() {
            write!(f, "{}", &self.numerator / &self.denominator)
        } else {
            let reduced = self.reduced();

            if reduced.denominator.is_negative() {
                write!(f, "{}/{}", -reduced.numerator, -reduced.denominator)
            } else {
                write!(f, "{}/{}", reduced.numerator, reduced.denominator)
            }
        }
    }
}

impl PartialEq for Rational {
    /// Value equality through the reduced form, compared as `f64` quotients.
    ///
    /// Values whose reduced quotients round to the same `f64` compare equal,
    /// so distinctions finer than the 52-bit mantissa are lost. `Eq` and
    /// `Ord` are not implemented on top of this.
    fn eq(&self, other: &Self) -> bool {
        self.reduced().quotient_f64() == other.reduced().quotient_f64()
    }
}

impl PartialOrd for Rational {
    /// Exact comparison by cross-multiplication of the raw fields, without
    /// reduction or floating point.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;

        Some(left.cmp(&right))
    }
}

impl Hash for Rational {
    /// Hashes the raw fields, not the reduced value.
    ///
    /// Inconsistent with `PartialEq`: `1/2` and `2/4` are equal but hash
    /// differently. Keyed collections over `Rational` need reduced keys.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::new(BigInt::zero(), BigInt::one())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::new(BigInt::one(), BigInt::one())
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

forward_all_binop!(impl Add, add);
// a/b + c/d = (a*d + b*c)/(b*d)
impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Self::Output {
        Rational {
            numerator: &self.numerator * &rhs.denominator + &self.denominator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

forward_all_binop!(impl Sub, sub);
// a/b - c/d = (a*d - b*c)/(b*d)
impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Rational {
            numerator: &self.numerator * &rhs.denominator - &self.denominator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

forward_all_binop!(impl Mul, mul);
// a/b * c/d = (a*c)/(b*d)
impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Rational {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }
}

forward_all_binop!(impl Div, div);
// (a/b) / (c/d) = (a*d)/(b*c)
impl Div<&Rational> for &Rational {
    type Output = Rational;

    /// Dividing by a zero-valued rational yields a zero denominator; the
    /// divide-by-zero panic surfaces at the first reduction or formatting
    /// of the result, not here.
    fn div(self, rhs: &Rational) -> Self::Output {
        Rational {
            numerator: &self.numerator * &rhs.denominator,
            denominator: &self.denominator * &rhs.numerator,
        }
    }
}
