//! # Closed ranges
use super::Rational;

/// A closed range between two rationals, endpoints included.
#[derive(Clone, Debug)]
pub struct RationalRange {
    start: Rational,
    end: Rational,
}

impl Rational {
    /// The closed range from `self` up to and including `end`.
    pub fn range_to(&self, end: &Rational) -> RationalRange {
        RationalRange {
            start: self.clone(),
            end: end.clone(),
        }
    }
}

impl RationalRange {
    pub fn start(&self) -> &Rational {
        &self.start
    }

    pub fn end(&self) -> &Rational {
        &self.end
    }

    /// Whether `candidate` is a member of the range.
    ///
    /// Membership compares the candidate's raw numerator and denominator
    /// componentwise against the upper bound's raw fields, not the
    /// represented value against the endpoints. The start endpoint is not
    /// consulted at all: `1/2` is in `1/3..2/3` because `1 <= 2` and
    /// `2 <= 3`.
    pub fn contains(&self, candidate: &Rational) -> bool {
        candidate.numerator <= self.end.numerator
            && candidate.denominator <= self.end.denominator
    }
}
