//! # Interactions with fixed size integers
use std::convert::From;

use num::BigInt;
use num::One;

use super::Rational;

macro_rules! define_interations {
    ($t:ident) => {
        mod $t {
            use super::*;

            mod creation {
                use super::*;

                impl From<$t> for Rational {
                    fn from(value: $t) -> Self {
                        Self::new(BigInt::from(value), BigInt::one())
                    }
                }

                impl From<&$t> for Rational {
                    fn from(value: &$t) -> Self {
                        Self::from(*value)
                    }
                }
            }

            mod compare {
                use super::*;

                impl PartialEq<$t> for Rational {
                    fn eq(&self, other: &$t) -> bool {
                        self == &Rational::from(*other)
                    }
                }
            }
        }
    };
}

define_interations!(i32);
define_interations!(i64);
define_interations!(i128);
define_interations!(isize);
define_interations!(u32);
define_interations!(u64);
define_interations!(u128);
define_interations!(usize);
