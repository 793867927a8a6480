//! End to end exercise of the public API: arithmetic, formatting, parsing,
//! comparison and range membership, including the large-integer cases.
use std::str::FromStr;

use num::BigInt;

use rationals::{Rational, R};

#[test]
fn addition() {
    let sum = R!(1, 2) + R!(1, 3);
    assert_eq!(sum, R!(5, 6));
}

#[test]
fn subtraction() {
    let difference = R!(1, 2) - R!(1, 3);
    assert_eq!(difference, R!(1, 6));
}

#[test]
fn multiplication() {
    let product = R!(1, 2) * R!(1, 3);
    assert_eq!(product, R!(1, 6));
}

#[test]
fn division() {
    let quotient = R!(1, 2) / R!(1, 3);
    assert_eq!(quotient, R!(3, 2));
}

#[test]
fn negation() {
    let negation = -R!(1, 2);
    assert_eq!(negation, R!(-1, 2));
}

#[test]
fn integer_valued_fractions_format_as_integers() {
    assert_eq!(R!(2, 1).to_string(), "2");
}

#[test]
fn formatting_reduces_and_normalizes_the_sign() {
    assert_eq!(R!(-2, 4).to_string(), "-1/2");
}

#[test]
fn parsing_then_formatting_reduces() {
    let parsed = "117/1098".parse::<Rational>().unwrap();
    assert_eq!(parsed.to_string(), "13/122");
}

#[test]
fn comparison() {
    assert!(R!(1, 2) < R!(2, 3));
}

#[test]
fn range_membership() {
    let range = R!(1, 3).range_to(&R!(2, 3));
    assert!(range.contains(&R!(1, 2)));
}

#[test]
fn reduction_beyond_machine_word_halves() {
    assert_eq!(R!(2_000_000_000_i64, 4_000_000_000_i64), R!(1, 2));
}

#[test]
fn forty_digit_ratio_equals_one_half() {
    let numerator = BigInt::from_str("912016490186296920119201192141970416029").unwrap();
    let denominator = BigInt::from_str("1824032980372593840238402384283940832058").unwrap();

    assert_eq!(R!(numerator, denominator), R!(1, 2));
}

#[test]
#[should_panic]
fn dividing_by_zero_fails() {
    let quotient = R!(1, 2) / R!(0);
    let _ = quotient.to_string();
}

#[test]
fn parsing_rejects_text_that_is_not_a_fraction() {
    assert!(Rational::from_str("abc").is_err());
    assert!(Rational::from_str("abc/2").is_err());
}
