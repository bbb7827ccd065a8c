//! Check-character algorithms for both representations.
//!
//! Both functions depend on the body alone and are total over [`Body`].

use crate::codec::{self, RADIX};
use crate::types::{Body, BODY_LEN};

/// Per-position weights applied left to right over the body digits.
const WEIGHTS: [u32; BODY_LEN] = [1, 2, 1, 2, 1, 2, 1, 2];

/// Returns the numeric value of the decimal check digit.
pub(crate) fn check_digit_value(body: Body) -> u32 {
    let total: u32 = body
        .digits()
        .iter()
        .zip(WEIGHTS)
        .map(|(&digit, weight)| {
            let product = u32::from(digit) * weight;
            product / 10 + product % 10
        })
        .sum();
    total % 10
}

/// Computes the check digit of the decimal form.
#[must_use]
pub fn checksum10(body: Body) -> char {
    // check_digit_value is always < 10
    char::from(b'0' + check_digit_value(body) as u8)
}

/// Computes the check symbol of the compact form.
///
/// This is the last symbol of the base-32 rendering of the full decimal
/// number, so it covers both the body and its decimal check digit.
#[must_use]
pub fn checksum32(body: Body) -> char {
    let number = body.value() * 10 + check_digit_value(body);
    codec::symbol(number % RADIX)
}
