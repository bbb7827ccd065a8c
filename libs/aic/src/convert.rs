//! Conversion between the decimal and compact representations.

use crate::checksum::checksum10;
use crate::codec;
use crate::format::{validate_base10, validate_base32};
use crate::types::{decimal_value, Body};

/// Converts a decimal-form AIC to its compact form.
///
/// The input must pass [`validate_base10`]; its error is returned otherwise.
pub fn to_base32(decimal: &str) -> Result<String, crate::AicError> {
    let decimal = validate_base10(decimal)?;
    codec::encode(decimal_value(decimal))
}

/// Converts a compact-form AIC to its decimal form.
///
/// The input must pass [`validate_base32`]; its error is returned otherwise.
pub fn from_base32(compact: &str) -> Result<String, crate::AicError> {
    let compact = validate_base32(compact)?;
    let body = Body::new(codec::decode(compact)? / 10)?;
    Ok(format!("{body}{}", checksum10(body)))
}
