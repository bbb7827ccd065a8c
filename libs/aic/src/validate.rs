//! Form-agnostic entry points.

use tracing::{debug, trace};

use crate::convert::from_base32;
use crate::error::{AicError, Form};
use crate::format::{validate_base10, validate_base32};

/// Validates either representation and returns the canonical decimal form.
///
/// Decimal input is returned unchanged and compact input is converted. When
/// both forms reject the input, the error comes from the form that fits its
/// length: nine characters report the decimal error, anything else the
/// compact one.
pub fn validate(s: &str) -> Result<String, AicError> {
    let decimal_err = match validate_base10(s) {
        Ok(decimal) => return Ok(decimal.to_owned()),
        Err(err) => err,
    };

    let compact_err = match from_base32(s) {
        Ok(decimal) => {
            trace!(compact = s, decimal = %decimal, "normalized compact AIC");
            return Ok(decimal);
        }
        Err(err) => err,
    };

    let form = Form::natural_for(s);
    let err = match form {
        Form::Decimal => decimal_err,
        Form::Compact => compact_err,
    };
    debug!(len = s.chars().count(), %form, error = %err, "rejected AIC");
    Err(err)
}

/// Returns true if `s` is a valid AIC in either representation.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    validate(s).is_ok()
}

/// Returns true if `s` is a valid decimal-form AIC.
#[must_use]
pub fn is_valid_base10(s: &str) -> bool {
    validate_base10(s).is_ok()
}

/// Returns true if `s` is a valid compact-form AIC.
#[must_use]
pub fn is_valid_base32(s: &str) -> bool {
    validate_base32(s).is_ok()
}
