//! Strict shape checks for each representation.
//!
//! Checks run in a fixed order: length, then character set and pattern,
//! then the check character. Callers rely on which error surfaces first.

use crate::checksum::{checksum10, checksum32};
use crate::codec::{self, COMPACT_LEN};
use crate::error::{AicError, Form};
use crate::types::{Body, DECIMAL_LEN, MAX_NUMBER};

fn check_length(form: Form, s: &str) -> Result<(), AicError> {
    let actual = s.chars().count();
    if actual != form.char_len() {
        return Err(AicError::InvalidLength {
            form,
            expected: form.char_len(),
            actual,
        });
    }
    Ok(())
}

/// Returns true if a nine-digit string starts with the only legal leading digit.
fn has_legal_prefix(s: &str) -> bool {
    s.starts_with('0')
}

/// Validates the nine-digit decimal form and returns it unchanged.
pub fn validate_base10(s: &str) -> Result<&str, AicError> {
    check_length(Form::Decimal, s)?;

    if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
        return Err(AicError::format(
            Form::Decimal,
            format!("'{c}' is not a decimal digit"),
        ));
    }
    if !has_legal_prefix(s) {
        return Err(AicError::format(Form::Decimal, "code must start with '0'"));
    }

    // All ASCII from here on, so byte slicing is safe.
    let (body, check) = s.split_at(DECIMAL_LEN - 1);
    let expected = checksum10(Body::parse(body)?);
    let actual = char::from(check.as_bytes()[0]);
    if actual != expected {
        return Err(AicError::InvalidChecksum {
            form: Form::Decimal,
            expected,
            actual,
        });
    }

    Ok(s)
}

/// Validates the six-symbol compact form and returns it unchanged.
///
/// Symbols match regardless of case.
pub fn validate_base32(s: &str) -> Result<&str, AicError> {
    check_length(Form::Compact, s)?;

    let number = codec::decode(s)?;
    if number > MAX_NUMBER {
        return Err(AicError::format(
            Form::Compact,
            format!("{s} decodes to {number}, which does not start with '0'"),
        ));
    }

    // Decoding succeeded, so every character is an ASCII symbol.
    let expected = checksum32(Body::new(number / 10)?);
    let actual = char::from(s.as_bytes()[COMPACT_LEN - 1]);
    if actual.to_ascii_uppercase() != expected {
        return Err(AicError::InvalidChecksum {
            form: Form::Compact,
            expected,
            actual,
        });
    }

    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn base10_kind(s: &str) -> ErrorKind {
        validate_base10(s).unwrap_err().kind()
    }

    fn base32_kind(s: &str) -> ErrorKind {
        validate_base32(s).unwrap_err().kind()
    }

    #[test]
    fn test_base10_valid() {
        assert_eq!(validate_base10("000307052").unwrap(), "000307052");
        assert_eq!(validate_base10("045359015").unwrap(), "045359015");
    }

    #[test]
    fn test_base10_length() {
        assert_eq!(base10_kind("00030705"), ErrorKind::InvalidLength);
        assert_eq!(base10_kind("00307052"), ErrorKind::InvalidLength);
        assert_eq!(base10_kind("0003070522"), ErrorKind::InvalidLength);
        assert_eq!(base10_kind(""), ErrorKind::InvalidLength);
    }

    #[test]
    fn test_base10_format() {
        assert_eq!(base10_kind("0003070.3"), ErrorKind::InvalidFormat);
        assert_eq!(base10_kind("00030705D"), ErrorKind::InvalidFormat);
        assert_eq!(base10_kind(" 00307052"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_base10_illegal_prefix_is_format_error() {
        // All digits, but only a leading '0' is legal.
        assert_eq!(base10_kind("100307052"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_base10_checksum() {
        assert_eq!(base10_kind("010307052"), ErrorKind::InvalidChecksum);
        assert_eq!(base10_kind("000307053"), ErrorKind::InvalidChecksum);

        let err = validate_base10("000307059").unwrap_err();
        assert_eq!(
            err,
            AicError::InvalidChecksum {
                form: Form::Decimal,
                expected: '2',
                actual: '9',
            }
        );
    }

    #[test]
    fn test_base10_counts_characters_not_bytes() {
        assert_eq!(base10_kind("00030705é"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_base32_valid() {
        assert_eq!(validate_base32("009CVD").unwrap(), "009CVD");
        assert_eq!(validate_base32("01P194").unwrap(), "01P194");
    }

    #[test]
    fn test_base32_lower_case() {
        assert_eq!(validate_base32("009cvd").unwrap(), "009cvd");
        assert_eq!(validate_base32("1c87x7").unwrap(), "1c87x7");
        assert_eq!(base32_kind("009cvl"), ErrorKind::InvalidChecksum);
    }

    #[test]
    fn test_base32_length() {
        assert_eq!(base32_kind("009CVD1"), ErrorKind::InvalidLength);
        assert_eq!(base32_kind("100307052"), ErrorKind::InvalidLength);
        assert_eq!(base32_kind("09CVD"), ErrorKind::InvalidLength);
    }

    #[test]
    fn test_base32_format() {
        assert_eq!(base32_kind("00$CVD"), ErrorKind::InvalidFormat);
        assert_eq!(base32_kind("009cAd"), ErrorKind::InvalidFormat);
        assert_eq!(base32_kind("009AVD"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_base32_out_of_range_is_format_error() {
        // 300000 decodes to 100_663_296
        assert_eq!(base32_kind("300000"), ErrorKind::InvalidFormat);
        assert_eq!(base32_kind("ZZZZZZ"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_base32_checksum() {
        let err = validate_base32("009CVL").unwrap_err();
        assert_eq!(
            err,
            AicError::InvalidChecksum {
                form: Form::Compact,
                expected: 'D',
                actual: 'L',
            }
        );
    }
}
