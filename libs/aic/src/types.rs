//! Typed values for the AIC body and the full identifier.

use std::fmt;

use crate::checksum::{check_digit_value, checksum10};
use crate::codec;
use crate::error::{AicError, Form};
use crate::format::{validate_base10, validate_base32};

/// Number of decimal digits in the body.
pub const BODY_LEN: usize = 8;

/// Number of characters in the decimal form.
pub const DECIMAL_LEN: usize = BODY_LEN + 1;

/// Largest body that fits in [`BODY_LEN`] digits.
pub const MAX_BODY: u32 = 99_999_999;

/// Largest nine-digit number whose decimal form starts with `0`.
pub const MAX_NUMBER: u32 = 99_999_999;

/// Folds a run of ASCII digits into a number. Callers check the digits.
pub(crate) fn decimal_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

// =============================================================================
// Body
// =============================================================================

/// The eight-digit payload shared by both representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Body(u32);

impl Body {
    /// Creates a body from its numeric value.
    pub fn new(value: u32) -> Result<Self, AicError> {
        if value > MAX_BODY {
            return Err(AicError::format(
                Form::Decimal,
                format!("body {value} has more than {BODY_LEN} digits"),
            ));
        }
        Ok(Self(value))
    }

    /// Parses exactly eight decimal digits.
    pub fn parse(s: &str) -> Result<Self, AicError> {
        let actual = s.chars().count();
        if actual != BODY_LEN {
            return Err(AicError::InvalidLength {
                form: Form::Decimal,
                expected: BODY_LEN,
                actual,
            });
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(AicError::format(
                Form::Decimal,
                format!("'{c}' is not a decimal digit"),
            ));
        }
        Ok(Self(decimal_value(s)))
    }

    /// Builds a body from eight digit values, most significant first.
    #[cfg(test)]
    pub(crate) fn from_digits(digits: [u8; BODY_LEN]) -> Self {
        debug_assert!(digits.iter().all(|&d| d < 10));
        Self(digits.iter().fold(0, |acc, &d| acc * 10 + u32::from(d)))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the eight digit values, most significant first.
    #[must_use]
    pub fn digits(&self) -> [u8; BODY_LEN] {
        let mut digits = [0; BODY_LEN];
        let mut remainder = self.0;
        for slot in digits.iter_mut().rev() {
            *slot = (remainder % 10) as u8;
            remainder /= 10;
        }
        digits
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = BODY_LEN)
    }
}

// =============================================================================
// Aic
// =============================================================================

/// A validated AIC, stored as its nine-digit decimal number.
///
/// Ordering follows the decimal number. Formatting with `Display` gives the
/// canonical decimal form; [`Aic::to_base32`] gives the compact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Aic(u32);

impl Aic {
    /// Parses either representation.
    pub fn parse(s: &str) -> Result<Self, AicError> {
        let decimal = crate::validate(s)?;
        Ok(Self(decimal_value(&decimal)))
    }

    /// Parses the nine-digit decimal form only.
    pub fn from_base10(s: &str) -> Result<Self, AicError> {
        let s = validate_base10(s)?;
        Ok(Self(decimal_value(s)))
    }

    /// Parses the six-symbol compact form only.
    pub fn from_base32(s: &str) -> Result<Self, AicError> {
        let s = validate_base32(s)?;
        Ok(Self(codec::decode(s)?))
    }

    /// Builds an AIC from a body, computing its check digit.
    ///
    /// Fails if the body would give a decimal form not starting with `0`.
    pub fn from_body(body: Body) -> Result<Self, AicError> {
        Self::try_from(body.value() * 10 + check_digit_value(body))
    }

    /// Returns the nine-digit decimal number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.0
    }

    /// Returns the body, without the check digit.
    #[must_use]
    pub fn body(&self) -> Body {
        Body(self.0 / 10)
    }

    /// Returns the decimal check digit.
    #[must_use]
    pub fn check_digit(&self) -> char {
        checksum10(self.body())
    }

    /// Formats the nine-digit decimal form.
    #[must_use]
    pub fn to_base10(&self) -> String {
        format!("{:0width$}", self.0, width = DECIMAL_LEN)
    }

    /// Formats the six-symbol compact form.
    #[must_use]
    pub fn to_base32(&self) -> String {
        codec::render(self.0)
    }
}

impl TryFrom<u32> for Aic {
    type Error = AicError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        if number > MAX_NUMBER {
            return Err(AicError::format(
                Form::Decimal,
                format!("{number} does not start with '0' in nine digits"),
            ));
        }

        let body = Body(number / 10);
        let expected = checksum10(body);
        let actual = char::from(b'0' + (number % 10) as u8);
        if actual != expected {
            return Err(AicError::InvalidChecksum {
                form: Form::Decimal,
                expected,
                actual,
            });
        }

        Ok(Self(number))
    }
}

impl From<Aic> for u32 {
    fn from(aic: Aic) -> Self {
        aic.0
    }
}

impl fmt::Display for Aic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = DECIMAL_LEN)
    }
}

impl std::str::FromStr for Aic {
    type Err = AicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Aic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_base10())
    }
}

impl<'de> serde::Deserialize<'de> for Aic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
