//! Error types for AIC parsing and validation.

use std::fmt;

use thiserror::Error;

/// Which textual representation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    /// Nine decimal digits: eight body digits and a check digit.
    Decimal,
    /// Six symbols over the 32-symbol alphabet.
    Compact,
}

impl Form {
    /// Returns the exact length, in characters, of this representation.
    #[must_use]
    pub const fn char_len(self) -> usize {
        match self {
            Form::Decimal => crate::DECIMAL_LEN,
            Form::Compact => crate::COMPACT_LEN,
        }
    }

    /// Returns the form whose error best explains why `input` was rejected.
    ///
    /// Nine-character inputs are judged as decimal codes, everything else
    /// as compact codes.
    #[must_use]
    pub fn natural_for(input: &str) -> Self {
        if input.chars().count() == crate::DECIMAL_LEN {
            Form::Decimal
        } else {
            Form::Compact
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Decimal => f.write_str("base10"),
            Form::Compact => f.write_str("base32"),
        }
    }
}

/// The kind of an [`AicError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`AicError::InvalidFormat`].
    InvalidFormat,

    /// See [`AicError::InvalidLength`].
    InvalidLength,

    /// See [`AicError::InvalidChecksum`].
    InvalidChecksum,
}

/// Errors that can occur when validating or converting an AIC.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AicError {
    /// A character is outside the allowed set, or the code breaks a pattern rule.
    #[error("invalid {form} AIC format: {reason}")]
    InvalidFormat { form: Form, reason: String },

    /// The code has the wrong number of characters for its form.
    #[error("invalid {form} AIC length: expected {expected} characters, got {actual}")]
    InvalidLength {
        form: Form,
        expected: usize,
        actual: usize,
    },

    /// The code is well-formed but its check character does not match.
    #[error("invalid {form} AIC checksum: expected '{expected}', got '{actual}'")]
    InvalidChecksum {
        form: Form,
        expected: char,
        actual: char,
    },
}

impl AicError {
    pub(crate) fn format(form: Form, reason: impl Into<String>) -> Self {
        AicError::InvalidFormat {
            form,
            reason: reason.into(),
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AicError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            AicError::InvalidLength { .. } => ErrorKind::InvalidLength,
            AicError::InvalidChecksum { .. } => ErrorKind::InvalidChecksum,
        }
    }

    /// Returns the representation that was being validated.
    #[must_use]
    pub fn form(&self) -> Form {
        match self {
            AicError::InvalidFormat { form, .. }
            | AicError::InvalidLength { form, .. }
            | AicError::InvalidChecksum { form, .. } => *form,
        }
    }

    /// Returns true if the input had characters or a pattern that is not allowed.
    pub fn is_format_error(&self) -> bool {
        matches!(self, AicError::InvalidFormat { .. })
    }

    /// Returns true if the input had the wrong length.
    pub fn is_length_error(&self) -> bool {
        matches!(self, AicError::InvalidLength { .. })
    }

    /// Returns true if the check character did not match.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, AicError::InvalidChecksum { .. })
    }
}
