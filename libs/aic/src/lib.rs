//! # aic
//!
//! Validation and conversion of Italian medicinal-package authorization
//! codes (AIC, *Autorizzazione all'Immissione in Commercio*).
//!
//! ## Representations
//!
//! Every AIC has two legal textual forms:
//!
//! - **Decimal** (`base10`): nine digits, an eight-digit body followed by a
//!   check digit. The first digit is always `0`.
//!   Example: `000307052`
//! - **Compact** (`base32`): six symbols over
//!   `0123456789BCDFGHJKLMNPQRSTUVWXYZ`, the base-32 rendering of the full
//!   nine-digit number. Example: `009CVD`
//!
//! Both forms carry the same body, so conversion is lossless in both
//! directions.
//!
//! ## Usage
//!
//! ```
//! assert_eq!(aic::validate("009CVD").unwrap(), "000307052");
//! assert_eq!(aic::to_base32("000307052").unwrap(), "009CVD");
//! assert!(!aic::is_valid("009CVL"));
//!
//! let code: aic::Aic = "01P19J".parse().unwrap();
//! assert_eq!(code.to_string(), "001738032");
//! ```
//!
//! Compact symbols match in either case. No trimming is performed: input
//! must have exactly the length of one form.

mod checksum;
mod codec;
mod convert;
mod error;
mod format;
mod types;
mod validate;

pub use checksum::{checksum10, checksum32};
pub use codec::{decode, encode, is_symbol, symbol_value, ALPHABET, COMPACT_LEN, RADIX};
pub use convert::{from_base32, to_base32};
pub use error::{AicError, ErrorKind, Form};
pub use format::{validate_base10, validate_base32};
pub use types::*;
pub use validate::{is_valid, is_valid_base10, is_valid_base32, validate};
