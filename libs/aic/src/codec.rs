//! The AIC base-32 alphabet and radix conversion.
//!
//! The compact form is the zero-padded, big-endian base-32 rendering of the
//! whole nine-digit decimal number. The symbol at position `i` from the
//! right has weight `32^i`.

use crate::error::{AicError, Form};

/// The 32 symbols, indexed by value. Vowels `A E I O` are left out.
pub const ALPHABET: [u8; 32] = *b"0123456789BCDFGHJKLMNPQRSTUVWXYZ";

/// Base of the compact form.
pub const RADIX: u32 = 32;

/// Number of symbols in a compact code.
pub const COMPACT_LEN: usize = 6;

/// Largest number that fits in [`COMPACT_LEN`] symbols.
pub const MAX_ENCODABLE: u32 = RADIX.pow(COMPACT_LEN as u32) - 1;

const INVALID: u8 = u8::MAX;

/// Symbol value by ASCII code, `INVALID` for anything outside the alphabet.
/// Lower-case letters map to the same value as their upper-case symbol.
const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        table[ALPHABET[i].to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the symbol for a value in `0..32`.
pub(crate) fn symbol(value: u32) -> char {
    char::from(ALPHABET[(value % RADIX) as usize])
}

/// Returns the value of `c`, or `None` if it is not an alphabet symbol.
#[must_use]
pub fn symbol_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(u32::from(value)),
    }
}

/// Returns true if `c` belongs to the alphabet.
#[must_use]
pub fn is_symbol(c: char) -> bool {
    symbol_value(c).is_some()
}

/// Encodes `value` as exactly [`COMPACT_LEN`] symbols.
pub fn encode(value: u32) -> Result<String, AicError> {
    if value > MAX_ENCODABLE {
        return Err(AicError::format(
            Form::Compact,
            format!("{value} does not fit in {COMPACT_LEN} symbols"),
        ));
    }

    Ok(render(value))
}

/// Renders the low [`COMPACT_LEN`] base-32 digits of `value`.
pub(crate) fn render(value: u32) -> String {
    let mut buf = [ALPHABET[0]; COMPACT_LEN];
    let mut remainder = value;
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(remainder % RADIX) as usize];
        remainder /= RADIX;
    }
    buf.iter().copied().map(char::from).collect()
}

/// Decodes a string of alphabet symbols into its numeric value.
pub fn decode(symbols: &str) -> Result<u32, AicError> {
    let mut value: u32 = 0;
    for c in symbols.chars() {
        let Some(digit) = symbol_value(c) else {
            return Err(AicError::format(
                Form::Compact,
                format!("'{c}' is not in the AIC alphabet"),
            ));
        };

        value = value
            .checked_mul(RADIX)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| AicError::format(Form::Compact, "value overflows"))?;
    }
    Ok(value)
}
