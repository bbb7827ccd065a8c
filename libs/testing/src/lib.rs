//! Shared fixtures and strategies for AIC tests.

use proptest::prelude::*;

/// Known `(decimal, compact)` pairs for the same code.
pub const VALID_PAIRS: &[(&str, &str)] = &[
    ("000307052", "009CVD"),
    ("000307037", "009CUX"),
    ("001738032", "01P19J"),
    ("001738020", "01P194"),
    ("042645046", "18PFKQ"),
    ("045359015", "1C87X7"),
];

/// Largest body whose decimal form starts with `0`.
pub const MAX_LEGAL_BODY: u32 = 9_999_999;

/// Installs a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Bodies that produce a legal AIC.
pub fn arb_legal_body() -> impl Strategy<Value = u32> {
    0..=MAX_LEGAL_BODY
}

/// Strings of `len` characters drawn from digits, upper-case letters and punctuation.
pub fn arb_noise(len: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[0-9A-Z.$ ]{{{len}}}"))
        .expect("noise regex is valid")
}
