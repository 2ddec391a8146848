// tests/common.rs
//! Shared test utilities — logging setup and sample text

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging. Safe to call from every test.
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Mixed-content strings used by the property checks
#[allow(dead_code)]
pub const SAMPLES: &[&str] = &[
    "",
    "a",
    "Z",
    "Hello, World!",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "The quick brown fox jumps over the lazy dog 1234567890",
    "  tabs\tand\nnewlines\r\n",
    "Crème brûlée, naïve façade, Straße",
    "Ελληνικά и кириллица 日本語 😀🔐",
    "mIxEd_CaSe-with.punctuation?!#@$%^&*()[]{}",
];
