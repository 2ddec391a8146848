// src/error.rs
//! Public error type for the entire crate
//!
//! The rotation transform itself never fails. Everything here belongs to the
//! application layer: shift validation, config, file and batch I/O.

use thiserror::Error;

use crate::consts::{MAX_SHIFT, MIN_SHIFT};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("shift {0} is outside the valid range {min}..={max}", min = MIN_SHIFT, max = MAX_SHIFT)]
    ShiftOutOfRange(i64),

    #[error("invalid shift value: {0:?}")]
    InvalidShift(String),

    #[error("invalid mode: {0:?} (expected \"encrypt\" or \"decrypt\")")]
    InvalidMode(String),

    // Wrapped errors print as themselves so anyhow chains don't repeat them
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_out_of_range_message_names_bounds() {
        let err = CoreError::ShiftOutOfRange(26);
        assert_eq!(
            err.to_string(),
            "shift 26 is outside the valid range 1..=25"
        );
    }

    #[test]
    fn invalid_mode_message_quotes_input() {
        let err = CoreError::InvalidMode("sideways".into());
        assert_eq!(
            err.to_string(),
            "invalid mode: \"sideways\" (expected \"encrypt\" or \"decrypt\")"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn wrapped_errors_do_not_repeat_their_cause() {
        use std::error::Error as _;

        let err: CoreError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "gone");
        assert!(err.source().is_none());
    }
}
