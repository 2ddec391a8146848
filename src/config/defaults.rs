// src/config/defaults.rs
use crate::config::app::{Batch, Cipher};
use crate::consts::{DEFAULT_INPUT_EXTENSION, DEFAULT_MANIFEST_NAME, DEFAULT_OUTPUT_EXTENSION};
use crate::core::Shift;
use crate::enums::Mode;

pub fn default_cipher() -> Cipher {
    Cipher {
        default_shift: Shift::DEFAULT,
        default_mode: Mode::Encrypt,
    }
}

pub fn default_batch() -> Batch {
    Batch {
        input_extension: DEFAULT_INPUT_EXTENSION.into(),
        output_extension: DEFAULT_OUTPUT_EXTENSION.into(),
        manifest_name: DEFAULT_MANIFEST_NAME.into(),
    }
}
