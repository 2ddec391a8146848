// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! Reads UTF-8 text, runs it through the pure transform, writes the result.
//! Files that are not valid UTF-8 fail with an `InvalidData` I/O error.

use std::path::Path;

use crate::core::{transform, Result, Shift};
use crate::enums::Mode;

/// Transform a text file on disk.
///
/// Returns the number of characters processed.
pub fn transform_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    shift: Shift,
    mode: Mode,
) -> Result<u64> {
    let text = std::fs::read_to_string(input_path.as_ref())?;
    let out = transform(&text, shift.into(), mode);
    std::fs::write(output_path.as_ref(), &out)?;

    Ok(text.chars().count() as u64)
}

/// Encrypt a text file on disk
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    shift: Shift,
) -> Result<u64> {
    transform_file(input_path, output_path, shift, Mode::Encrypt)
}

/// Decrypt a text file on disk
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    shift: Shift,
) -> Result<u64> {
    transform_file(input_path, output_path, shift, Mode::Decrypt)
}
