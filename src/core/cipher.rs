// src/core/cipher.rs
//! Rotation cipher transform — pure, total, no I/O
//!
//! Only ASCII letters are rotated. Everything else (digits, punctuation,
//! whitespace, accented and non-Latin letters) passes through untouched, so
//! the output always has the same number of characters as the input.
//!
//! Every function here accepts any `i64` shift and reduces it with
//! `rem_euclid`, which keeps negative and oversized shifts well defined.

use crate::consts::ALPHABET_LEN;
use crate::enums::Mode;

/// Reduce any shift into `0..26`
#[inline]
fn normalize(shift: i64) -> u8 {
    // rem_euclid never returns a negative value, so the cast is lossless
    shift.rem_euclid(ALPHABET_LEN) as u8
}

#[inline]
fn rotate_by(c: char, offset: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let pos = c as u8 - base;
    (base + (pos + offset) % ALPHABET_LEN as u8) as char
}

/// Rotate a single character by `shift` positions within its own case
pub fn rotate_char(c: char, shift: i64) -> char {
    rotate_by(c, normalize(shift))
}

/// Encrypt `text` by rotating every ASCII letter forward by `shift`
///
/// ```
/// assert_eq!(caesar_tool::encrypt("Hello, World!", 3), "Khoor, Zruog!");
/// assert_eq!(caesar_tool::encrypt("xyz", 3), "abc");
/// ```
pub fn encrypt(text: &str, shift: i64) -> String {
    let offset = normalize(shift);
    if offset == 0 {
        return text.to_owned();
    }
    text.chars().map(|c| rotate_by(c, offset)).collect()
}

/// Decrypt `text`, i.e. encrypt with the complementary shift `26 - shift`
///
/// ```
/// assert_eq!(caesar_tool::decrypt("Khoor, Zruog!", 3), "Hello, World!");
/// ```
pub fn decrypt(text: &str, shift: i64) -> String {
    // Reduce first: `26 - i64::MIN` would overflow
    encrypt(text, ALPHABET_LEN - i64::from(normalize(shift)))
}

/// Apply the transform in the given direction
pub fn transform(text: &str, shift: i64, mode: Mode) -> String {
    match mode {
        Mode::Encrypt => encrypt(text, shift),
        Mode::Decrypt => decrypt(text, shift),
    }
}
