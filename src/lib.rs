// src/lib.rs
//! caesar-tool — Caesar-cipher rotation transform and the tooling around it
//!
//! Features:
//! - Pure, total rotation transform over the ASCII alphabet
//! - Validated `Shift` and `Mode` types for user-facing code
//! - Headless tool `Session` that keeps its output in sync with its inputs
//! - File and directory batch processing with a JSON manifest
//! - TOML config with env override

pub mod batch;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod export;
pub mod file_ops;
pub mod session;

// Re-export everything users need at the crate root
pub use crate::batch::{transform_dir, BatchOptions, BatchReport, TransformRecord};
pub use crate::config::load as load_config;
pub use crate::core::{decrypt, encrypt, rotate_char, transform, Result as CoreResult, Shift};
pub use crate::enums::Mode;
pub use crate::error::CoreError;
pub use crate::export::export_manifest;
pub use crate::file_ops::{decrypt_file, encrypt_file, transform_file};
pub use crate::session::Session;
