// src/config/mod.rs
//! Configuration system for caesar-tool
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{config_path, load, load_from, load_located, locate_from, Batch, Cipher, Config};

mod app;
mod defaults;
