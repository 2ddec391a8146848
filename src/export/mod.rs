// src/export/mod.rs
//! Export utilities for caesar-tool
//!
//! Currently a single JSON manifest describing a batch run.

pub use json::export_manifest;

pub mod json;
