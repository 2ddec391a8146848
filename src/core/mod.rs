// src/core/mod.rs
pub mod cipher;
pub mod shift;

pub use cipher::*;
pub use shift::Shift;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
