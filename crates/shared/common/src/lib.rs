//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The caller-facing error type
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
