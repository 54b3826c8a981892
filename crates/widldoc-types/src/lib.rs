//! Foundation types for widldoc.
//!
//! Shared by every widldoc crate: the error enum and `Result` alias, and the
//! configuration that controls how documentation comments are processed.

pub mod config;
pub mod error;
