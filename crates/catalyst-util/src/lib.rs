//! Shared utilities for Catalyst.
//!
//! This crate provides cross-cutting concerns used by all other Catalyst crates:
//! the unified error type, filesystem helpers, and terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
