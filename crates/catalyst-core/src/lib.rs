//! Core data types for Catalyst.
//!
//! This crate defines the fundamental types that describe a Catalyst project:
//! package names, the `catalyst.toml` manifest and its repository descriptors,
//! the `catalyst.lock` lockfile, and the global user configuration.
//!
//! This crate is intentionally free of resolution logic and repository I/O.

pub mod config;
pub mod lockfile;
pub mod manifest;
pub mod package;
pub mod project;
