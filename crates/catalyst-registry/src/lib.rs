//! Repository backends: static JSON catalogs and scanned package directories,
//! plus the registry that opens a backend from a repository descriptor.

pub mod catalog;
pub mod directory;
pub mod source;
