//! Command implementations
//!
//! Commands are `impl Repository` blocks split into two categories:
//!
//! - `plumbing`: Low-level object manipulation (hash-object, cat-file, ls-tree, ...)
//! - `porcelain`: User-facing workflow (init, add, commit, log, ...)
//!
//! Each command has a typed core operation returning [`crate::errors::Result`]
//! and a printing wrapper returning `anyhow::Result` that writes to the
//! repository's writer.

pub mod plumbing;
pub mod porcelain;
