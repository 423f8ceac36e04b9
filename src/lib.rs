//! twig: a minimal content-addressable version control store
//!
//! Immutable objects (blobs, trees, commits) are keyed by the SHA-1 of their
//! framed encoding. A staging index and branch references on top of the
//! object store produce a linear commit history.
//!
//! - `areas`: the on-disk parts of a repository and the [`areas::repository::Repository`] handle
//! - `artifacts`: object model, index line format, history traversal
//! - `commands`: plumbing and porcelain operations on a repository
//! - `errors`: the shared error taxonomy

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
