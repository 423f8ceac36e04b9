//! Data structures and algorithms
//!
//! - `index`: Staging index line format
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, tree, commit) and their codec

pub mod index;
pub mod log;
pub mod objects;
