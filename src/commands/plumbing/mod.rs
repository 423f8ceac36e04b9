//! Plumbing commands (low-level object operations)
//!
//! Plumbing commands give direct access to the object store. They are the
//! building blocks the porcelain commands compose.
//!
//! ## Commands
//!
//! - `hash-object`: Compute a blob id and optionally store the blob
//! - `cat-file`: Show an object's kind, size or content
//! - `write-tree`: Snapshot the working directory as a tree
//! - `ls-tree`: List the entries of a tree object
//! - `commit-tree`: Create a commit object from a tree

pub mod cat_file;
pub mod commit_tree;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
