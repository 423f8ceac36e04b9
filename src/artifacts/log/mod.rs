//! Commit history traversal
//!
//! - `rev_list`: lazy first-parent walk from a starting commit
//!
//! Only linear history exists: a commit carries at most one parent, so the
//! walk is a plain linked-list traversal that stops at the root commit.

pub mod rev_list;
