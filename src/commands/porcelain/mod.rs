//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands compose the plumbing and the repository areas into the
//! day-to-day workflow.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files or deletions for commit
//! - `status`: Show staged and untracked files
//! - `commit`: Create a new commit from the staged changes
//! - `checkout`: Restore the files of a commit
//! - `log`: Show commit history

pub mod add;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
