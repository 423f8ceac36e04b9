//! Staging index file format
//!
//! The index (also called staging area) records pending changes for the next
//! commit. It is a flat text file with one line per staged path:
//!
//! ```text
//! <40-hex-oid-or-DELETED>\t<path>\n
//! ```
//!
//! Lines are written in ascending path order. Paths are kept exactly as the
//! caller gave them, without normalization.

pub mod index_entry;

/// Marker recorded in place of an object id for a staged deletion
pub const DELETED_MARKER: &str = "DELETED";
