//! Index entry representation
//!
//! Each line of the index pairs a staged path with either the blob it should
//! point at in the next commit or a deletion marker.

use crate::artifacts::index::DELETED_MARKER;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::Path;

/// Pending change for a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedChange {
    /// Path should point at this blob
    Blob(ObjectId),
    /// Path should be dropped from the next tree
    Deleted,
}

impl StagedChange {
    pub fn is_deletion(&self) -> bool {
        matches!(self, StagedChange::Deleted)
    }

    fn parse(value: &str) -> Option<Self> {
        if value == DELETED_MARKER {
            return Some(StagedChange::Deleted);
        }

        ObjectId::try_parse(value).ok().map(StagedChange::Blob)
    }
}

impl std::fmt::Display for StagedChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StagedChange::Blob(oid) => write!(f, "{oid}"),
            StagedChange::Deleted => f.write_str(DELETED_MARKER),
        }
    }
}

/// A staged path and its pending change
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// Path as given when staging, relative to the repository root
    #[new(into)]
    pub path: String,
    pub change: StagedChange,
}

impl IndexEntry {
    /// Final path component; trees are keyed by this, not by the full path
    pub fn basename(&self) -> &str {
        Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.path)
    }

    /// Parse one `<value>\t<path>` line; anything else yields `None`
    pub fn parse_line(line: &str) -> Option<Self> {
        let (value, path) = line.split_once('\t')?;
        if path.is_empty() || path.contains('\t') {
            return None;
        }

        Some(Self::new(path, StagedChange::parse(value)?))
    }

    pub fn to_line(&self) -> String {
        format!("{}\t{}\n", self.change, self.path)
    }
}
