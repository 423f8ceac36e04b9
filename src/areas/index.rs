//! Staging index
//!
//! The index tracks which paths should change in the next commit: each staged
//! path maps either to a blob id or to a deletion marker. It is persisted as a
//! sorted, line-oriented text file and is emptied after every successful commit.
//!
//! ## Data Structures
//!
//! - `entries`: Maps the staged path (as given by the caller) to its pending change

use crate::artifacts::index::index_entry::{IndexEntry, StagedChange};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::TreeEntry;
use crate::errors::Result;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.twig/index`)
    path: Box<Path>,
    /// Staged changes keyed by path
    entries: BTreeMap<String, StagedChange>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing file is an empty index. Lines that are not `<value>\t<path>`
    /// are skipped.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)?;
        for line in content.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            match IndexEntry::parse_line(line) {
                Some(entry) => {
                    self.entries.insert(entry.path, entry.change);
                }
                None => tracing::warn!(line, "skipping malformed index line"),
            }
        }
        tracing::debug!(entries = self.entries.len(), "loaded index");

        Ok(())
    }

    /// Persist the index, one line per entry in ascending path order
    pub fn write_updates(&self) -> Result<()> {
        let content = self
            .entries()
            .map(|entry| entry.to_line())
            .collect::<String>();

        std::fs::write(&self.path, content)?;
        tracing::debug!(entries = self.entries.len(), "wrote index");

        Ok(())
    }

    pub fn add(&mut self, path: impl Into<String>, oid: ObjectId) {
        self.entries.insert(path.into(), StagedChange::Blob(oid));
    }

    pub fn stage_deletion(&mut self, path: impl Into<String>) {
        self.entries.insert(path.into(), StagedChange::Deleted);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_tracked(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        self.entries
            .iter()
            .map(|(path, change)| IndexEntry::new(path.as_str(), *change))
    }

    /// Apply the staged changes on top of the current tree's entries
    ///
    /// Keys are base names: staging `a/b.txt` and `c/b.txt` in the same commit
    /// collide on `b.txt`, and the later path in sort order wins.
    pub fn merge_with_tree(&self, current: &BTreeMap<String, ObjectId>) -> Vec<TreeEntry> {
        let mut merged = current.clone();

        for entry in self.entries() {
            let name = entry.basename().to_string();
            match entry.change {
                StagedChange::Deleted => {
                    merged.remove(&name);
                }
                StagedChange::Blob(oid) => {
                    merged.insert(name, oid);
                }
            }
        }

        merged
            .into_iter()
            .map(|(name, oid)| TreeEntry::file(name, oid))
            .collect()
    }
}
