//! Tree object
//!
//! Trees represent a single directory snapshot: a list of entries, each naming
//! a blob (regular file) or another tree (subdirectory).
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries are ordered by name (plain byte comparison). The order is part of the
//! encoding and therefore of the hash, so two trees built from the same entries
//! in any insertion order serialize identically.

use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Result, TwigError};
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::{BufRead, Cursor, Write};

/// A single `(mode, name, oid)` row of a tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    #[new(into)]
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn file(name: impl Into<String>, oid: ObjectId) -> Self {
        Self::new(EntryMode::File, name, oid)
    }

    pub fn directory(name: impl Into<String>, oid: ObjectId) -> Self {
        Self::new(EntryMode::Directory, name, oid)
    }

    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }

    /// Names must denote a single component inside the tree's own directory
    pub fn validate_name(&self) -> Result<()> {
        let name = self.name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\0']) {
            return Err(TwigError::CorruptObject(format!(
                "invalid tree entry name {name:?}"
            )));
        }

        Ok(())
    }
}

/// Directory snapshot with its entries kept in canonical order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Build a tree from an unordered set of entries
    ///
    /// An empty set yields the canonical empty tree.
    pub fn build(entries: impl IntoIterator<Item = TreeEntry>) -> Self {
        let mut entries = entries.into_iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TreeEntry> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name to oid view, as used when merging staged changes over a tree
    pub fn to_name_map(&self) -> BTreeMap<String, ObjectId> {
        self.entries
            .iter()
            .map(|entry| (entry.name.clone(), entry.oid))
            .collect()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Result<Bytes> {
        let mut content = Vec::new();

        for entry in &self.entries {
            write!(content, "{} {}", entry.mode.as_str(), entry.name)?;
            content.push(0);
            entry.oid.write_to(&mut content)?;
        }

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Tree {
    fn deserialize(payload: Bytes) -> Result<Self> {
        let mut reader = Cursor::new(payload);
        let mut entries = Vec::new();

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.pop() != Some(b' ') {
                return Err(TwigError::CorruptObject(
                    "unexpected end of tree in mode".to_string(),
                ));
            }
            let mode = std::str::from_utf8(&mode_bytes)
                .map_err(|_| TwigError::CorruptObject("non-utf8 tree entry mode".to_string()))?;
            let mode = EntryMode::try_from(mode)?;

            name_bytes.clear();
            reader.read_until(b'\0', &mut name_bytes)?;
            if name_bytes.pop() != Some(b'\0') {
                return Err(TwigError::CorruptObject(
                    "unexpected end of tree in name".to_string(),
                ));
            }
            let name = String::from_utf8(name_bytes.clone())
                .map_err(|_| TwigError::CorruptObject("non-utf8 tree entry name".to_string()))?;

            let oid = ObjectId::read_from(&mut reader)?;

            let entry = TreeEntry::new(mode, name, oid);
            entry.validate_name()?;
            entries.push(entry);
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}\t{}",
                    entry.mode.as_str(),
                    entry.mode.object_type(),
                    entry.oid,
                    entry.name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
