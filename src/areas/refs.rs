//! References (HEAD and branches)
//!
//! References are human-readable names pointing to commits. They can be:
//! - Direct: containing a commit id
//! - Symbolic: pointing to another reference (e.g., HEAD -> refs/heads/main)
//!
//! ## File Format
//!
//! References are stored as text files containing either:
//! - A 40-character hex object id followed by a newline (direct reference)
//! - `ref: <path>` for symbolic references
//!
//! Only one branch is created by this tool, but reads follow whatever
//! symbolic name HEAD holds.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, TwigError};
use derive_new::new;
use std::path::Path;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Symbolic refs pointing at symbolic refs are followed this deep at most
const MAX_SYMREF_DEPTH: usize = 5;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

pub const DEFAULT_BRANCH: &str = "main";

/// Parsed content of a reference file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymRefOrOid {
    /// Symbolic reference, e.g. `refs/heads/main`
    SymRef(String),
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_regex = regex::Regex::new(SYMREF_REGEX)
            .map_err(|err| TwigError::CorruptObject(err.to_string()))?;
        if let Some(symref_match) = symref_regex.captures(content) {
            return Ok(Some(SymRefOrOid::SymRef(symref_match[1].trim().to_string())));
        }

        ObjectId::try_parse(content)
            .map(|oid| Some(SymRefOrOid::Oid(oid)))
            .map_err(|_| {
                TwigError::CorruptObject(format!(
                    "reference {} holds {content:?}",
                    path.display()
                ))
            })
    }
}

/// Reference manager rooted at the repository marker directory
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the marker directory (typically `.twig`)
    path: Box<Path>,
}

impl Refs {
    /// Raw content of HEAD, `None` when there is no HEAD file
    pub fn read_head(&self) -> Result<Option<SymRefOrOid>> {
        SymRefOrOid::read_symref_or_oid(&self.head_path())
    }

    /// Commit HEAD resolves to
    ///
    /// An absent or empty branch file means the branch has no commits yet.
    pub fn read_head_oid(&self) -> Result<Option<ObjectId>> {
        self.read_symref(&self.head_path(), 0)
    }

    /// Symbolic name HEAD points at, if it is symbolic
    pub fn current_ref(&self) -> Result<Option<String>> {
        match self.read_head()? {
            Some(SymRefOrOid::SymRef(name)) => Ok(Some(name)),
            Some(SymRefOrOid::Oid(_)) | None => Ok(None),
        }
    }

    fn read_symref(&self, path: &Path, depth: usize) -> Result<Option<ObjectId>> {
        match SymRefOrOid::read_symref_or_oid(path)? {
            Some(SymRefOrOid::SymRef(_)) if depth >= MAX_SYMREF_DEPTH => Err(
                TwigError::CorruptObject(format!("symbolic reference loop at {}", path.display())),
            ),
            Some(SymRefOrOid::SymRef(name)) => self.read_symref(&self.path.join(name), depth + 1),
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    /// Point whatever HEAD names at a new commit
    ///
    /// A symbolic HEAD advances its branch file (creating parent directories
    /// as needed); a direct HEAD is overwritten in place.
    pub fn update_head(&self, oid: ObjectId) -> Result<()> {
        self.update_symref(&self.head_path(), oid, 0)
    }

    fn update_symref(&self, path: &Path, oid: ObjectId, depth: usize) -> Result<()> {
        match SymRefOrOid::read_symref_or_oid(path)? {
            Some(SymRefOrOid::SymRef(name)) if depth < MAX_SYMREF_DEPTH => {
                self.update_symref(&self.path.join(name), oid, depth + 1)
            }
            _ => self.update_ref_file(path, &format!("{oid}\n")),
        }
    }

    /// Make HEAD a symbolic reference to `refs/heads/<branch>`
    pub fn set_head(&self, branch: &str) -> Result<()> {
        self.update_ref_file(&self.head_path(), &format!("ref: refs/heads/{branch}\n"))
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, raw_ref)?;
        tracing::debug!(path = %path.display(), content = raw_ref.trim_end(), "updated ref");

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
