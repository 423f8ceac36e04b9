use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::{IndexEntry, StagedChange};
use crate::errors::{Result, TwigError};
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Record pending changes for `path` in the index and persist it
    ///
    /// An existing file is stored as a blob; a directory stages every
    /// non-hidden file beneath it. A path missing from the working directory
    /// stages a deletion, which is only allowed when the path is staged already
    /// or its base name is part of the current commit's tree.
    pub fn stage(&mut self, path: &Path) -> Result<Vec<IndexEntry>> {
        self.index_mut().rehydrate()?;

        let staged = if self.workspace().exists(path) {
            let mut staged = Vec::new();

            for file_path in self.workspace().list_files(path)? {
                let data = self.workspace().read_file(&file_path)?;
                let blob_id = self.hash_blob(data, true)?;
                let file_path = file_path.to_string_lossy().into_owned();

                self.index_mut().add(file_path.as_str(), blob_id);
                staged.push(IndexEntry::new(file_path, StagedChange::Blob(blob_id)));
            }

            staged
        } else {
            let entry = IndexEntry::new(path.to_string_lossy(), StagedChange::Deleted);
            let tracked = self.index().is_tracked(&entry.path)
                || self.current_tree_entries().contains_key(entry.basename());

            if !tracked {
                return Err(TwigError::NotFound(format!("path '{}'", path.display())));
            }

            self.index_mut().stage_deletion(entry.path.as_str());
            vec![entry]
        };

        self.index().write_updates()?;

        Ok(staged)
    }

    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        for path in paths {
            let staged = self
                .stage(Path::new(path))
                .with_context(|| format!("Failed to stage '{path}'"))?;

            for entry in staged {
                match entry.change {
                    StagedChange::Blob(_) => {
                        writeln!(self.writer(), "Added '{}' to staging area", entry.path)?
                    }
                    StagedChange::Deleted => {
                        writeln!(self.writer(), "Staged deletion of '{}'", entry.path)?
                    }
                }
            }
        }

        Ok(())
    }
}
