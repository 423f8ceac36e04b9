use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use crate::errors::Result;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Store a snapshot of a workspace directory and return its tree id
    ///
    /// Files become blob entries and directories become nested trees; names
    /// starting with `.` are skipped. An empty directory yields the empty tree.
    pub fn write_tree(&self, dir_path: &Path) -> Result<ObjectId> {
        let mut entries = Vec::new();

        for path in self.workspace().list_dir(Some(dir_path))? {
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping non-utf8 name");
                continue;
            };

            if self.workspace().is_dir(&path) {
                entries.push(TreeEntry::directory(name, self.write_tree(&path)?));
            } else {
                let data = self.workspace().read_file(&path)?;
                entries.push(TreeEntry::file(name, self.hash_blob(data, true)?));
            }
        }

        self.database().store(&Tree::build(entries))
    }

    pub fn snapshot_workspace(&self) -> anyhow::Result<()> {
        let tree_id = self
            .write_tree(Path::new(""))
            .context("Failed to write the working directory tree")?;

        writeln!(self.writer(), "{tree_id}")?;

        Ok(())
    }
}
