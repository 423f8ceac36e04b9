use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Replace the working directory with the files of a commit's tree
    ///
    /// Nested trees are not materialized; their entries are skipped. HEAD and
    /// the index are left untouched. Every blob is read before anything is
    /// removed, and every name must be a plain file name, so a missing object
    /// or a path-like name leaves the working directory as it was.
    pub fn checkout_commit(&self, commit_oid: &ObjectId) -> Result<Vec<String>> {
        let commit = self.database().parse_object_as_commit(commit_oid)?;
        let tree = self.database().parse_object_as_tree(commit.tree_oid())?;

        let mut files = Vec::new();
        for entry in tree.entries() {
            entry.validate_name()?;
            if entry.is_tree() {
                tracing::warn!(name = %entry.name, "skipping directory entry on checkout");
                continue;
            }

            let blob = self.database().parse_object_as_blob(&entry.oid)?;
            files.push((entry.name.clone(), blob.into_content()));
        }

        self.workspace().clear()?;
        for (name, content) in &files {
            self.workspace().write_file(Path::new(name), content)?;
        }

        Ok(files.into_iter().map(|(name, _)| name).collect())
    }

    pub fn checkout(&self, commit_oid: &str) -> anyhow::Result<()> {
        let commit_oid = ObjectId::try_parse(commit_oid)?;
        self.checkout_commit(&commit_oid)?;

        writeln!(self.writer(), "Checked out commit {commit_oid}")?;

        Ok(())
    }
}
