use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{Result, TwigError};
use std::io::Write;

impl Repository {
    /// Commit the staged changes on top of the current commit's tree
    ///
    /// Returns the new commit id and its parent. HEAD's branch advances and
    /// the index is emptied; with nothing staged nothing is written.
    pub fn commit_staged(&mut self, message: &str) -> Result<(ObjectId, Option<ObjectId>)> {
        self.index_mut().rehydrate()?;
        if self.index().is_empty() {
            return Err(TwigError::EmptyStage);
        }

        let current_entries = self.current_tree_entries();
        let tree = Tree::build(self.index().merge_with_tree(&current_entries));
        let tree_oid = self.database().store(&tree)?;

        let parent = self.current_commit()?;
        let commit_oid = self.create_commit(tree_oid, parent, message)?;
        self.advance_branch(commit_oid)?;

        self.index_mut().clear();
        self.index().write_updates()?;

        Ok((commit_oid, parent))
    }

    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let (commit_oid, parent) = self.commit_staged(message)?;

        writeln!(self.writer(), "Created commit {commit_oid}")?;
        if let Some(parent) = parent {
            writeln!(self.writer(), "Parent: {parent}")?;
        }

        Ok(())
    }
}
