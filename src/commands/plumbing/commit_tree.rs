use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Result, TwigError};
use std::io::Write;

impl Repository {
    /// Store a commit over `tree_oid`, authored by the configured identity
    pub fn create_commit(
        &self,
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        message: &str,
    ) -> Result<ObjectId> {
        let author = Author::load_from_env();
        let commit = Commit::new(tree_oid, parent, author, message.to_string());

        self.database().store(&commit)
    }

    pub fn commit_tree(
        &self,
        tree_oid: &str,
        parent: Option<&str>,
        message: &str,
    ) -> anyhow::Result<()> {
        let tree_oid = ObjectId::try_parse(tree_oid)?;
        self.expect_kind(&tree_oid, ObjectType::Tree)?;

        let parent = parent.map(ObjectId::try_parse).transpose()?;
        if let Some(parent) = &parent {
            self.expect_kind(parent, ObjectType::Commit)?;
        }

        let commit_oid = self.create_commit(tree_oid, parent, message)?;
        writeln!(self.writer(), "{commit_oid}")?;

        Ok(())
    }

    fn expect_kind(&self, object_id: &ObjectId, expected: ObjectType) -> Result<()> {
        let actual = self.database().get_object_type(object_id)?;

        if actual == expected {
            Ok(())
        } else {
            Err(TwigError::InvalidKind {
                oid: *object_id,
                expected,
                actual,
            })
        }
    }
}
