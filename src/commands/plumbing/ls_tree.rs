use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// List the immediate entries of a tree, kind inferred from each mode
    pub fn ls_tree(&self, object_id: &str) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id)?;
        let tree = self.database().parse_object_as_tree(&object_id)?;

        if !tree.is_empty() {
            writeln!(self.writer(), "{}", tree.display())?;
        }

        Ok(())
    }
}
