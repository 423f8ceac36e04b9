use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::TwigError;
use std::io::Write;

/// What `cat-file` reports about an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatFileMode {
    /// Object kind
    Type,
    /// Payload size in bytes
    Size,
    /// Human readable rendering of any kind
    Pretty,
    /// Raw blob content; other kinds are rejected
    #[default]
    Blob,
}

impl Repository {
    pub fn cat_file(&self, object_id: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id)?;
        let raw = self.database().load_raw(&object_id)?;

        match mode {
            CatFileMode::Type => writeln!(self.writer(), "{}", raw.kind())?,
            CatFileMode::Size => writeln!(self.writer(), "{}", raw.size())?,
            CatFileMode::Blob if raw.kind() != ObjectType::Blob => {
                return Err(TwigError::InvalidKind {
                    oid: object_id,
                    expected: ObjectType::Blob,
                    actual: raw.kind(),
                }
                .into());
            }
            CatFileMode::Blob => self.writer().write_all(raw.payload())?,
            CatFileMode::Pretty => match ObjectBox::try_from(raw)? {
                ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
                ObjectBox::Tree(tree) if tree.is_empty() => {}
                object => writeln!(self.writer(), "{}", object.display())?,
            },
        }

        Ok(())
    }
}
