use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Digest of `data` as a blob; the object is persisted only when `write` is set
    pub fn hash_blob(&self, data: impl Into<Bytes>, write: bool) -> Result<ObjectId> {
        let blob = Blob::new(data);

        if write {
            self.database().store(&blob)
        } else {
            blob.object_id()
        }
    }

    pub fn hash_object(&self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let object_data = self.workspace().read_file(Path::new(object_path))?;
        let object_id = self
            .hash_blob(object_data, write)
            .with_context(|| format!("Failed to hash {object_path}"))?;

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
