use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, RawObject, Unpackable, hash_frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{Result, TwigError};
use bytes::Bytes;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Content-addressed, write-once object store
///
/// Objects live under `objects/<xx>/<38-hex>` as zlib-compressed frames.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Encode and persist an object, returning its id
    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        self.store_raw(&object.to_raw()?)
    }

    pub fn store_raw(&self, raw: &RawObject) -> Result<ObjectId> {
        let (object_id, frame) = raw.encode();
        self.write_object(&object_id, frame)?;

        Ok(object_id)
    }

    /// Persist an already-encoded frame under its own digest
    pub fn put(&self, frame: &[u8]) -> Result<ObjectId> {
        let object_id = hash_frame(frame);
        self.write_object(&object_id, Bytes::copy_from_slice(frame))?;

        Ok(object_id)
    }

    /// Load the decompressed frame of an object
    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_id, object_path)
    }

    pub fn load_raw(&self, object_id: &ObjectId) -> Result<RawObject> {
        RawObject::decode(&self.load(object_id)?)
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        let payload = self.load_payload_of_kind(object_id, ObjectType::Blob)?;
        Blob::deserialize(payload)
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> Result<Tree> {
        let payload = self.load_payload_of_kind(object_id, ObjectType::Tree)?;
        Tree::deserialize(payload)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        let payload = self.load_payload_of_kind(object_id, ObjectType::Commit)?;
        Commit::deserialize(payload)
    }

    pub fn get_object_type(&self, object_id: &ObjectId) -> Result<ObjectType> {
        Ok(self.load_raw(object_id)?.kind())
    }

    fn load_payload_of_kind(&self, object_id: &ObjectId, expected: ObjectType) -> Result<Bytes> {
        let raw = self.load_raw(object_id)?;

        if raw.kind() != expected {
            return Err(TwigError::InvalidKind {
                oid: *object_id,
                expected,
                actual: raw.kind(),
            });
        }

        Ok(raw.into_payload())
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> Result<Bytes> {
        let object_content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(TwigError::NotFound(format!("object {object_id}")));
            }
            Err(err) => return Err(err.into()),
        };
        tracing::debug!(oid = %object_id, "read object");

        Self::decompress(&object_content)
            .map_err(|_| TwigError::CorruptObject(format!("object {object_id} is not valid zlib")))
    }

    // Overwrites in place; a given id always maps to identical bytes.
    fn write_object(&self, object_id: &ObjectId, frame: Bytes) -> Result<()> {
        let object_path = self.path.join(object_id.to_path());

        if let Some(object_dir) = object_path.parent() {
            std::fs::create_dir_all(object_dir)?;
        }

        let compressed = Self::compress(&frame)?;
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&object_path)?;
        file.write_all(&compressed)?;

        tracing::debug!(oid = %object_id, bytes = frame.len(), "wrote object");

        Ok(())
    }

    fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;
        encoder.finish()
    }

    fn decompress(data: &[u8]) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}
