use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{Result, TwigError};
use bytes::{BufMut, Bytes, BytesMut};
use sha1::{Digest, Sha1};

/// Kind-specific payload encoding (the part after the frame header)
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(payload: Bytes) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn to_raw(&self) -> Result<RawObject> {
        Ok(RawObject::new(self.object_type(), self.serialize()?))
    }

    fn object_id(&self) -> Result<ObjectId> {
        Ok(self.to_raw()?.object_id())
    }
}

/// A decoded object frame: `<kind> <payload-length>\0<payload>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    kind: ObjectType,
    payload: Bytes,
}

impl RawObject {
    pub fn new(kind: ObjectType, payload: impl Into<Bytes>) -> Self {
        RawObject {
            kind,
            payload: payload.into(),
        }
    }

    pub fn kind(&self) -> ObjectType {
        self.kind
    }

    /// Byte length of the payload, never of the whole frame
    pub fn size(&self) -> usize {
        self.payload.len()
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    /// Produce the canonical frame and its digest
    pub fn encode(&self) -> (ObjectId, Bytes) {
        let frame = self.frame();
        (hash_frame(&frame), frame)
    }

    pub fn object_id(&self) -> ObjectId {
        hash_frame(&self.frame())
    }

    fn frame(&self) -> Bytes {
        let header = format!("{} {}\0", self.kind.as_str(), self.payload.len());
        let mut frame = BytesMut::with_capacity(header.len() + self.payload.len());
        frame.put_slice(header.as_bytes());
        frame.put_slice(&self.payload);

        frame.freeze()
    }

    /// Split a frame on its first NUL and parse the two header tokens
    ///
    /// The declared size must match the payload length; a mismatch means the
    /// store handed back something other than what was written.
    pub fn decode(frame: &[u8]) -> Result<Self> {
        let nul = frame
            .iter()
            .position(|&b| b == b'\0')
            .ok_or_else(|| TwigError::CorruptObject("missing header terminator".to_string()))?;

        let header = std::str::from_utf8(&frame[..nul])
            .map_err(|_| TwigError::CorruptObject("non-utf8 object header".to_string()))?;
        let (kind, size) = header
            .split_once(' ')
            .filter(|(_, size)| !size.contains(' '))
            .ok_or_else(|| TwigError::CorruptObject(format!("malformed header {header:?}")))?;

        let kind = ObjectType::try_from(kind)?;
        let size = size
            .parse::<usize>()
            .map_err(|_| TwigError::CorruptObject(format!("invalid object size {size:?}")))?;

        let payload = &frame[nul + 1..];
        if payload.len() != size {
            return Err(TwigError::CorruptObject(format!(
                "declared size {size} but payload has {} bytes",
                payload.len()
            )));
        }

        Ok(RawObject::new(kind, Bytes::copy_from_slice(payload)))
    }
}

pub fn hash_frame(frame: &[u8]) -> ObjectId {
    let digest: [u8; 20] = Sha1::digest(frame).into();
    ObjectId::from_bytes(digest)
}

/// Tagged object variant; kind-specific data is only reachable after a match
#[derive(Debug, Clone)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
        }
    }

    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}

impl TryFrom<RawObject> for ObjectBox {
    type Error = TwigError;

    fn try_from(raw: RawObject) -> Result<Self> {
        match raw.kind() {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(
                raw.into_payload(),
            )?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(
                raw.into_payload(),
            )?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                raw.into_payload(),
            )?))),
        }
    }
}
