//! Object identifier (SHA-1 digest)
//!
//! Object IDs are 20-byte SHA-1 digests of an object's encoded frame.
//! They are kept in binary form and rendered as 40 lowercase hex characters
//! only at the human-facing boundary (CLI arguments, refs, index lines).
//!
//! ## Storage
//!
//! Objects are stored in `.twig/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, OBJECT_ID_SIZE};
use crate::errors::{Result, TwigError};
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

/// Fixed-width binary object identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_SIZE]);

impl ObjectId {
    pub fn from_bytes(bytes: [u8; OBJECT_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse and validate an object ID from its hex form
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string (either case)
    ///
    /// # Returns
    ///
    /// Validated ObjectId or `InvalidObjectId` if the length or characters are wrong
    pub fn try_parse(id: &str) -> Result<Self> {
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TwigError::InvalidObjectId(id.to_string()));
        }

        let mut bytes = [0u8; OBJECT_ID_SIZE];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&id[i * 2..i * 2 + 2], 16)
                .map_err(|_| TwigError::InvalidObjectId(id.to_string()))?;
        }

        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_SIZE] {
        &self.0
    }

    /// Write the object ID in binary format (20 bytes)
    ///
    /// Used when serializing tree entries.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.0)
    }

    /// Read an object ID from binary format (20 bytes)
    ///
    /// A short read means the surrounding payload is truncated.
    pub fn read_from<R: io::Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut bytes = [0u8; OBJECT_ID_SIZE];
        reader.read_exact(&mut bytes).map_err(|_| {
            TwigError::CorruptObject("object id shorter than 20 bytes".to_string())
        })?;

        Ok(Self(bytes))
    }

    /// Lowercase 40-character hex rendering
    pub fn to_hex(&self) -> String {
        self.0
            .iter()
            .fold(String::with_capacity(OBJECT_ID_LENGTH), |mut hex, byte| {
                let _ = write!(hex, "{byte:02x}");
                hex
            })
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let hex = self.to_hex();
        let (dir, file) = hex.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.to_hex()[..7].to_string()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for ObjectId {
    type Err = TwigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}
