//! Object types and the object codec
//!
//! All content is stored as objects identified by the SHA-1 hash of their
//! encoded frame. There are three kinds:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (names, modes, and object IDs)
//! - **Commit**: Snapshot pointer with author, message and at most one parent
//!
//! Every object is framed as `<type> <size>\0<content>` before hashing and storage.

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in bytes
pub const OBJECT_ID_SIZE: usize = 20;
