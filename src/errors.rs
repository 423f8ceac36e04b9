//! Error taxonomy shared by the object model and the repository areas
//!
//! Core layers return [`Result`] with a typed [`TwigError`]; the command layer wraps
//! these into `anyhow::Error`, from which the binary recovers them with
//! `downcast_ref` to decide how loudly to fail.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TwigError>;

#[derive(Debug, Error)]
pub enum TwigError {
    /// A file argument, object, commit or tracked path that does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// An object was read for one purpose but has a different kind.
    #[error("{oid} is not a {expected} object (found {actual})")]
    InvalidKind {
        oid: ObjectId,
        expected: ObjectType,
        actual: ObjectType,
    },

    /// Malformed frame, tree payload or commit text in the object store.
    #[error("corrupt object: {0}")]
    CorruptObject(String),

    #[error("twig repository already exists in {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("no changes staged for commit")]
    EmptyStage,

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("not a twig repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TwigError {
    /// Conditions a user can trigger during normal operation.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TwigError::NotFound(_)
                | TwigError::InvalidKind { .. }
                | TwigError::EmptyStage
                | TwigError::AlreadyExists(_)
                | TwigError::InvalidObjectId(_)
                | TwigError::NotARepository(_)
        )
    }
}
