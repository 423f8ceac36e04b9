use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Result, TwigError};

/// Mode of a tree entry; only regular files and subdirectories are modelled
#[derive(Debug, Clone, Copy, Eq, Ord, Default, PartialEq, PartialOrd, Hash)]
pub enum EntryMode {
    #[default]
    File,
    Directory,
}

impl EntryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::File => "100644",
            EntryMode::Directory => "40000",
        }
    }

    /// Kind of object an entry with this mode points at
    pub fn object_type(&self) -> ObjectType {
        match self {
            EntryMode::File => ObjectType::Blob,
            EntryMode::Directory => ObjectType::Tree,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }
}

impl TryFrom<&str> for EntryMode {
    type Error = TwigError;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "100644" => Ok(EntryMode::File),
            "40000" | "040000" => Ok(EntryMode::Directory),
            _ => Err(TwigError::CorruptObject(format!(
                "unsupported entry mode {value:?}"
            ))),
        }
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
