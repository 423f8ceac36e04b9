//! Commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - At most one parent commit ID (history is a singly-linked list)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Result, TwigError};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};

pub const DEFAULT_AUTHOR_NAME: &str = "twig user";
pub const DEFAULT_AUTHOR_EMAIL: &str = "user@example.com";

/// Author or committer information
///
/// Contains name, email, and timestamp with timezone information.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    /// Create a new author stamped with the current time at `+0000`
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: Utc::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(name: String, email: String, timestamp: DateTime<FixedOffset>) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Load author information from environment variables
    ///
    /// Reads TWIG_AUTHOR_NAME, TWIG_AUTHOR_EMAIL, and optionally TWIG_AUTHOR_DATE.
    /// Missing name or email fall back to the default identity; a missing or
    /// unparsable date means "now".
    pub fn load_from_env() -> Self {
        let name =
            std::env::var("TWIG_AUTHOR_NAME").unwrap_or_else(|_| DEFAULT_AUTHOR_NAME.to_string());
        let email = std::env::var("TWIG_AUTHOR_EMAIL")
            .unwrap_or_else(|_| DEFAULT_AUTHOR_EMAIL.to_string());
        let timestamp = std::env::var("TWIG_AUTHOR_DATE").ok().and_then(|date_str| {
            DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok()
        });

        match timestamp {
            Some(ts) => Author::new_with_timestamp(name, email, ts),
            None => Author::new(name, email),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// "Name <email> timestamp timezone", as stored in the commit text
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }
}

fn parse_offset(timezone: &str) -> Option<FixedOffset> {
    let (sign, digits) = match timezone.as_bytes().first()? {
        b'+' => (1, &timezone[1..]),
        b'-' => (-1, &timezone[1..]),
        _ => return None,
    };
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hours = digits[..2].parse::<i32>().ok()?;
    let minutes = digits[2..].parse::<i32>().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl TryFrom<&str> for Author {
    type Error = TwigError;

    fn try_from(value: &str) -> Result<Self> {
        let invalid = || TwigError::CorruptObject(format!("invalid identity line {value:?}"));

        // Format: "name <email> timestamp timezone"
        // Split from right to get timezone and timestamp first
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(invalid());
        }

        let offset = parse_offset(parts[0]).ok_or_else(invalid)?;
        let timestamp = parts[1].parse::<i64>().map_err(|_| invalid())?;
        let name_email_part = parts[2];

        let email_start = name_email_part.find('<').ok_or_else(invalid)?;
        let email_end = name_email_part.rfind('>').ok_or_else(invalid)?;
        if email_end < email_start {
            return Err(invalid());
        }

        let name = name_email_part[..email_start].trim().to_string();
        let email = name_email_part[email_start + 1..email_end].to_string();

        let timestamp = DateTime::from_timestamp(timestamp, 0)
            .ok_or_else(invalid)?
            .with_timezone(&offset);

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }
}

/// Commit object
///
/// Points at the tree holding the snapshot and at most one parent commit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    tree_oid: ObjectId,
    parent: Option<ObjectId>,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    /// Create a new commit; the author is also recorded as committer
    pub fn new(tree_oid: ObjectId, parent: Option<ObjectId>, author: Author, message: String) -> Self {
        Commit {
            tree_oid,
            parent,
            author: author.clone(),
            committer: author,
            message,
        }
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.author.timestamp()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Result<Bytes> {
        Ok(Bytes::from(self.display() + "\n"))
    }
}

impl Unpackable for Commit {
    fn deserialize(payload: Bytes) -> Result<Self> {
        let content = std::str::from_utf8(&payload)
            .map_err(|_| TwigError::CorruptObject("non-utf8 commit".to_string()))?;
        let (headers, message) = content.split_once("\n\n").ok_or_else(|| {
            TwigError::CorruptObject("commit is missing the header separator".to_string())
        })?;

        let mut tree_oid = None;
        let mut parent = None;
        let mut author = None;
        let mut committer = None;

        for line in headers.lines() {
            let (key, value) = line.split_once(' ').ok_or_else(|| {
                TwigError::CorruptObject(format!("malformed commit header {line:?}"))
            })?;

            match key {
                "tree" => tree_oid = Some(parse_header_oid(value)?),
                "parent" if parent.is_some() => {
                    return Err(TwigError::CorruptObject(
                        "commits with more than one parent are not supported".to_string(),
                    ));
                }
                "parent" => parent = Some(parse_header_oid(value)?),
                "author" => author = Some(Author::try_from(value)?),
                "committer" => committer = Some(Author::try_from(value)?),
                _ => {}
            }
        }

        let missing = |field: &str| TwigError::CorruptObject(format!("commit has no {field} line"));
        let message = message.strip_suffix('\n').unwrap_or(message).to_string();

        Ok(Commit {
            tree_oid: tree_oid.ok_or_else(|| missing("tree"))?,
            parent,
            author: author.ok_or_else(|| missing("author"))?,
            committer: committer.ok_or_else(|| missing("committer"))?,
            message,
        })
    }
}

fn parse_header_oid(value: &str) -> Result<ObjectId> {
    ObjectId::try_parse(value)
        .map_err(|_| TwigError::CorruptObject(format!("invalid object id in commit: {value:?}")))
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![];

        lines.push(format!("tree {}", self.tree_oid));
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("committer {}", self.committer.display()));
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
