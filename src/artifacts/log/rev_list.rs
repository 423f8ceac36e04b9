use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, TwigError};
use derive_new::new;

/// Newest-first walk along first-parent links
///
/// Each traversal re-reads commits from the database, so cloning a `RevList`
/// restarts the walk. An absent start yields nothing. A parent that is missing
/// or not a commit yields one `CorruptObject` error and ends the walk.
#[derive(Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
    start: Option<ObjectId>,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = Result<(ObjectId, Commit)>;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            database: self.database,
            current_commit_oid: self.start,
            is_start: true,
        }
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
    is_start: bool,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;
        let is_start = std::mem::replace(&mut self.is_start, false);

        match self.database.parse_object_as_commit(&commit_oid) {
            Ok(commit) => {
                self.current_commit_oid = commit.parent().copied();
                Some(Ok((commit_oid, commit)))
            }
            Err(TwigError::NotFound(_)) if !is_start => Some(Err(TwigError::CorruptObject(
                format!("dangling parent {commit_oid} in history"),
            ))),
            Err(TwigError::InvalidKind { actual, .. }) if !is_start => {
                Some(Err(TwigError::CorruptObject(format!(
                    "parent {commit_oid} in history is a {actual}"
                ))))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
