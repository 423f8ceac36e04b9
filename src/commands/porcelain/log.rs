use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Lazy newest-first history from `start`; `None` is an empty history
    pub fn history(&self, start: Option<ObjectId>) -> RevList<'_> {
        RevList::new(self.database(), start)
    }

    pub fn log(&self) -> anyhow::Result<()> {
        let Some(head_oid) = self.current_commit()? else {
            writeln!(self.writer(), "No commits found")?;
            return Ok(());
        };

        for entry in self.history(Some(head_oid)) {
            let (commit_oid, commit) = entry?;
            self.show_commit_medium(&commit_oid, &commit)?;
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {commit_oid}").yellow()
        )?;
        writeln!(self.writer(), "Author: {}", commit.author().display_name())?;
        writeln!(
            self.writer(),
            "Date:   {}",
            commit.author().readable_timestamp()
        )?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {message_line}")?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
