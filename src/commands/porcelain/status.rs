use crate::areas::repository::Repository;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;

/// Paths waiting in the index, and top-level files the index does not know
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub staged: Vec<String>,
    pub untracked: Vec<String>,
}

impl Repository {
    pub fn staged_and_untracked(&mut self) -> Result<StatusReport> {
        self.index_mut().rehydrate()?;

        let staged = self.index().entries().map(|entry| entry.path).collect();

        let mut untracked = Vec::new();
        for path in self.workspace().list_dir(None)? {
            if self.workspace().is_dir(&path) {
                continue;
            }

            let path = path.to_string_lossy().into_owned();
            if !self.index().is_tracked(&path) {
                untracked.push(path);
            }
        }

        Ok(StatusReport { staged, untracked })
    }

    pub fn status(&mut self) -> anyhow::Result<()> {
        let report = self.staged_and_untracked()?;

        writeln!(self.writer(), "Staged files:")?;
        if report.staged.is_empty() {
            writeln!(self.writer(), "  (no files staged)")?;
        }
        for path in &report.staged {
            writeln!(self.writer(), "  {}", path.green())?;
        }

        writeln!(self.writer())?;
        writeln!(self.writer(), "Untracked files:")?;
        if report.untracked.is_empty() {
            writeln!(self.writer(), "  (none)")?;
        }
        for path in &report.untracked {
            writeln!(self.writer(), "  {}", path.red())?;
        }

        Ok(())
    }
}
