use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::errors::{Result, TwigError};
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the marker layout with HEAD pointing at the default branch
    ///
    /// The branch file itself is only written by the first commit.
    pub fn init(&self) -> Result<()> {
        if self.git_path().exists() {
            return Err(TwigError::AlreadyExists(self.path().to_path_buf()));
        }

        fs::create_dir_all(self.database().objects_path())?;
        fs::create_dir_all(self.refs().refs_path())?;
        fs::create_dir_all(self.refs().heads_path())?;
        self.refs().set_head(DEFAULT_BRANCH)?;

        tracing::info!(path = %self.git_path().display(), "initialized repository");

        Ok(())
    }

    pub fn init_repository(&self) -> anyhow::Result<()> {
        self.init()?;

        writeln!(
            self.writer(),
            "Initialized empty twig repository in {}",
            self.git_path().display()
        )?;

        Ok(())
    }
}
