use crate::errors::{Result, TwigError};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Working directory access
///
/// Every name starting with `.` (the repository marker included) is hidden and
/// never listed, snapshotted or cleared.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).exists()
    }

    pub fn is_dir(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_dir()
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Bytes> {
        let full_path = self.path.join(file_path);

        match std::fs::read(&full_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(TwigError::NotFound(
                format!("file '{}'", file_path.display()),
            )),
            Err(err) => Err(err.into()),
        }
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> Result<()> {
        std::fs::write(self.path.join(file_path), data)?;

        Ok(())
    }

    /// Immediate non-hidden children of a directory, sorted by name and
    /// relative to the workspace root
    pub fn list_dir(&self, dir_path: Option<&Path>) -> Result<Vec<PathBuf>> {
        let dir_path = match dir_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        WalkDir::new(&dir_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_hidden(entry))
            .map(|entry| Ok(self.relative(entry.map_err(std::io::Error::from)?.path())))
            .collect()
    }

    /// Every non-hidden regular file at or beneath a path, relative to the root
    pub fn list_files(&self, root_file_path: &Path) -> Result<Vec<PathBuf>> {
        let full_path = self.path.join(root_file_path);

        if !full_path.exists() {
            return Err(TwigError::NotFound(format!(
                "path '{}'",
                root_file_path.display()
            )));
        }

        if !full_path.is_dir() {
            return Ok(vec![root_file_path.to_path_buf()]);
        }

        // "." expands to bare names rather than "./name"
        let prefix = if root_file_path == Path::new(".") {
            PathBuf::new()
        } else {
            root_file_path.to_path_buf()
        };

        let mut files = Vec::new();
        for entry in WalkDir::new(&full_path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_hidden(entry))
        {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() {
                let nested = entry
                    .path()
                    .strip_prefix(&full_path)
                    .unwrap_or(entry.path());
                files.push(prefix.join(nested));
            }
        }

        Ok(files)
    }

    /// Remove every non-hidden top-level entry of the working directory
    pub fn clear(&self) -> Result<()> {
        for path in self.list_dir(None)? {
            let full_path = self.path.join(&path);

            if full_path.is_dir() {
                std::fs::remove_dir_all(&full_path)?;
            } else {
                std::fs::remove_file(&full_path)?;
            }
        }

        Ok(())
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.path)
            .map(PathBuf::from)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    fn is_hidden(entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
    }
}
