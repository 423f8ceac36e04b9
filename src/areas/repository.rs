use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, TwigError};
use std::cell::{RefCell, RefMut};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the repository marker directory inside the working tree
pub const REPOSITORY_DIR: &str = ".twig";

/// Handle on one repository: every operation goes through an explicit root
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Index,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let git_path = path.join(REPOSITORY_DIR);

        let index = Index::new(git_path.join("index").into_boxed_path());
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index,
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.git_path().is_dir()
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(TwigError::NotARepository(self.path.to_path_buf()))
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Commit HEAD currently resolves to; `None` before the first commit
    pub fn current_commit(&self) -> Result<Option<ObjectId>> {
        self.refs.read_head_oid()
    }

    /// Move whatever HEAD names to a new commit
    pub fn advance_branch(&self, commit_oid: ObjectId) -> Result<()> {
        self.refs.update_head(commit_oid)
    }

    /// Name to blob mapping of the current commit's tree
    ///
    /// Any failure along HEAD -> commit -> tree degrades to an empty mapping, so
    /// "no prior tree" and "unreadable prior tree" look the same here. Callers
    /// that must tell corruption apart go to the database directly.
    pub fn current_tree_entries(&self) -> BTreeMap<String, ObjectId> {
        let entries = self.current_commit().and_then(|commit_oid| match commit_oid {
            None => Ok(BTreeMap::new()),
            Some(commit_oid) => {
                let commit = self.database.parse_object_as_commit(&commit_oid)?;
                let tree = self.database.parse_object_as_tree(commit.tree_oid())?;
                Ok(tree.to_name_map())
            }
        });

        entries.unwrap_or_else(|err| {
            tracing::debug!(error = %err, "treating current tree as empty");
            BTreeMap::new()
        })
    }
}
