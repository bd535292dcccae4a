// src/store.rs

use crate::cli::Backend;
use crate::error::GitError;
use crate::git_cli::CommandTagStore;
use crate::libgit::LibgitTagStore;
use crate::model::CommitEntry;
use std::path::Path;

/// The repository operations a re-tag run needs.
///
/// Every method acts on one repository fixed when the store is opened.
pub trait TagStore {
    /// Names of every tag in the repository.
    fn tag_names(&self) -> Result<Vec<String>, GitError>;

    fn delete_tag(&self, name: &str) -> Result<(), GitError>;

    /// Commits reachable from HEAD, oldest first. Empty when HEAD is unborn.
    fn history(&self) -> Result<Vec<CommitEntry>, GitError>;

    /// Creates a lightweight tag `name` pointing at `commit`.
    fn create_tag(&self, name: &str, commit: &CommitEntry) -> Result<(), GitError>;
}

pub fn open(backend: Backend, repo: &Path) -> Result<Box<dyn TagStore>, GitError> {
    match backend {
        Backend::Git => Ok(Box::new(CommandTagStore::open(repo)?)),
        Backend::Libgit2 => Ok(Box::new(LibgitTagStore::open(repo)?)),
    }
}
