// src/libgit.rs

use crate::error::GitError;
use crate::model::CommitEntry;
use crate::store::TagStore;
use git2::{ErrorCode, Repository, Sort};
use std::path::Path;
use tracing::debug;

/// Tag store running in-process on libgit2.
pub struct LibgitTagStore {
    repo: Repository,
}

impl LibgitTagStore {
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = Repository::open(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::NotARepository(path.to_path_buf()),
            _ => GitError::Libgit2(e),
        })?;
        Ok(Self { repo })
    }

    fn head_is_unborn(&self) -> Result<bool, GitError> {
        match self.repo.head() {
            Ok(_) => Ok(false),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

impl TagStore for LibgitTagStore {
    fn tag_names(&self) -> Result<Vec<String>, GitError> {
        let names = self.repo.tag_names(None)?;
        Ok(names.iter().flatten().map(String::from).collect())
    }

    fn delete_tag(&self, name: &str) -> Result<(), GitError> {
        self.repo.tag_delete(name)?;
        Ok(())
    }

    fn history(&self) -> Result<Vec<CommitEntry>, GitError> {
        if self.head_is_unborn()? {
            debug!("HEAD is unborn, history is empty");
            return Ok(Vec::new());
        }

        // Newest first with parents after children, then flipped
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let short = commit.as_object().short_id()?;
            let short_id = short
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| commit.id().to_string());
            commits.push(CommitEntry {
                short_id,
                time: commit.time().seconds(),
            });
        }
        commits.reverse();
        Ok(commits)
    }

    fn create_tag(&self, name: &str, commit: &CommitEntry) -> Result<(), GitError> {
        let target = self.repo.revparse_single(&commit.short_id)?;
        self.repo.tag_lightweight(name, &target, false)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixture;
    use tempfile::TempDir;

    #[test]
    fn open_rejects_plain_directory() {
        let temp = TempDir::new().unwrap();
        let err = LibgitTagStore::open(temp.path()).err().unwrap();
        assert!(matches!(err, GitError::NotARepository(_)));
    }

    #[test]
    fn history_of_unborn_repository_is_empty() {
        let temp = TempDir::new().unwrap();
        fixture::init(temp.path());

        let store = LibgitTagStore::open(temp.path()).unwrap();
        assert!(store.history().unwrap().is_empty());
    }

    #[test]
    fn history_is_oldest_first() {
        let temp = TempDir::new().unwrap();
        let repo = fixture::init(temp.path());
        let commits = fixture::linear(&repo, 4);

        let store = LibgitTagStore::open(temp.path()).unwrap();
        let history = store.history().unwrap();
        assert_eq!(history.len(), 4);
        for (entry, oid) in history.iter().zip(&commits) {
            assert!(oid.to_string().starts_with(&entry.short_id));
        }
    }

    #[test]
    fn parents_come_first_even_with_equal_times() {
        let temp = TempDir::new().unwrap();
        let repo = fixture::init(temp.path());
        let commits: Vec<_> = (0..3)
            .map(|i| fixture::commit(&repo, &format!("same second {i}"), 1_700_000_000))
            .collect();

        let store = LibgitTagStore::open(temp.path()).unwrap();
        let history = store.history().unwrap();
        for (entry, oid) in history.iter().zip(&commits) {
            assert!(oid.to_string().starts_with(&entry.short_id));
        }
    }

    #[test]
    fn create_list_and_delete_tags() {
        let temp = TempDir::new().unwrap();
        let repo = fixture::init(temp.path());
        let commits = fixture::linear(&repo, 2);
        fixture::tag(&repo, "release", commits[1]);

        let store = LibgitTagStore::open(temp.path()).unwrap();
        assert_eq!(store.tag_names().unwrap(), vec!["release".to_string()]);

        let history = store.history().unwrap();
        store.create_tag("0", &history[0]).unwrap();
        store.delete_tag("release").unwrap();
        assert_eq!(fixture::tags(temp.path()), vec![("0".to_string(), commits[0])]);
    }
}
