// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single git operation
#[derive(Debug, Error)]
pub enum GitError {
    #[error("git executable not found in PATH")]
    GitNotInstalled,

    #[error("not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("`git {}` failed: {stderr}", .args.join(" "))]
    CommandFailed { args: Vec<String>, stderr: String },

    #[error("unexpected git log line: {0:?}")]
    MalformedLog(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("libgit2: {0}")]
    Libgit2(#[from] git2::Error),
}

/// A failed run, tagged with the step that stopped it
#[derive(Debug, Error)]
pub enum RetagError {
    #[error("opening repository: {0}")]
    Open(#[source] GitError),

    #[error("listing tags: {0}")]
    ListTags(#[source] GitError),

    #[error("deleting tag {tag:?}: {source}")]
    DeleteTag { tag: String, source: GitError },

    #[error("reading history: {0}")]
    History(#[source] GitError),

    #[error("creating tag {tag:?} at {commit}: {source}")]
    CreateTag {
        tag: String,
        commit: String,
        source: GitError,
    },
}
