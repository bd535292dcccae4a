// src/git_cli.rs

use crate::error::GitError;
use crate::model::CommitEntry;
use crate::store::TagStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, trace, warn};

/// Tag store backed by the `git` executable.
///
/// Every call passes an argument list to `git -C <repo>`; nothing goes
/// through a shell.
pub struct CommandTagStore {
    repo: PathBuf,
}

impl CommandTagStore {
    pub fn open(repo: &Path) -> Result<Self, GitError> {
        match run_git(repo, &["rev-parse", "--git-dir"]) {
            Ok(_) => {}
            Err(GitError::CommandFailed { stderr, .. }) => {
                debug!(path = %repo.display(), %stderr, "rev-parse rejected path");
                return Err(GitError::NotARepository(repo.to_path_buf()));
            }
            Err(e) => return Err(e),
        }
        Ok(Self {
            repo: repo.to_path_buf(),
        })
    }

    /// True only when the ref HEAD names does not exist yet.
    ///
    /// `rev-parse --verify` resolves the ref without reading the object, so a
    /// ref pointing at a missing commit still counts as born and the later
    /// `git log` reports it.
    fn head_is_unborn(&self) -> Result<bool, GitError> {
        match run_git(&self.repo, &["rev-parse", "--verify", "--quiet", "HEAD"]) {
            Ok(_) => Ok(false),
            Err(GitError::CommandFailed { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    }
}

impl TagStore for CommandTagStore {
    fn tag_names(&self) -> Result<Vec<String>, GitError> {
        // for-each-ref ignores column.* and other porcelain display settings
        let output = run_git(
            &self.repo,
            &["for-each-ref", "--format=%(refname:strip=2)", "refs/tags"],
        )?;
        Ok(non_blank_lines(&output).map(String::from).collect())
    }

    fn delete_tag(&self, name: &str) -> Result<(), GitError> {
        run_git(&self.repo, &["tag", "-d", name])?;
        Ok(())
    }

    fn history(&self) -> Result<Vec<CommitEntry>, GitError> {
        if self.head_is_unborn()? {
            debug!(path = %self.repo.display(), "HEAD is unborn, history is empty");
            return Ok(Vec::new());
        }
        let output = run_git(&self.repo, &["log", "--reverse", "--pretty=format:%h %ct"])?;
        parse_log(&output)
    }

    fn create_tag(&self, name: &str, commit: &CommitEntry) -> Result<(), GitError> {
        run_git(&self.repo, &["tag", name, &commit.short_id])?;
        Ok(())
    }
}

/// Runs a git command against `repo` and returns its trimmed stdout.
fn run_git(repo: &Path, args: &[&str]) -> Result<String, GitError> {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(repo).args(args);

    trace!(cmd = %format!("git -C {} {}", repo.display(), args.join(" ")), "running git command");

    let output = cmd.output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            warn!("git not found in PATH");
            GitError::GitNotInstalled
        } else {
            GitError::Io(e)
        }
    })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(GitError::CommandFailed {
            args: args.iter().map(|s| s.to_string()).collect(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

fn non_blank_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Parses `%h %ct` lines.
fn parse_log(output: &str) -> Result<Vec<CommitEntry>, GitError> {
    non_blank_lines(output)
        .map(|line| -> Result<CommitEntry, GitError> {
            let (short_id, time) = line
                .split_once(' ')
                .ok_or_else(|| GitError::MalformedLog(line.to_string()))?;
            let time = time
                .trim()
                .parse::<i64>()
                .map_err(|_| GitError::MalformedLog(line.to_string()))?;
            Ok(CommitEntry {
                short_id: short_id.to_string(),
                time,
            })
        })
        .collect()
}
