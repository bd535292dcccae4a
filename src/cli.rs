// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Re-tag every commit with its chronological index", long_about = None)]
pub struct Args {
    /// Path to the git repository to re-tag
    #[arg(short, long, env = "GIT_RETAG_REPO", default_value = ".")]
    pub repo: PathBuf,

    /// How git operations are performed
    #[arg(long, value_enum, default_value_t = Backend::Git)]
    pub backend: Backend,

    /// Print the tags that would be deleted and created, without touching the repository
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Run the `git` executable
    Git,
    /// Use libgit2 in-process
    Libgit2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory_and_git_backend() {
        let args = Args::try_parse_from(["git-retag"]).unwrap();
        assert_eq!(args.repo, PathBuf::from("."));
        assert_eq!(args.backend, Backend::Git);
        assert!(!args.dry_run);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "git-retag",
            "--repo",
            "/tmp/project",
            "--backend",
            "libgit2",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(args.repo, PathBuf::from("/tmp/project"));
        assert_eq!(args.backend, Backend::Libgit2);
        assert!(args.dry_run);
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Args::try_parse_from(["git-retag", "--backend", "svn"]).is_err());
    }
}
