// src/main.rs

mod cli;
mod error;
mod git_cli;
mod libgit;
mod model;
mod retag;
mod store;

use chrono::{TimeZone, Utc};
use clap::Parser;
use cli::Args;
use model::RetagSummary;
use retag::RetagOptions;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let start_time = Instant::now();

    let store = match store::open(args.backend, &args.repo) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", error::RetagError::Open(e));
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(repo = %args.repo.display(), backend = ?args.backend, "opened repository");

    let options = RetagOptions {
        dry_run: args.dry_run,
        progress: std::io::stderr().is_terminal(),
    };

    match retag::retag(store.as_ref(), options) {
        Ok(summary) => {
            report(&summary);
            println!("Finished in {:.2?}.", start_time.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn report(summary: &RetagSummary) {
    if summary.dry_run {
        for tag in &summary.deleted {
            println!("would delete {tag}");
        }
        for assignment in &summary.plan.assignments {
            println!("{} {}", assignment.name, assignment.commit.short_id);
        }
        return;
    }

    println!(
        "Deleted {} tags, created {} tags.",
        summary.deleted.len(),
        summary.plan.len()
    );
    if let Some((first, last)) = summary.plan.time_span() {
        println!("History spans from {} to {}.", format_time(first), format_time(last));
    }
}

fn format_time(seconds: i64) -> String {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .map(|t| t.to_rfc2822())
        .unwrap_or_else(|| seconds.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_installs_global_subscriber() {
        init_tracing();
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn formats_commit_time_as_rfc2822() {
        let formatted = format_time(0);
        assert!(formatted.starts_with("Thu,"));
        assert!(formatted.ends_with("Jan 1970 00:00:00 +0000"));
    }
}
