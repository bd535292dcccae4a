// src/retag.rs

use crate::error::RetagError;
use crate::model::{RetagPlan, RetagSummary};
use crate::store::TagStore;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

const PROGRESS_TEMPLATE: &str = "{msg} [{bar:40}] {pos}/{len}";

#[derive(Debug, Clone, Copy, Default)]
pub struct RetagOptions {
    pub dry_run: bool,
    pub progress: bool,
}

/// Deletes every tag, then tags each commit reachable from HEAD with its
/// zero-based chronological index.
///
/// Stops at the first failing git operation. Tags created before the
/// failure stay in place.
pub fn retag(store: &dyn TagStore, options: RetagOptions) -> Result<RetagSummary, RetagError> {
    let existing = store.tag_names().map_err(RetagError::ListTags)?;
    debug!(count = existing.len(), "found existing tags");

    let history = store.history().map_err(RetagError::History)?;
    let plan = RetagPlan::from_history(history);
    info!(commits = plan.len(), "read history");

    if !options.dry_run {
        wipe_tags(store, &existing)?;
        apply(store, &plan, options.progress)?;
    }

    Ok(RetagSummary {
        deleted: existing,
        plan,
        dry_run: options.dry_run,
    })
}

fn wipe_tags(store: &dyn TagStore, tags: &[String]) -> Result<(), RetagError> {
    for tag in tags {
        store.delete_tag(tag).map_err(|source| RetagError::DeleteTag {
            tag: tag.clone(),
            source,
        })?;
        debug!(%tag, "deleted tag");
    }
    Ok(())
}

fn apply(store: &dyn TagStore, plan: &RetagPlan, progress: bool) -> Result<(), RetagError> {
    let bar = if progress {
        ProgressBar::new(plan.len() as u64).with_style(progress_style())
    } else {
        ProgressBar::hidden()
    };
    bar.set_message("Tagging commits");

    for assignment in &plan.assignments {
        if let Err(source) = store.create_tag(&assignment.name, &assignment.commit) {
            bar.abandon_with_message("Tagging failed");
            return Err(RetagError::CreateTag {
                tag: assignment.name.clone(),
                commit: assignment.commit.short_id.clone(),
                source,
            });
        }
        debug!(tag = %assignment.name, commit = %assignment.commit.short_id, "created tag");
        bar.inc(1);
    }
    bar.finish_with_message("Tagging complete");
    Ok(())
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(PROGRESS_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_bar())
}
