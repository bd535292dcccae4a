// src/model.rs

/// A commit as seen by the re-tagger: its abbreviated hash and committer time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEntry {
    pub short_id: String,
    /// Seconds since the Unix epoch
    pub time: i64,
}

/// One tag to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAssignment {
    pub name: String,
    pub commit: CommitEntry,
}

/// Tags to create, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetagPlan {
    pub assignments: Vec<TagAssignment>,
}

impl RetagPlan {
    /// Names each commit after its position in the oldest-first history.
    pub fn from_history(history: Vec<CommitEntry>) -> Self {
        let assignments = history
            .into_iter()
            .enumerate()
            .map(|(index, commit)| TagAssignment {
                name: index.to_string(),
                commit,
            })
            .collect();
        RetagPlan { assignments }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Committer times of the oldest and newest commits, if any.
    pub fn time_span(&self) -> Option<(i64, i64)> {
        let first = self.assignments.first()?;
        let last = self.assignments.last()?;
        Some((first.commit.time, last.commit.time))
    }
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetagSummary {
    /// Tags that existed before the run
    pub deleted: Vec<String>,
    pub plan: RetagPlan,
    /// Set when nothing was written
    pub dry_run: bool,
}
