//! Job-level stage tracking

use std::fmt;
use std::time::{Duration, Instant};

/// Stages a run moves through, strictly in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JobStage {
    NotStarted,
    Loading,
    Extracting,
    Filtering,
    Materialized,
    Aggregated,
    Reported,
}

impl JobStage {
    /// The stage that follows this one, `None` once reported
    pub fn next(self) -> Option<JobStage> {
        match self {
            JobStage::NotStarted => Some(JobStage::Loading),
            JobStage::Loading => Some(JobStage::Extracting),
            JobStage::Extracting => Some(JobStage::Filtering),
            JobStage::Filtering => Some(JobStage::Materialized),
            JobStage::Materialized => Some(JobStage::Aggregated),
            JobStage::Aggregated => Some(JobStage::Reported),
            JobStage::Reported => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            JobStage::NotStarted => "not started",
            JobStage::Loading => "loading",
            JobStage::Extracting => "extracting",
            JobStage::Filtering => "filtering",
            JobStage::Materialized => "materialized",
            JobStage::Aggregated => "aggregated",
            JobStage::Reported => "reported",
        }
    }
}

impl fmt::Display for JobStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Progress of one run through [`JobStage`]
#[derive(Debug)]
pub struct JobProgress {
    stage: JobStage,
    entered_at: Instant,
    started_at: Instant,
}

impl JobProgress {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            stage: JobStage::NotStarted,
            entered_at: now,
            started_at: now,
        }
    }

    /// Current stage
    pub fn stage(&self) -> JobStage {
        self.stage
    }

    /// Time since the run was created
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Move to the next stage; stays on `Reported` once there
    pub fn advance(&mut self) -> JobStage {
        if let Some(next) = self.stage.next() {
            log::debug!(
                "Stage {} -> {} (previous stage took {:?})",
                self.stage,
                next,
                self.entered_at.elapsed()
            );
            self.stage = next;
            self.entered_at = Instant::now();
        }
        self.stage
    }
}

impl Default for JobProgress {
    fn default() -> Self {
        Self::new()
    }
}
