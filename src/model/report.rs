use super::FilteredResult;
use std::fmt;

/// Count and mean duration over the materialized filtered set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateReport {
    /// Number of files that passed the filter
    pub processed_count: u64,

    /// Mean duration in seconds; `None` when no file passed the filter
    pub average_duration_seconds: Option<f64>,
}

impl AggregateReport {
    /// Build the report from a count and the sum of durations
    pub fn from_totals(processed_count: u64, total_duration_seconds: f64) -> Self {
        let average_duration_seconds = if processed_count == 0 {
            None
        } else {
            Some(total_duration_seconds / processed_count as f64)
        };

        Self {
            processed_count,
            average_duration_seconds,
        }
    }

    /// Whether the average is undefined (empty filtered set)
    pub fn is_empty(&self) -> bool {
        self.processed_count == 0
    }
}

/// Where the records of a run ended up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Records produced by the loader
    pub total_records: u64,

    /// Records whose payload could not be decoded
    pub decode_failures: u64,

    /// Decoded records at or below the threshold
    pub below_threshold: u64,
}

impl ExtractionSummary {
    /// Records that passed the filter
    pub fn accepted(&self) -> u64 {
        self.total_records
            .saturating_sub(self.decode_failures)
            .saturating_sub(self.below_threshold)
    }
}

/// Everything a finished run produces
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// Count and mean over the filtered set
    pub aggregate: AggregateReport,

    /// First entries of the filtered set, in stable order
    pub sample: Vec<FilteredResult>,

    /// Breakdown of dropped records
    pub summary: ExtractionSummary,
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline report:")?;
        writeln!(
            f,
            " Files processed successfully: {}",
            self.aggregate.processed_count
        )?;
        match self.aggregate.average_duration_seconds {
            Some(average) => writeln!(f, " Average audio duration: {:.2} seconds", average)?,
            None => writeln!(
                f,
                " Average audio duration: undefined (no files passed the filter)"
            )?,
        }

        if !self.sample.is_empty() {
            writeln!(f, " path, duration_seconds")?;
        }
        for row in &self.sample {
            writeln!(f, " {}, {:.4}", row.path.display(), row.duration_seconds)?;
        }

        Ok(())
    }
}
