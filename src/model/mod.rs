//! Data model flowing through the pipeline
//!
//! Records are produced by a corpus loader, turned into feature results by an
//! extractor, and narrowed into filtered results that feed the report.

mod record;
mod report;

pub use record::{AudioRecord, FeatureResult, FilteredResult};
pub use report::{AggregateReport, ExtractionSummary, PipelineReport};
