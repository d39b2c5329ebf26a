//! Pipeline orchestration and its configuration

pub mod config;
mod filter;
mod orchestrator;
mod stage;

pub use config::PipelineConfig;
pub use filter::DurationFilter;
pub use orchestrator::DurationPipeline;
pub use stage::{JobProgress, JobStage};
