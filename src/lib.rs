//! Audio durations - parallel duration statistics over a WAV corpus
//!
//! This library decodes every file of a corpus into a duration, drops files
//! that fail to decode or are too short, and reports the count and mean
//! duration of what remains along with a small sample.

pub mod analysis;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod model;
pub mod pipeline;

pub use error::{CorpusError, DecodeError, PipelineError};
pub use pipeline::config::PipelineConfig;
pub use pipeline::DurationPipeline;
