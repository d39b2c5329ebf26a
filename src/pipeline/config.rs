//! Pipeline configuration

use crate::error::ConfigError;
use std::path::PathBuf;

/// Default directory the corpus archive is unpacked into
pub const DEFAULT_DATA_DIR: &str = "datos_audio";

/// Default corpus root inside the data directory
pub const DEFAULT_ROOT: &str = "datos_audio/waves_yesno";

/// Default file name pattern
pub const DEFAULT_PATTERN: &str = "*.wav";

/// Files must be strictly longer than this to be kept
pub const DEFAULT_MIN_DURATION_SECONDS: f64 = 1.0;

/// Number of rows in the report sample
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Configuration for a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Directory the corpus is enumerated from
    pub root: PathBuf,

    /// Glob applied to file names (e.g. `*.wav`)
    pub pattern: String,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Threshold in seconds; only files strictly longer are kept
    pub min_duration_seconds: f64,

    /// Maximum number of rows in the report sample
    pub sample_size: usize,

    /// Worker threads for the parallel engine (None = one per core)
    pub threads: Option<usize>,

    /// Read every sample to detect truncated files
    pub verify_payload: bool,
}

impl PipelineConfig {
    /// Create a configuration for the given corpus root with defaults
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            recursive: true,
            min_duration_seconds: DEFAULT_MIN_DURATION_SECONDS,
            sample_size: DEFAULT_SAMPLE_SIZE,
            threads: None,
            verify_payload: true,
        }
    }

    /// Set the file name pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Enable or disable recursive enumeration
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the minimum duration threshold
    pub fn with_min_duration(mut self, seconds: f64) -> Self {
        self.min_duration_seconds = seconds;
        self
    }

    /// Set the report sample size
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    /// Set the worker thread count
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Enable or disable payload verification
    pub fn with_payload_verification(mut self, enable: bool) -> Self {
        self.verify_payload = enable;
        self
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_duration_seconds.is_finite() || self.min_duration_seconds < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.min_duration_seconds));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}
