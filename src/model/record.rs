use std::path::{Path, PathBuf};

/// One file of the corpus with its raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRecord {
    /// Location the bytes were read from
    pub path: PathBuf,

    /// Raw file content, not yet decoded
    pub content: Vec<u8>,
}

impl AudioRecord {
    /// Create a record from a path and its bytes
    pub fn new(path: impl Into<PathBuf>, content: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    /// File name component, used for pattern matching
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

/// Outcome of running the extractor over one record
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureResult {
    /// Path of the source record
    pub path: PathBuf,

    /// Duration in seconds, `None` when the payload could not be decoded
    pub duration_seconds: Option<f64>,
}

impl FeatureResult {
    /// Result for a payload that decoded successfully
    pub fn decoded(path: impl Into<PathBuf>, duration_seconds: f64) -> Self {
        Self {
            path: path.into(),
            duration_seconds: Some(duration_seconds),
        }
    }

    /// Result for a payload that could not be decoded
    pub fn undecodable(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            duration_seconds: None,
        }
    }

    /// Whether a duration was extracted
    pub fn is_decoded(&self) -> bool {
        self.duration_seconds.is_some()
    }
}

/// A feature result that passed the duration filter
///
/// Only built from results whose duration is present, so the duration here is
/// always defined and above the configured threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredResult {
    /// Path of the source record
    pub path: PathBuf,

    /// Duration in seconds
    pub duration_seconds: f64,
}

impl FilteredResult {
    /// Narrow a feature result, dropping it if it has no duration
    pub fn from_feature(feature: FeatureResult) -> Option<Self> {
        feature.duration_seconds.map(|duration_seconds| Self {
            path: feature.path,
            duration_seconds,
        })
    }

    /// Path of the source record
    pub fn path(&self) -> &Path {
        &self.path
    }
}
