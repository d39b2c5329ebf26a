//! Minimum-duration filter

use crate::model::FeatureResult;

/// Keeps results with a duration strictly above a threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationFilter {
    threshold_seconds: f64,
}

impl DurationFilter {
    pub fn new(threshold_seconds: f64) -> Self {
        Self { threshold_seconds }
    }

    /// Threshold in seconds
    pub fn threshold(&self) -> f64 {
        self.threshold_seconds
    }

    /// Absent durations never pass; present ones must exceed the threshold
    pub fn accepts(&self, result: &FeatureResult) -> bool {
        result
            .duration_seconds
            .map_or(false, |duration| duration > self.threshold_seconds)
    }
}
