//! Audio feature extraction
//!
//! Extractors return a typed `Result<f64, DecodeError>`; the pipeline only
//! ever sees the fail-soft `Option` produced by [`extract_feature`].

mod traits;
mod wav;

pub use traits::{extract_feature, FeatureExtractor};
pub use wav::WavDurationExtractor;
