//! Feature extractor trait and the fail-soft extraction boundary

use crate::error::DecodeError;
use crate::model::{AudioRecord, FeatureResult};

/// Turns a raw audio payload into a duration
///
/// Implementations must be pure: no I/O beyond the input bytes and no shared
/// mutable state, so any number of calls may run concurrently.
pub trait FeatureExtractor: Send + Sync {
    /// Decode the payload and return its duration in seconds
    fn extract(&self, content: &[u8]) -> Result<f64, DecodeError>;
}

impl<E: FeatureExtractor + ?Sized> FeatureExtractor for &E {
    fn extract(&self, content: &[u8]) -> Result<f64, DecodeError> {
        (**self).extract(content)
    }
}

/// Run the extractor over one record, absorbing any decode error
///
/// Consumes the record so its bytes are released as soon as the result exists.
pub fn extract_feature<E: FeatureExtractor + ?Sized>(
    extractor: &E,
    record: AudioRecord,
) -> FeatureResult {
    let AudioRecord { path, content } = record;

    match extractor.extract(&content) {
        Ok(duration) => FeatureResult::decoded(path, duration),
        Err(e) => {
            log::debug!("Could not decode {:?}: {}", path, e);
            FeatureResult::undecodable(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Treats the first byte as a duration, rejects everything else
    struct FirstByteExtractor;

    impl FeatureExtractor for FirstByteExtractor {
        fn extract(&self, content: &[u8]) -> Result<f64, DecodeError> {
            content
                .first()
                .map(|b| f64::from(*b))
                .ok_or(DecodeError::Empty)
        }
    }

    #[test]
    fn test_extract_feature_success() {
        let record = AudioRecord::new("a.wav", vec![3]);
        let result = extract_feature(&FirstByteExtractor, record);

        assert_eq!(result, FeatureResult::decoded("a.wav", 3.0));
    }

    #[test]
    fn test_extract_feature_absorbs_error() {
        let record = AudioRecord::new("b.wav", Vec::new());
        let result = extract_feature(&FirstByteExtractor, record);

        assert_eq!(result, FeatureResult::undecodable("b.wav"));
    }

    #[test]
    fn test_extractor_by_reference() {
        let extractor = FirstByteExtractor;
        let by_ref = &extractor;
        assert_eq!(by_ref.extract(&[7]).unwrap(), 7.0);
    }
}
