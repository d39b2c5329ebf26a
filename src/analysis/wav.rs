//! WAVE duration extraction using hound
//!
//! The duration is the frame count (samples per channel) divided by the
//! sample rate. By default every sample is read so that a data chunk that is
//! shorter than its header claims is rejected instead of silently trusted.

use super::traits::FeatureExtractor;
use crate::error::DecodeError;
use hound::{SampleFormat, WavReader};
use std::io::{Cursor, Read};

/// Duration extractor for RIFF/WAVE payloads
#[derive(Debug, Clone, Copy)]
pub struct WavDurationExtractor {
    /// Read every sample instead of trusting the declared data length
    verify_payload: bool,
}

impl WavDurationExtractor {
    pub fn new() -> Self {
        Self {
            verify_payload: true,
        }
    }

    /// Trust the header's data length without reading the samples
    pub fn header_only() -> Self {
        Self {
            verify_payload: false,
        }
    }

    /// Enable or disable payload verification
    pub fn with_payload_verification(mut self, enable: bool) -> Self {
        self.verify_payload = enable;
        self
    }

    /// Whether samples are read during extraction
    pub fn verifies_payload(&self) -> bool {
        self.verify_payload
    }
}

impl Default for WavDurationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor for WavDurationExtractor {
    fn extract(&self, content: &[u8]) -> Result<f64, DecodeError> {
        if content.is_empty() {
            return Err(DecodeError::Empty);
        }

        let mut reader = WavReader::new(Cursor::new(content))?;
        let spec = reader.spec();

        if spec.sample_rate == 0 {
            return Err(DecodeError::ZeroSampleRate);
        }
        if spec.channels == 0 {
            return Err(DecodeError::Malformed("zero channels".to_string()));
        }

        let frames = if self.verify_payload {
            let samples = match spec.sample_format {
                SampleFormat::Int => count_samples::<i32, _>(&mut reader)?,
                SampleFormat::Float => count_samples::<f32, _>(&mut reader)?,
            };
            samples / u32::from(spec.channels)
        } else {
            reader.duration()
        };

        Ok(f64::from(frames) / f64::from(spec.sample_rate))
    }
}

/// Read every declared sample, returning how many were present
fn count_samples<S, R>(reader: &mut WavReader<R>) -> Result<u32, DecodeError>
where
    S: hound::Sample,
    R: Read,
{
    let declared = reader.len();
    let mut read = 0u32;

    for sample in reader.samples::<S>() {
        match sample {
            Ok(_) => read += 1,
            // hound reports a short data chunk as a format error, not as EOF
            Err(_) if read < declared => {
                return Err(DecodeError::Truncated { declared, read });
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(read)
}
