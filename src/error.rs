//! Error types for the duration pipeline
//!
//! Per-record decode failures (`DecodeError`) are absorbed at the extraction
//! boundary. Everything else is job-level and aborts the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single payload could not be turned into a duration
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Zero-length payload
    #[error("empty payload")]
    Empty,

    /// Header or chunk layout is not valid WAVE
    #[error("malformed WAVE data: {0}")]
    Malformed(String),

    /// The data chunk ends before the declared sample count
    #[error("truncated sample data: read {read} of {declared} samples")]
    Truncated {
        /// Samples the header declares
        declared: u32,
        /// Samples actually present
        read: u32,
    },

    /// Valid container, but a sample encoding we do not decode
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Header declares a sample rate of zero
    #[error("sample rate is zero")]
    ZeroSampleRate,
}

impl From<hound::Error> for DecodeError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                DecodeError::Malformed("unexpected end of data".to_string())
            }
            hound::Error::Unsupported => {
                DecodeError::UnsupportedEncoding("format not supported by reader".to_string())
            }
            e => DecodeError::Malformed(e.to_string()),
        }
    }
}

/// Fatal failure to obtain the corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Root path does not exist
    #[error("corpus root not found: {0:?}")]
    RootNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("corpus root is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    /// File pattern cannot match anything
    #[error("invalid file pattern: {0:?}")]
    InvalidPattern(String),

    /// Enumeration found nothing to process
    #[error("no files matching {pattern:?} found under {root:?}")]
    NoMatchingFiles {
        /// Root that was searched
        root: PathBuf,
        /// Pattern that was applied to file names
        pattern: String,
    },

    /// Directory traversal failed
    #[error("failed to walk corpus directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A discovered file could not be read
    #[error("failed to read {path:?}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Invalid pipeline configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Threshold must be a finite, non-negative number of seconds
    #[error("invalid minimum duration: {0}")]
    InvalidThreshold(f64),

    /// A worker pool needs at least one thread
    #[error("thread count must be at least 1")]
    ZeroThreads,
}

/// Job-level failure of a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The corpus could not be enumerated or read
    #[error("corpus unavailable: {0}")]
    Corpus(#[from] CorpusError),

    /// Configuration rejected before starting
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Worker pool could not be started
    #[error("failed to start execution engine: {0}")]
    Engine(#[from] rayon::ThreadPoolBuildError),
}

/// Failure while fetching the corpus archive
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Local filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Archive download failed
    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),

    /// Archive could not be unpacked
    #[error("failed to unpack archive into {path:?}: {source}")]
    Unpack {
        /// Destination directory
        path: PathBuf,
        /// Underlying I/O error from the archive reader
        #[source]
        source: io::Error,
    },
}
