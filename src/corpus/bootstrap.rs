//! One-time corpus bootstrap
//!
//! Runs before the pipeline and is idempotent: an existing data directory is
//! left untouched, so repeated runs never download twice.

use crate::error::BootstrapError;
use flate2::read::GzDecoder;
use std::fs;
use std::path::Path;
use tar::Archive;

/// Default corpus: the OpenSLR "yes/no" recordings
pub const DEFAULT_CORPUS_URL: &str = "http://www.openslr.org/resources/1/waves_yesno.tar.gz";

/// Populates an empty data directory
pub trait ArchiveFetcher {
    /// Fill `dest` (which already exists and is empty) with the corpus
    fn fetch(&self, dest: &Path) -> Result<(), BootstrapError>;
}

/// What [`ensure_corpus`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Data directory already existed; nothing fetched
    AlreadyPresent,

    /// Data directory was created and populated
    Fetched,
}

/// Make sure `data_dir` exists, fetching the corpus into it if it does not
///
/// A failed fetch removes the directory again so the next run retries.
pub fn ensure_corpus<F: ArchiveFetcher + ?Sized>(
    data_dir: &Path,
    fetcher: &F,
) -> Result<BootstrapOutcome, BootstrapError> {
    if data_dir.exists() {
        log::info!("Corpus already present at {:?}, skipping download", data_dir);
        return Ok(BootstrapOutcome::AlreadyPresent);
    }

    fs::create_dir_all(data_dir)?;

    if let Err(e) = fetcher.fetch(data_dir) {
        log::warn!("Corpus fetch failed, removing {:?}", data_dir);
        if let Err(cleanup) = fs::remove_dir_all(data_dir) {
            log::warn!("Failed to remove {:?}: {}", data_dir, cleanup);
        }
        return Err(e);
    }

    log::info!("Corpus fetched into {:?}", data_dir);
    Ok(BootstrapOutcome::Fetched)
}

/// Downloads a `.tar.gz` archive and unpacks it in place
#[derive(Debug, Clone)]
pub struct HttpArchiveFetcher {
    url: String,
}

impl HttpArchiveFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Archive URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpArchiveFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_CORPUS_URL)
    }
}

impl ArchiveFetcher for HttpArchiveFetcher {
    fn fetch(&self, dest: &Path) -> Result<(), BootstrapError> {
        log::info!("Downloading corpus from {}", self.url);

        let response = reqwest::blocking::get(self.url.as_str())?.error_for_status()?;
        unpack_tar_gz(response, dest)
    }
}

/// Unpack a gzip-compressed tar stream into `dest`
pub fn unpack_tar_gz<R: std::io::Read>(reader: R, dest: &Path) -> Result<(), BootstrapError> {
    Archive::new(GzDecoder::new(reader))
        .unpack(dest)
        .map_err(|source| BootstrapError::Unpack {
            path: dest.to_path_buf(),
            source,
        })
}
