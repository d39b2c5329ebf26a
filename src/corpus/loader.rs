//! Filesystem corpus loader
//!
//! Enumeration is eager (so an empty corpus is detected before any work
//! starts) but reading is lazy: each file's bytes are loaded only when the
//! record is pulled, on whichever worker pulls it.

use super::pattern::FilePattern;
use crate::error::CorpusError;
use crate::model::AudioRecord;
use std::fs;
use std::path::{Path, PathBuf};
use std::vec;
use walkdir::WalkDir;

/// Source of audio records for a run
pub trait CorpusLoader {
    /// Lazy sequence of records; a read failure is fatal to the run
    type Records: Iterator<Item = Result<AudioRecord, CorpusError>> + Send;

    /// List every file under `root` whose name matches `pattern`
    ///
    /// Fails if the root is unusable or nothing matches.
    fn enumerate(
        &self,
        root: &Path,
        pattern: &str,
        recursive: bool,
    ) -> Result<Self::Records, CorpusError>;
}

/// Loads records from a directory tree using walkdir
///
/// Symbolic links are not followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCorpusLoader;

impl FsCorpusLoader {
    pub fn new() -> Self {
        Self
    }

    /// Matching file paths in file-name order, without reading them
    pub fn discover(
        &self,
        root: &Path,
        pattern: &FilePattern,
        recursive: bool,
    ) -> Result<Vec<PathBuf>, CorpusError> {
        if !root.exists() {
            return Err(CorpusError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory(root.to_path_buf()));
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(root)
            .follow_links(false)
            .max_depth(max_depth)
            .sort_by_file_name();

        let mut paths = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let matched = entry
                .file_name()
                .to_str()
                .map(|name| pattern.matches(name))
                .unwrap_or(false);
            if matched {
                paths.push(entry.into_path());
            }
        }

        log::debug!(
            "Discovered {} file(s) matching {:?} under {:?}",
            paths.len(),
            pattern.as_str(),
            root
        );

        Ok(paths)
    }
}

impl CorpusLoader for FsCorpusLoader {
    type Records = FileRecords;

    fn enumerate(
        &self,
        root: &Path,
        pattern: &str,
        recursive: bool,
    ) -> Result<FileRecords, CorpusError> {
        let pattern = FilePattern::new(pattern)?;
        let paths = self.discover(root, &pattern, recursive)?;

        if paths.is_empty() {
            return Err(CorpusError::NoMatchingFiles {
                root: root.to_path_buf(),
                pattern: pattern.as_str().to_string(),
            });
        }

        Ok(FileRecords {
            paths: paths.into_iter(),
        })
    }
}

/// Reads each discovered file as it is pulled
#[derive(Debug)]
pub struct FileRecords {
    paths: vec::IntoIter<PathBuf>,
}

impl Iterator for FileRecords {
    type Item = Result<AudioRecord, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        Some(match fs::read(&path) {
            Ok(content) => Ok(AudioRecord::new(path, content)),
            Err(source) => Err(CorpusError::Read { path, source }),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

impl ExactSizeIterator for FileRecords {}
