//! In-memory corpus, for embedding callers and tests

use super::loader::CorpusLoader;
use super::pattern::FilePattern;
use crate::error::CorpusError;
use crate::model::AudioRecord;
use std::path::Path;
use std::vec;

/// A fixed set of records that behaves like a directory tree
///
/// Records are selected when `root` is an ancestor of their path (or any
/// record when `root` is empty) and their file name matches the pattern.
/// With `recursive` off, only direct children of `root` are selected.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    records: Vec<AudioRecord>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record
    pub fn with_record(mut self, record: AudioRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn is_under(record: &AudioRecord, root: &Path, recursive: bool) -> bool {
        if root.as_os_str().is_empty() {
            return recursive || record.path.parent().map_or(true, |p| p.as_os_str().is_empty());
        }
        if recursive {
            record.path.starts_with(root)
        } else {
            record.path.parent() == Some(root)
        }
    }
}

impl FromIterator<AudioRecord> for MemoryCorpus {
    fn from_iter<I: IntoIterator<Item = AudioRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl CorpusLoader for MemoryCorpus {
    type Records = vec::IntoIter<Result<AudioRecord, CorpusError>>;

    fn enumerate(
        &self,
        root: &Path,
        pattern: &str,
        recursive: bool,
    ) -> Result<Self::Records, CorpusError> {
        let pattern = FilePattern::new(pattern)?;

        let selected: Vec<Result<AudioRecord, CorpusError>> = self
            .records
            .iter()
            .filter(|r| Self::is_under(r, root, recursive))
            .filter(|r| r.file_name().map_or(false, |name| pattern.matches(name)))
            .cloned()
            .map(Ok)
            .collect();

        if selected.is_empty() {
            return Err(CorpusError::NoMatchingFiles {
                root: root.to_path_buf(),
                pattern: pattern.as_str().to_string(),
            });
        }

        Ok(selected.into_iter())
    }
}
