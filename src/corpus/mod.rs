//! Corpus acquisition and enumeration
//!
//! The pipeline only depends on the [`CorpusLoader`] trait. The bootstrap
//! step that downloads the corpus runs separately, before any loader.

pub mod bootstrap;
mod loader;
mod memory;
mod pattern;

pub use bootstrap::{ensure_corpus, ArchiveFetcher, BootstrapOutcome, HttpArchiveFetcher};
pub use loader::{CorpusLoader, FileRecords, FsCorpusLoader};
pub use memory::MemoryCorpus;
pub use pattern::FilePattern;
