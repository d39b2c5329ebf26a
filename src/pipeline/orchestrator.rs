//! Main pipeline orchestration

use super::config::PipelineConfig;
use super::filter::DurationFilter;
use super::stage::{JobProgress, JobStage};
use crate::analysis::{extract_feature, FeatureExtractor, WavDurationExtractor};
use crate::corpus::{CorpusLoader, FsCorpusLoader};
use crate::engine::{ExecutionEngine, RayonEngine};
use crate::error::{CorpusError, PipelineError};
use crate::model::{
    AggregateReport, ExtractionSummary, FeatureResult, FilteredResult, PipelineReport,
};

/// Loader → extract → filter → materialize → aggregate
pub struct DurationPipeline<L: CorpusLoader, X: FeatureExtractor> {
    config: PipelineConfig,
    loader: L,
    extractor: X,
}

impl DurationPipeline<FsCorpusLoader, WavDurationExtractor> {
    /// Pipeline over WAV files on disk, as described by `config`
    pub fn for_directory(config: PipelineConfig) -> Result<Self, PipelineError> {
        let extractor =
            WavDurationExtractor::new().with_payload_verification(config.verify_payload);
        Self::new(config, FsCorpusLoader::new(), extractor)
    }
}

impl<L: CorpusLoader, X: FeatureExtractor> DurationPipeline<L, X> {
    /// Create a new pipeline; fails on invalid configuration
    pub fn new(config: PipelineConfig, loader: L, extractor: X) -> Result<Self, PipelineError> {
        config.validate()?;

        Ok(Self {
            config,
            loader,
            extractor,
        })
    }

    /// Configuration this pipeline runs with
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run on a dedicated rayon session that lives only for this call
    pub fn execute(&self) -> Result<PipelineReport, PipelineError> {
        let engine = RayonEngine::start(self.config.threads)?;
        let report = self.run(&engine);
        engine.stop();
        report
    }

    /// Run the complete pipeline on the given engine
    pub fn run<E: ExecutionEngine>(&self, engine: &E) -> Result<PipelineReport, PipelineError> {
        let mut progress = JobProgress::new();

        self.run_stages(engine, &mut progress).map_err(|e| {
            log::error!("Run failed while {}: {}", progress.stage(), e);
            PipelineError::from(e)
        })
    }

    fn run_stages<E: ExecutionEngine>(
        &self,
        engine: &E,
        progress: &mut JobProgress,
    ) -> Result<PipelineReport, CorpusError> {
        progress.advance();
        log::info!(
            "Loading {:?} files from {:?}{}",
            self.config.pattern,
            self.config.root,
            if self.config.recursive { " (recursive)" } else { "" }
        );
        let mut records =
            self.loader
                .enumerate(&self.config.root, &self.config.pattern, self.config.recursive)?;

        progress.advance();
        log::info!(
            "Extracting durations on {} worker(s)...",
            engine.parallelism()
        );
        // A read failure ends the run, so nothing is pulled after the first one
        let mut failed = false;
        let records = std::iter::from_fn(move || {
            if failed {
                return None;
            }
            let record = records.next()?;
            failed = record.is_err();
            Some(record)
        });
        let extractor = &self.extractor;
        let features = engine
            .map(records, |record| {
                record.map(|record| extract_feature(extractor, record))
            })
            .into_iter()
            .collect::<Result<Vec<FeatureResult>, CorpusError>>()?;

        let total_records = features.len() as u64;
        let decode_failures = features.iter().filter(|f| !f.is_decoded()).count() as u64;
        log::info!(
            "Extracted {} record(s), {} could not be decoded",
            total_records,
            decode_failures
        );

        progress.advance();
        let filter = DurationFilter::new(self.config.min_duration_seconds);
        let accepted = engine.filter(features, |feature| filter.accepts(feature));
        let summary = ExtractionSummary {
            total_records,
            decode_failures,
            below_threshold: total_records - decode_failures - accepted.len() as u64,
        };
        log::info!(
            "{} record(s) longer than {}s, {} at or below",
            accepted.len(),
            filter.threshold(),
            summary.below_threshold
        );

        progress.advance();
        // Sorted so sampling and aggregation see the same order on every run
        let mut rows: Vec<FilteredResult> = accepted
            .into_iter()
            .filter_map(FilteredResult::from_feature)
            .collect();
        rows.sort_by(|a, b| a.path.cmp(&b.path));
        let snapshot = engine.materialize(rows);

        progress.advance();
        let (processed_count, total_duration) = engine.aggregate(
            &snapshot,
            || (0u64, 0.0f64),
            |(count, total), row: &FilteredResult| (count + 1, total + row.duration_seconds),
            |(count_a, total_a), (count_b, total_b)| (count_a + count_b, total_a + total_b),
        );
        let aggregate = AggregateReport::from_totals(processed_count, total_duration);

        progress.advance();
        let sample = snapshot.head(self.config.sample_size);

        match aggregate.average_duration_seconds {
            Some(average) => log::info!(
                "Run {} in {:?}: {} file(s), average {:.2}s",
                JobStage::Reported,
                progress.elapsed(),
                processed_count,
                average
            ),
            None => log::warn!(
                "Run {} in {:?}: no file passed the filter, average undefined",
                JobStage::Reported,
                progress.elapsed()
            ),
        }

        Ok(PipelineReport {
            aggregate,
            sample,
            summary,
        })
    }
}
