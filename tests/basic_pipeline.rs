use audio_durations::analysis::{FeatureExtractor, WavDurationExtractor};
use audio_durations::engine::{RayonEngine, SequentialEngine};
use audio_durations::{CorpusError, DecodeError, DurationPipeline, PipelineConfig, PipelineError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a mono 16-bit WAV of the given length
fn write_wav(path: &Path, sample_rate: u32, duration_seconds: f64) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    let total_samples = (duration_seconds * sample_rate as f64) as usize;
    for i in 0..total_samples {
        let t = i as f32 / sample_rate as f32;
        let amplitude = 0.3 * (2.0 * std::f32::consts::PI * 440.0 * t).sin();
        let sample = (amplitude * i16::MAX as f32) as i16;
        writer.write_sample(sample).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

/// A: 2.0s valid, B: unreadable, C: 0.5s valid
fn three_file_corpus() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_wav(&dir.path().join("a.wav"), 8000, 2.0);
    fs::write(dir.path().join("b.wav"), b"definitely not a wave file").unwrap();
    write_wav(&dir.path().join("c.wav"), 8000, 0.5);
    dir
}

#[test]
fn test_three_file_scenario() {
    let dir = three_file_corpus();
    let pipeline = DurationPipeline::for_directory(PipelineConfig::new(dir.path())).unwrap();

    let report = pipeline.execute().expect("Pipeline run failed");

    assert_eq!(report.aggregate.processed_count, 1);
    let average = report.aggregate.average_duration_seconds.unwrap();
    assert!((average - 2.0).abs() < 1e-9);
    assert_eq!(report.sample.len(), 1);
    assert!(report.sample[0].path.ends_with("a.wav"));

    assert_eq!(report.summary.total_records, 3);
    assert_eq!(report.summary.decode_failures, 1);
    assert_eq!(report.summary.below_threshold, 1);

    let text = report.to_string();
    assert!(text.contains("Files processed successfully: 1"));
    assert!(text.contains("Average audio duration: 2.00 seconds"));
}

#[test]
fn test_empty_corpus_is_corpus_error() {
    let dir = TempDir::new().unwrap();
    let pipeline = DurationPipeline::for_directory(PipelineConfig::new(dir.path())).unwrap();

    let result = pipeline.execute();

    assert!(matches!(
        result,
        Err(PipelineError::Corpus(CorpusError::NoMatchingFiles { .. }))
    ));
}

#[test]
fn test_missing_root_is_corpus_error() {
    let dir = TempDir::new().unwrap();
    let config = PipelineConfig::new(dir.path().join("does-not-exist"));
    let pipeline = DurationPipeline::for_directory(config).unwrap();

    let err = pipeline.execute().unwrap_err();

    assert!(matches!(err, PipelineError::Corpus(CorpusError::RootNotFound(_))));
    assert!(err.to_string().starts_with("corpus unavailable"));
}

#[test]
fn test_all_below_threshold_is_undefined_average() {
    let dir = TempDir::new().unwrap();
    write_wav(&dir.path().join("short1.wav"), 8000, 0.25);
    write_wav(&dir.path().join("short2.wav"), 8000, 1.0);
    let pipeline = DurationPipeline::for_directory(PipelineConfig::new(dir.path())).unwrap();

    let report = pipeline.execute().unwrap();

    assert_eq!(report.aggregate.processed_count, 0);
    assert_eq!(report.aggregate.average_duration_seconds, None);
    assert!(report.sample.is_empty());
    assert!(report.to_string().contains("undefined"));
}

#[test]
fn test_runs_are_idempotent() {
    let dir = TempDir::new().unwrap();
    for i in 0..12 {
        write_wav(
            &dir.path().join(format!("clip_{:02}.wav", i)),
            8000,
            1.0 + i as f64 * 0.37,
        );
    }
    let pipeline = DurationPipeline::for_directory(PipelineConfig::new(dir.path())).unwrap();

    let first = pipeline.execute().unwrap();
    let second = pipeline.execute().unwrap();
    let sequential = pipeline.run(&SequentialEngine).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.aggregate, sequential.aggregate);
    assert_eq!(first.sample, sequential.sample);
}

#[test]
fn test_mean_over_filtered_set() {
    let dir = TempDir::new().unwrap();
    let durations = [1.5, 2.5, 4.0, 0.75];
    for (i, duration) in durations.iter().enumerate() {
        write_wav(&dir.path().join(format!("{}.wav", i)), 16000, *duration);
    }
    let config = PipelineConfig::new(dir.path()).with_sample_size(2);
    let pipeline = DurationPipeline::for_directory(config).unwrap();

    let engine = RayonEngine::start(Some(2)).unwrap();
    let report = pipeline.run(&engine).unwrap();
    engine.stop();

    assert_eq!(report.aggregate.processed_count, 3);
    let average = report.aggregate.average_duration_seconds.unwrap();
    assert!((average - (1.5 + 2.5 + 4.0) / 3.0).abs() < 1e-9);
    assert_eq!(report.sample.len(), 2);
    assert!(report.sample.iter().all(|row| row.duration_seconds > 1.0));
}

#[test]
fn test_recursive_and_pattern_options() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    write_wav(&dir.path().join("top.wav"), 8000, 2.0);
    write_wav(&dir.path().join("nested").join("deep.wav"), 8000, 3.0);
    write_wav(&dir.path().join("other.wave"), 8000, 3.0);

    let recursive = DurationPipeline::for_directory(PipelineConfig::new(dir.path()))
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(recursive.aggregate.processed_count, 2);

    let flat_config = PipelineConfig::new(dir.path()).with_recursive(false);
    let flat = DurationPipeline::for_directory(flat_config)
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(flat.aggregate.processed_count, 1);

    let wave_config = PipelineConfig::new(dir.path()).with_pattern("*.wave");
    let wave = DurationPipeline::for_directory(wave_config)
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(wave.aggregate.processed_count, 1);
}

#[test]
fn test_configurable_threshold() {
    let dir = three_file_corpus();
    let config = PipelineConfig::new(dir.path()).with_min_duration(0.25);
    let report = DurationPipeline::for_directory(config)
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(report.aggregate.processed_count, 2);
    let average = report.aggregate.average_duration_seconds.unwrap();
    assert!((average - 1.25).abs() < 1e-9);
}

#[test]
fn test_truncated_file_is_dropped() {
    let dir = TempDir::new().unwrap();
    let full = dir.path().join("full.wav");
    write_wav(&full, 8000, 2.0);

    let bytes = fs::read(&full).unwrap();
    fs::write(dir.path().join("cut.wav"), &bytes[..bytes.len() / 2]).unwrap();

    assert!(matches!(
        WavDurationExtractor::new().extract(&bytes[..bytes.len() / 2]),
        Err(DecodeError::Truncated { .. })
    ));

    let report = DurationPipeline::for_directory(PipelineConfig::new(dir.path()))
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(report.aggregate.processed_count, 1);
    assert_eq!(report.summary.decode_failures, 1);
}

#[test]
fn test_extractor_rejects_garbage_inputs() {
    let extractor = WavDurationExtractor::new();

    assert!(extractor.extract(&[]).is_err());
    assert!(extractor.extract(b"RIFF").is_err());
    assert!(extractor.extract(&[0u8; 64]).is_err());
    assert!(extractor.extract(&[0xFFu8; 1024]).is_err());
}
