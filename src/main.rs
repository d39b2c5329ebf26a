use anyhow::{Context, Result};
use audio_durations::corpus::{ensure_corpus, BootstrapOutcome, HttpArchiveFetcher};
use audio_durations::pipeline::config::{DEFAULT_DATA_DIR, DEFAULT_ROOT};
use audio_durations::{DurationPipeline, PipelineConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "audio-durations")]
#[command(about = "Report duration statistics for a corpus of WAV files", long_about = None)]
struct Args {
    /// Corpus root directory
    #[arg(default_value = DEFAULT_ROOT)]
    root: String,

    /// File name pattern
    #[arg(long, default_value = "*.wav")]
    pattern: String,

    /// Only look at files directly under the root
    #[arg(long)]
    no_recursive: bool,

    /// Keep files strictly longer than this many seconds
    #[arg(long, default_value = "1.0")]
    min_duration: f64,

    /// Number of sample rows to print
    #[arg(long, default_value = "5")]
    sample_size: usize,

    /// Worker threads (default: one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Trust WAV headers instead of reading every sample
    #[arg(long)]
    header_only: bool,

    /// Download the corpus first if the data directory is missing
    #[arg(long)]
    download: bool,

    /// Directory the corpus archive is unpacked into
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: String,

    /// Corpus archive URL (.tar.gz)
    #[arg(long)]
    url: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let root = PathBuf::from(shellexpand::tilde(&args.root).as_ref());

    if args.download {
        let data_dir = PathBuf::from(shellexpand::tilde(&args.data_dir).as_ref());
        let fetcher = match &args.url {
            Some(url) => HttpArchiveFetcher::new(url.clone()),
            None => HttpArchiveFetcher::default(),
        };

        let outcome = ensure_corpus(&data_dir, &fetcher)
            .with_context(|| format!("Failed to fetch corpus from {}", fetcher.url()))?;
        if outcome == BootstrapOutcome::Fetched {
            log::info!("Corpus downloaded to {:?}", data_dir);
        }
    }

    let mut config = PipelineConfig::new(root)
        .with_pattern(args.pattern)
        .with_recursive(!args.no_recursive)
        .with_min_duration(args.min_duration)
        .with_sample_size(args.sample_size)
        .with_payload_verification(!args.header_only);
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }

    let pipeline = DurationPipeline::for_directory(config)?;

    log::info!("Processing audio files (feature extraction)...");
    let report = pipeline.execute()?;

    print!("{}", report);

    Ok(())
}
