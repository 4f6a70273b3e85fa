use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use biquadkit::config::{FilterConfig, FilterKind, Frequency};
use biquadkit::output::{FilterReport, OutputFormat, create_formatter};
use biquadkit::signal_processing::DataSet;
use biquadkit::{read_wav, save_wav};

#[derive(Parser, Debug)]
#[command(name = "biquadkit")]
#[command(about = "Filter mono WAV files with a second-order IIR section", long_about = None)]
struct Args {
    /// WAV files to filter
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Write filtered audio here (single input only)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// TOML filter configuration; command-line options take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Filter type
    #[arg(short = 'k', long, value_enum)]
    kind: Option<FilterKind>,

    /// Cutoff or centre frequency (e.g., "1000", "1.5khz", "624us")
    #[arg(short = 'c', long)]
    cutoff: Option<Frequency>,

    /// Band-pass bandwidth (e.g., "200", "0.5khz")
    #[arg(short = 'b', long)]
    bandwidth: Option<Frequency>,

    /// Rescale input to [-1, 1] before filtering
    #[arg(long)]
    normalize: bool,

    /// Output format: text, json, csv
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if args.output.is_some() && args.files.len() > 1 {
        anyhow::bail!("--output requires exactly one input file");
    }

    let mut config = match args.config {
        Some(ref path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    if let Some(kind) = args.kind {
        config.kind = kind;
    }
    if let Some(cutoff) = args.cutoff {
        config.cutoff_hz = cutoff.as_hz();
    }
    if let Some(bw) = args.bandwidth {
        config.bandwidth_hz = Some(bw.as_hz());
    }

    let formatter = create_formatter(args.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }

    for path in &args.files {
        let report = filter_file(path, &mut config, args.normalize, args.output.as_deref())
            .with_context(|| format!("Failed to filter {}", path.display()))?;
        println!("{}", formatter.format(&report));
    }

    Ok(())
}

fn filter_file(
    path: &std::path::Path,
    config: &mut FilterConfig,
    normalize: bool,
    output: Option<&std::path::Path>,
) -> anyhow::Result<FilterReport> {
    let (samples, sample_rate) = read_wav(path)?;
    config.sample_rate = sample_rate as f64;

    let filter = config.design()?;

    let mut input = DataSet::from(samples);
    if normalize {
        let (min, max) = input.bounds();
        if max > min {
            input = input.map(min, max, -1.0, 1.0);
        } else {
            log::warn!("{}: constant signal, skipping normalization", path.display());
        }
    }

    log::info!(
        "Filtering {} samples from {} ({} @ {:.1} Hz)",
        input.len(),
        path.display(),
        config.kind,
        config.cutoff_hz
    );
    let filtered = DataSet::from(filter.filter(input.as_slice()));

    if let Some(out_path) = output {
        save_wav(out_path, filtered.as_slice(), sample_rate)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        log::info!("Wrote {}", out_path.display());
    }

    Ok(FilterReport::new(
        &path.display().to_string(),
        config,
        &filter,
        &input,
        &filtered,
    ))
}
