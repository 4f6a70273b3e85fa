use anyhow::{Context, Result, bail};
use biquadkit::config::Frequency;
use biquadkit::save_wav;
use biquadkit::simulation::{NoiseConfig, add_white_noise, tone_mix};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate_wav")]
#[command(about = "Generate synthetic mono WAV files for filter testing")]
struct Args {
    /// Output WAV file
    #[arg(short, long, default_value = "synth.wav")]
    output: PathBuf,

    /// Tones as freq:amplitude pairs (e.g., "100:1.0,3khz:0.5")
    #[arg(short, long, default_value = "100:1.0,5khz:0.5")]
    tones: String,

    /// Signal duration in seconds
    #[arg(short, long, default_value_t = 1.0)]
    duration: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 48000)]
    sample_rate: u32,

    /// TOML noise configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// AWGN SNR in dB (CLI override)
    #[arg(long)]
    snr: Option<f64>,

    /// Seed for reproducible noise (CLI override)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn parse_tones(s: &str) -> Result<Vec<(f64, f64)>> {
    s.split(',')
        .map(|part| -> Result<(f64, f64)> {
            let (freq, amp) = part
                .trim()
                .split_once(':')
                .with_context(|| format!("Tone must be freq:amplitude, got '{}'", part))?;
            let freq: Frequency = freq
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid tone frequency")?;
            let amp: f64 = amp.trim().parse().context("Invalid tone amplitude")?;
            Ok((freq.as_hz(), amp))
        })
        .collect()
}

fn load_noise_config(path: &PathBuf) -> Result<NoiseConfig> {
    let content = fs::read_to_string(path).context("Failed to read config file")?;
    toml::from_str(&content).context("Failed to parse config file")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut noise = match args.config {
        Some(ref path) => load_noise_config(path)?,
        None => NoiseConfig::default(),
    };
    if let Some(snr) = args.snr {
        noise.snr_db = Some(snr);
    }
    if let Some(seed) = args.seed {
        noise.seed = Some(seed);
    }

    let tones = parse_tones(&args.tones)?;
    let nyquist = args.sample_rate as f64 / 2.0;
    if let Some(&(freq, _)) = tones.iter().find(|(f, _)| *f >= nyquist) {
        bail!("Tone {} Hz is not below Nyquist ({} Hz)", freq, nyquist);
    }

    let num_samples = (args.duration * args.sample_rate as f64) as usize;
    let mut signal = tone_mix(&tones, args.sample_rate as f64, num_samples);
    add_white_noise(&mut signal, &noise);

    save_wav(&args.output, &signal, args.sample_rate).context("Failed to write WAV file")?;

    log::info!(
        "Wrote {} samples ({} tones, snr {:?} dB) to {}",
        signal.len(),
        tones.len(),
        noise.snr_db,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tones() {
        let tones = parse_tones("100:1.0, 3khz:0.5").unwrap();
        assert_eq!(tones, vec![(100.0, 1.0), (3000.0, 0.5)]);
    }

    #[test]
    fn test_parse_tones_rejects_missing_amplitude() {
        assert!(parse_tones("100").is_err());
        assert!(parse_tones("100:abc").is_err());
        assert!(parse_tones("-5:1.0").is_err());
    }
}
