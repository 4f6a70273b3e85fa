use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{FilterError, Result};

/// Read a mono WAV file as `f64` samples
///
/// Integer formats are scaled into `[-1.0, 1.0)`. Returns the samples and
/// the file's sample rate.
///
/// # Errors
/// Returns `FilterError::UnsupportedWav` for files with more than one channel
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, u32)> {
    let reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(FilterError::UnsupportedWav(format!(
            "expected 1 channel, found {}",
            spec.channels
        )));
    }

    let samples: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    log::debug!(
        "Read {} samples at {} Hz from {}",
        samples.len(),
        spec.sample_rate,
        path.as_ref().display()
    );

    Ok((samples, spec.sample_rate))
}

/// Write mono 32-bit float WAV
pub fn save_wav<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec)?;

    for &sample in samples {
        writer.write_sample(sample as f32)?;
    }

    writer.finalize()?;
    Ok(())
}
