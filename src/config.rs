//! Checked filter configuration.
//!
//! The designers in [`crate::signal_processing::biquad`] accept any input and
//! let invalid parameters surface as `inf`/`NaN` coefficients. This module is
//! the validating layer in front of them: it parses frequencies, loads
//! settings from TOML, and refuses parameters outside `(0, fs/2)`.
//!
//! ```toml
//! kind = "band-pass"
//! cutoff_hz = 1602.5
//! bandwidth_hz = 500.0
//! sample_rate = 48000.0
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{FilterError, Result};
use crate::signal_processing::Filter;

/// Frequency specification
///
/// Can be written as a frequency or as a period, which is convenient when
/// the period is exact but the frequency is a repeating decimal.
///
/// # Parsing formats
/// - `1000` - frequency in Hz (no suffix)
/// - `1000hz` or `1000Hz` - frequency in Hz (explicit)
/// - `1.5khz` or `1.5kHz` - frequency in kHz
/// - `624us` or `624μs` - period in microseconds
/// - `2ms` - period in milliseconds
///
/// # Example
/// ```
/// use biquadkit::config::Frequency;
///
/// let freq: Frequency = "1.5kHz".parse().unwrap();
/// assert!((freq.as_hz() - 1500.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency(f64);

impl Frequency {
    pub fn from_hz(hz: f64) -> Self {
        Self(hz)
    }

    pub fn from_interval_us(us: f64) -> Self {
        Self(1_000_000.0 / us)
    }

    pub fn as_hz(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}hz", self.0)
    }
}

fn parse_positive(num: &str, original: &str, what: &str) -> std::result::Result<f64, String> {
    let value: f64 = num
        .trim()
        .parse()
        .map_err(|_| format!("invalid {}: {}", what, original))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be positive", what));
    }
    Ok(value)
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_lowercase();

        if let Some(num) = lower.strip_suffix("us").or_else(|| lower.strip_suffix("μs")) {
            let us = parse_positive(num, s, "interval")?;
            return Ok(Self::from_interval_us(us));
        }

        if let Some(num) = lower.strip_suffix("ms") {
            let ms = parse_positive(num, s, "interval")?;
            return Ok(Self::from_interval_us(ms * 1000.0));
        }

        if let Some(num) = lower.strip_suffix("khz") {
            let khz = parse_positive(num, s, "frequency")?;
            return Ok(Self::from_hz(khz * 1000.0));
        }

        let num = lower.strip_suffix("hz").unwrap_or(&lower);
        let hz = parse_positive(num, s, "frequency")?;
        Ok(Self::from_hz(hz))
    }
}

/// Filter family
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    /// Butterworth low-pass
    #[serde(alias = "lowpass")]
    LowPass,
    /// Butterworth high-pass
    #[serde(alias = "highpass")]
    HighPass,
    /// Band-pass around a centre frequency
    #[serde(alias = "bandpass")]
    BandPass,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::LowPass => "low-pass",
            FilterKind::HighPass => "high-pass",
            FilterKind::BandPass => "band-pass",
        };
        f.write_str(name)
    }
}

/// Filter design parameters
///
/// For band-pass filters `cutoff_hz` is the centre frequency.
///
/// # Example
/// ```
/// use biquadkit::config::{FilterConfig, FilterKind};
///
/// let config = FilterConfig {
///     kind: FilterKind::HighPass,
///     cutoff_hz: 200.0,
///     ..FilterConfig::default()
/// };
/// let filter = config.design().unwrap();
/// assert_eq!(filter.b()[0], 1.0);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub kind: FilterKind,
    /// Cutoff (or centre) frequency in Hz
    pub cutoff_hz: f64,
    /// Bandwidth in Hz, band-pass only
    pub bandwidth_hz: Option<f64>,
    /// Sample rate in Hz
    pub sample_rate: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kind: FilterKind::LowPass,
            cutoff_hz: 1000.0,
            bandwidth_hz: None,
            sample_rate: 48000.0,
        }
    }
}

impl FilterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Check the parameters against the filter's valid domain
    ///
    /// # Errors
    /// - `InvalidSampleRate` if the sample rate is not a positive number
    /// - `InvalidFrequency` / `AboveNyquist` unless `0 < cutoff < fs/2`
    /// - `MissingBandwidth` / `InvalidBandwidth` for a band-pass without a
    ///   positive bandwidth
    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(FilterError::InvalidSampleRate(self.sample_rate));
        }
        if !self.cutoff_hz.is_finite() || self.cutoff_hz <= 0.0 {
            return Err(FilterError::InvalidFrequency(self.cutoff_hz));
        }
        if self.cutoff_hz >= self.nyquist() {
            return Err(FilterError::AboveNyquist {
                frequency: self.cutoff_hz,
                nyquist: self.nyquist(),
            });
        }
        if self.kind == FilterKind::BandPass {
            match self.bandwidth_hz {
                None => return Err(FilterError::MissingBandwidth),
                Some(bw) if !bw.is_finite() || bw <= 0.0 => {
                    return Err(FilterError::InvalidBandwidth(bw));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Validate, then design the filter
    pub fn design(&self) -> Result<Filter> {
        self.validate()?;

        let filter = match self.kind {
            FilterKind::LowPass => Filter::low_pass(self.cutoff_hz, self.sample_rate),
            FilterKind::HighPass => Filter::high_pass(self.cutoff_hz, self.sample_rate),
            FilterKind::BandPass => {
                let bw = self.bandwidth_hz.ok_or(FilterError::MissingBandwidth)?;
                Filter::band_pass(self.cutoff_hz, bw, self.sample_rate)
            }
        };

        log::debug!(
            "Designed {} filter at {:.1} Hz (fs {:.0} Hz): b={:?} a={:?}",
            self.kind,
            self.cutoff_hz,
            self.sample_rate,
            filter.b(),
            filter.a()
        );

        Ok(filter)
    }
}
