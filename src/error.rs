use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(f64),

    #[error("Invalid cutoff frequency: {0} Hz")]
    InvalidFrequency(f64),

    #[error("Cutoff {frequency} Hz is not below Nyquist ({nyquist} Hz)")]
    AboveNyquist { frequency: f64, nyquist: f64 },

    #[error("Invalid bandwidth: {0} Hz")]
    InvalidBandwidth(f64),

    #[error("Band-pass filter requires a bandwidth")]
    MissingBandwidth,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported WAV file: {0}")]
    UnsupportedWav(String),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
