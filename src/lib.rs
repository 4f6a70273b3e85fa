pub mod config;
pub mod error;
pub mod output;
pub mod signal_processing;
pub mod wav;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::{FilterConfig, FilterKind, Frequency};
pub use error::{FilterError, Result};
pub use signal_processing::{DataSet, Filter};
pub use wav::{read_wav, save_wav};
