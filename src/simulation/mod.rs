mod measure;
mod noise;
mod signal;

pub use measure::{attenuation_db, rms, steady_state_peak};
pub use noise::{NoiseConfig, add_white_noise, signal_power};
pub use signal::{alternating, constant, impulse, sine, tone_mix};
