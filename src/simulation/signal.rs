use std::f64::consts::PI;

/// Sine wave of `num_samples` samples
pub fn sine(freq_hz: f64, sample_rate: f64, num_samples: usize, amplitude: f64) -> Vec<f64> {
    let omega = 2.0 * PI * freq_hz / sample_rate;
    (0..num_samples)
        .map(|i| amplitude * (omega * i as f64).sin())
        .collect()
}

/// Sum of sine tones given as `(frequency_hz, amplitude)` pairs
pub fn tone_mix(tones: &[(f64, f64)], sample_rate: f64, num_samples: usize) -> Vec<f64> {
    let mut out = vec![0.0; num_samples];
    for &(freq, amplitude) in tones {
        for (acc, s) in out
            .iter_mut()
            .zip(sine(freq, sample_rate, num_samples, amplitude))
        {
            *acc += s;
        }
    }
    out
}

pub fn constant(value: f64, num_samples: usize) -> Vec<f64> {
    vec![value; num_samples]
}

/// `+1, -1, +1, ...`: a full-scale tone at exactly Nyquist
pub fn alternating(num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect()
}

/// Unit impulse at index 0
pub fn impulse(num_samples: usize) -> Vec<f64> {
    let mut out = vec![0.0; num_samples];
    if let Some(first) = out.first_mut() {
        *first = 1.0;
    }
    out
}
