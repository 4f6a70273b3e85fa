/// Root-mean-square level
pub fn rms(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    (signal.iter().map(|x| x * x).sum::<f64>() / signal.len() as f64).sqrt()
}

/// Largest absolute value after skipping the first `skip` samples (transient)
pub fn steady_state_peak(signal: &[f64], skip: usize) -> f64 {
    signal
        .iter()
        .skip(skip)
        .fold(0.0f64, |peak, &v| peak.max(v.abs()))
}

/// Output/input RMS ratio in dB, ignoring the first `skip` samples
pub fn attenuation_db(input: &[f64], output: &[f64], skip: usize) -> f64 {
    let skip_in = skip.min(input.len());
    let skip_out = skip.min(output.len());
    20.0 * (rms(&output[skip_out..]) / rms(&input[skip_in..])).log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rms() {
        assert_eq!(rms(&[]), 0.0);
        assert!((rms(&[1.0, -1.0, 1.0, -1.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_steady_state_peak_skips_transient() {
        let signal = [10.0, -8.0, 0.5, -0.25];
        assert_eq!(steady_state_peak(&signal, 2), 0.5);
    }

    #[test]
    fn test_attenuation_half_amplitude() {
        let input = [1.0, -1.0, 1.0, -1.0];
        let output = [0.5, -0.5, 0.5, -0.5];
        assert!((attenuation_db(&input, &output, 0) + 6.0206).abs() < 1e-3);
    }
}
