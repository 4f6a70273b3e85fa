//! Second-order (biquad) IIR filter design and evaluation.
//!
//! Coefficients come from the bilinear transform with frequency pre-warping:
//!
//! ```text
//! ω = 2π·fc/fs,  K = tan(ω/2)
//! ```
//!
//! The designers perform no validation. Out-of-range inputs yield `inf`/`NaN`
//! coefficients which propagate through [`Filter::filter`] unchanged. Use
//! [`crate::config::FilterConfig::design`] for a checked entry point.

use std::f64::consts::{PI, SQRT_2};

/// Number of coefficients per section (second order).
pub const SECTION_LEN: usize = 3;

/// Coefficient set of a single biquad section.
///
/// `b` holds the recursion terms applied to past outputs (`b[0]` is always
/// exactly `1.0`), `a` holds the gains applied to the input. A `Filter` is
/// immutable once designed and may be evaluated any number of times, from
/// any number of threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    b: [f64; SECTION_LEN],
    a: [f64; SECTION_LEN],
}

/// Pre-warped analog frequency `K` and its square for a cutoff.
fn prewarp(cutoff_hz: f64, sample_rate: f64) -> (f64, f64) {
    let omega = 2.0 * PI * cutoff_hz / sample_rate;
    let k = (omega / 2.0).tan();
    (k, k * k)
}

impl Filter {
    /// Design a Butterworth low-pass section
    ///
    /// # Arguments
    /// * `cutoff_hz` - -3 dB cutoff, expected in `(0, sample_rate / 2)`
    /// * `sample_rate` - Sample rate in Hz
    pub fn low_pass(cutoff_hz: f64, sample_rate: f64) -> Self {
        let (k, k2) = prewarp(cutoff_hz, sample_rate);

        // all coefficients share the same denominator
        let denom = 1.0 + SQRT_2 * k + k2;

        Self {
            b: Self::butterworth_poles(k, k2, denom),
            a: [k2 / denom, 2.0 * k2 / denom, k2 / denom],
        }
    }

    /// Design a Butterworth high-pass section
    ///
    /// Shares its `b` coefficients with [`Filter::low_pass`] for the same
    /// `(cutoff_hz, sample_rate)`; only `a` differs.
    pub fn high_pass(cutoff_hz: f64, sample_rate: f64) -> Self {
        let (k, k2) = prewarp(cutoff_hz, sample_rate);
        let denom = 1.0 + SQRT_2 * k + k2;

        Self {
            b: Self::butterworth_poles(k, k2, denom),
            a: [1.0 / denom, -2.0 / denom, 1.0 / denom],
        }
    }

    /// Design a band-pass section centred on `center_hz`
    ///
    /// # Arguments
    /// * `center_hz` - Centre frequency in Hz, expected in `(0, sample_rate / 2)`
    /// * `bandwidth_hz` - Bandwidth in Hz, expected `> 0`
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// The quality factor is `Q = sample_rate / bandwidth_hz`. `a[1]` is
    /// exactly zero and `a[0] == a[2]`.
    pub fn band_pass(center_hz: f64, bandwidth_hz: f64, sample_rate: f64) -> Self {
        let q = sample_rate / bandwidth_hz;
        let (k, k2) = prewarp(center_hz, sample_rate);
        let k_over_q = (1.0 / q) * k;
        let denom = 1.0 + k_over_q + k2;

        Self {
            b: [1.0, 2.0 * (k2 - 1.0) / denom, (1.0 - k_over_q + k2) / denom],
            a: [k_over_q / denom, 0.0, k_over_q / denom],
        }
    }

    fn butterworth_poles(k: f64, k2: f64, denom: f64) -> [f64; SECTION_LEN] {
        [
            1.0,
            2.0 * (k2 - 1.0) / denom,
            (1.0 - SQRT_2 * k + k2) / denom,
        ]
    }

    /// Recursion coefficients (`b[0] == 1.0`)
    pub fn b(&self) -> &[f64; SECTION_LEN] {
        &self.b
    }

    /// Input gain coefficients
    pub fn a(&self) -> &[f64; SECTION_LEN] {
        &self.a
    }

    /// Run the filter over `input`, starting from rest
    ///
    /// Returns a new buffer of the same length. Every call owns a fresh
    /// delay line, so no state carries over between calls.
    pub fn filter(&self, input: &[f64]) -> Vec<f64> {
        let mut z = [0.0f64; SECTION_LEN];
        let mut output = Vec::with_capacity(input.len());

        for &x in input {
            let y = self.a[0] * x + z[0];

            // z[SECTION_LEN - 1] is never written and stays zero
            for i in 1..SECTION_LEN {
                z[i - 1] = self.a[i] * x + z[i] - self.b[i] * y;
            }

            output.push(y);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_b0_is_exactly_one() {
        for filter in [
            Filter::low_pass(1000.0, 48000.0),
            Filter::high_pass(1000.0, 48000.0),
            Filter::band_pass(1000.0, 200.0, 48000.0),
        ] {
            assert_eq!(filter.b()[0], 1.0);
        }
    }

    #[test]
    fn test_low_pass_coefficients() {
        // fc = fs/8: K = tan(π/8)
        let filter = Filter::low_pass(1000.0, 8000.0);

        assert_relative_eq!(filter.b()[1], -0.9428090415820632, epsilon = 1e-12);
        assert_relative_eq!(filter.b()[2], 0.3333333333333333, epsilon = 1e-12);
        assert_relative_eq!(filter.a()[0], 0.09763107293781749, epsilon = 1e-12);
        assert_relative_eq!(filter.a()[1], 0.19526214587563498, epsilon = 1e-12);
        assert_relative_eq!(filter.a()[2], 0.09763107293781749, epsilon = 1e-12);
    }

    #[test]
    fn test_low_and_high_pass_share_b() {
        let lp = Filter::low_pass(2500.0, 44100.0);
        let hp = Filter::high_pass(2500.0, 44100.0);

        assert_eq!(lp.b(), hp.b());
        assert_ne!(lp.a(), hp.a());
    }

    #[test]
    fn test_band_pass_symmetry() {
        let filter = Filter::band_pass(1602.0, 500.0, 48000.0);

        assert_eq!(filter.a()[1], 0.0);
        assert_eq!(filter.a()[0], filter.a()[2]);
    }

    #[test]
    fn test_step_response_matches_reference() {
        let filter = Filter::low_pass(1000.0, 8000.0);
        let output = filter.filter(&[1.0; 8]);

        let expected = [
            0.09763107293781749,
            0.3849406771185847,
            0.7209061516321208,
            0.9418875706026352,
            1.0382423589251581,
            1.0554260515651872,
            1.0395087295797993,
            1.0187738369475263,
        ];

        assert_eq!(output.len(), expected.len());
        for (y, e) in output.iter().zip(expected) {
            assert!((y - e).abs() < 1e-9, "got {}, expected {}", y, e);
        }
    }

    #[test]
    fn test_empty_input() {
        let filter = Filter::high_pass(100.0, 1000.0);
        assert!(filter.filter(&[]).is_empty());
    }

    #[test]
    fn test_impulse_response_leading_terms() {
        let filter = Filter::low_pass(3000.0, 48000.0);
        let output = filter.filter(&[1.0, 0.0, 0.0]);

        let (a, b) = (filter.a(), filter.b());
        let y0 = a[0];
        let y1 = a[1] - b[1] * y0;
        let y2 = a[2] - b[2] * y0 - b[1] * y1;

        assert_relative_eq!(output[0], y0, epsilon = 1e-15);
        assert_relative_eq!(output[1], y1, epsilon = 1e-15);
        assert_relative_eq!(output[2], y2, epsilon = 1e-15);
    }

    #[test]
    fn test_invalid_design_propagates_nan() {
        // Zero sample rate: ω is infinite, tan(inf) is NaN
        let filter = Filter::low_pass(1000.0, 0.0);
        assert!(filter.a()[0].is_nan());

        let output = filter.filter(&[1.0, 0.0, 0.0]);
        assert!(output.iter().all(|y| y.is_nan()));
    }
}
