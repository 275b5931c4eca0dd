//! Bell tone synthesis.
//!
//! A bell strike is a weighted sum of inharmonic partials under an
//! exponential decay, peak-normalized and quantized to 16-bit PCM.

use std::f64::consts::PI;

use crate::params::audio_constants::{DECAY_RATE, HARMONICS, PEAK_AMPLITUDE};

/// Number of samples covering `duration_s` at `sample_rate_hz`
pub fn sample_count(duration_s: f64, sample_rate_hz: u32) -> usize {
    if !duration_s.is_finite() || duration_s <= 0.0 {
        return 0;
    }
    (duration_s * sample_rate_hz as f64).round() as usize
}

/// Synthesize one bell strike
///
/// Returns `round(duration_s * sample_rate_hz)` samples over the half-open
/// interval `[0, duration_s)`, scaled so the peak magnitude is exactly 32767.
/// A zero-length or silent tone yields all-zero (possibly empty) output.
pub fn generate_bell_sound(frequency_hz: f64, duration_s: f64, sample_rate_hz: u32) -> Vec<i16> {
    let n = sample_count(duration_s, sample_rate_hz);
    if n == 0 {
        return Vec::new();
    }

    // Evenly spaced, endpoint excluded
    let step = duration_s / n as f64;

    let raw: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 * step;
            let tone: f64 = HARMONICS
                .iter()
                .map(|&(multiple, weight)| weight * (2.0 * PI * multiple * frequency_hz * t).sin())
                .sum();
            tone * (-DECAY_RATE * t).exp()
        })
        .collect();

    let peak = raw.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
    if peak == 0.0 {
        return vec![0; n];
    }

    // `as` truncates toward zero
    raw.iter()
        .map(|s| (s / peak * PEAK_AMPLITUDE) as i16)
        .collect()
}
