//! Cycle sequencing of bell strikes and hold silence.

use tracing::debug;

use super::synthesis::{generate_bell_sound, sample_count};
use crate::params::BreathingPattern;

/// Build the full audio track for `total_duration_s`
///
/// One cycle is `inhale bell ++ hold silence ++ exhale bell`; it is repeated
/// for every complete cycle that fits. A trailing partial cycle is dropped,
/// so a duration shorter than one cycle gives an empty track.
pub fn sequence_bell_sounds(
    pattern: &BreathingPattern,
    high_freq_hz: f64,
    low_freq_hz: f64,
    total_duration_s: f64,
    sample_rate_hz: u32,
) -> Vec<i16> {
    let cycle = build_cycle(pattern, high_freq_hz, low_freq_hz, sample_rate_hz);
    let cycles = pattern.cycles_in(total_duration_s);

    debug!(
        cycles,
        cycle_samples = cycle.len(),
        dropped_s = total_duration_s - cycles as f64 * pattern.cycle_duration(),
        "Sequencing bell sounds"
    );

    cycle.repeat(cycles)
}

/// One inhale-hold-exhale cycle of samples
pub fn build_cycle(
    pattern: &BreathingPattern,
    high_freq_hz: f64,
    low_freq_hz: f64,
    sample_rate_hz: u32,
) -> Vec<i16> {
    let inhale = generate_bell_sound(high_freq_hz, pattern.inhale_s(), sample_rate_hz);
    let hold_len = sample_count(pattern.hold_s(), sample_rate_hz);
    let exhale = generate_bell_sound(low_freq_hz, pattern.exhale_s(), sample_rate_hz);

    let mut cycle = Vec::with_capacity(inhale.len() + hold_len + exhale.len());
    cycle.extend_from_slice(&inhale);
    cycle.resize(inhale.len() + hold_len, 0);
    cycle.extend_from_slice(&exhale);
    cycle
}
