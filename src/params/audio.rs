//! Bell tone configuration and synthesis constants.

/// Tone frequencies and sample rate for the audio track
#[derive(Debug, Clone)]
pub struct BellConfig {
    /// Fundamental of the inhale bell (Hz)
    pub high_freq_hz: f64,

    /// Fundamental of the exhale bell (Hz)
    pub low_freq_hz: f64,

    /// Audio sample rate (Hz)
    pub sample_rate_hz: u32,
}

impl Default for BellConfig {
    fn default() -> Self {
        Self {
            high_freq_hz: 880.0,
            low_freq_hz: 440.0,
            sample_rate_hz: 44100,
        }
    }
}

impl BellConfig {
    /// Validate configuration (positive, finite frequencies and sample rate)
    pub fn validate(&self) -> Result<(), String> {
        for (name, freq) in [("high", self.high_freq_hz), ("low", self.low_freq_hz)] {
            if !freq.is_finite() || freq <= 0.0 {
                return Err(format!("{} frequency must be > 0 Hz, got {}", name, freq));
            }
        }
        if self.sample_rate_hz == 0 {
            return Err("Sample rate must be > 0".to_string());
        }
        Ok(())
    }
}

/// Bell timbre constants
pub mod audio_constants {
    /// Partials as multiples of the fundamental, paired with their weights
    pub const HARMONICS: [(f64, f64); 5] = [
        (1.0, 0.5),
        (2.0, 0.75),
        (2.8, 0.33),
        (3.5, 0.14),
        (4.5, 0.05),
    ];

    /// Exponential decay rate of the strike envelope (1/s)
    pub const DECAY_RATE: f64 = 3.0;

    /// Peak magnitude after quantization to i16
    pub const PEAK_AMPLITUDE: f64 = 32767.0;
}
