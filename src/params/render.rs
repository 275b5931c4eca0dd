//! Frame and recording configuration.

use std::path::PathBuf;

/// Canvas size of every rendered frame
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Canvas width (pixels)
    pub width: u32,

    /// Canvas height (pixels)
    pub height: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl FrameConfig {
    /// Largest circle radius: a quarter of the shorter canvas side
    pub fn max_radius(&self) -> f64 {
        self.width.min(self.height) as f64 / 4.0
    }

    /// Circle centre (pixels)
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }
}

/// Circle colour per breathing phase (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseColors {
    pub inhale: [u8; 3],
    pub hold: [u8; 3],
    pub exhale: [u8; 3],
}

impl Default for PhaseColors {
    fn default() -> Self {
        Self {
            inhale: [144, 238, 144], // soft green
            hold: [220, 235, 255],   // pale blue-white
            exhale: [240, 128, 128], // soft red
        }
    }
}

/// Longest session accepted (seconds)
///
/// Four hours of 44.1 kHz mono is about 1.3 GB of samples held in memory.
pub const MAX_DURATION_SECS: f64 = 4.0 * 60.0 * 60.0;

/// Recording configuration for one generated video
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Total video duration (seconds)
    pub duration_secs: f64,

    /// Frame rate (FPS)
    pub fps: u32,

    /// Final muxed video
    pub output_path: PathBuf,

    /// Intermediate WAV handed to the muxer
    pub audio_path: PathBuf,

    /// Remove the intermediate WAV after a successful mux
    pub discard_audio: bool,

    /// Video codec passed to the encoder
    pub video_codec: String,

    /// Audio codec passed to the encoder
    pub audio_codec: String,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            duration_secs: 300.0,
            fps: 24,
            output_path: PathBuf::from("breathing_instruction_with_sound.mp4"),
            audio_path: PathBuf::from("breathing_bells.wav"),
            discard_audio: false,
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
        }
    }
}

impl RecordingConfig {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            ..Self::default()
        }
    }

    /// Total number of frames to encode
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f64).ceil() as usize
    }

    /// Timestamp of frame `index` (seconds)
    pub fn frame_time(&self, index: usize) -> f64 {
        index as f64 / self.fps as f64
    }

    /// Validate configuration (bounded positive duration, positive frame rate)
    pub fn validate(&self) -> Result<(), String> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(format!(
                "Duration must be > 0 seconds, got {}",
                self.duration_secs
            ));
        }
        if self.duration_secs > MAX_DURATION_SECS {
            return Err(format!(
                "Duration must be at most {} seconds, got {}",
                MAX_DURATION_SECS, self.duration_secs
            ));
        }
        if self.fps == 0 {
            return Err("Frame rate must be > 0".to_string());
        }
        if self.output_path == self.audio_path {
            return Err(format!(
                "Audio and video paths must differ, both are {}",
                self.output_path.display()
            ));
        }
        Ok(())
    }
}
