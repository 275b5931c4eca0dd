//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

use crate::error::PatternError;
use crate::params::{BellConfig, BreathingPattern, RecordingConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "respiring", version)]
#[command(about = "Generate a paced-breathing video with bell tones", long_about = None)]
pub struct Args {
    /// Breathing pattern as inhale,hold,exhale seconds
    #[arg(
        short,
        long,
        value_name = "PATTERN",
        default_value = "4,7,8",
        conflicts_with = "bpm"
    )]
    pub pattern: BreathingPattern,

    /// Pace by breaths per minute instead (even inhale/exhale, no hold)
    #[arg(long, value_name = "BPM")]
    pub bpm: Option<f64>,

    /// Output video file
    #[arg(short, long, value_name = "PATH", default_value = "breathing_instruction_with_sound.mp4")]
    pub output: PathBuf,

    /// Intermediate WAV file
    #[arg(long, value_name = "PATH", default_value = "breathing_bells.wav")]
    pub audio_path: PathBuf,

    /// Remove the intermediate WAV after muxing
    #[arg(long)]
    pub discard_audio: bool,

    /// Total duration (seconds)
    #[arg(short, long, value_name = "SECONDS", default_value_t = 300.0)]
    pub duration: f64,

    /// Video frame rate (FPS)
    #[arg(long, value_name = "FPS", default_value_t = 24)]
    pub fps: u32,

    /// Audio sample rate (Hz)
    #[arg(long, value_name = "HZ", default_value_t = 44100)]
    pub sample_rate: u32,

    /// Inhale bell fundamental (Hz)
    #[arg(long, value_name = "HZ", default_value_t = 880.0)]
    pub high_freq: f64,

    /// Exhale bell fundamental (Hz)
    #[arg(long, value_name = "HZ", default_value_t = 440.0)]
    pub low_freq: f64,

    /// Render only the frame at this time (seconds) to a PNG and exit
    #[arg(long, value_name = "SECONDS")]
    pub snapshot: Option<f64>,

    /// PNG path for --snapshot
    #[arg(long, value_name = "PATH", default_value = "breathing_frame.png")]
    pub snapshot_path: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Set log level to debug (same as -vv)
    #[arg(long)]
    pub very_verbose: bool,
}

impl Args {
    /// Pattern from --bpm when given, otherwise --pattern
    pub fn breathing_pattern(&self) -> Result<BreathingPattern, PatternError> {
        match self.bpm {
            Some(bpm) => BreathingPattern::from_bpm(bpm),
            None => Ok(self.pattern),
        }
    }

    pub fn bell_config(&self) -> BellConfig {
        BellConfig {
            high_freq_hz: self.high_freq,
            low_freq_hz: self.low_freq,
            sample_rate_hz: self.sample_rate,
        }
    }

    pub fn recording_config(&self) -> RecordingConfig {
        RecordingConfig {
            duration_secs: self.duration,
            fps: self.fps,
            output_path: self.output.clone(),
            audio_path: self.audio_path.clone(),
            discard_audio: self.discard_audio,
            ..RecordingConfig::default()
        }
    }

    /// Default log level for the verbosity count
    pub fn log_level(&self) -> LevelFilter {
        if self.very_verbose {
            return LevelFilter::DEBUG;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }
}
