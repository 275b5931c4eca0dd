//! Error types for pattern validation and asset export.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected breathing pattern input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("{phase} duration must be non-negative, got {value}")]
    NegativePhase { phase: &'static str, value: f64 },

    #[error("{phase} duration must be finite, got {value}")]
    NonFinite { phase: &'static str, value: f64 },

    #[error("cycle duration must be positive (inhale + hold + exhale == 0)")]
    EmptyCycle,

    #[error("breaths per minute must be positive and finite, got {0}")]
    InvalidBpm(f64),

    #[error("expected \"inhale,hold,exhale\", got {0:?}")]
    Parse(String),
}

/// Failure while producing the output files
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("invalid recording config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("video encoder `{program}` not found on PATH")]
    EncoderNotFound { program: String },

    #[error("video encoder exited with {status} while writing {output}")]
    EncoderFailed {
        status: std::process::ExitStatus,
        output: PathBuf,
    },
}
