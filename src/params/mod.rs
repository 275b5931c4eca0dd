//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers are collected here with:
//! - Physical units (seconds, Hz, pixels)
//! - Defaults matching the classic 4-7-8 exercise video
//! - Validation where a bad value would break generation

mod audio;
mod pattern;
mod render;

// Re-export all types
pub use audio::{audio_constants, BellConfig};
pub use pattern::{BreathingPattern, Phase, PhaseState};
pub use render::{FrameConfig, PhaseColors, RecordingConfig, MAX_DURATION_SECS};
