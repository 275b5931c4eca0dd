//! Respiring library - paced-breathing instruction videos
//!
//! Bell tones mark each inhale and exhale, and a pulsing circle grows,
//! holds and shrinks in step with the breathing pattern.

pub mod audio;
pub mod cli;
pub mod error;
pub mod exercise;
pub mod params;
pub mod rendering;
pub mod video;
