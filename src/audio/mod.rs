//! Audio track generation.
//!
//! Synthesizes decaying bell strikes for the inhale and exhale phases,
//! sequences them with hold silence into whole breathing cycles, and writes
//! the result as 16-bit PCM.

mod sequence;
mod synthesis;
mod wav;

// Re-export public API
pub use sequence::{build_cycle, sequence_bell_sounds};
pub use synthesis::{generate_bell_sound, sample_count};
pub use wav::write_wav;
