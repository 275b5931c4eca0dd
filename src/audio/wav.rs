//! 16-bit PCM WAV output.

use std::path::Path;

use tracing::info;

use crate::error::ExportError;

/// Write mono 16-bit samples to `path`
pub fn write_wav(path: &Path, sample_rate_hz: u32, samples: &[i16]) -> Result<(), ExportError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    info!(
        path = %path.display(),
        samples = samples.len(),
        seconds = samples.len() as f64 / sample_rate_hz as f64,
        "Wrote audio track"
    );
    Ok(())
}
