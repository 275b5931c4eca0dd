//! Still-image export of single frames.

use std::path::Path;

use tracing::info;

use super::frame::Frame;
use crate::error::ExportError;

/// Save `frame` as a PNG at `path`
pub fn save_frame(frame: &Frame, path: &Path) -> Result<(), ExportError> {
    frame.save_with_format(path, image::ImageFormat::Png)?;
    info!(path = %path.display(), "Saved frame snapshot");
    Ok(())
}
