//! Video encoding and muxing via the system `ffmpeg` binary.
//!
//! Raw RGB frames are streamed to `ffmpeg` over stdin while the audio track
//! is read from the intermediate WAV file. `ffmpeg` must be on `PATH`.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use tracing::{debug, trace};

use crate::error::ExportError;
use crate::params::{FrameConfig, RecordingConfig};
use crate::rendering::Frame;

/// Default encoder binary
pub const FFMPEG: &str = "ffmpeg";

/// Build the encoder command line for `config`
pub fn ffmpeg_args(config: &RecordingConfig, frame: &FrameConfig) -> Vec<String> {
    let mut args: Vec<String> = vec!["-y".into(), "-loglevel".into(), "error".into()];

    // Input 0: raw frames on stdin
    args.extend([
        "-f".into(),
        "rawvideo".into(),
        "-pix_fmt".into(),
        "rgb24".into(),
        "-s".into(),
        format!("{}x{}", frame.width, frame.height),
        "-r".into(),
        config.fps.to_string(),
        "-i".into(),
        "-".into(),
    ]);

    // Input 1: audio track
    args.extend(["-i".into(), path_arg(&config.audio_path)]);

    args.extend([
        "-map".into(),
        "0:v:0".into(),
        "-map".into(),
        "1:a:0".into(),
        "-c:v".into(),
        config.video_codec.clone(),
        "-pix_fmt".into(),
        "yuv420p".into(),
        "-c:a".into(),
        config.audio_codec.clone(),
        "-t".into(),
        config.duration_secs.to_string(),
        path_arg(&config.output_path),
    ]);

    args
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// A running encoder accepting frames in presentation order
pub struct VideoEncoder {
    child: Child,
    stdin: Option<BufWriter<ChildStdin>>,
    output: PathBuf,
    frames_written: usize,
}

impl VideoEncoder {
    /// Start an encoder binary taking `ffmpeg` arguments, usually [`FFMPEG`]
    pub fn spawn_program(
        program: &str,
        config: &RecordingConfig,
        frame: &FrameConfig,
    ) -> Result<Self, ExportError> {
        let args = ffmpeg_args(config, frame);
        debug!(program, ?args, "Spawning video encoder");

        let mut child = Command::new(program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ExportError::EncoderNotFound {
                    program: program.to_string(),
                },
                _ => ExportError::Io(e),
            })?;

        let stdin = child.stdin.take().map(BufWriter::new);

        Ok(Self {
            child,
            stdin,
            output: config.output_path.clone(),
            frames_written: 0,
        })
    }

    /// Append the next frame
    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), ExportError> {
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "encoder input closed").into());
        };

        if let Err(e) = stdin.write_all(frame.as_raw()) {
            return Err(self.abort(e));
        }
        self.frames_written += 1;
        trace!(frame = self.frames_written, "Frame written");
        Ok(())
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Close the frame stream and wait for the encoder to flush the file
    pub fn finish(mut self) -> Result<PathBuf, ExportError> {
        if let Some(mut stdin) = self.stdin.take() {
            let flushed = stdin.flush();
            // Closing stdin signals end of stream
            drop(stdin);
            if let Err(e) = flushed {
                return Err(self.abort(e));
            }
        }

        let status = self.child.wait()?;
        if !status.success() {
            return Err(ExportError::EncoderFailed {
                status,
                output: self.output,
            });
        }

        debug!(frames = self.frames_written, output = %self.output.display(), "Encoder finished");
        Ok(self.output)
    }

    /// Turn a failed write into the encoder's own exit status when it died
    fn abort(&mut self, err: io::Error) -> ExportError {
        self.stdin = None;
        match self.child.wait() {
            Ok(status) if !status.success() => ExportError::EncoderFailed {
                status,
                output: self.output.clone(),
            },
            _ => ExportError::Io(err),
        }
    }
}
