//! Breathing exercise session: audio track, frames, and the final video.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::audio::{sample_count, sequence_bell_sounds, write_wav};
use crate::error::ExportError;
use crate::params::{BellConfig, BreathingPattern, FrameConfig, PhaseColors, RecordingConfig};
use crate::rendering::{Frame, FrameRenderer};
use crate::video::{VideoEncoder, FFMPEG};

/// What a session produces for a given recording config
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSummary {
    /// Complete breathing cycles in the audio track
    pub cycles: usize,
    /// Audio samples written to the intermediate WAV
    pub audio_samples: usize,
    /// Video frames encoded
    pub frames: usize,
    /// Final muxed file
    pub output: PathBuf,
}

/// Read-only configuration of one exercise
#[derive(Debug, Clone, Default)]
pub struct BreathingExercise {
    pub pattern: BreathingPattern,
    pub bells: BellConfig,
    pub frame: FrameConfig,
    pub colors: PhaseColors,
}

impl BreathingExercise {
    /// Exercise with default tones, canvas and colours
    pub fn new(pattern: BreathingPattern) -> Self {
        Self {
            pattern,
            ..Self::default()
        }
    }

    pub fn with_bells(mut self, bells: BellConfig) -> Self {
        self.bells = bells;
        self
    }

    pub fn with_frame_config(mut self, frame: FrameConfig) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_colors(mut self, colors: PhaseColors) -> Self {
        self.colors = colors;
        self
    }

    /// Audio track for `total_duration_s` with explicit tones
    pub fn sequence_bell_sounds(
        &self,
        high_freq_hz: f64,
        low_freq_hz: f64,
        total_duration_s: f64,
        sample_rate_hz: u32,
    ) -> Vec<i16> {
        sequence_bell_sounds(
            &self.pattern,
            high_freq_hz,
            low_freq_hz,
            total_duration_s,
            sample_rate_hz,
        )
    }

    /// Audio track for `total_duration_s` using the configured tones
    pub fn audio_track(&self, total_duration_s: f64) -> Vec<i16> {
        self.sequence_bell_sounds(
            self.bells.high_freq_hz,
            self.bells.low_freq_hz,
            total_duration_s,
            self.bells.sample_rate_hz,
        )
    }

    pub fn renderer(&self) -> FrameRenderer {
        FrameRenderer::new(self.pattern, self.frame.clone(), self.colors)
    }

    /// Frame shown at `time_s`
    pub fn make_frame(&self, time_s: f64) -> Frame {
        self.renderer().make_frame(time_s)
    }

    /// Expected output sizes for `config` without generating anything
    pub fn plan(&self, config: &RecordingConfig) -> VideoSummary {
        let cycles = self.pattern.cycles_in(config.duration_secs);
        let rate = self.bells.sample_rate_hz;
        let cycle_samples = sample_count(self.pattern.inhale_s(), rate)
            + sample_count(self.pattern.hold_s(), rate)
            + sample_count(self.pattern.exhale_s(), rate);

        VideoSummary {
            cycles,
            audio_samples: cycles * cycle_samples,
            frames: config.total_frames(),
            output: config.output_path.clone(),
        }
    }

    /// Generate the audio track, render every frame and mux both into
    /// `config.output_path`
    pub fn generate_video(&self, config: &RecordingConfig) -> Result<VideoSummary, ExportError> {
        self.generate_video_with(FFMPEG, config)
    }

    /// Same as [`generate_video`](Self::generate_video) with a specific encoder binary
    pub fn generate_video_with(
        &self,
        encoder_program: &str,
        config: &RecordingConfig,
    ) -> Result<VideoSummary, ExportError> {
        self.bells.validate().map_err(ExportError::InvalidConfig)?;
        config.validate().map_err(ExportError::InvalidConfig)?;

        let plan = self.plan(config);
        info!(
            pattern = %self.pattern,
            duration_s = config.duration_secs,
            cycles = plan.cycles,
            frames = plan.frames,
            "Generating breathing exercise video"
        );

        let audio = self.audio_track(config.duration_secs);
        debug_assert_eq!(audio.len(), plan.audio_samples);
        write_wav(&config.audio_path, self.bells.sample_rate_hz, &audio)?;

        let renderer = self.renderer();
        let mut encoder = VideoEncoder::spawn_program(encoder_program, config, renderer.config())?;
        for index in 0..plan.frames {
            encoder.write_frame(&renderer.make_frame(config.frame_time(index)))?;
            if index > 0 && index % (config.fps as usize * 60) == 0 {
                debug!(minute = index / (config.fps as usize * 60), "Rendering progress");
            }
        }
        let frames = encoder.frames_written();
        let output = encoder.finish()?;

        if config.discard_audio {
            fs::remove_file(&config.audio_path)?;
            debug!(path = %config.audio_path.display(), "Removed intermediate audio");
        }

        info!(output = %output.display(), "Breathing exercise video saved");
        Ok(VideoSummary {
            cycles: plan.cycles,
            audio_samples: audio.len(),
            frames,
            output,
        })
    }
}
