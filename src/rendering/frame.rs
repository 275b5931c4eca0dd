//! Per-timestamp frame rendering.

use glam::IVec2;
use image::{Rgb, RgbImage};

use crate::params::{BreathingPattern, FrameConfig, Phase, PhaseColors};

/// One RGB8 video frame (row-major, `height x width x 3`)
pub type Frame = RgbImage;

/// Circle geometry for one timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleState {
    pub phase: Phase,
    /// Radius in pixels (0..=max_radius)
    pub radius: f64,
    pub color: [u8; 3],
}

/// Renders the pulsing breathing circle
///
/// Stateless with respect to previous calls: every frame is a pure function
/// of the timestamp and the configuration, so frames may be requested in any
/// order or more than once.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    pattern: BreathingPattern,
    config: FrameConfig,
    colors: PhaseColors,
}

impl FrameRenderer {
    pub fn new(pattern: BreathingPattern, config: FrameConfig, colors: PhaseColors) -> Self {
        Self {
            pattern,
            config,
            colors,
        }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Radius and colour of the circle at `time_s`
    ///
    /// Inhale grows 0 -> max, hold stays at max, exhale shrinks max -> 0.
    pub fn circle_at(&self, time_s: f64) -> CircleState {
        let max_radius = self.config.max_radius();
        let state = self.pattern.phase_at(time_s);

        let (radius, color) = match state.phase {
            Phase::Inhale => (max_radius * state.progress, self.colors.inhale),
            Phase::Hold => (max_radius, self.colors.hold),
            Phase::Exhale => (max_radius * (1.0 - state.progress), self.colors.exhale),
        };

        CircleState {
            phase: state.phase,
            radius,
            color,
        }
    }

    /// Render the frame shown at `time_s`
    pub fn make_frame(&self, time_s: f64) -> Frame {
        let circle = self.circle_at(time_s);
        let mut frame = RgbImage::new(self.config.width, self.config.height);
        let (cx, cy) = self.config.center();
        fill_circle(
            &mut frame,
            IVec2::new(cx as i32, cy as i32),
            circle.radius as i32,
            Rgb(circle.color),
        );
        frame
    }
}

/// Fill every pixel within `radius` of `center`, clipped to the canvas
fn fill_circle(frame: &mut RgbImage, center: IVec2, radius: i32, color: Rgb<u8>) {
    if radius < 0 {
        return;
    }
    let (width, height) = (frame.width() as i32, frame.height() as i32);
    let r_squared = radius * radius;

    let y_range = (center.y - radius).max(0)..=(center.y + radius).min(height - 1);
    let x_range = (center.x - radius).max(0)..=(center.x + radius).min(width - 1);

    for y in y_range {
        for x in x_range.clone() {
            if (IVec2::new(x, y) - center).length_squared() <= r_squared {
                frame.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(pattern: BreathingPattern) -> FrameRenderer {
        FrameRenderer::new(pattern, FrameConfig::default(), PhaseColors::default())
    }

    #[test]
    fn test_frame_shape_and_black_corner() {
        let renderer = renderer(BreathingPattern::default());
        for t in [0.0, 1.0, 4.0, 7.5, 11.0, 15.0, 18.99, 19.0, 250.0] {
            let frame = renderer.make_frame(t);
            assert_eq!(frame.dimensions(), (640, 480));
            assert_eq!(frame.as_raw().len(), 480 * 640 * 3);
            assert_eq!(frame.get_pixel(0, 0), &Rgb([0, 0, 0]), "t={}", t);
            assert_eq!(frame.get_pixel(639, 479), &Rgb([0, 0, 0]), "t={}", t);
        }
    }

    #[test]
    fn test_make_frame_is_pure() {
        let renderer = renderer(BreathingPattern::default());
        for t in [0.0, 3.3, 9.0, 13.7] {
            assert_eq!(renderer.make_frame(t), renderer.make_frame(t));
        }
        // Out-of-order requests give the same result
        let later = renderer.make_frame(13.7);
        let _ = renderer.make_frame(0.0);
        assert_eq!(later, renderer.make_frame(13.7));
    }

    #[test]
    fn test_radius_and_color_follow_phase() {
        let colors = PhaseColors::default();
        let renderer = renderer(BreathingPattern::default());

        let start = renderer.circle_at(0.0);
        assert_eq!(start.radius, 0.0);
        assert_eq!(start.color, colors.inhale);

        let mid_inhale = renderer.circle_at(2.0);
        assert_eq!(mid_inhale.radius, 60.0);
        assert_eq!(mid_inhale.color, colors.inhale);

        let hold = renderer.circle_at(6.0);
        assert_eq!(hold.phase, Phase::Hold);
        assert_eq!(hold.radius, 120.0);
        assert_eq!(hold.color, colors.hold);

        let exhale_start = renderer.circle_at(11.0);
        assert_eq!(exhale_start.radius, 120.0);
        assert_eq!(exhale_start.color, colors.exhale);

        let mid_exhale = renderer.circle_at(15.0);
        assert_eq!(mid_exhale.radius, 60.0);
        assert_eq!(mid_exhale.color, colors.exhale);
    }

    #[test]
    fn test_circle_pixels() {
        let colors = PhaseColors::default();
        let renderer = renderer(BreathingPattern::default());
        let frame = renderer.make_frame(6.0);

        // Centre and the edge at exactly max_radius are filled
        assert_eq!(frame.get_pixel(320, 240), &Rgb(colors.hold));
        assert_eq!(frame.get_pixel(320 + 120, 240), &Rgb(colors.hold));
        assert_eq!(frame.get_pixel(320, 240 - 120), &Rgb(colors.hold));
        // Just outside
        assert_eq!(frame.get_pixel(320 + 121, 240), &Rgb([0, 0, 0]));
        assert_eq!(frame.get_pixel(320 + 100, 240 + 100), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_zero_hold_peaks_sharply() {
        let pattern = BreathingPattern::new(6.0, 0.0, 6.0).unwrap();
        let renderer = renderer(pattern);

        for step in 0..=480 {
            let t = step as f64 / 24.0;
            let circle = renderer.circle_at(t);
            assert!(circle.radius.is_finite());
            assert_ne!(circle.phase, Phase::Hold);
            assert_eq!(renderer.make_frame(t).get_pixel(0, 0), &Rgb([0, 0, 0]));
        }

        let peak = renderer.circle_at(6.0);
        assert_eq!(peak.phase, Phase::Exhale);
        assert_eq!(peak.radius, 120.0);
        assert_eq!(renderer.circle_at(18.0).radius, 120.0);
        assert!(renderer.circle_at(5.9).radius < 120.0);
        assert!(renderer.circle_at(6.1).radius < 120.0);
    }

    #[test]
    fn test_zero_length_inhale_starts_at_full_radius() {
        let pattern = BreathingPattern::new(0.0, 3.0, 3.0).unwrap();
        let circle = renderer(pattern).circle_at(0.0);
        assert_eq!(circle.phase, Phase::Hold);
        assert_eq!(circle.radius, 120.0);
    }

    #[test]
    fn test_empty_circle_leaves_only_center_pixel() {
        let colors = PhaseColors::default();
        let frame = renderer(BreathingPattern::default()).make_frame(0.0);

        assert_eq!(frame.get_pixel(320, 240), &Rgb(colors.inhale));
        let lit = frame.pixels().filter(|p| p.0 != [0, 0, 0]).count();
        assert_eq!(lit, 1);
    }
}
