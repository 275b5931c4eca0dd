//! Breathing pattern and phase lookup.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

/// One of the three breathing phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Inhale => "inhale",
            Phase::Hold => "hold",
            Phase::Exhale => "exhale",
        };
        f.write_str(name)
    }
}

/// Current phase and fractional position (0..1) within it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    pub phase: Phase,
    pub progress: f64,
}

/// Inhale/hold/exhale durations (seconds)
///
/// Fields are private so a constructed pattern always has non-negative,
/// finite components and a positive cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreathingPattern {
    inhale_s: f64,
    hold_s: f64,
    exhale_s: f64,
}

impl Default for BreathingPattern {
    fn default() -> Self {
        Self::four_seven_eight()
    }
}

impl BreathingPattern {
    /// Create a validated pattern
    pub fn new(inhale_s: f64, hold_s: f64, exhale_s: f64) -> Result<Self, PatternError> {
        for (phase, value) in [("inhale", inhale_s), ("hold", hold_s), ("exhale", exhale_s)] {
            if !value.is_finite() {
                return Err(PatternError::NonFinite { phase, value });
            }
            if value < 0.0 {
                return Err(PatternError::NegativePhase { phase, value });
            }
        }
        if inhale_s + hold_s + exhale_s <= 0.0 {
            return Err(PatternError::EmptyCycle);
        }
        Ok(Self {
            inhale_s,
            hold_s,
            exhale_s,
        })
    }

    /// The classic 4-7-8 technique
    pub fn four_seven_eight() -> Self {
        Self {
            inhale_s: 4.0,
            hold_s: 7.0,
            exhale_s: 8.0,
        }
    }

    /// Even inhale/exhale split with no hold, paced at `bpm` breaths per minute
    pub fn from_bpm(bpm: f64) -> Result<Self, PatternError> {
        if !bpm.is_finite() || bpm <= 0.0 {
            return Err(PatternError::InvalidBpm(bpm));
        }
        let half_cycle = 60.0 / bpm / 2.0;
        Self::new(half_cycle, 0.0, half_cycle)
    }

    pub fn inhale_s(&self) -> f64 {
        self.inhale_s
    }

    pub fn hold_s(&self) -> f64 {
        self.hold_s
    }

    pub fn exhale_s(&self) -> f64 {
        self.exhale_s
    }

    /// Length of one inhale-hold-exhale repetition (seconds)
    pub fn cycle_duration(&self) -> f64 {
        self.inhale_s + self.hold_s + self.exhale_s
    }

    /// Number of complete cycles that fit in `total_s`
    pub fn cycles_in(&self, total_s: f64) -> usize {
        if total_s.is_nan() || total_s <= 0.0 {
            return 0;
        }
        (total_s / self.cycle_duration()).floor() as usize
    }

    /// Locate `time_s` within the cycle
    ///
    /// Every phase covers a half-open interval `[start, end)`, so a
    /// zero-length phase is never returned and `progress` never divides by
    /// zero. Negative times wrap around.
    pub fn phase_at(&self, time_s: f64) -> PhaseState {
        let cycle_progress = time_s.rem_euclid(self.cycle_duration());
        let hold_end = self.inhale_s + self.hold_s;

        if cycle_progress < self.inhale_s {
            PhaseState {
                phase: Phase::Inhale,
                progress: cycle_progress / self.inhale_s,
            }
        } else if cycle_progress < hold_end {
            PhaseState {
                phase: Phase::Hold,
                progress: (cycle_progress - self.inhale_s) / self.hold_s,
            }
        } else {
            // rem_euclid can round up to exactly the cycle length for tiny
            // negative inputs; clamp so progress stays within 0..=1.
            let progress = if self.exhale_s > 0.0 {
                ((cycle_progress - hold_end) / self.exhale_s).clamp(0.0, 1.0)
            } else {
                0.0
            };
            PhaseState {
                phase: Phase::Exhale,
                progress,
            }
        }
    }
}

impl FromStr for BreathingPattern {
    type Err = PatternError;

    /// Parse `"inhale,hold,exhale"`, e.g. `"4,7,8"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [inhale, hold, exhale] = parts[..] else {
            return Err(PatternError::Parse(s.to_string()));
        };
        let parse = |part: &str| {
            part.parse::<f64>()
                .map_err(|_| PatternError::Parse(s.to_string()))
        };
        Self::new(parse(inhale)?, parse(hold)?, parse(exhale)?)
    }
}

impl fmt::Display for BreathingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.inhale_s, self.hold_s, self.exhale_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_four_seven_eight() {
        let pattern = BreathingPattern::default();
        assert_eq!(pattern.inhale_s(), 4.0);
        assert_eq!(pattern.hold_s(), 7.0);
        assert_eq!(pattern.exhale_s(), 8.0);
        assert_eq!(pattern.cycle_duration(), 19.0);
        assert_eq!(pattern.to_string(), "4-7-8");
    }

    #[test]
    fn test_parse_pattern() {
        let pattern: BreathingPattern = "4, 7,8".parse().unwrap();
        assert_eq!(pattern, BreathingPattern::four_seven_eight());

        assert!(matches!(
            "4,7".parse::<BreathingPattern>(),
            Err(PatternError::Parse(_))
        ));
        assert!(matches!(
            "4,x,8".parse::<BreathingPattern>(),
            Err(PatternError::Parse(_))
        ));
        assert!(matches!(
            "4,7,8,9".parse::<BreathingPattern>(),
            Err(PatternError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_patterns() {
        assert_eq!(
            BreathingPattern::new(0.0, 0.0, 0.0),
            Err(PatternError::EmptyCycle)
        );
        assert!(matches!(
            BreathingPattern::new(4.0, -1.0, 8.0),
            Err(PatternError::NegativePhase { phase: "hold", .. })
        ));
        assert!(matches!(
            BreathingPattern::new(f64::NAN, 1.0, 1.0),
            Err(PatternError::NonFinite { phase: "inhale", .. })
        ));
        assert!(matches!(
            "-4,7,8".parse::<BreathingPattern>(),
            Err(PatternError::NegativePhase { .. })
        ));
    }

    #[test]
    fn test_from_bpm() {
        let pattern = BreathingPattern::from_bpm(6.0).unwrap();
        assert_eq!(pattern.cycle_duration(), 10.0);
        assert_eq!(pattern.inhale_s(), 5.0);
        assert_eq!(pattern.hold_s(), 0.0);
        assert_eq!(pattern.exhale_s(), 5.0);

        assert_eq!(
            BreathingPattern::from_bpm(0.0),
            Err(PatternError::InvalidBpm(0.0))
        );
    }

    #[test]
    fn test_cycles_in_drops_partial_cycle() {
        let pattern = BreathingPattern::default();
        assert_eq!(pattern.cycles_in(60.0), 3);
        assert_eq!(pattern.cycles_in(300.0), 15);
        assert_eq!(pattern.cycles_in(18.9), 0);
        assert_eq!(pattern.cycles_in(0.0), 0);
        assert_eq!(pattern.cycles_in(-5.0), 0);
    }

    #[test]
    fn test_phase_boundaries_are_half_open() {
        let pattern = BreathingPattern::default();

        let start = pattern.phase_at(0.0);
        assert_eq!(start.phase, Phase::Inhale);
        assert_eq!(start.progress, 0.0);

        assert_eq!(pattern.phase_at(2.0).progress, 0.5);
        assert_eq!(pattern.phase_at(4.0).phase, Phase::Hold);
        assert_eq!(pattern.phase_at(10.99).phase, Phase::Hold);

        let exhale = pattern.phase_at(11.0);
        assert_eq!(exhale.phase, Phase::Exhale);
        assert_eq!(exhale.progress, 0.0);
        assert_eq!(pattern.phase_at(15.0).progress, 0.5);

        // Wraps into the next cycle
        assert_eq!(pattern.phase_at(19.0).phase, Phase::Inhale);
        assert_eq!(pattern.phase_at(21.0).progress, 0.5);
    }

    #[test]
    fn test_zero_hold_never_entered() {
        let pattern = BreathingPattern::new(6.0, 0.0, 6.0).unwrap();
        for step in 0..240 {
            let state = pattern.phase_at(step as f64 * 0.1);
            assert_ne!(state.phase, Phase::Hold);
            assert!(state.progress.is_finite());
        }
        let boundary = pattern.phase_at(6.0);
        assert_eq!(boundary.phase, Phase::Exhale);
        assert_eq!(boundary.progress, 0.0);
    }

    #[test]
    fn test_zero_inhale_starts_in_hold() {
        let pattern = BreathingPattern::new(0.0, 2.0, 2.0).unwrap();
        let state = pattern.phase_at(0.0);
        assert_eq!(state.phase, Phase::Hold);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_negative_time_wraps() {
        let pattern = BreathingPattern::default();
        let state = pattern.phase_at(-1.0);
        assert_eq!(state.phase, Phase::Exhale);
        assert!((state.progress - 7.0 / 8.0).abs() < 1e-12);
    }
}
