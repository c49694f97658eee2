//! Entrainment integrator.
//!
//! Walks the utterance unit by unit. Each period drifts by an entrainment term
//! scaled by the unit's sync and its group's amplitude; inside the reset window
//! at the start of every real group it is also pulled back toward `t0`.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::core::sync::SyncProfile;
use crate::core::utterance::Utterance;
use crate::error::{ConfigError, ConfigResult};

const FIXED_RESET_WINDOW: u32 = 2;
const VARIABLE_RESET_FRACTION: f64 = 0.7;
const SEED_PERIOD_FACTOR: f64 = 7.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResettingMode {
    #[default]
    Fixed,
    Variable,
}

impl ResettingMode {
    pub const ALL: [ResettingMode; 2] = [ResettingMode::Fixed, ResettingMode::Variable];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Variable => "variable",
        }
    }

    /// Number of leading positions of a real group that receive resetting.
    ///
    /// The variable window rounds half to even: a 5-unit group gets 4, a
    /// 15-unit group gets 10.
    pub fn reset_window_length(self, group_size: u32) -> u32 {
        match self {
            Self::Fixed => FIXED_RESET_WINDOW,
            Self::Variable => {
                (VARIABLE_RESET_FRACTION * group_size as f64).round_ties_even() as u32
            }
        }
    }
}

impl fmt::Display for ResettingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResettingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "variable" => Ok(Self::Variable),
            other => Err(ConfigError::InvalidResettingMode(other.to_string())),
        }
    }
}

/// Validated oscillator parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OscillatorParams {
    /// Entrainment rate.
    pub alpha: f64,
    /// Decay rate of the reset pull.
    pub beta: f64,
    /// Coupling strength, in practice within [0, 1].
    pub w0: f64,
    /// Resting period in seconds.
    pub t0: f64,
    pub resetting: ResettingMode,
}

impl Default for OscillatorParams {
    fn default() -> Self {
        Self {
            alpha: 0.4,
            beta: 1.1,
            w0: 0.78,
            t0: 0.165,
            resetting: ResettingMode::Fixed,
        }
    }
}

impl OscillatorParams {
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("w0", self.w0),
            ("t0", self.t0),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        if self.t0 <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "t0",
                value: self.t0,
            });
        }
        Ok(())
    }

    pub fn with_resetting(self, resetting: ResettingMode) -> Self {
        Self { resetting, ..self }
    }

    /// Period preceding the first unit of an utterance.
    pub fn seed_duration(&self) -> f64 {
        if self.w0 == 0.0 {
            self.t0
        } else {
            SEED_PERIOD_FACTOR * self.t0 * self.t0
        }
    }
}

/// Integrates the period of every unit, left to right.
///
/// `sync` must come from the same utterance; the loop reads index `i` of it
/// and nothing beyond.
pub fn integrate_durations(
    sync: &SyncProfile,
    utterance: &Utterance,
    params: &OscillatorParams,
) -> Vec<f64> {
    let sync = sync.as_slice();
    debug_assert_eq!(sync.len(), utterance.total_units());

    let mut durations = Vec::with_capacity(utterance.total_units());
    let mut prev = params.seed_duration();
    let mut unit = 0usize;

    for segment in utterance.segments() {
        let window = params.resetting.reset_window_length(segment.size);
        for position in 1..=segment.size {
            let mut delta = params.alpha * prev * sync[unit] * segment.amplitude;
            if segment.resettable && position <= window {
                delta += -params.beta * (prev - params.t0) * segment.amplitude_prev;
            }
            let duration = prev + delta;
            durations.push(duration);
            prev = duration;
            unit += 1;
        }
    }

    debug!(
        units = durations.len(),
        resetting = %params.resetting,
        "integrated durations"
    );
    durations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sync::build_sync_profile;
    use approx::assert_relative_eq;

    #[test]
    fn parses_known_modes_only() {
        assert_eq!("fixed".parse::<ResettingMode>(), Ok(ResettingMode::Fixed));
        assert_eq!(
            "variable".parse::<ResettingMode>(),
            Ok(ResettingMode::Variable)
        );
        assert_eq!(
            "Fixed".parse::<ResettingMode>(),
            Err(ConfigError::InvalidResettingMode("Fixed".to_string()))
        );
        assert!("".parse::<ResettingMode>().is_err());
    }

    #[test]
    fn reset_window_lengths() {
        assert_eq!(ResettingMode::Fixed.reset_window_length(9), 2);
        assert_eq!(ResettingMode::Variable.reset_window_length(1), 1);
        assert_eq!(ResettingMode::Variable.reset_window_length(3), 2);
        assert_eq!(ResettingMode::Variable.reset_window_length(4), 3);
        assert_eq!(ResettingMode::Variable.reset_window_length(5), 4);
        assert_eq!(ResettingMode::Variable.reset_window_length(15), 10);
    }

    #[test]
    fn seed_depends_on_coupling() {
        let p = OscillatorParams::default();
        assert_relative_eq!(p.seed_duration(), 7.0 * 0.165 * 0.165);
        let uncoupled = OscillatorParams { w0: 0.0, ..p };
        assert_eq!(uncoupled.seed_duration(), 0.165);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let p = OscillatorParams::default();
        assert!(p.validate().is_ok());
        assert_eq!(
            OscillatorParams { t0: 0.0, ..p }.validate(),
            Err(ConfigError::InvalidParameter {
                name: "t0",
                value: 0.0
            })
        );
        assert!(matches!(
            OscillatorParams {
                alpha: f64::INFINITY,
                ..p
            }
            .validate(),
            Err(ConfigError::InvalidParameter { name: "alpha", .. })
        ));
    }

    #[test]
    fn units_past_window_only_drift() {
        let utt = Utterance::new(&[4], &[0.8], 0).unwrap();
        let params = OscillatorParams::default();
        let sync = build_sync_profile(&utt, params.w0, params.t0);
        let d = integrate_durations(&sync, &utt, &params);
        for i in 2..4 {
            let expected = d[i - 1] + params.alpha * d[i - 1] * sync.as_slice()[i] * 0.8;
            assert_relative_eq!(d[i], expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn resting_oscillator_without_coupling_stays_at_rest() {
        let utt = Utterance::new(&[3, 5], &[0.5, 2.0], 2).unwrap();
        let params = OscillatorParams {
            w0: 0.0,
            ..OscillatorParams::default()
        };
        let sync = build_sync_profile(&utt, params.w0, params.t0);
        let d = integrate_durations(&sync, &utt, &params);
        assert_eq!(d.len(), 10);
        assert!(d.iter().all(|&v| v == params.t0));
    }
}
