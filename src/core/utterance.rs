//! Stress-group structure of an utterance.
//!
//! An utterance is an ordered run of stress groups (SGs), each a count of VV
//! units sharing one phrasal stress amplitude. Catalexis units trail the last
//! real group and are walked as a synthetic final group that inherits the last
//! amplitude but never takes part in resetting.

use crate::error::{ConfigError, ConfigResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StressGroup {
    pub size: u32,
    pub amplitude: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    groups: Vec<StressGroup>,
    catalexis: u32,
}

/// One group as seen by the integrator, including the synthetic catalexis group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub size: u32,
    pub amplitude: f64,
    /// Amplitude of the preceding group, or the resting value 1 for the first.
    pub amplitude_prev: f64,
    /// False for the catalexis group.
    pub resettable: bool,
}

impl Utterance {
    /// Builds an utterance from parallel size/amplitude sequences.
    ///
    /// Zero-sized groups and non-positive or non-finite amplitudes are rejected
    /// rather than allowed to degenerate silently.
    pub fn new(units_per_sg: &[u32], amplitudes: &[f64], catalexis: u32) -> ConfigResult<Self> {
        if units_per_sg.len() != amplitudes.len() {
            return Err(ConfigError::SizeMismatch {
                units: units_per_sg.len(),
                amplitudes: amplitudes.len(),
            });
        }
        if units_per_sg.is_empty() {
            return Err(ConfigError::EmptyUtterance);
        }
        let mut groups = Vec::with_capacity(units_per_sg.len());
        for (index, (&size, &amplitude)) in units_per_sg.iter().zip(amplitudes).enumerate() {
            if size == 0 {
                return Err(ConfigError::EmptyStressGroup { index });
            }
            if !amplitude.is_finite() || amplitude <= 0.0 {
                return Err(ConfigError::NonPositiveAmplitude {
                    index,
                    value: amplitude,
                });
            }
            groups.push(StressGroup { size, amplitude });
        }
        Ok(Self { groups, catalexis })
    }

    pub fn groups(&self) -> &[StressGroup] {
        &self.groups
    }

    pub fn catalexis(&self) -> u32 {
        self.catalexis
    }

    pub fn real_units(&self) -> usize {
        self.groups.iter().map(|g| g.size as usize).sum()
    }

    /// Real units plus catalexis units.
    pub fn total_units(&self) -> usize {
        self.real_units() + self.catalexis as usize
    }

    pub fn last_amplitude(&self) -> f64 {
        self.groups.last().map_or(1.0, |g| g.amplitude)
    }

    /// Groups in temporal order, with catalexis appended as a final
    /// non-resettable group when present.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let real = self.groups.iter().enumerate().map(|(i, g)| Segment {
            size: g.size,
            amplitude: g.amplitude,
            amplitude_prev: if i == 0 {
                1.0
            } else {
                self.groups[i - 1].amplitude
            },
            resettable: true,
        });
        let catalexis = (self.catalexis > 0).then(|| Segment {
            size: self.catalexis,
            amplitude: self.last_amplitude(),
            amplitude_prev: self.last_amplitude(),
            resettable: false,
        });
        real.chain(catalexis)
    }
}
