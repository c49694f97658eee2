//! Synchronicity profile: how strongly each VV unit is pulled toward its
//! neighbours.

use tracing::debug;

use crate::core::utterance::Utterance;

const LAST_UNIT_OFFSET: f64 = -5.81;
const LAST_UNIT_SLOPE_PER_MS: f64 = 0.016;

#[derive(Clone, Debug, PartialEq)]
pub struct SyncProfile {
    values: Vec<f64>,
}

impl SyncProfile {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

/// Sync of the closing unit of any multi-unit group (and of every 1-unit group).
/// Depends only on `w0` and the resting period in milliseconds.
#[inline]
pub fn last_unit_sync(w0: f64, t0: f64) -> f64 {
    w0 * (LAST_UNIT_OFFSET + LAST_UNIT_SLOPE_PER_MS * t0 * 1000.0).exp()
}

#[inline]
pub fn first_unit_sync(w0: f64, vvs: u32) -> f64 {
    w0 * (-(vvs as f64) + 2.0).exp()
}

#[inline]
fn interior_unit_sync(w0: f64, vvs: u32, position: u32, prev: f64) -> f64 {
    let decay = (-(vvs as f64) + (position - 1) as f64 + 2.0).exp();
    (1.0 - w0) * prev + w0 * decay
}

/// Builds the sync value of every unit, catalexis included.
///
/// The last-unit rule is tested before the first-unit rule, so a group of one
/// unit takes the last-unit value.
pub fn build_sync_profile(utterance: &Utterance, w0: f64, t0: f64) -> SyncProfile {
    let mut values = Vec::with_capacity(utterance.total_units());
    let last = last_unit_sync(w0, t0);

    for group in utterance.groups() {
        let vvs = group.size;
        for position in 1..=vvs {
            let sync = if position == vvs {
                last
            } else if position == 1 {
                first_unit_sync(w0, vvs)
            } else {
                // position > 1, so a previous unit always exists
                let prev = values.last().copied().unwrap_or(0.0);
                interior_unit_sync(w0, vvs, position, prev)
            };
            values.push(sync);
        }
    }

    if let Some(&tail) = values.last() {
        values.extend(std::iter::repeat_n(tail, utterance.catalexis() as usize));
    }

    debug!(
        units = values.len(),
        catalexis = utterance.catalexis(),
        "built sync profile"
    );
    SyncProfile { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn utt(units: &[u32], catalexis: u32) -> Utterance {
        let amps = vec![1.0; units.len()];
        Utterance::new(units, &amps, catalexis).unwrap()
    }

    #[test]
    fn default_group_matches_reference_values() {
        let profile = build_sync_profile(&utt(&[4, 4], 0), 0.78, 0.165);
        let expected = [
            0.10556152092455791,
            0.3101694987171278,
            0.8482372897177681,
            0.03276280636468755,
        ];
        assert_eq!(profile.len(), 8);
        for (i, &e) in expected.iter().enumerate() {
            assert_relative_eq!(profile.as_slice()[i], e, max_relative = 1e-12);
            assert_relative_eq!(profile.as_slice()[i + 4], e, max_relative = 1e-12);
        }
    }

    #[test]
    fn single_unit_group_uses_last_unit_rule() {
        let w0 = 0.6;
        let t0 = 0.2;
        let profile = build_sync_profile(&utt(&[1, 3, 1], 0), w0, t0);
        let last = last_unit_sync(w0, t0);
        assert_eq!(profile.as_slice()[0], last);
        assert_eq!(profile.as_slice()[4], last);
        assert_ne!(profile.as_slice()[0], first_unit_sync(w0, 1));
    }

    #[test]
    fn interior_units_blend_previous_value() {
        let w0 = 0.5;
        let profile = build_sync_profile(&utt(&[5], 0), w0, 0.165);
        let s = profile.as_slice();
        assert_eq!(s[0], first_unit_sync(w0, 5));
        for p in 2..5u32 {
            let i = (p - 1) as usize;
            let expected = (1.0 - w0) * s[i - 1] + w0 * (-5.0 + (p - 1) as f64 + 2.0).exp();
            assert_relative_eq!(s[i], expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn catalexis_repeats_final_value() {
        let profile = build_sync_profile(&utt(&[4, 2], 3), 0.78, 0.165);
        let s = profile.as_slice();
        assert_eq!(s.len(), 9);
        let last_real = s[5];
        assert!(s[6..].iter().all(|&v| v == last_real));
    }

    #[test]
    fn zero_coupling_gives_flat_zero_profile() {
        let profile = build_sync_profile(&utt(&[3, 2], 1), 0.0, 0.165);
        assert!(profile.as_slice().iter().all(|&v| v == 0.0));
    }
}
