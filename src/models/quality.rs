use serde::{Deserialize, Serialize};

/// Quality-state value for one sample slot, as reported by the orchestrator.
///
/// Documented domain: 4 = good, 3 = fair, 2 = degraded, 0 = down. Links on 3.x
/// firmware may additionally report intermediate values; anything outside the
/// documented domain is carried through unchanged and scores as neutral (it is
/// neither counted toward the window score nor treated as degraded). That is a
/// quirk of the production scoring convention and is preserved deliberately.
pub type QualitySample = i64;

/// Link is down.
pub const STATE_DOWN: QualitySample = 0;
/// Link quality is degraded (voice traffic impaired).
pub const STATE_DEGRADED: QualitySample = 2;
/// Link quality is fair.
pub const STATE_FAIR: QualitySample = 3;
/// Link quality is good.
pub const STATE_GOOD: QualitySample = 4;

/// Minutes represented by one series position.
///
/// Derived from the controller's fixed collection window: 24 hours sampled as
/// [`NOMINAL_SAMPLES_PER_DAY`] slots. The value must stay exactly `7.12` for
/// output parity with the warehouse history.
pub const SAMPLE_INTERVAL_MINUTES: f64 = 7.12;

/// Number of samples per scoring window (~one hour of data).
pub const SCORE_WINDOW: usize = 8;

/// Fixed divisor applied to every window score.
///
/// Stays `8.0` even for a short trailing window, so a partial window scores
/// strictly lower than a full window with the same state mix. Existing scoring
/// convention, preserved for parity.
pub const SCORE_WINDOW_DIVISOR: f64 = 8.0;

/// Sample count of a full 24-hour controller collection window.
pub const NOMINAL_SAMPLES_PER_DAY: usize = 200;

/// Ordered quality-state samples for one (edge, link, day).
///
/// Position is the time index; samples are one fixed interval apart and carry
/// no per-sample timestamps. A full day holds [`NOMINAL_SAMPLES_PER_DAY`]
/// samples, but the controller may return fewer — the length is never assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitySeries(Vec<QualitySample>);

impl QualitySeries {
    /// Create a series from raw samples.
    pub fn new(samples: Vec<QualitySample>) -> Self {
        Self(samples)
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sample at the given time index, if in bounds.
    pub fn get(&self, index: usize) -> Option<QualitySample> {
        self.0.get(index).copied()
    }

    /// Raw sample slice.
    pub fn samples(&self) -> &[QualitySample] {
        &self.0
    }

    /// Positions of every sample equal to `state`, in time order.
    pub fn positions_of(&self, state: QualitySample) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == state)
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<Vec<QualitySample>> for QualitySeries {
    fn from(samples: Vec<QualitySample>) -> Self {
        Self::new(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_of() {
        let series = QualitySeries::new(vec![4, 2, 2, 3, 4]);
        assert_eq!(series.positions_of(STATE_GOOD), vec![0, 4]);
        assert_eq!(series.positions_of(STATE_DEGRADED), vec![1, 2]);
        assert_eq!(series.positions_of(STATE_FAIR), vec![3]);
        assert_eq!(series.positions_of(STATE_DOWN), Vec::<usize>::new());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let series = QualitySeries::new(vec![4, 4]);
        assert_eq!(series.get(1), Some(4));
        assert_eq!(series.get(2), None);
    }

    #[test]
    fn test_empty_series() {
        let series = QualitySeries::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert_eq!(series.positions_of(STATE_GOOD), Vec::<usize>::new());
    }

    #[test]
    fn test_out_of_domain_samples_preserved() {
        // 3.x firmware can report intermediate values; they are kept as-is.
        let series = QualitySeries::new(vec![4, 1, 5, 4]);
        assert_eq!(series.samples(), &[4, 1, 5, 4]);
        assert_eq!(series.positions_of(1), vec![1]);
    }
}
