//! Blackout and brownout episode detection.
//!
//! One streak-detection algorithm parameterized by the state it watches for
//! transitions into: blackouts are transitions into the down state from any
//! reference position, brownouts are transitions from good into the degraded
//! state. The asymmetry is intentional domain semantics.

use crate::analyzer::{AnalyzerError, AnalyzerResult};
use crate::models::{
    QualitySample, QualitySeries, STATE_DEGRADED, STATE_DOWN, STATE_FAIR, STATE_GOOD,
};

/// Episode count and total duration in samples for one detection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpisodeTally {
    pub count: u32,
    pub duration_samples: u32,
}

impl EpisodeTally {
    /// Sum of two tallies. Blackout detection runs once per reference state
    /// and the per-pass results are summed into the link total.
    pub fn combined(self, other: EpisodeTally) -> EpisodeTally {
        EpisodeTally {
            count: self.count + other.count,
            duration_samples: self.duration_samples + other.duration_samples,
        }
    }
}

/// Episode counting mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EpisodeMode {
    /// Production-parity counting: every qualifying reference index starts a
    /// new episode, even when it leads into a run that an earlier reference
    /// index already counted. Adjacent reference positions ahead of one
    /// physical run therefore double-count it. This matches the numbers in
    /// the warehouse history.
    #[default]
    Overlapping,
    /// Corrected counting: a reference index whose transition sample falls
    /// inside an already-counted run is skipped, so each physical run is
    /// reported once. Opt-in; never used by the parity path.
    Distinct,
}

fn state_in_domain(state: QualitySample) -> bool {
    matches!(state, STATE_DOWN | STATE_DEGRADED | STATE_FAIR | STATE_GOOD)
}

/// Detect degradation episodes following the given reference positions.
///
/// `reference_indices` holds sample positions already known to equal some
/// specific state, in time order (typically from
/// [`QualitySeries::positions_of`]). For each reference index `i`:
///
/// 1. If `series[i + 1]` equals `degraded_state`, one episode starts there and
///    the transition sample counts one duration unit.
/// 2. If `series[i + 2]` also matches, the run is extended forward from
///    `i + 2` while samples keep matching, one duration unit per sample.
/// 3. Any out-of-bounds access means "no further degradation" — a boundary
///    policy, not an error. No reference index value can cause a panic.
///
/// A `degraded_state` outside the quality domain is a contract violation.
pub fn detect_episodes(
    reference_indices: &[usize],
    series: &QualitySeries,
    degraded_state: QualitySample,
    mode: EpisodeMode,
) -> AnalyzerResult<EpisodeTally> {
    if !state_in_domain(degraded_state) {
        return Err(AnalyzerError::InvalidState(degraded_state));
    }

    let mut tally = EpisodeTally::default();
    // Last sample index of the most recently counted run, for Distinct mode.
    let mut covered_until: Option<usize> = None;

    for &index in reference_indices {
        let start = index + 1;
        if series.get(start) != Some(degraded_state) {
            continue;
        }
        if mode == EpisodeMode::Distinct {
            if let Some(end) = covered_until {
                if start <= end {
                    continue;
                }
            }
        }

        tally.count += 1;
        tally.duration_samples += 1;
        let mut run_end = start;

        if series.get(index + 2) == Some(degraded_state) {
            let mut cursor = index + 2;
            while series.get(cursor) == Some(degraded_state) {
                tally.duration_samples += 1;
                run_end = cursor;
                cursor += 1;
            }
        }
        covered_until = Some(run_end);
    }

    Ok(tally)
}
