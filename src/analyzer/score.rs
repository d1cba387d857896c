//! Windowed minimum quality score.

use crate::analyzer::{AnalyzerError, AnalyzerResult};
use crate::models::{QualitySeries, SCORE_WINDOW_DIVISOR, STATE_FAIR, STATE_GOOD};

/// Compute the minimum windowed quality score for a series.
///
/// The series is split into consecutive windows of `window` samples; the final
/// window may be shorter and is scored as-is, not discarded. Each window scores
/// `(count_of_good * 10 + count_of_fair * 5) / 8.0` — the divisor is the fixed
/// [`SCORE_WINDOW_DIVISOR`], not the actual window length, so a short trailing
/// window scores strictly lower than a full one with the same state mix. That
/// convention matches the warehouse history and must not be corrected here.
///
/// Returns `Ok(None)` for an empty series. A zero `window` is a contract
/// violation.
pub fn windowed_min_score(
    series: &QualitySeries,
    window: usize,
) -> AnalyzerResult<Option<f64>> {
    if window == 0 {
        return Err(AnalyzerError::InvalidWindow);
    }
    if series.is_empty() {
        return Ok(None);
    }

    let mut min_score: Option<f64> = None;
    for chunk in series.samples().chunks(window) {
        let good = chunk.iter().filter(|&&s| s == STATE_GOOD).count();
        let fair = chunk.iter().filter(|&&s| s == STATE_FAIR).count();
        let score = (good as f64 * 10.0 + fair as f64 * 5.0) / SCORE_WINDOW_DIVISOR;
        min_score = Some(match min_score {
            Some(current) if current <= score => current,
            _ => score,
        });
    }
    Ok(min_score)
}
