//! Per-link-day orchestration of the scoring algorithms.

use chrono::NaiveDate;
use log::debug;

use crate::analyzer::episodes::{detect_episodes, EpisodeMode, EpisodeTally};
use crate::analyzer::score::windowed_min_score;
use crate::analyzer::AnalyzerResult;
use crate::models::{
    LinkDayKey, LinkQoeReport, QualitySeries, SAMPLE_INTERVAL_MINUTES, SCORE_WINDOW,
    STATE_DEGRADED, STATE_DOWN, STATE_FAIR, STATE_GOOD,
};
use crate::parsing::LinkQualityEvents;

/// Convert an episode duration from samples to minutes.
///
/// `samples * SAMPLE_INTERVAL_MINUTES / 60`, rounded to 3 decimal places.
/// An exact zero stays `0.0`.
pub fn duration_minutes(samples: u32) -> f64 {
    let minutes = samples as f64 * SAMPLE_INTERVAL_MINUTES / 60.0;
    (minutes * 1000.0).round() / 1000.0
}

/// Analyze one link's series for one day.
///
/// Computes the windowed minimum score, runs blackout detection from the
/// fair, degraded, and good reference positions (summed into the link total),
/// runs brownout detection from the good positions only, and converts the
/// episode durations to minutes. Brownouts are only measured as degradation
/// from good quality while blackouts are measured as drops into the down
/// state from any prior state; that asymmetry is intentional.
///
/// `total_score` is the controller-reported aggregate for the link-day and is
/// passed through unchanged.
pub fn analyze_link_day(
    key: &LinkDayKey,
    series: &QualitySeries,
    total_score: Option<f64>,
    mode: EpisodeMode,
) -> AnalyzerResult<LinkQoeReport> {
    let window_min_score = windowed_min_score(series, SCORE_WINDOW)?;

    let at_degraded = series.positions_of(STATE_DEGRADED);
    let at_fair = series.positions_of(STATE_FAIR);
    let at_good = series.positions_of(STATE_GOOD);

    let mut blackouts = EpisodeTally::default();
    for references in [&at_fair, &at_degraded, &at_good] {
        if references.is_empty() {
            continue;
        }
        blackouts = blackouts.combined(detect_episodes(references, series, STATE_DOWN, mode)?);
    }

    let brownouts = if at_good.is_empty() {
        EpisodeTally::default()
    } else {
        detect_episodes(&at_good, series, STATE_DEGRADED, mode)?
    };

    debug!(
        "{key}: samples={} min_score={:?} blackouts={}x{} brownouts={}x{}",
        series.len(),
        window_min_score,
        blackouts.count,
        blackouts.duration_samples,
        brownouts.count,
        brownouts.duration_samples,
    );

    Ok(LinkQoeReport {
        window_min_score,
        blackout_count: blackouts.count,
        blackout_duration_minutes: duration_minutes(blackouts.duration_samples),
        brownout_count: brownouts.count,
        brownout_duration_minutes: duration_minutes(brownouts.duration_samples),
        total_score,
    })
}

/// Analyze every link in one day's link-quality-events payload.
///
/// Extracts the per-link voice-class series from the parsed payload and runs
/// [`analyze_link_day`] for each, returning one report per link keyed by
/// (edge, link, day). This is the seam the polling pipeline calls once per
/// edge per day that needs (re)computation.
pub fn analyze_day_payload(
    edge_id: &str,
    date: NaiveDate,
    payload: &LinkQualityEvents,
    mode: EpisodeMode,
) -> AnalyzerResult<Vec<(LinkDayKey, LinkQoeReport)>> {
    let mut reports = Vec::new();
    for link in payload.link_series(edge_id) {
        let key = LinkDayKey::new(edge_id, link.link_id, date);
        let report = analyze_link_day(&key, &link.series, link.total_score, mode)?;
        reports.push((key, report));
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> LinkDayKey {
        LinkDayKey::new(
            "edge-1",
            "link-a",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        )
    }

    #[test]
    fn test_duration_minutes_rounding() {
        assert_eq!(duration_minutes(0), 0.0);
        assert_eq!(duration_minutes(1), 0.119);
        assert_eq!(duration_minutes(2), 0.237);
        assert_eq!(duration_minutes(3), 0.356);
        // Full day of degradation: 200 * 7.12 / 60.
        assert_eq!(duration_minutes(200), 23.733);
    }

    #[test]
    fn test_clean_day_has_no_episodes() {
        let series = QualitySeries::new(vec![4; 8]);
        let report =
            analyze_link_day(&test_key(), &series, Some(10.0), EpisodeMode::Overlapping).unwrap();

        assert_eq!(report.window_min_score, Some(10.0));
        assert_eq!(report.blackout_count, 0);
        assert_eq!(report.blackout_duration_minutes, 0.0);
        assert_eq!(report.brownout_count, 0);
        assert_eq!(report.brownout_duration_minutes, 0.0);
        assert_eq!(report.total_score, Some(10.0));
    }

    #[test]
    fn test_brownout_from_good() {
        let series = QualitySeries::new(vec![4, 2, 2, 4, 4, 4, 4, 4]);
        let report =
            analyze_link_day(&test_key(), &series, None, EpisodeMode::Overlapping).unwrap();

        assert_eq!(report.brownout_count, 1);
        assert_eq!(report.brownout_duration_minutes, 0.237);
        assert_eq!(report.blackout_count, 0);
        assert_eq!(report.window_min_score, Some(7.5));
    }

    #[test]
    fn test_blackout_from_fair() {
        let series = QualitySeries::new(vec![3, 0, 0, 0, 4]);
        let report =
            analyze_link_day(&test_key(), &series, Some(3.2), EpisodeMode::Overlapping).unwrap();

        assert_eq!(report.blackout_count, 1);
        assert_eq!(report.blackout_duration_minutes, 0.356);
        assert_eq!(report.brownout_count, 0);
        assert_eq!(report.total_score, Some(3.2));
    }

    #[test]
    fn test_blackout_passes_are_summed() {
        // Down runs after a fair, a degraded, and a good sample each.
        let series = QualitySeries::new(vec![3, 0, 2, 0, 4, 0]);
        let report =
            analyze_link_day(&test_key(), &series, None, EpisodeMode::Overlapping).unwrap();

        assert_eq!(report.blackout_count, 3);
        assert_eq!(report.blackout_duration_minutes, duration_minutes(3));
    }

    #[test]
    fn test_empty_series_report() {
        let series = QualitySeries::default();
        let report =
            analyze_link_day(&test_key(), &series, None, EpisodeMode::Overlapping).unwrap();

        assert_eq!(report.window_min_score, None);
        assert_eq!(report.blackout_count, 0);
        assert_eq!(report.blackout_duration_minutes, 0.0);
        assert_eq!(report.brownout_count, 0);
        assert_eq!(report.brownout_duration_minutes, 0.0);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let series = QualitySeries::new(vec![4, 2, 0, 0, 3, 4, 4, 2, 2, 4]);
        let first =
            analyze_link_day(&test_key(), &series, Some(6.1), EpisodeMode::Overlapping).unwrap();
        let second =
            analyze_link_day(&test_key(), &series, Some(6.1), EpisodeMode::Overlapping).unwrap();
        assert_eq!(first, second);
    }
}
