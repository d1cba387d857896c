//! Raw structures for the orchestrator's link-quality-events response.
//!
//! The `/linkQualityEvent/getLinkQualityEvents` call returns one object per
//! edge and day: a map keyed by link UUID (plus the `overallLinkQuality`
//! pseudo-entry) whose values carry an aggregate `totalScore` and a
//! `timeseries` of per-interval state maps keyed by traffic-class index.
//! Every field an entry might omit is an explicit `Option` or defaulted
//! collection here; a missing piece selects a documented fallback instead of
//! being probed with exception-as-control-flow.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{QualitySample, QualitySeries, NOMINAL_SAMPLES_PER_DAY};

/// Map key of the aggregate pseudo-link covering the whole edge.
pub const OVERALL_LINK_QUALITY_KEY: &str = "overallLinkQuality";

/// Link-UUID suffix under which the aggregate pseudo-link is persisted.
const OVERLAY_LINK_SUFFIX: &str = "OVERLAY";

/// Traffic-class index scored by the pipeline (voice).
const VOICE_TRAFFIC_CLASS: &str = "0";

/// Which side of the quality-event the per-interval state is read from.
///
/// Physical links report the relevant state under `before`; the aggregate
/// pseudo-link reports it under `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleSide {
    Before,
    After,
}

/// One per-interval entry of a link's timeseries.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTimeseriesEntry {
    /// Per-traffic-class state before SD-WAN remediation.
    #[serde(default)]
    pub before: Option<BTreeMap<String, QualitySample>>,
    /// Per-traffic-class state after SD-WAN remediation.
    #[serde(default)]
    pub after: Option<BTreeMap<String, QualitySample>>,
}

/// One link's (or the aggregate pseudo-link's) entry in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLinkQuality {
    /// Controller-computed aggregate score for the link-day. Absent entries
    /// are carried as `None`, not treated as an error.
    #[serde(rename = "totalScore")]
    pub total_score: Option<f64>,
    #[serde(default)]
    pub timeseries: Vec<RawTimeseriesEntry>,
}

/// Full link-quality-events response for one edge and one day.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkQualityEvents(pub BTreeMap<String, RawLinkQuality>);

/// Extracted voice-class series for one link, ready for analysis.
#[derive(Debug, Clone)]
pub struct LinkSeries {
    /// Link UUID, or `<edge_id>-OVERLAY` for the aggregate pseudo-link.
    pub link_id: String,
    /// Pass-through aggregate score, when the controller reported one.
    pub total_score: Option<f64>,
    pub series: QualitySeries,
}

impl LinkQualityEvents {
    /// Extract the voice-class quality series for every link in the payload.
    ///
    /// The aggregate `overallLinkQuality` entry maps to link UUID
    /// `<edge_id>-OVERLAY` and reads the `after` state; every other key is a
    /// physical link UUID and reads the `before` state. At most
    /// [`NOMINAL_SAMPLES_PER_DAY`] timeseries entries are consumed. Entries
    /// missing the state map or the voice-class value are skipped, which
    /// shortens the series rather than failing.
    pub fn link_series(&self, edge_id: &str) -> Vec<LinkSeries> {
        self.0
            .iter()
            .map(|(key, raw)| {
                let (link_id, side) = if key == OVERALL_LINK_QUALITY_KEY {
                    (format!("{edge_id}-{OVERLAY_LINK_SUFFIX}"), SampleSide::After)
                } else {
                    (key.clone(), SampleSide::Before)
                };
                LinkSeries {
                    link_id,
                    total_score: raw.total_score,
                    series: extract_voice_series(raw, side),
                }
            })
            .collect()
    }
}

fn extract_voice_series(raw: &RawLinkQuality, side: SampleSide) -> QualitySeries {
    let samples: Vec<QualitySample> = raw
        .timeseries
        .iter()
        .take(NOMINAL_SAMPLES_PER_DAY)
        .filter_map(|entry| {
            let state = match side {
                SampleSide::Before => entry.before.as_ref(),
                SampleSide::After => entry.after.as_ref(),
            };
            state.and_then(|classes| classes.get(VOICE_TRAFFIC_CLASS).copied())
        })
        .collect();
    QualitySeries::new(samples)
}

/// Parse a raw link-quality-events JSON document.
pub fn parse_link_quality_events(json: &str) -> Result<LinkQualityEvents> {
    serde_json::from_str(json).context("failed to parse link quality events payload")
}
