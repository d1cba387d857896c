use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Correlation key for one analyzed (edge, link, day) tuple.
///
/// Threaded through log lines so that every message can be traced back to the
/// tenant data it concerns, instead of relying on process-wide named loggers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkDayKey {
    /// Logical edge identifier from the orchestrator inventory.
    pub edge_id: String,
    /// Link UUID, or `<edge_id>-OVERLAY` for the aggregate pseudo-link.
    pub link_id: String,
    /// Day covered by the series (start of the 24-hour collection window).
    pub date: NaiveDate,
}

impl LinkDayKey {
    pub fn new(edge_id: impl Into<String>, link_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            edge_id: edge_id.into(),
            link_id: link_id.into(),
            date,
        }
    }
}

impl fmt::Display for LinkDayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.edge_id, self.link_id, self.date)
    }
}

/// Analyzer output for one link-day.
///
/// Produced fresh on every analysis call and never mutated afterwards. The
/// reporting pipeline persists one such record per (edge, link, day) with
/// upsert-on-conflict semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkQoeReport {
    /// Minimum windowed quality score across the day. `None` only when the
    /// input series was empty.
    pub window_min_score: Option<f64>,
    /// Number of detected blackout episodes (drops into the down state).
    pub blackout_count: u32,
    /// Total blackout duration in minutes, rounded to 3 decimal places.
    pub blackout_duration_minutes: f64,
    /// Number of detected brownout episodes (drops from good to degraded).
    pub brownout_count: u32,
    /// Total brownout duration in minutes, rounded to 3 decimal places.
    pub brownout_duration_minutes: f64,
    /// Controller-reported aggregate score for the link-day, passed through
    /// unchanged. Absent when the controller omitted it.
    pub total_score: Option<f64>,
}
