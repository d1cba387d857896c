//! Link-quality analysis algorithms.
//!
//! This module contains the scoring core of the reporting pipeline: windowed
//! minimum-score computation, blackout/brownout episode detection, duration
//! conversion, and the per-link-day orchestration that ties them together.
//!
//! Everything here is pure and synchronous. Data-shape irregularities (short
//! or empty series, empty reference lists) are documented boundary cases with
//! well-defined zero/`None` results; only contract violations — a zero window
//! size or a state value outside the quality domain — produce an error.

pub mod episodes;
pub mod link_day;
pub mod score;

pub use episodes::{detect_episodes, EpisodeMode, EpisodeTally};
pub use link_day::{analyze_day_payload, analyze_link_day, duration_minutes};
pub use score::windowed_min_score;

use crate::models::QualitySample;

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Contract-violation errors raised by the analyzer.
///
/// These signal programmer error at the call site, never bad tenant data:
/// malformed controller payloads are handled upstream in [`crate::parsing`],
/// and irregular series shapes are boundary cases, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzerError {
    /// The scoring window must hold at least one sample.
    #[error("scoring window must be at least one sample")]
    InvalidWindow,

    /// The requested state is outside the documented quality-state domain.
    #[error("state {0} is outside the quality-state domain {{0, 2, 3, 4}}")]
    InvalidState(QualitySample),
}
