//! # QOE Rust Backend
//!
//! Link-quality scoring engine for SD-WAN orchestrator reporting.
//!
//! This crate implements the analytical core of a reporting pipeline that polls
//! SD-WAN orchestrator ("VCO") endpoints and upserts per-tenant link metrics into
//! a relational warehouse. Given one day's series of discrete quality-state
//! samples for a link, it classifies runs of degraded samples into blackout and
//! brownout episodes, counts them, converts their durations to minutes, and
//! computes a windowed minimum quality score.
//!
//! ## Features
//!
//! - **Typed Data Model**: quality series, link-day keys, and report records
//! - **Episode Detection**: blackout/brownout streak detection over sample runs
//! - **Windowed Scoring**: minimum quality score over fixed-size sample windows
//! - **Payload Parsing**: typed deserialization of the orchestrator's
//!   link-quality-events JSON response
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: quality series, constants, keys, and report records
//! - [`analyzer`]: scoring and episode-detection algorithms plus the
//!   per-link-day orchestration
//! - [`parsing`]: raw orchestrator payload structures and series extraction
//!
//! The analyzer is pure and stateless: no I/O, no shared mutable state, fully
//! deterministic given its inputs. The surrounding pipeline (polling, retry,
//! persistence) lives outside this crate and may safely call the analyzer from
//! one worker thread per controller endpoint without synchronization.

pub mod analyzer;
pub mod models;
pub mod parsing;

pub use analyzer::{
    analyze_day_payload, analyze_link_day, detect_episodes, duration_minutes,
    windowed_min_score, AnalyzerError, EpisodeMode, EpisodeTally,
};
pub use models::{LinkDayKey, LinkQoeReport, QualitySample, QualitySeries};
pub use parsing::{parse_link_quality_events, LinkQualityEvents, LinkSeries};
