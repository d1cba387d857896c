//! Typed parsing of orchestrator payloads.

pub mod link_quality;

pub use link_quality::{
    parse_link_quality_events, LinkQualityEvents, LinkSeries, OVERALL_LINK_QUALITY_KEY,
};
