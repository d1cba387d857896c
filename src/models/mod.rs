//! Data model for link-quality analysis.
//!
//! Quality series and their named state constants, the link-day correlation
//! key, and the per-link-day report record produced by the analyzer.

pub mod quality;
pub mod report;

pub use quality::*;
pub use report::*;
