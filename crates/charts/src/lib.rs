//! The chart library of the stronger fitness tracker.
//!
//! It reshapes the metric payloads served by the stronger backend into
//! renderer-ready chart configurations and writes them into standalone
//! HTML report pages.

pub mod build;
pub mod chart;
pub mod error;
pub mod fallback;
pub mod payload;
pub mod report;
pub mod series;
