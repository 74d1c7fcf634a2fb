//! Data shaping for COE charts.
//!
//! This crate turns fetched payloads into chart-ready structures:
//! client-side histogram binning, per-class scatter grouping, and the
//! ECharts option objects the renderer consumes.

pub mod histogram;
pub mod memo;
pub mod options;
pub mod scatter;

pub use histogram::{Histogram, DEFAULT_BIN_COUNT};
pub use memo::OptionMemo;
