//! timelog-chart: time-series line chart with a compressed-history time axis.
//!
//! The horizontal axis is non-uniform: recent data gets high temporal
//! resolution while older data collapses into wide calendar-aligned buckets
//! (year, month, week, day, hour, minute, second). The crate computes
//! boundary breakpoints, scales and tick geometry, and hands a rendering
//! backend one deterministic frame per update through the [`render::Renderer`]
//! contract.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, EngineSnapshot, ValueFormat};
pub use error::{ChartError, ChartResult};
