use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub drawable_width: f64,
    pub drawable_height: f64,
    /// Boundary span labels, oldest first (`min`/`max` for the synthetics).
    pub boundary_keys: Vec<String>,
    pub boundary_unix_seconds: Vec<f64>,
    /// Pixel offsets of the boundary breakpoints.
    pub scale_range: Vec<f64>,
    pub value_domain: (f64, f64),
    pub major_tick_labels: Vec<String>,
    pub minor_tick_offsets: Vec<f64>,
    pub total_samples: usize,
    pub visible_samples: usize,
    pub metadata: IndexMap<String, String>,
}
