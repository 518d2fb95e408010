//! Tick synthesis for both axes.
//!
//! Major ticks sit on the boundary breakpoints themselves; minor ticks fill
//! the gap between two consecutive boundaries by walking the newer
//! boundary's subdivision step backward until it would cross the older
//! boundary. Tick computation is stateless; styling and primitive reuse are
//! backend concerns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::boundaries::{Boundary, BoundaryKind};
use crate::core::time_scale::TimeScale;
use crate::core::value_scale::ValueScale;

/// Labeled tick at a boundary breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorTick {
    pub offset: f64,
    pub at: DateTime<Utc>,
    pub label: String,
}

/// Horizontal axis geometry: labeled majors plus unlabeled minor offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    pub majors: Vec<MajorTick>,
    pub minor_offsets: Vec<f64>,
}

/// Unlabeled vertical-axis tick; label formatting is a caller concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YTick {
    pub offset: f64,
    pub value: f64,
}

/// Derives the horizontal axis from the boundary list and its scale.
#[must_use]
pub fn synthesize_x(boundaries: &[Boundary], scale: &TimeScale) -> XAxis {
    let mut majors = Vec::with_capacity(boundaries.len());
    let mut minor_offsets = Vec::new();

    for (index, boundary) in boundaries.iter().enumerate() {
        majors.push(MajorTick {
            offset: scale.time_to_pixel(boundary.at),
            at: boundary.at,
            label: boundary_label(boundary),
        });

        // Minor ticks fill the gap down to the previous boundary only, so
        // the oldest boundary and the synthetic Max contribute none.
        if index == 0 {
            continue;
        }
        let Some(step) = boundary.minor_step else {
            continue;
        };

        let floor = boundaries[index - 1].at;
        let mut tick = step.step_back(boundary.at);
        while tick > floor {
            minor_offsets.push(scale.time_to_pixel(tick));
            tick = step.step_back(tick);
        }
    }

    XAxis {
        majors,
        minor_offsets,
    }
}

/// Derives the vertical tick values and offsets.
#[must_use]
pub fn synthesize_y(scale: &ValueScale, count: usize) -> Vec<YTick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| YTick {
            offset: scale.value_to_pixel(value),
            value,
        })
        .collect()
}

fn boundary_label(boundary: &Boundary) -> String {
    match boundary.kind {
        BoundaryKind::Min => boundary.at.format("%Y-%m-%d").to_string(),
        BoundaryKind::Max => boundary.at.format("%H:%M:%S").to_string(),
        BoundaryKind::Span(key) => format!("-{key}"),
    }
}
