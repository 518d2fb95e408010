//! Boundary generation for the compressed time axis.
//!
//! Walks the bucket catalog from coarsest to finest and keeps every bucket
//! whose boundary (newest sample time minus the bucket span) still falls
//! inside the data range. The walk stops at the configured minimum
//! granularity, which bounds how fine the finest visible bucket may be
//! regardless of data density.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::intervals::{CATALOG, CalendarStep, resolve_key};
use crate::core::types::Sample;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoundaryKind {
    /// Calendar bucket boundary, tagged with the catalog span label.
    Span(&'static str),
    /// Fallback lower bound when no calendar boundary fits the range.
    Min,
    /// Upper bound, anchored at the newest sample time.
    Max,
}

/// One domain breakpoint of the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Boundary {
    pub kind: BoundaryKind,
    pub at: DateTime<Utc>,
    /// Subdivision step for minor ticks in the gap below this boundary.
    /// Synthetic boundaries carry none.
    pub minor_step: Option<CalendarStep>,
}

impl Boundary {
    #[must_use]
    pub fn label_key(&self) -> String {
        match self.kind {
            BoundaryKind::Span(key) => key.to_owned(),
            BoundaryKind::Min => "min".to_owned(),
            BoundaryKind::Max => "max".to_owned(),
        }
    }
}

/// Generates the ordered boundary list for a sample set.
///
/// The result always ends with a `Max` boundary at the newest sample time
/// and has at least two entries. Entries ascend by time; with a single
/// sample (or all-equal times) the fallback `Min` and the `Max` boundary
/// coincide and callers must tolerate the zero-width segment.
pub fn generate(samples: &[Sample], min_interval: &str) -> ChartResult<Vec<Boundary>> {
    let stop_index = resolve_key(min_interval)?;

    if samples.is_empty() {
        return Err(ChartError::EmptyInput);
    }

    let mut min_time = samples[0].time;
    let mut max_time = samples[0].time;
    for sample in &samples[1..] {
        min_time = min_time.min(sample.time);
        max_time = max_time.max(sample.time);
    }

    let mut boundaries = Vec::with_capacity(stop_index + 2);

    // Every candidate measures from max_time, not from the previous
    // boundary; the `> min_time` filter is the only admission control.
    for def in &CATALOG[..=stop_index] {
        let candidate = def.major.step_back(max_time);
        if candidate > min_time {
            boundaries.push(Boundary {
                kind: BoundaryKind::Span(def.key),
                at: candidate,
                minor_step: Some(def.minor),
            });
        }
    }

    if boundaries.is_empty() {
        boundaries.push(Boundary {
            kind: BoundaryKind::Min,
            at: min_time,
            minor_step: None,
        });
    }

    boundaries.push(Boundary {
        kind: BoundaryKind::Max,
        at: max_time,
        minor_step: None,
    });

    Ok(boundaries)
}
