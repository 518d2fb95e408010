use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::boundaries::Boundary;
use crate::core::primitives::datetime_to_unix_seconds;
use crate::error::{ChartError, ChartResult};

/// Non-uniform horizontal scale over the boundary breakpoints.
///
/// The domain holds the boundary instants (unix seconds, ascending); the
/// range pins the oldest boundary to pixel 0 and the newest to the full
/// width, spreading interior breakpoints by a power law that compresses old
/// buckets and widens recent ones. Between adjacent breakpoints the mapping
/// interpolates linearly, which keeps calendar-aligned tick placement exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    domain: Vec<f64>,
    range: Vec<f64>,
}

impl TimeScale {
    /// Builds the scale from an ordered boundary list and a pixel width.
    pub fn build(boundaries: &[Boundary], width: f64) -> ChartResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale width must be finite and > 0".to_owned(),
            ));
        }
        if boundaries.len() < 2 {
            return Err(ChartError::InvalidData(
                "scale needs at least two boundaries".to_owned(),
            ));
        }

        let domain: Vec<f64> = boundaries
            .iter()
            .map(|boundary| datetime_to_unix_seconds(boundary.at))
            .collect();

        for pair in domain.windows(2) {
            if pair[1] < pair[0] {
                return Err(ChartError::InvalidData(
                    "boundary times must be ascending".to_owned(),
                ));
            }
        }

        let count = domain.len();
        let range = (0..count)
            .map(|index| spread_offset(index, count, width))
            .collect();

        Ok(Self { domain, range })
    }

    /// Maps an instant to its pixel offset.
    ///
    /// Instants outside the domain extrapolate along the slope of the edge
    /// segment; zero-width segments map to the segment's left offset, so
    /// degenerate single-sample domains stay NaN-free.
    #[must_use]
    pub fn time_to_pixel(&self, time: DateTime<Utc>) -> f64 {
        self.offset_for(datetime_to_unix_seconds(time))
    }

    #[must_use]
    pub fn offset_for(&self, unix_seconds: f64) -> f64 {
        let count = self.domain.len();
        let segment = match self.domain.partition_point(|&d| d <= unix_seconds) {
            0 => 0,
            upper => (upper - 1).min(count - 2),
        };

        let (d0, d1) = (self.domain[segment], self.domain[segment + 1]);
        let (r0, r1) = (self.range[segment], self.range[segment + 1]);

        if d1 == d0 {
            return r0;
        }
        // Symmetric lerp so exact domain endpoints hit exact range offsets.
        let t = (unix_seconds - d0) / (d1 - d0);
        (1.0 - t) * r0 + t * r1
    }

    #[must_use]
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> &[f64] {
        &self.range
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        *self.range.last().unwrap_or(&0.0)
    }
}

// Interior breakpoint i of n lands at width^((i/n)^(1/n)); the exponent
// approaches 1 as i grows, pushing recent breakpoints toward the right edge.
fn spread_offset(index: usize, count: usize, width: f64) -> f64 {
    if index == 0 {
        return 0.0;
    }
    if index == count - 1 {
        return width;
    }

    let position = index as f64 / count as f64;
    width.powf(position.powf(1.0 / count as f64))
}
