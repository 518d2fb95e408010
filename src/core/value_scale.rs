use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::Sample;
use crate::error::{ChartError, ChartResult};

/// Default tick count for the vertical axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Linear vertical scale with an inverted pixel range.
///
/// The domain floor is pinned at 0; the upper bound is the data maximum
/// rounded outward to a nice value. Negative samples plot below the axis
/// line but never move the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    upper: f64,
    height: f64,
}

impl ValueScale {
    /// Fits the scale to the sample values and a drawable height.
    pub fn fit(samples: &[Sample], height: f64) -> ChartResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale height must be finite and > 0".to_owned(),
            ));
        }
        if samples.is_empty() {
            return Err(ChartError::EmptyInput);
        }

        for sample in samples {
            sample.validate()?;
        }
        let max_value = samples
            .iter()
            .map(|sample| OrderedFloat(sample.value))
            .max()
            .map_or(0.0, OrderedFloat::into_inner);

        // Flat-at-zero and all-negative data fall back to a unit domain
        // instead of degenerating.
        let upper = if max_value > 0.0 {
            nice_upper(max_value, DEFAULT_TICK_COUNT)
        } else {
            1.0
        };

        Ok(Self { upper, height })
    }

    #[must_use]
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        self.height - value / self.upper * self.height
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (0.0, self.upper)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Ascending nice tick values covering the domain, endpoints included.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = tick_step(self.upper, count);
        let last = (self.upper / step).round() as usize;
        (0..=last).map(|index| index as f64 * step).collect()
    }

}

/// Rounds `max_value` outward to a multiple of the nice tick step.
fn nice_upper(max_value: f64, count: usize) -> f64 {
    let step = tick_step(max_value, count);
    (max_value / step).ceil() * step
}

// 1-2-5 ladder tick stepping.
fn tick_step(span: f64, count: usize) -> f64 {
    let raw_step = span / count.max(1) as f64;
    let base = 10.0_f64.powf(raw_step.log10().floor());
    let residual = raw_step / base;

    let factor = if residual >= 50.0_f64.sqrt() {
        10.0
    } else if residual >= 10.0_f64.sqrt() {
        5.0
    } else if residual >= 2.0_f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * base
}
