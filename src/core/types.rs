use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One observation of the charted series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }

    pub fn from_decimal(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            time,
            value: decimal_to_f64(value, "value")?,
        })
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidData(
                "sample value must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
