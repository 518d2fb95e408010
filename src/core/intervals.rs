//! The calendar bucket catalog behind the compressed time axis.
//!
//! Buckets are ordered coarsest to finest. Each entry steps a reference
//! instant backward by its span (major boundaries) and by its subdivision
//! span (minor ticks inside the bucket). The catalog is a process-wide
//! constant; all stepping is pure.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// Backward step of `count` calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarStep {
    pub unit: CalendarUnit,
    pub count: u32,
}

impl CalendarStep {
    #[must_use]
    pub const fn new(unit: CalendarUnit, count: u32) -> Self {
        Self { unit, count }
    }

    /// Steps `time` backward by this span.
    ///
    /// Month and year steps use calendar month arithmetic, so the
    /// day-of-month clamps at shorter target months. Saturates at the
    /// earliest representable instant instead of overflowing.
    #[must_use]
    pub fn step_back(self, time: DateTime<Utc>) -> DateTime<Utc> {
        let stepped = match self.unit {
            CalendarUnit::Year => time.checked_sub_months(Months::new(12 * self.count)),
            CalendarUnit::Month => time.checked_sub_months(Months::new(self.count)),
            CalendarUnit::Week => time.checked_sub_signed(Duration::weeks(i64::from(self.count))),
            CalendarUnit::Day => time.checked_sub_signed(Duration::days(i64::from(self.count))),
            CalendarUnit::Hour => time.checked_sub_signed(Duration::hours(i64::from(self.count))),
            CalendarUnit::Minute => {
                time.checked_sub_signed(Duration::minutes(i64::from(self.count)))
            }
            CalendarUnit::Second => {
                time.checked_sub_signed(Duration::seconds(i64::from(self.count)))
            }
        };
        stepped.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// One bucket of the catalog: a span label, the major boundary step and the
/// subdivision step used for minor ticks inside the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalDef {
    pub key: &'static str,
    pub major: CalendarStep,
    pub minor: CalendarStep,
}

impl IntervalDef {
    const fn new(key: &'static str, major: CalendarStep, minor: CalendarStep) -> Self {
        Self { key, major, minor }
    }
}

const fn step(unit: CalendarUnit, count: u32) -> CalendarStep {
    CalendarStep::new(unit, count)
}

/// Bucket catalog, coarsest to finest. The finest buckets subdivide by their
/// own span, so their minor ticks coincide with major boundaries.
pub const CATALOG: [IntervalDef; 14] = [
    IntervalDef::new("1y", step(CalendarUnit::Year, 1), step(CalendarUnit::Month, 1)),
    IntervalDef::new("3m", step(CalendarUnit::Month, 3), step(CalendarUnit::Month, 1)),
    IntervalDef::new("1m", step(CalendarUnit::Month, 1), step(CalendarUnit::Day, 1)),
    IntervalDef::new("1w", step(CalendarUnit::Week, 1), step(CalendarUnit::Day, 1)),
    IntervalDef::new("3d", step(CalendarUnit::Day, 3), step(CalendarUnit::Day, 1)),
    IntervalDef::new("1d", step(CalendarUnit::Day, 1), step(CalendarUnit::Day, 1)),
    IntervalDef::new("12h", step(CalendarUnit::Hour, 12), step(CalendarUnit::Hour, 1)),
    IntervalDef::new("6h", step(CalendarUnit::Hour, 6), step(CalendarUnit::Hour, 1)),
    IntervalDef::new("3h", step(CalendarUnit::Hour, 3), step(CalendarUnit::Hour, 1)),
    IntervalDef::new("1h", step(CalendarUnit::Hour, 1), step(CalendarUnit::Hour, 1)),
    IntervalDef::new("15min", step(CalendarUnit::Minute, 15), step(CalendarUnit::Minute, 15)),
    IntervalDef::new("5min", step(CalendarUnit::Minute, 5), step(CalendarUnit::Minute, 5)),
    IntervalDef::new("1min", step(CalendarUnit::Minute, 1), step(CalendarUnit::Minute, 1)),
    IntervalDef::new("20sec", step(CalendarUnit::Second, 20), step(CalendarUnit::Second, 20)),
];

/// Resolves a catalog key to its index, failing fast on unknown keys so a
/// misspelled configuration cannot silently walk the whole catalog.
pub fn resolve_key(key: &str) -> ChartResult<usize> {
    CATALOG
        .iter()
        .position(|def| def.key == key)
        .ok_or_else(|| ChartError::UnknownInterval {
            key: key.to_owned(),
        })
}
