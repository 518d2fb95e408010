pub mod axis;
pub mod boundaries;
pub mod intervals;
pub mod primitives;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use axis::{MajorTick, XAxis, YTick};
pub use boundaries::{Boundary, BoundaryKind};
pub use intervals::{CATALOG, CalendarStep, CalendarUnit, IntervalDef};
pub use time_scale::TimeScale;
pub use types::{Sample, Viewport};
pub use value_scale::ValueScale;
