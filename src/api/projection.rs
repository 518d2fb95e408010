use crate::core::{Sample, TimeScale, ValueScale};
use crate::error::ChartResult;
use crate::render::PathPoint;

#[cfg(feature = "parallel-projection")]
const PARALLEL_THRESHOLD: usize = 4096;

/// Projects visible samples into series path points.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_path_points(
    samples: &[Sample],
    time_scale: &TimeScale,
    value_scale: &ValueScale,
) -> ChartResult<Vec<PathPoint>> {
    for sample in samples {
        sample.validate()?;
    }

    #[cfg(feature = "parallel-projection")]
    if samples.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        return Ok(samples
            .par_iter()
            .map(|sample| project_one(*sample, time_scale, value_scale))
            .collect());
    }

    Ok(samples
        .iter()
        .map(|sample| project_one(*sample, time_scale, value_scale))
        .collect())
}

fn project_one(sample: Sample, time_scale: &TimeScale, value_scale: &ValueScale) -> PathPoint {
    PathPoint::new(
        time_scale.time_to_pixel(sample.time),
        value_scale.value_to_pixel(sample.value),
    )
}
