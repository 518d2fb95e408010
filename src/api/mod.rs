mod config;
mod frame_builder;
mod projection;
mod snapshot;

pub use config::{ChartConfig, ValueFormat};
pub use projection::project_path_points;
pub use snapshot::EngineSnapshot;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::axis::{self, XAxis, YTick};
use crate::core::primitives::datetime_to_unix_seconds;
use crate::core::value_scale::DEFAULT_TICK_COUNT;
use crate::core::{Boundary, Sample, TimeScale, ValueScale, Viewport, boundaries};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use frame_builder::FrameInputs;

/// Chart driver.
///
/// Owns the sample store and the renderer, recomputes boundaries, scales and
/// tick geometry in full on every update, and hands the backend one
/// materialized frame per draw pass. A failed update aborts before the
/// renderer sees anything, leaving the previous frame untouched.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    config: ChartConfig,
    width: f64,
    height: f64,
    samples: Vec<Sample>,
    geometry: Geometry,
    frame: RenderFrame,
    rendered_once: bool,
    metadata: IndexMap<String, String>,
}

struct Geometry {
    boundaries: Vec<Boundary>,
    time_scale: TimeScale,
    value_scale: ValueScale,
    x_axis: XAxis,
    y_ticks: Vec<YTick>,
    visible: Vec<Sample>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(
        renderer: R,
        viewport: Viewport,
        samples: Vec<Sample>,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        config.validate()?;
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width) - config.margin * 2.0;
        let height = f64::from(viewport.height) - config.margin * 2.0;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let geometry = compute_geometry(&samples, &config, width, height)?;
        let frame = materialize(&geometry, viewport, width, height, &config, true)?;

        let mut engine = Self {
            renderer,
            viewport,
            config,
            width,
            height,
            samples,
            geometry,
            frame,
            rendered_once: false,
            metadata: IndexMap::new(),
        };
        engine.renderer.render(&engine.frame)?;
        engine.rendered_once = true;

        debug!(
            boundary_count = engine.geometry.boundaries.len(),
            visible_count = engine.geometry.visible.len(),
            "initial render"
        );
        Ok(engine)
    }

    /// Re-renders with a new dataset, replacing the previous one.
    pub fn update(&mut self, samples: Vec<Sample>) -> ChartResult<()> {
        let geometry = compute_geometry(&samples, &self.config, self.width, self.height)?;
        let frame = materialize(
            &geometry,
            self.viewport,
            self.width,
            self.height,
            &self.config,
            !self.rendered_once,
        )?;

        self.renderer.render(&frame)?;

        debug!(
            total_count = samples.len(),
            visible_count = geometry.visible.len(),
            boundary_count = geometry.boundaries.len(),
            "update samples"
        );

        self.samples = samples;
        self.geometry = geometry;
        self.frame = frame;
        self.rendered_once = true;
        Ok(())
    }

    /// Appends one sample and re-runs the full update pipeline.
    pub fn push_sample(&mut self, sample: Sample) -> ChartResult<()> {
        sample.validate()?;
        trace!(count = self.samples.len() + 1, "append sample");

        let mut samples = self.samples.clone();
        samples.push(sample);
        self.update(samples)
    }

    /// Attaches a metadata entry carried through snapshots.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport,
            drawable_width: self.width,
            drawable_height: self.height,
            boundary_keys: self
                .geometry
                .boundaries
                .iter()
                .map(Boundary::label_key)
                .collect(),
            boundary_unix_seconds: self
                .geometry
                .boundaries
                .iter()
                .map(|boundary| datetime_to_unix_seconds(boundary.at))
                .collect(),
            scale_range: self.geometry.time_scale.range().to_vec(),
            value_domain: self.geometry.value_scale.domain(),
            major_tick_labels: self
                .geometry
                .x_axis
                .majors
                .iter()
                .map(|major| major.label.clone())
                .collect(),
            minor_tick_offsets: self.geometry.x_axis.minor_offsets.clone(),
            total_samples: self.samples.len(),
            visible_samples: self.geometry.visible.len(),
            metadata: self.metadata.clone(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Drawable size inside the margins.
    #[must_use]
    pub fn drawable_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// The frame handed to the renderer on the last successful draw pass.
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn boundaries(&self) -> &[Boundary] {
        &self.geometry.boundaries
    }

    #[must_use]
    pub fn visible_samples(&self) -> &[Sample] {
        &self.geometry.visible
    }

    #[must_use]
    pub fn time_to_pixel(&self, time: DateTime<Utc>) -> f64 {
        self.geometry.time_scale.time_to_pixel(time)
    }

    #[must_use]
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        self.geometry.value_scale.value_to_pixel(value)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn compute_geometry(
    samples: &[Sample],
    config: &ChartConfig,
    width: f64,
    height: f64,
) -> ChartResult<Geometry> {
    let boundaries = boundaries::generate(samples, &config.min_interval)?;

    // Samples older than the oldest boundary are outside the axis; drop
    // them. A no-op when the Min fallback anchored the axis at the data
    // minimum.
    let oldest = boundaries[0].at;
    let visible: Vec<Sample> = samples
        .iter()
        .copied()
        .filter(|sample| sample.time >= oldest)
        .collect();

    let time_scale = TimeScale::build(&boundaries, width)?;
    let value_scale = ValueScale::fit(&visible, height)?;
    let x_axis = axis::synthesize_x(&boundaries, &time_scale);
    let y_ticks = axis::synthesize_y(&value_scale, DEFAULT_TICK_COUNT);

    Ok(Geometry {
        boundaries,
        time_scale,
        value_scale,
        x_axis,
        y_ticks,
        visible,
    })
}

fn materialize(
    geometry: &Geometry,
    viewport: Viewport,
    width: f64,
    height: f64,
    config: &ChartConfig,
    first_render: bool,
) -> ChartResult<RenderFrame> {
    let path_points = project_path_points(
        &geometry.visible,
        &geometry.time_scale,
        &geometry.value_scale,
    )?;

    frame_builder::build_frame(FrameInputs {
        viewport,
        width,
        height,
        path_points: &path_points,
        x_axis: &geometry.x_axis,
        y_ticks: &geometry.y_ticks,
        config,
        first_render,
    })
}
