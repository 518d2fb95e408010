//! Materializes one deterministic `RenderFrame` from computed geometry.
//!
//! Axis styling lives here as fixed constants; the synthesized tick
//! geometry itself comes from `core::axis`.

use smallvec::{SmallVec, smallvec};

use crate::api::config::ChartConfig;
use crate::core::Viewport;
use crate::core::axis::{XAxis, YTick};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, CurveKind, LinePrimitive, LineStrokeStyle, PathPlan, PathPoint,
    PathShape, RenderFrame, TextHAlign, TextPrimitive,
};

const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
const MAJOR_TICK_LEN_PX: f64 = 6.0;
const MINOR_TICK_LEN_PX: f64 = 4.0;
const TICK_LABEL_PAD_PX: f64 = 3.0;
const TICK_FONT_SIZE_PX: f64 = 10.0;

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
// light grey at the original's gridline opacity
const GRID_COLOR: Color = Color::rgba(0.827, 0.827, 0.827, 0.075);
const GRID_DASH: LineStrokeStyle = LineStrokeStyle::Dashed {
    dash_px: 4.0,
    gap_px: 2.0,
};

const DEBUG_MARKER_COLOR: Color = Color::rgb(1.0, 0.0, 0.0);
const DEBUG_MARKER_RADIUS_PX: f64 = 1.0;

/// Duration of each staged intro transition on the first animated render.
const INTRO_STAGE_MS: u64 = 500;
/// Duration of a plain retarget transition on subsequent updates.
const RETARGET_MS: u64 = 250;

pub(super) struct FrameInputs<'a> {
    pub viewport: Viewport,
    pub width: f64,
    pub height: f64,
    pub path_points: &'a [PathPoint],
    pub x_axis: &'a XAxis,
    pub y_ticks: &'a [YTick],
    pub config: &'a ChartConfig,
    pub first_render: bool,
}

pub(super) fn build_frame(inputs: FrameInputs<'_>) -> ChartResult<RenderFrame> {
    let FrameInputs {
        viewport,
        width,
        height,
        path_points,
        x_axis,
        y_ticks,
        config,
        first_render,
    } = inputs;

    let mut frame = RenderFrame::new(viewport, config.margin);
    frame.path = Some(path_plan(path_points, width, height, config, first_render));

    // x axis baseline, ticks, labels, grid
    frame.lines.push(axis_line(0.0, height, width, height));
    for major in &x_axis.majors {
        frame.lines.push(axis_line(
            major.offset,
            height,
            major.offset,
            height + MAJOR_TICK_LEN_PX,
        ));
        frame.texts.push(TextPrimitive::new(
            major.label.clone(),
            major.offset,
            height + MAJOR_TICK_LEN_PX + TICK_LABEL_PAD_PX,
            TICK_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
        frame
            .grid_lines
            .push(grid_line(major.offset, 0.0, major.offset, height));
    }
    for &offset in &x_axis.minor_offsets {
        frame
            .lines
            .push(axis_line(offset, height, offset, height + MINOR_TICK_LEN_PX));
    }

    // y axis baseline, ticks, labels, grid
    frame.lines.push(axis_line(0.0, 0.0, 0.0, height));
    for tick in y_ticks {
        frame
            .lines
            .push(axis_line(-MAJOR_TICK_LEN_PX, tick.offset, 0.0, tick.offset));
        frame.texts.push(TextPrimitive::new(
            config.y_tick_format.format(tick.value),
            -(MAJOR_TICK_LEN_PX + TICK_LABEL_PAD_PX),
            tick.offset - TICK_FONT_SIZE_PX / 2.0,
            TICK_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
        frame
            .grid_lines
            .push(grid_line(0.0, tick.offset, width, tick.offset));
    }

    if config.debug {
        frame.markers = path_points
            .iter()
            .map(|point| {
                CirclePrimitive::new(
                    point.x,
                    point.y,
                    DEBUG_MARKER_RADIUS_PX,
                    DEBUG_MARKER_COLOR,
                )
            })
            .collect();
    }

    frame.validate()?;
    Ok(frame)
}

fn path_plan(
    points: &[PathPoint],
    width: f64,
    height: f64,
    config: &ChartConfig,
    first_render: bool,
) -> PathPlan {
    let final_shape = PathShape {
        points: points.to_vec(),
        curve: config.curve,
    };

    let (stages, transition_ms): (SmallVec<[PathShape; 3]>, Option<u64>) =
        if config.animation && first_render {
            // Staged intro: collapse at the right edge, widen into a flat
            // midline, then morph into the real shape.
            let midline = height / 2.0;
            let slack = CurveKind::Cardinal { tension: 0.0 };
            let collapsed = PathShape {
                points: points.iter().map(|_| PathPoint::new(width, midline)).collect(),
                curve: slack,
            };
            let flat = PathShape {
                points: points
                    .iter()
                    .map(|point| PathPoint::new(point.x, midline))
                    .collect(),
                curve: slack,
            };
            (smallvec![collapsed, flat, final_shape], Some(INTRO_STAGE_MS))
        } else if config.animation {
            (smallvec![final_shape], Some(RETARGET_MS))
        } else {
            (smallvec![final_shape], None)
        };

    PathPlan {
        stages,
        stroke_width: config.stroke_width,
        color: config.stroke,
        transition_ms,
    }
}

fn axis_line(x1: f64, y1: f64, x2: f64, y2: f64) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_WIDTH_PX, AXIS_COLOR)
}

fn grid_line(x1: f64, y1: f64, x2: f64, y2: f64) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_WIDTH_PX, GRID_COLOR).with_style(GRID_DASH)
}
