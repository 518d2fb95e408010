use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke pattern for one line segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed {
        dash_px: f64,
        gap_px: f64,
    },
}

impl LineStrokeStyle {
    fn validate(self) -> ChartResult<()> {
        if let Self::Dashed { dash_px, gap_px } = self {
            if !dash_px.is_finite() || !gap_px.is_finite() || dash_px <= 0.0 || gap_px <= 0.0 {
                return Err(ChartError::InvalidData(
                    "dash segments must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_style(mut self, style: LineStrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.style.validate()?;
        self.color.validate()
    }
}

/// Draw command for one filled circle marker in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Interpolation applied by the backend when stroking the series path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveKind {
    Linear,
    Cardinal { tension: f64 },
}

impl CurveKind {
    fn validate(self) -> ChartResult<()> {
        if let Self::Cardinal { tension } = self {
            if !tension.is_finite() || !(0.0..=1.0).contains(&tension) {
                return Err(ChartError::InvalidData(
                    "cardinal tension must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// One vertex of the series path in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One target shape of the series path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathShape {
    pub points: Vec<PathPoint>,
    pub curve: CurveKind,
}

impl PathShape {
    pub fn validate(&self) -> ChartResult<()> {
        for point in &self.points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        self.curve.validate()
    }
}

/// Declarative series-path draw plan.
///
/// The last stage is the desired final geometry. With a transition duration
/// the backend animates through the stages in order, retargeting any
/// in-flight transition; without one it draws the final stage immediately.
/// The plan never schedules anything itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPlan {
    pub stages: SmallVec<[PathShape; 3]>,
    pub stroke_width: f64,
    pub color: Color,
    pub transition_ms: Option<u64>,
}

impl PathPlan {
    #[must_use]
    pub fn final_shape(&self) -> Option<&PathShape> {
        self.stages.last()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.stages.is_empty() {
            return Err(ChartError::InvalidData(
                "path plan must carry at least one stage".to_owned(),
            ));
        }
        for stage in &self.stages {
            stage.validate()?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
