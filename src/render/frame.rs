use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPlan, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// All coordinates are relative to the drawable origin; `margin` is the
/// translation a backend applies inside the full viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub margin: f64,
    pub path: Option<PathPlan>,
    pub lines: Vec<LinePrimitive>,
    pub grid_lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub markers: Vec<CirclePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, margin: f64) -> Self {
        Self {
            viewport,
            margin,
            path: None,
            lines: Vec::new(),
            grid_lines: Vec::new(),
            texts: Vec::new(),
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPlan) -> Self {
        self.path = Some(path);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_grid_line(mut self, line: LinePrimitive) -> Self {
        self.grid_lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: CirclePrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ChartError::InvalidData(
                "frame margin must be finite and >= 0".to_owned(),
            ));
        }

        if let Some(path) = &self.path {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for line in &self.grid_lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_none()
            && self.lines.is_empty()
            && self.grid_lines.is_empty()
            && self.texts.is_empty()
            && self.markers.is_empty()
    }
}
