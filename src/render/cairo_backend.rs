use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::PI;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, CurveKind, LineStrokeStyle, PathShape, RenderFrame, Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub grid_lines_drawn: usize,
    pub texts_drawn: usize,
    pub markers_drawn: usize,
    pub path_drawn: bool,
}

/// Optional extension trait for renderers that can draw into an external
/// Cairo context (for example a host toolkit's drawing callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// It is a static backend: only the final path stage is stroked, and
/// transition durations are ignored.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        context.save().map_err(|err| map_backend_error("failed to save context", err))?;
        context.translate(frame.margin, frame.margin);

        let mut stats = CairoRenderStats::default();

        for line in frame.grid_lines.iter().chain(&frame.lines) {
            apply_color(context, line.color);
            apply_stroke_style(context, line.style);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
        }
        context.set_dash(&[], 0.0);
        stats.grid_lines_drawn = frame.grid_lines.len();
        stats.lines_drawn = frame.lines.len();

        if let Some(plan) = &frame.path {
            if let Some(shape) = plan.final_shape() {
                append_path(context, shape);
                apply_color(context, plan.color);
                context.set_line_width(plan.stroke_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke path", err))?;
                stats.path_drawn = true;
            }
        }

        for marker in &frame.markers {
            apply_color(context, marker.color);
            context.arc(marker.cx, marker.cy, marker.radius, 0.0, 2.0 * PI);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill marker", err))?;
            stats.markers_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke_style(context: &Context, style: LineStrokeStyle) {
    match style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { dash_px, gap_px } => context.set_dash(&[dash_px, gap_px], 0.0),
    }
}

fn append_path(context: &Context, shape: &PathShape) {
    let points = &shape.points;
    let Some(first) = points.first() else {
        return;
    };
    context.new_path();
    context.move_to(first.x, first.y);

    match shape.curve {
        CurveKind::Linear => {
            for point in &points[1..] {
                context.line_to(point.x, point.y);
            }
        }
        CurveKind::Cardinal { tension } => {
            // Cardinal spline as cubic segments; neighbor-scaled control
            // points with k = (1 - tension) / 6, endpoints duplicated.
            let k = (1.0 - tension) / 6.0;
            let point_at = |index: isize| {
                let clamped = index.clamp(0, points.len() as isize - 1) as usize;
                points[clamped]
            };
            for i in 0..points.len().saturating_sub(1) {
                let p0 = point_at(i as isize - 1);
                let p1 = point_at(i as isize);
                let p2 = point_at(i as isize + 1);
                let p3 = point_at(i as isize + 2);
                context.curve_to(
                    p1.x + (p2.x - p0.x) * k,
                    p1.y + (p2.y - p0.y) * k,
                    p2.x - (p3.x - p1.x) * k,
                    p2.y - (p3.y - p1.y) * k,
                    p2.x,
                    p2.y,
                );
            }
        }
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
