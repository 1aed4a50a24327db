use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{RouteCanvasError, RouteCanvasResult};
use crate::render::{Color, DrawCommand, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub circles_drawn: usize,
    pub texts_drawn: usize,
    pub polylines_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RouteCanvasResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Draws offscreen through `Renderer::render`, or in place on an external
/// Cairo context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> RouteCanvasResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(RouteCanvasError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RouteCanvasResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Clear(color) => {
                    apply_color(context, *color);
                    context
                        .paint()
                        .map_err(|err| map_backend_error("failed to clear surface", err))?;
                }
                DrawCommand::Circle(circle) => {
                    context.new_path();
                    context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
                    apply_color(context, circle.fill_color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill circle", err))?;
                    stats.circles_drawn += 1;
                }
                DrawCommand::Text(text) => {
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
                DrawCommand::Polyline(polyline) => {
                    let mut points = polyline.points.iter();
                    let Some(first) = points.next() else {
                        continue;
                    };
                    context.new_path();
                    context.move_to(first.x, first.y);
                    for point in points {
                        context.line_to(point.x, point.y);
                    }
                    apply_color(context, polyline.color);
                    context.set_line_width(polyline.stroke_width);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke route", err))?;
                    stats.polylines_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RouteCanvasResult<()> {
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
    ) -> RouteCanvasResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> RouteCanvasError {
    RouteCanvasError::InvalidData(format!("{prefix}: {err}"))
}
