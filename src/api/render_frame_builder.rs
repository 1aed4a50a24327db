use crate::core::{LocationStore, RoutePoint, ViewportTransform};
use crate::render::{
    CirclePrimitive, DrawCommand, PolylinePrimitive, RenderFrame, Renderer, TextPrimitive,
};

use super::{RenderStyle, RouteCanvasEngine};

/// Builds the draw sequence for one redraw.
///
/// Order: clear, then each location in insertion order (marker, then label),
/// then the route polyline on top. The output depends only on the arguments.
#[must_use]
pub fn build_route_frame(
    locations: &LocationStore,
    transform: &ViewportTransform,
    route: Option<&[RoutePoint]>,
    style: &RenderStyle,
) -> RenderFrame {
    let mut frame =
        RenderFrame::new(transform.viewport()).with_command(DrawCommand::Clear(style.clear_color));

    for location in locations.locations() {
        let center = transform.to_screen(location);
        frame.push(DrawCommand::Circle(CirclePrimitive::new(
            center.x,
            center.y,
            style.point_radius_px,
            style.point_color,
        )));
        frame.push(DrawCommand::Text(TextPrimitive::new(
            location.name(),
            center.x + style.label_offset_x_px,
            center.y + style.label_offset_y_px,
            style.label_font_size_px,
            style.label_color,
            style.label_h_align,
        )));
    }

    if let Some(route) = route.filter(|route| route.len() >= 2) {
        let points = route.iter().map(|point| transform.to_screen(point)).collect();
        frame.push(DrawCommand::Polyline(PolylinePrimitive::new(
            points,
            style.route_stroke_width_px,
            style.route_color,
        )));
    }

    frame
}

impl<R: Renderer> RouteCanvasEngine<R> {
    /// Materializes the current frame without drawing it.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        build_route_frame(
            &self.core.store,
            &self.core.transform,
            self.core.displayed_route.as_deref(),
            &self.core.render_style,
        )
    }
}
