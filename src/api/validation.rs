use crate::error::{RouteCanvasError, RouteCanvasResult};

use super::RenderStyle;

pub(super) fn validate_render_style(style: RenderStyle) -> RouteCanvasResult<RenderStyle> {
    style.clear_color.validate()?;
    style.point_color.validate()?;
    style.label_color.validate()?;
    style.route_color.validate()?;

    for (name, value) in [
        ("point radius", style.point_radius_px),
        ("label font size", style.label_font_size_px),
        ("route stroke width", style.route_stroke_width_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(RouteCanvasError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }
    if !style.label_offset_x_px.is_finite() || !style.label_offset_y_px.is_finite() {
        return Err(RouteCanvasError::InvalidData(
            "label offset must be finite".to_owned(),
        ));
    }
    Ok(style)
}
