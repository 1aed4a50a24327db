use crate::render::{Color, TextHAlign};

/// Style contract for the route canvas frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub clear_color: Color,
    pub point_color: Color,
    /// Radius of every location marker, in pixels.
    pub point_radius_px: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Label anchor relative to the marker center, in pixels.
    pub label_offset_x_px: f64,
    pub label_offset_y_px: f64,
    pub label_h_align: TextHAlign,
    pub route_color: Color,
    pub route_stroke_width_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            point_color: Color::rgb8(0x00, 0x7b, 0xff),
            point_radius_px: 5.0,
            label_color: Color::rgb8(0x34, 0x3a, 0x40),
            label_font_size_px: 12.0,
            label_offset_x_px: 10.0,
            label_offset_y_px: 5.0,
            label_h_align: TextHAlign::Left,
            route_color: Color::rgb8(0x28, 0xa7, 0x45),
            route_stroke_width_px: 2.0,
        }
    }
}
