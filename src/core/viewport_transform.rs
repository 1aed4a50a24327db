use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::types::{PlanePoint, Positioned, ScreenPoint, Viewport};
use crate::error::{RouteCanvasError, RouteCanvasResult};

/// Scale substituted for an axis whose extent is zero, so that `min` picks the
/// other axis when fitting a horizontal or vertical line of points.
pub const DEGENERATE_AXIS_SCALE: f64 = f64::MAX;

/// Axis-aligned bounding box of a point set in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DataBounds {
    pub fn from_points<P: Positioned>(points: &[P]) -> RouteCanvasResult<Self> {
        let mut iter = points.iter().map(|point| point.position());
        let first = iter.next().ok_or_else(|| {
            RouteCanvasError::InvalidInput("cannot fit an empty point set".to_owned())
        })?;

        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for point in std::iter::once(first).chain(iter) {
            if !point.is_finite() {
                return Err(RouteCanvasError::InvalidInput(
                    "fit points must have finite coordinates".to_owned(),
                ));
            }
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_y = bounds.max_y.max(point.y);
        }
        Ok(bounds)
    }

    /// Half of the horizontal extent. Halving each bound first keeps the
    /// result finite for any finite pair.
    #[must_use]
    pub fn half_width(self) -> f64 {
        self.max_x / 2.0 - self.min_x / 2.0
    }

    #[must_use]
    pub fn half_height(self) -> f64 {
        self.max_y / 2.0 - self.min_y / 2.0
    }

    #[must_use]
    pub fn center(self) -> PlanePoint {
        PlanePoint::new(
            self.min_x / 2.0 + self.max_x / 2.0,
            self.min_y / 2.0 + self.max_y / 2.0,
        )
    }

    /// True when every point coincides.
    #[must_use]
    pub fn is_single_point(self) -> bool {
        self.min_x == self.max_x && self.min_y == self.max_y
    }

    #[must_use]
    pub fn corners(self) -> [PlanePoint; 4] {
        [
            PlanePoint::new(self.min_x, self.min_y),
            PlanePoint::new(self.max_x, self.min_y),
            PlanePoint::new(self.max_x, self.max_y),
            PlanePoint::new(self.min_x, self.max_y),
        ]
    }
}

/// Uniform scale + translation from data space to screen space.
///
/// `auto_fit` recomputes everything; `pan` only moves the offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    viewport: Viewport,
    padding_px: u32,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::identity(Viewport::default(), 0)
    }
}

impl ViewportTransform {
    /// Unit scale with no offset, used before anything has been fitted.
    #[must_use]
    pub fn identity(viewport: Viewport, padding_px: u32) -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            viewport,
            padding_px,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn padding_px(&self) -> u32 {
        self.padding_px
    }

    /// Fits the bounding box of `points` into `viewport` minus `padding_px`
    /// on every side, centered, with a single uniform scale.
    ///
    /// All-coincident points get `scale = 1` and land on the viewport center.
    /// On success the scale is finite and strictly positive and every point
    /// maps to a finite screen position. A point set that cannot satisfy
    /// that is rejected with `InvalidInput` and `self` is left untouched.
    pub fn auto_fit<P: Positioned>(
        &mut self,
        points: &[P],
        viewport: Viewport,
        padding_px: u32,
    ) -> RouteCanvasResult<()> {
        if !viewport.is_valid() {
            return Err(RouteCanvasError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let bounds = DataBounds::from_points(points)?;
        let center = viewport.center();

        let (scale, offset_x, offset_y) = if bounds.is_single_point() {
            (1.0, center.x - bounds.min_x, center.y - bounds.min_y)
        } else {
            let padding = f64::from(padding_px);
            let available_width = f64::from(viewport.width) - 2.0 * padding;
            let available_height = f64::from(viewport.height) - 2.0 * padding;
            if available_width <= 0.0 || available_height <= 0.0 {
                return Err(RouteCanvasError::InvalidInput(format!(
                    "padding {padding_px}px leaves no drawable area in {}x{} viewport",
                    viewport.width, viewport.height
                )));
            }

            let scale_x = axis_scale(available_width / 2.0, bounds.half_width());
            let scale_y = axis_scale(available_height / 2.0, bounds.half_height());
            let scale = scale_x.min(scale_y);
            let box_center = bounds.center();
            (
                scale,
                center.x - box_center.x * scale,
                center.y - box_center.y * scale,
            )
        };

        let fitted = Self {
            scale,
            offset_x,
            offset_y,
            viewport,
            padding_px,
        };
        if !fitted.is_usable_for(bounds) {
            warn!(
                count = points.len(),
                scale, offset_x, offset_y, "auto-fit produced non-finite screen mapping"
            );
            return Err(RouteCanvasError::InvalidInput(
                "point set cannot be mapped to finite screen coordinates".to_owned(),
            ));
        }

        *self = fitted;
        debug!(
            count = points.len(),
            scale = self.scale,
            offset_x = self.offset_x,
            offset_y = self.offset_y,
            "auto-fit viewport"
        );
        Ok(())
    }

    // `to_screen` is monotone per axis, so finite corners imply finite
    // positions for every point inside the box.
    fn is_usable_for(&self, bounds: DataBounds) -> bool {
        self.scale.is_finite()
            && self.scale > 0.0
            && bounds.corners().iter().all(|corner| {
                let screen = self.to_screen(corner);
                screen.x.is_finite() && screen.y.is_finite()
            })
    }

    #[must_use]
    pub fn to_screen<P: Positioned>(&self, point: &P) -> ScreenPoint {
        let point = point.position();
        ScreenPoint::new(
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }

    /// Inverse of `to_screen`.
    #[must_use]
    pub fn to_data(&self, point: ScreenPoint) -> PlanePoint {
        PlanePoint::new(
            (point.x - self.offset_x) / self.scale,
            (point.y - self.offset_y) / self.scale,
        )
    }

    /// Translates the view. No bounds checks; content may leave the viewport.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.offset_x += delta_x;
        self.offset_y += delta_y;
    }
}

fn axis_scale(half_available: f64, half_extent: f64) -> f64 {
    if half_extent == 0.0 {
        DEGENERATE_AXIS_SCALE
    } else {
        half_available / half_extent
    }
}

#[cfg(test)]
mod tests {
    use super::{DEGENERATE_AXIS_SCALE, DataBounds, axis_scale};

    #[test]
    fn zero_extent_axis_uses_sentinel() {
        assert_eq!(axis_scale(420.0, 0.0), DEGENERATE_AXIS_SCALE);
        assert_eq!(axis_scale(210.0, 5.0), 42.0);
    }

    #[test]
    fn bounds_helpers_stay_finite_at_float_limits() {
        let bounds = DataBounds {
            min_x: -f64::MAX,
            max_x: f64::MAX,
            min_y: f64::MAX / 2.0,
            max_y: f64::MAX,
        };
        assert_eq!(bounds.half_width(), f64::MAX);
        assert!(bounds.half_height().is_finite());
        let center = bounds.center();
        assert_eq!(center.x, 0.0);
        assert!(center.y.is_finite());
        assert!(!bounds.is_single_point());
    }
}
