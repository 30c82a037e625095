use super::grid::*;
use super::error::*;
use super::settings::*;
use super::viewport::*;

use curves::*;
use canvas::*;

///
/// Maps points between model space and the pixel space of a viewport
///
/// Points are scaled first, then moved so that the logical origin lands on `origin()`. The origin
/// offset is given in logical units, so its pixel position uses the same scale as the points:
/// this keeps `to_pixel_space(Coord2(0.0, 0.0))` exactly on the axis lines.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewTransform {
    viewport:   Viewport,
    x_scale:    f64,
    y_scale:    f64,
    origin:     Coord2
}

impl ViewTransform {
    ///
    /// Creates the transform for a particular set of settings and viewport
    ///
    /// The settings and viewport are checked before anything is divided by them.
    ///
    pub fn new(settings: &DisplaySettings, viewport: Viewport) -> Result<ViewTransform, ConfigurationError> {
        viewport.validate()?;
        settings.validate_geometry()?;

        let x_scale = viewport.width / settings.display_bounds.x();
        let y_scale = viewport.height / settings.display_bounds.y();

        // Tiny (but positive) display bounds can overflow the scale, or scale the interval down to nothing
        if !(x_scale.is_finite() && y_scale.is_finite() && x_scale > 0.0 && y_scale > 0.0) {
            return Err(ConfigurationError::DisplayBounds(settings.display_bounds));
        }

        let origin = Coord2(settings.origin_offset.x() * x_scale, settings.origin_offset.y() * y_scale);
        if !origin.is_finite() {
            return Err(ConfigurationError::OriginOffset(settings.origin_offset));
        }

        Ok(ViewTransform { viewport, x_scale, y_scale, origin })
    }

    ///
    /// The viewport this transform maps into
    ///
    #[inline] pub fn viewport(&self) -> Viewport { self.viewport }

    ///
    /// Pixels per logical unit horizontally
    ///
    #[inline] pub fn x_scale(&self) -> f64 { self.x_scale }

    ///
    /// Pixels per logical unit vertically
    ///
    #[inline] pub fn y_scale(&self) -> f64 { self.y_scale }

    ///
    /// The pixel position of the logical origin
    ///
    #[inline] pub fn origin(&self) -> Coord2 { self.origin }

    ///
    /// The distance in pixels between grid lines along an axis (one logical unit)
    ///
    #[inline]
    pub fn interval(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_scale,
            Axis::Y => self.y_scale
        }
    }

    ///
    /// The pixel position of the origin along an axis
    ///
    #[inline]
    pub fn origin_position(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.origin.x(),
            Axis::Y => self.origin.y()
        }
    }

    ///
    /// Converts a point from model space to pixel space
    ///
    #[inline]
    pub fn to_pixel_space(&self, point: Coord2) -> Coord2 {
        Coord2(
            point.x() * self.x_scale + self.origin.x(),
            point.y() * self.y_scale + self.origin.y()
        )
    }

    ///
    /// Converts a point from pixel space back to model space (eg, to find where a control point is being dragged to)
    ///
    #[inline]
    pub fn to_model_space(&self, pixel: Coord2) -> Coord2 {
        Coord2(
            (pixel.x() - self.origin.x()) / self.x_scale,
            (pixel.y() - self.origin.y()) / self.y_scale
        )
    }

    ///
    /// Returns this transform as a canvas transformation matrix (for renderers that would rather draw in model units)
    ///
    pub fn as_transform2d(&self) -> Transform2D {
        Transform2D::translate(self.origin.x() as f32, self.origin.y() as f32) * Transform2D::scale(self.x_scale as f32, self.y_scale as f32)
    }
}

///
/// Converts a single point from model space to pixel space
///
pub fn to_pixel_space(point: Coord2, settings: &DisplaySettings, viewport: Viewport) -> Result<Coord2, LayoutError> {
    let transform = ViewTransform::new(settings, viewport)?;

    Ok(transform.to_pixel_space(point))
}

///
/// Converts a single point from pixel space to model space
///
pub fn to_model_space(pixel: Coord2, settings: &DisplaySettings, viewport: Viewport) -> Result<Coord2, LayoutError> {
    let transform = ViewTransform::new(settings, viewport)?;

    Ok(transform.to_model_space(pixel))
}
