use super::error::*;
use super::viewport::*;

use curves::*;
use canvas::*;

///
/// The width and colour to stroke a set of lines with
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct LineStyle {
    /// Width of the line in pixels
    pub width: f64,

    /// Colour of the line
    pub color: Color
}

impl LineStyle {
    pub fn new(width: f64, color: Color) -> LineStyle {
        LineStyle { width, color }
    }

    ///
    /// Sets up a graphics context to stroke lines in this style
    ///
    pub fn apply<Gc: GraphicsContext+?Sized>(&self, gc: &mut Gc) {
        gc.line_width(self.width as f32);
        gc.stroke_color(self.color);
    }
}

///
/// Settings that describe how the curve and its grid are displayed
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// The number of logical units that fit across the width and height of the viewport
    pub display_bounds: Coord2,

    /// Where the logical origin sits in the viewport, in logical units from the viewport's corner
    pub origin_offset: Coord2,

    /// Style of the two axis lines
    pub axis_line: LineStyle,

    /// Style of the grid lines
    pub grid_line: LineStyle,

    /// Style of the curve itself
    pub curve_line: LineStyle,

    /// Style of the lines joining the control points and the construction points
    pub construction_line: LineStyle,

    /// Diameter in pixels of the handle drawn at each control point
    pub control_point_size: f64,

    /// Colour of the control point handles
    pub control_point_color: Color,

    /// Colour that the canvas is cleared to before drawing
    pub background: Color
}

impl Default for DisplaySettings {
    fn default() -> DisplaySettings {
        DisplaySettings {
            display_bounds:         Coord2(10.0, 10.0),
            origin_offset:          Coord2(0.0, 0.0),
            axis_line:              LineStyle::new(2.0, Color::BLACK),
            grid_line:              LineStyle::new(1.0, Color::LIGHT_GREY),
            curve_line:             LineStyle::new(2.0, Color::BLUE),
            construction_line:      LineStyle::new(1.0, Color::Rgba(0.5, 0.5, 0.5, 1.0)),
            control_point_size:     5.0,
            control_point_color:    Color::RED,
            background:             Color::WHITE
        }
    }
}

impl DisplaySettings {
    ///
    /// Checks the display bounds and origin offset, which are the settings that the transform to pixel space depends on
    ///
    pub fn validate_geometry(&self) -> Result<(), ConfigurationError> {
        let Coord2(width, height) = self.display_bounds;

        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigurationError::DisplayBounds(self.display_bounds));
        }

        if !self.origin_offset.is_finite() {
            return Err(ConfigurationError::OriginOffset(self.origin_offset));
        }

        Ok(())
    }

    ///
    /// Checks every setting, returning the first problem found
    ///
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.validate_geometry()?;

        let widths = [self.axis_line.width, self.grid_line.width, self.curve_line.width, self.construction_line.width, self.control_point_size];
        if let Some(bad_width) = widths.iter().find(|width| !(width.is_finite() && **width >= 0.0)) {
            return Err(ConfigurationError::LineWidth(*bad_width));
        }

        Ok(())
    }

    ///
    /// Stretches the horizontal display bounds by the aspect ratio of a viewport, so that a grid cell is square
    /// when the display bounds started out with equal components
    ///
    pub fn fit_to_aspect_ratio(&mut self, viewport: Viewport) -> Result<(), ConfigurationError> {
        let aspect_ratio    = viewport.aspect_ratio()?;
        let mut fitted      = *self;

        fitted.display_bounds.0 *= aspect_ratio;
        fitted.validate_geometry()?;

        *self = fitted;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(DisplaySettings::default().validate() == Ok(()));
    }

    #[test]
    fn zero_display_bounds_are_invalid() {
        let settings = DisplaySettings { display_bounds: Coord2(0.0, 10.0), ..DisplaySettings::default() };

        assert!(settings.validate() == Err(ConfigurationError::DisplayBounds(Coord2(0.0, 10.0))));
    }

    #[test]
    fn negative_display_bounds_are_invalid() {
        let settings = DisplaySettings { display_bounds: Coord2(10.0, -1.0), ..DisplaySettings::default() };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn nan_display_bounds_are_invalid() {
        let settings = DisplaySettings { display_bounds: Coord2(f64::NAN, 10.0), ..DisplaySettings::default() };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn infinite_origin_is_invalid() {
        let settings = DisplaySettings { origin_offset: Coord2(f64::INFINITY, 0.0), ..DisplaySettings::default() };

        assert!(settings.validate() == Err(ConfigurationError::OriginOffset(Coord2(f64::INFINITY, 0.0))));
    }

    #[test]
    fn negative_line_width_is_invalid() {
        let mut settings = DisplaySettings::default();
        settings.grid_line.width = -1.0;

        assert!(settings.validate() == Err(ConfigurationError::LineWidth(-1.0)));
    }

    #[test]
    fn fit_to_aspect_ratio_stretches_x() {
        let mut settings = DisplaySettings::default();
        settings.fit_to_aspect_ratio(Viewport::new(800.0, 400.0)).unwrap();

        assert!(settings.display_bounds == Coord2(20.0, 10.0));
    }

    #[test]
    fn fit_to_empty_viewport_leaves_settings_alone() {
        let mut settings = DisplaySettings::default();

        assert!(settings.fit_to_aspect_ratio(Viewport::new(800.0, 0.0)).is_err());
        assert!(settings == DisplaySettings::default());
    }
}
