use super::grid::*;
use super::viewport::*;

use curves::*;

use std::fmt;
use std::error::Error;

///
/// Ways that the settings or viewport for a layout pass can be invalid
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigurationError {
    /// A display bounds component was zero, negative, not finite or too small to scale by
    DisplayBounds(Coord2),

    /// The origin offset was not a finite number (or moved the origin to an infinite pixel position)
    OriginOffset(Coord2),

    /// The viewport has no area, or has a dimension that is not a finite number
    Viewport(Viewport),

    /// A line width or the control point size was negative or not finite
    LineWidth(f64),

    /// Drawing the grid would need more than `MAX_GRID_LINES` lines along an axis
    GridTooDense(Axis)
}

///
/// Errors from a layout pass
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutError {
    /// The settings or viewport can't be laid out
    InvalidConfiguration(ConfigurationError),

    /// Something that depends on the curve was requested but no curve is bound to the view
    MissingModel
}

impl From<ConfigurationError> for LayoutError {
    fn from(err: ConfigurationError) -> LayoutError {
        LayoutError::InvalidConfiguration(err)
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ConfigurationError::*;

        match self {
            DisplayBounds(Coord2(x, y)) => write!(f, "Display bounds must be greater than zero (got {} x {})", x, y),
            OriginOffset(Coord2(x, y))  => write!(f, "Origin offset must be a finite position (got {}, {})", x, y),
            Viewport(viewport)          => write!(f, "The view has no drawable area ({} x {} pixels)", viewport.width, viewport.height),
            LineWidth(width)            => write!(f, "Line widths must be zero or more (got {})", width),
            GridTooDense(axis)          => write!(f, "Too many grid lines along the {} axis: reduce the display bounds", axis)
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutError::InvalidConfiguration(err)  => err.fmt(f),
            LayoutError::MissingModel               => write!(f, "There is no curve to display")
        }
    }
}

impl Error for ConfigurationError { }

impl Error for LayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LayoutError::InvalidConfiguration(err)  => Some(err),
            LayoutError::MissingModel               => None
        }
    }
}
