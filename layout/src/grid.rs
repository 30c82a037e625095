use super::error::*;
use super::settings::*;
use super::viewport::*;
use super::transform::*;

use curves::*;

use std::fmt;

///
/// The most grid lines that will be generated along a single axis
///
pub const MAX_GRID_LINES: usize = 4096;

///
/// Grid lines closer than this proportion of an interval to the edge of the viewport are treated as
/// being on the edge (and so are not drawn)
///
const EDGE_TOLERANCE: f64 = 1e-9;

///
/// Identifies one of the two axes of the view
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y")
        }
    }
}

///
/// A straight line in pixel space
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LineSegment {
    pub start:  Coord2,
    pub end:    Coord2
}

impl LineSegment {
    pub fn new(start: Coord2, end: Coord2) -> LineSegment {
        LineSegment { start, end }
    }

    ///
    /// A line across the whole viewport at a position along an axis (a vertical line for the X axis, a horizontal one for Y)
    ///
    pub fn across(viewport: Viewport, axis: Axis, position: f64) -> LineSegment {
        match axis {
            Axis::X => LineSegment::new(Coord2(position, 0.0), Coord2(position, viewport.height)),
            Axis::Y => LineSegment::new(Coord2(0.0, position), Coord2(viewport.width, position))
        }
    }
}

///
/// Returns the two axis lines that cross at the origin (the line for `Axis::X` first)
///
pub fn axis_lines(transform: &ViewTransform) -> Vec<LineSegment> {
    let viewport = transform.viewport();

    Axis::ALL.iter()
        .map(|axis| LineSegment::across(viewport, *axis, transform.origin_position(*axis)))
        .collect()
}

///
/// Returns the pixel positions of the grid lines along an axis
///
/// Grid lines are one interval apart and are aligned with the origin. The origin itself is left out
/// (that's where the axis is drawn), as are lines on or outside either edge of the viewport. The
/// lines are returned in increasing order.
///
pub fn grid_positions(transform: &ViewTransform, axis: Axis) -> Result<Vec<f64>, LayoutError> {
    let size        = transform.viewport().size_along(axis);
    let interval    = transform.interval(axis);
    let origin      = transform.origin_position(axis);
    let tolerance   = interval * EDGE_TOLERANCE;

    // Validated transforms have a positive interval, but a zero interval would need infinitely many lines
    if !(interval > 0.0) {
        return Err(ConfigurationError::GridTooDense(axis).into());
    }

    // Range of steps from the origin that might land inside the viewport
    let first_step  = ((0.0 - origin) / interval).floor();
    let last_step   = ((size - origin) / interval).ceil();
    let num_steps   = last_step - first_step + 1.0;

    if !(num_steps <= (MAX_GRID_LINES as f64)) {
        return Err(ConfigurationError::GridTooDense(axis).into());
    }

    let first_step  = first_step as i64;
    let last_step   = last_step as i64;

    let positions   = (first_step..=last_step)
        .filter(|step| *step != 0)
        .map(|step| origin + (step as f64) * interval)
        .filter(|pos| *pos > tolerance && *pos < size - tolerance)
        .collect();

    Ok(positions)
}

///
/// Returns the grid lines for both axes, the vertical lines (along the X axis) first
///
pub fn grid_lines(transform: &ViewTransform) -> Result<Vec<LineSegment>, LayoutError> {
    let viewport        = transform.viewport();
    let mut grid_lines  = vec![];

    for axis in Axis::ALL.iter() {
        let positions = grid_positions(transform, *axis)?;

        grid_lines.extend(positions.into_iter()
            .map(|pos| LineSegment::across(viewport, *axis, pos)));
    }

    Ok(grid_lines)
}

///
/// Generates the axis lines for some display settings
///
pub fn build_axis_lines(settings: &DisplaySettings, viewport: Viewport) -> Result<Vec<LineSegment>, LayoutError> {
    let transform = ViewTransform::new(settings, viewport)?;

    Ok(axis_lines(&transform))
}

///
/// Generates the grid lines for some display settings
///
pub fn build_grid_lines(settings: &DisplaySettings, viewport: Viewport) -> Result<Vec<LineSegment>, LayoutError> {
    let transform = ViewTransform::new(settings, viewport)?;

    grid_lines(&transform)
}
