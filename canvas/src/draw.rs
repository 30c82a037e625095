use super::color::*;

///
/// Instructions for drawing to a canvas
///
/// Coordinates are in pixels, matching the viewport the drawing was laid out for.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Draw {
    /// Begins a new path
    NewPath,

    /// Move to a new point
    Move(f32, f32),

    /// Line to point
    Line(f32, f32),

    /// Bezier curve to point (end point, control point 1, control point 2)
    BezierCurve((f32, f32), (f32, f32), (f32, f32)),

    /// Closes the current path
    ClosePath,

    /// Fill the current path
    Fill,

    /// Draw a line around the current path
    Stroke,

    /// Set the line width
    LineWidth(f32),

    /// Sets the fill colour
    FillColor(Color),

    /// Sets the line colour
    StrokeColor(Color),

    /// Clears the canvas entirely
    ClearCanvas(Color)
}
