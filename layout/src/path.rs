use super::error::*;
use super::settings::*;
use super::viewport::*;
use super::transform::*;

use curves::*;
use curves::bezier;
use canvas::*;

///
/// The most segments that a curve will be flattened into
///
pub const MAX_POLYLINE_SEGMENTS: usize = 4096;

///
/// How the curve should be described to the renderer
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum CurveRendering {
    /// A single cubic bezier segment (for renderers that can draw these directly)
    NativeCubic,

    /// A polyline through points evaluated at evenly spaced values of t (between 1 and `MAX_POLYLINE_SEGMENTS` segments)
    Polyline { segments: usize }
}

impl Default for CurveRendering {
    fn default() -> CurveRendering {
        CurveRendering::NativeCubic
    }
}

///
/// The path of the curve in pixel space
///
#[derive(Clone, PartialEq, Debug)]
pub enum CurvePath {
    /// One cubic segment, with every point already transformed to pixel space
    Cubic(bezier::Curve<Coord2>),

    /// A flattened version of the curve
    Polyline(Vec<Coord2>)
}

impl CurvePath {
    ///
    /// Where this path begins
    ///
    pub fn start_point(&self) -> Coord2 {
        match self {
            CurvePath::Cubic(curve)     => curve.start_point(),
            CurvePath::Polyline(points) => points[0]
        }
    }

    ///
    /// Where this path finishes
    ///
    pub fn end_point(&self) -> Coord2 {
        match self {
            CurvePath::Cubic(curve)     => curve.end_point(),
            CurvePath::Polyline(points) => points[points.len()-1]
        }
    }

    ///
    /// Adds this path to the current path of a graphics context
    ///
    pub fn draw<Gc: GraphicsContext+?Sized>(&self, gc: &mut Gc) {
        let start = self.start_point();
        gc.move_to(start.x() as f32, start.y() as f32);

        match self {
            CurvePath::Cubic(curve)     => gc_draw_bezier(gc, curve),
            CurvePath::Polyline(points) => {
                for point in points.iter().skip(1) {
                    gc.line_to(point.x() as f32, point.y() as f32);
                }
            }
        }
    }
}

///
/// Returns the pixel positions of each of the curve's points, in the order p0, p1, p2, p3
///
pub fn control_point_positions(transform: &ViewTransform, curve: &bezier::Curve<Coord2>) -> [Coord2; 4] {
    let [p0, p1, p2, p3] = curve.all_points();

    [transform.to_pixel_space(p0), transform.to_pixel_space(p1), transform.to_pixel_space(p2), transform.to_pixel_space(p3)]
}

///
/// Generates the pixel-space path for a curve
///
/// Every point of the curve goes through the same transform, so a cubic path is the exact curve. Polylines
/// are evaluated from the transformed curve, which always start and end on the transformed end points. Requests
/// for more than `MAX_POLYLINE_SEGMENTS` segments are limited to that many.
///
pub fn curve_path(transform: &ViewTransform, curve: &bezier::Curve<Coord2>, rendering: CurveRendering) -> CurvePath {
    let pixel_curve = curve.map_points(|point| transform.to_pixel_space(point));

    match rendering {
        CurveRendering::NativeCubic             => CurvePath::Cubic(pixel_curve),
        CurveRendering::Polyline { segments }   => {
            if segments > MAX_POLYLINE_SEGMENTS {
                debug!("Limiting curve to {} segments (requested {})", MAX_POLYLINE_SEGMENTS, segments);
            }

            CurvePath::Polyline(pixel_curve.sample_points(segments.min(MAX_POLYLINE_SEGMENTS)))
        }
    }
}

///
/// Builds the pixel-space path for a curve from the display settings and the viewport
///
pub fn build_curve_path(curve: &bezier::Curve<Coord2>, settings: &DisplaySettings, viewport: Viewport, rendering: CurveRendering) -> Result<CurvePath, LayoutError> {
    let transform = ViewTransform::new(settings, viewport)?;

    Ok(curve_path(&transform, curve, rendering))
}
