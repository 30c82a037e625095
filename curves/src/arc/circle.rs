use super::super::bezier::*;
use super::super::coordinate::*;

///
/// Distance along the tangent to place the control points of a quarter-circle bezier arc, as a
/// proportion of the radius
///
const QUARTER_ARC_CONTROL: f64 = 0.552_284_749_830_793_6;

///
/// Represents a circle in two dimensions
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Coord2,
    pub radius: f64
}

impl Circle {
    ///
    /// Creates a new circle with a center and a radius
    ///
    pub fn new(center: Coord2, radius: f64) -> Circle {
        Circle { center, radius }
    }

    ///
    /// Converts this circle to a closed path of four bezier curves, starting at the rightmost point and
    /// proceeding counter-clockwise (in a y-up coordinate system)
    ///
    pub fn to_curves<Curve: BezierCurveFactory<Point=Coord2>>(&self) -> Vec<Curve> {
        let Coord2(cx, cy)  = self.center;
        let r               = self.radius;
        let k               = r * QUARTER_ARC_CONTROL;

        let right           = Coord2(cx + r, cy);
        let top             = Coord2(cx, cy + r);
        let left            = Coord2(cx - r, cy);
        let bottom          = Coord2(cx, cy - r);

        vec![
            Curve::from_points(right,   (Coord2(cx + r, cy + k), Coord2(cx + k, cy + r)), top),
            Curve::from_points(top,     (Coord2(cx - k, cy + r), Coord2(cx - r, cy + k)), left),
            Curve::from_points(left,    (Coord2(cx - r, cy - k), Coord2(cx - k, cy - r)), bottom),
            Curve::from_points(bottom,  (Coord2(cx + k, cy - r), Coord2(cx + r, cy - k)), right)
        ]
    }
}
