use curves::*;
use curves::bezier;

use std::fmt;

///
/// Identifies one of the four points that define a cubic bezier curve
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ControlPoint {
    /// The start of the curve
    P0,

    /// The first control handle
    P1,

    /// The second control handle
    P2,

    /// The end of the curve
    P3
}

impl ControlPoint {
    pub const ALL: [ControlPoint; 4] = [ControlPoint::P0, ControlPoint::P1, ControlPoint::P2, ControlPoint::P3];

    ///
    /// The index of this point in `BezierCurve::all_points()`
    ///
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            ControlPoint::P0 => 0,
            ControlPoint::P1 => 1,
            ControlPoint::P2 => 2,
            ControlPoint::P3 => 3
        }
    }

    ///
    /// Reads this point from a curve
    ///
    pub fn point_in(&self, curve: &bezier::Curve<Coord2>) -> Coord2 {
        match self {
            ControlPoint::P0 => curve.start_point,
            ControlPoint::P1 => curve.control_points.0,
            ControlPoint::P2 => curve.control_points.1,
            ControlPoint::P3 => curve.end_point
        }
    }

    ///
    /// Returns a copy of a curve with this point moved
    ///
    pub fn with_point(&self, curve: &bezier::Curve<Coord2>, new_point: Coord2) -> bezier::Curve<Coord2> {
        let mut curve = *curve;

        match self {
            ControlPoint::P0 => curve.start_point           = new_point,
            ControlPoint::P1 => curve.control_points.0      = new_point,
            ControlPoint::P2 => curve.control_points.1      = new_point,
            ControlPoint::P3 => curve.end_point             = new_point
        }

        curve
    }
}

impl fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{}", self.index())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn index_matches_all_points() {
        let curve = bezier::Curve::from_array([Coord2(0.0, 0.0), Coord2(10.0, 20.0), Coord2(30.0, 40.0), Coord2(50.0, 50.0)]);

        for point in ControlPoint::ALL.iter() {
            assert!(point.point_in(&curve) == curve.all_points()[point.index()]);
        }
    }

    #[test]
    fn move_one_point() {
        let curve = bezier::Curve::from_array([Coord2(0.0, 0.0), Coord2(10.0, 20.0), Coord2(30.0, 40.0), Coord2(50.0, 50.0)]);
        let moved = ControlPoint::P2.with_point(&curve, Coord2(1.0, 2.0));

        assert!(moved.all_points() == [Coord2(0.0, 0.0), Coord2(10.0, 20.0), Coord2(1.0, 2.0), Coord2(50.0, 50.0)]);
    }
}
