use super::basis::*;
use super::de_casteljau::*;

use super::super::geo::*;
use super::super::coordinate::*;

///
/// Trait implemented by bezier curves that can create new versions of themselves
///
pub trait BezierCurveFactory: BezierCurve {
    ///
    /// Creates a new bezier curve of the same type from some points
    ///
    fn from_points(start: Self::Point, control_points: (Self::Point, Self::Point), end: Self::Point) -> Self;
}

///
/// Trait implemented by things representing a cubic bezier curve
///
pub trait BezierCurve: Geo+Clone+Sized {
    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Self::Point;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Self::Point;

    ///
    /// The control points in this curve
    ///
    fn control_points(&self) -> (Self::Point, Self::Point);

    ///
    /// The four points defining this curve, in the order start, control point 1, control point 2, end
    ///
    #[inline]
    fn all_points(&self) -> [Self::Point; 4] {
        let (cp1, cp2) = self.control_points();
        [self.start_point(), cp1, cp2, self.end_point()]
    }

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let control_points = self.control_points();
        basis(t, self.start_point(), control_points.0, control_points.1, self.end_point())
    }

    ///
    /// Returns the intermediate points of the De Casteljau construction at `t`
    ///
    #[inline]
    fn de_casteljau(&self, t: f64) -> DeCasteljau<Self::Point> {
        let (cp1, cp2) = self.control_points();
        de_casteljau4(t, self.start_point(), cp1, cp2, self.end_point())
    }

    ///
    /// Evaluates this curve at `num_segments+1` evenly spaced values of t, including both ends
    ///
    fn sample_points(&self, num_segments: usize) -> Vec<Self::Point> {
        let num_segments = num_segments.max(1);

        (0..=num_segments)
            .map(|segment| {
                if segment == 0 {
                    self.start_point()
                } else if segment == num_segments {
                    self.end_point()
                } else {
                    self.point_at_pos((segment as f64) / (num_segments as f64))
                }
            })
            .collect()
    }
}

///
/// Represents a Bezier curve
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve<Coord: Coordinate> {
    pub start_point:    Coord,
    pub end_point:      Coord,
    pub control_points: (Coord, Coord)
}

impl<Coord: Coordinate> Curve<Coord> {
    ///
    /// Creates a curve with every point at the origin
    ///
    pub fn empty() -> Curve<Coord> {
        Curve {
            start_point:    Coord::origin(),
            end_point:      Coord::origin(),
            control_points: (Coord::origin(), Coord::origin())
        }
    }

    ///
    /// Creates a curve from its points in the order start, control point 1, control point 2, end
    ///
    pub fn from_array(points: [Coord; 4]) -> Curve<Coord> {
        Curve {
            start_point:    points[0],
            control_points: (points[1], points[2]),
            end_point:      points[3]
        }
    }
}

impl<Coord: Coordinate> Default for Curve<Coord> {
    fn default() -> Self {
        Curve::empty()
    }
}

impl<Coord: Coordinate> Geo for Curve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> MapPoints for Curve<Coord> {
    fn map_points<MapFn: Fn(Coord) -> Coord>(&self, map_fn: MapFn) -> Self {
        Curve {
            start_point:    map_fn(self.start_point),
            control_points: (map_fn(self.control_points.0), map_fn(self.control_points.1)),
            end_point:      map_fn(self.end_point)
        }
    }
}

impl<Coord: Coordinate> BezierCurveFactory for Curve<Coord> {
    fn from_points(start: Coord, (control_point1, control_point2): (Coord, Coord), end: Coord) -> Self {
        Curve {
            start_point:    start,
            control_points: (control_point1, control_point2),
            end_point:      end
        }
    }
}

impl<Coord: Coordinate> BezierCurve for Curve<Coord> {
    #[inline]
    fn start_point(&self) -> Coord {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord {
        self.end_point
    }

    #[inline]
    fn control_points(&self) -> (Coord, Coord) {
        self.control_points
    }
}
