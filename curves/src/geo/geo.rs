use super::super::coordinate::*;

///
/// Simple base trait implemented by things representing geometry
///
pub trait Geo {
    /// The type of a point in this geometry
    type Point: Coordinate;
}

///
/// Trait implemented by geometry that can be moved into another coordinate space one point at a time
///
/// Bezier curves are invariant under affine maps, so mapping the control points of a curve
/// produces the same curve as mapping every point along it.
///
pub trait MapPoints : Geo+Sized {
    ///
    /// Returns a copy of this geometry with every defining point passed through a function
    ///
    fn map_points<MapFn: Fn(Self::Point) -> Self::Point>(&self, map_fn: MapFn) -> Self;
}
