use super::basis::*;
use super::super::coordinate::*;

///
/// The intermediate points generated by running the De Casteljau algorithm on a cubic curve
///
/// The first level interpolates between neighbouring control points, the second between
/// neighbouring first-level points and the final point (which is on the curve) between the two
/// second-level points.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeCasteljau<Point: Coordinate> {
    /// The parameter these points were generated for
    pub t: f64,

    /// First level: between (w1, w2), (w2, w3) and (w3, w4)
    pub first: (Point, Point, Point),

    /// Second level: between the first level points
    pub second: (Point, Point),

    /// The point on the curve at `t`
    pub point: Point
}

///
/// Runs the De Casteljau construction on a cubic bezier curve, returning every intermediate point
///
pub fn de_casteljau4<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> DeCasteljau<Point> {
    // Weights (from de casteljau)
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);
    let wn3 = de_casteljau2(t, w3, w4);

    // Further refine the weights
    let wnn1 = de_casteljau2(t, wn1, wn2);
    let wnn2 = de_casteljau2(t, wn2, wn3);

    // Get the point at which the two curves join
    let p = de_casteljau2(t, wnn1, wnn2);

    DeCasteljau {
        t:      t,
        first:  (wn1, wn2, wn3),
        second: (wnn1, wnn2),
        point:  p
    }
}
