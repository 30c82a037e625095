use super::path::*;
use super::transform::*;

use curves::*;
use curves::bezier;

///
/// The De Casteljau construction of the point at `t` along the curve, in pixel space
///
/// This is the scaffolding drawn between the control points: the control polygon `p0-p1-p2-p3`,
/// the first interpolation level `q0-q1-q2`, the second level `r0-r1` and the point `b` on the
/// curve.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ConstructionLayout {
    /// The value of t that was used for the construction
    pub t: f64,

    /// p0, p1, p2, p3
    pub control_points: [Coord2; 4],

    /// q0, q1, q2
    pub first: [Coord2; 3],

    /// r0, r1
    pub second: [Coord2; 2],

    /// b, the point on the curve at t
    pub point: Coord2
}

impl ConstructionLayout {
    ///
    /// Lays out the construction for a curve at a particular value of t (which is clamped to the range 0-1)
    ///
    pub fn new(transform: &ViewTransform, curve: &bezier::Curve<Coord2>, t: f64) -> ConstructionLayout {
        let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };

        // The construction is affine-invariant, so it can be performed on the transformed curve
        let pixel_curve = curve.map_points(|point| transform.to_pixel_space(point));
        let construct   = pixel_curve.de_casteljau(t);

        ConstructionLayout {
            t:              t,
            control_points: control_point_positions(transform, curve),
            first:          [construct.first.0, construct.first.1, construct.first.2],
            second:         [construct.second.0, construct.second.1],
            point:          construct.point
        }
    }

    ///
    /// The polylines joining each level of the construction: the control polygon, then the first and second levels
    ///
    pub fn lines(&self) -> Vec<Vec<Coord2>> {
        vec![
            self.control_points.to_vec(),
            self.first.to_vec(),
            self.second.to_vec()
        ]
    }

    ///
    /// The points generated by the construction (q0, q1, q2, r0, r1, b)
    ///
    pub fn construction_points(&self) -> Vec<Coord2> {
        self.first.iter()
            .chain(self.second.iter())
            .chain(Some(&self.point))
            .cloned()
            .collect()
    }
}
