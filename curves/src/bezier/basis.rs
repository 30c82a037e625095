use super::super::coordinate::*;

///
/// The cubic bezier weighted basis function
///
/// `B(t) = (1-t)^3 w1 + 3(1-t)^2 t w2 + 3(1-t) t^2 w3 + t^3 w4`
///
/// At `t = 0` this is exactly `w1` and at `t = 1` it is exactly `w4`, as every other term is
/// multiplied by zero.
///
#[inline]
pub fn basis<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t_squared           = t*t;
    let t_cubed             = t_squared*t;

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let one_minus_t_cubed   = one_minus_t_squared*one_minus_t;

    w1*one_minus_t_cubed
        + w2*(3.0*one_minus_t_squared*t)
        + w3*(3.0*one_minus_t*t_squared)
        + w4*t_cubed
}

///
/// Linear interpolation between two points, the single step of the De Casteljau algorithm
///
#[inline]
pub fn de_casteljau2<Point: Coordinate>(t: f64, w1: Point, w2: Point) -> Point {
    w1*(1.0-t) + w2*t
}
