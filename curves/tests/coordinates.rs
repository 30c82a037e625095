extern crate bezier_geometry;

use bezier_geometry::*;

#[test]
fn can_get_distance_between_points() {
    assert!(Coord2(1.0, 1.0).distance_to(&Coord2(1.0, 8.0)) == 7.0);
}

#[test]
fn nan_coordinates_are_not_finite() {
    assert!(Coord2(f64::NAN, 1.0).is_nan());
    assert!(!Coord2(f64::NAN, 1.0).is_finite());
    assert!(!Coord2(1.0, f64::INFINITY).is_finite());
    assert!(Coord2(1.0, 2.0).is_finite());
}

#[test]
fn coord2_from_tuple() {
    let point: Coord2 = (10.0, 20.0).into();

    assert!(point == Coord2(10.0, 20.0));
    assert!(point.x() == 10.0);
    assert!(point.y() == 20.0);
}
