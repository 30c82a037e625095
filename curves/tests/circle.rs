extern crate bezier_geometry;

use bezier_geometry::*;
use bezier_geometry::arc::*;
use bezier_geometry::bezier;

#[test]
fn circle_is_four_connected_curves() {
    let curves: Vec<bezier::Curve<Coord2>> = Circle::new(Coord2(10.0, 20.0), 5.0).to_curves();

    assert!(curves.len() == 4);
    assert!(curves[0].start_point() == Coord2(15.0, 20.0));
    assert!(curves[3].end_point() == Coord2(15.0, 20.0));

    for idx in 0..3 {
        assert!(curves[idx].end_point() == curves[idx+1].start_point());
    }
}

#[test]
fn circle_curves_stay_close_to_radius() {
    let circle                              = Circle::new(Coord2(10.0, 20.0), 5.0);
    let curves: Vec<bezier::Curve<Coord2>>  = circle.to_curves();

    for curve in curves {
        for step in 0..=10 {
            let point   = curve.point_at_pos((step as f64) / 10.0);
            let radius  = point.distance_to(&circle.center);

            assert!((radius - 5.0).abs() < 0.01);
        }
    }
}
