extern crate bezier_geometry;

use bezier_geometry::*;
use bezier_geometry::bezier;

pub fn approx_equal(a: f64, b: f64) -> bool {
    f64::abs(a-b) < 1e-9
}

pub fn approx_equal_coord(a: Coord2, b: Coord2) -> bool {
    approx_equal(a.x(), b.x()) && approx_equal(a.y(), b.y())
}

fn example_curve() -> bezier::Curve<Coord2> {
    bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(10.0, 20.0), Coord2(30.0, 40.0)), Coord2(50.0, 50.0))
}

#[test]
fn read_curve_control_points() {
    let curve = bezier::Curve::from_points(Coord2(1.0, 1.0), (Coord2(3.0, 3.0), Coord2(4.0, 4.0)), Coord2(2.0, 2.0));

    assert!(curve.start_point() == Coord2(1.0, 1.0));
    assert!(curve.end_point() == Coord2(2.0, 2.0));
    assert!(curve.control_points() == (Coord2(3.0, 3.0), Coord2(4.0, 4.0)));
    assert!(curve.all_points() == [Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 4.0), Coord2(2.0, 2.0)]);
}

#[test]
fn empty_curve_is_at_origin() {
    let curve = bezier::Curve::<Coord2>::empty();

    assert!(curve.all_points().iter().all(|point| *point == Coord2(0.0, 0.0)));
}

#[test]
fn basis_at_t0_is_w1() {
    assert!(bezier::basis(0.0, 2.0, 3.0, 4.0, 5.0) == 2.0);
}

#[test]
fn basis_at_t1_is_w4() {
    assert!(bezier::basis(1.0, 2.0, 3.0, 4.0, 5.0) == 5.0);
}

#[test]
fn point_at_ends_matches_start_and_end() {
    let curve = bezier::Curve::from_points(Coord2(0.1, -3.7), (Coord2(10.3, 20.9), Coord2(-30.2, 40.4)), Coord2(50.5, 0.3));

    assert!(approx_equal_coord(curve.point_at_pos(0.0), Coord2(0.1, -3.7)));
    assert!(approx_equal_coord(curve.point_at_pos(1.0), Coord2(50.5, 0.3)));
}

#[test]
fn point_at_midpoint() {
    let curve = example_curve();

    assert!(approx_equal_coord(curve.point_at_pos(0.5), Coord2(21.25, 28.75)));
}

#[test]
fn de_casteljau_point_is_on_curve() {
    let curve = example_curve();

    for step in 0..=20 {
        let t           = (step as f64) / 20.0;
        let construct   = curve.de_casteljau(t);

        assert!(construct.t == t);
        assert!(approx_equal_coord(construct.point, curve.point_at_pos(t)));
    }
}

#[test]
fn de_casteljau_levels_interpolate_neighbours() {
    let curve       = example_curve();
    let construct   = curve.de_casteljau(0.25);

    // First level is a quarter of the way between each pair of control points
    assert!(approx_equal_coord(construct.first.0, Coord2(2.5, 5.0)));
    assert!(approx_equal_coord(construct.first.1, Coord2(15.0, 25.0)));
    assert!(approx_equal_coord(construct.first.2, Coord2(35.0, 42.5)));

    // Second level is between the first level points
    assert!(approx_equal_coord(construct.second.0, Coord2(5.625, 10.0)));
    assert!(approx_equal_coord(construct.second.1, Coord2(20.0, 29.375)));
}

#[test]
fn de_casteljau_at_ends() {
    let curve = example_curve();

    assert!(curve.de_casteljau(0.0).point == Coord2(0.0, 0.0));
    assert!(curve.de_casteljau(1.0).point == Coord2(50.0, 50.0));
}

#[test]
fn sample_points_include_both_ends() {
    let curve   = example_curve();
    let samples = curve.sample_points(16);

    assert!(samples.len() == 17);
    assert!(samples[0] == curve.start_point());
    assert!(samples[16] == curve.end_point());
}

#[test]
fn sample_points_with_zero_segments_still_has_ends() {
    let curve   = example_curve();
    let samples = curve.sample_points(0);

    assert!(samples.len() == 2);
    assert!(samples[0] == curve.start_point());
    assert!(samples[1] == curve.end_point());
}

#[test]
fn map_points_moves_every_point() {
    let curve   = example_curve();
    let moved   = curve.map_points(|point| point + Coord2(1.0, 2.0));

    assert!(moved.all_points() == [Coord2(1.0, 2.0), Coord2(11.0, 22.0), Coord2(31.0, 42.0), Coord2(51.0, 52.0)]);
}
