extern crate bezier_geometry;
extern crate bezier_layout;

use bezier_geometry::*;
use bezier_layout::*;

fn transform(bounds: Coord2, offset: Coord2, viewport: Viewport) -> ViewTransform {
    let settings = DisplaySettings { display_bounds: bounds, origin_offset: offset, ..DisplaySettings::default() };

    ViewTransform::new(&settings, viewport).unwrap()
}

#[test]
fn nine_grid_lines_in_400_pixels() {
    let transform   = transform(Coord2(10.0, 10.0), Coord2(0.0, 0.0), Viewport::new(400.0, 400.0));
    let positions   = grid_positions(&transform, Axis::X).unwrap();

    assert!(positions == vec![40.0, 80.0, 120.0, 160.0, 200.0, 240.0, 280.0, 320.0, 360.0]);
}

#[test]
fn grid_lines_for_both_axes() {
    let settings    = DisplaySettings { display_bounds: Coord2(10.0, 4.0), ..DisplaySettings::default() };
    let lines       = build_grid_lines(&settings, Viewport::new(400.0, 200.0)).unwrap();

    // 9 vertical lines then 3 horizontal ones
    assert!(lines.len() == 12);
    assert!(lines[0] == LineSegment::new(Coord2(40.0, 0.0), Coord2(40.0, 200.0)));
    assert!(lines[9] == LineSegment::new(Coord2(0.0, 50.0), Coord2(400.0, 50.0)));
}

#[test]
fn grid_never_includes_axis() {
    let offsets = [0.0, 1.0, 2.5, 5.0, 9.0, 10.0, -2.0, 1.0/3.0];

    for offset in offsets.iter() {
        let transform   = transform(Coord2(10.0, 10.0), Coord2(*offset, *offset), Viewport::new(400.0, 400.0));
        let origin      = transform.origin_position(Axis::X);

        for pos in grid_positions(&transform, Axis::X).unwrap() {
            assert!((pos - origin).abs() > 1.0);
        }
    }
}

#[test]
fn grid_lines_either_side_of_centred_origin() {
    let transform   = transform(Coord2(10.0, 10.0), Coord2(5.0, 5.0), Viewport::new(400.0, 400.0));
    let positions   = grid_positions(&transform, Axis::Y).unwrap();

    assert!(positions == vec![40.0, 80.0, 120.0, 160.0, 240.0, 280.0, 320.0, 360.0]);
}

#[test]
fn no_grid_lines_on_viewport_edges() {
    // 400/3 doesn't divide evenly, so the third line might end up a fraction of a pixel from the edge
    let transform   = transform(Coord2(3.0, 3.0), Coord2(0.0, 0.0), Viewport::new(400.0, 400.0));
    let positions   = grid_positions(&transform, Axis::X).unwrap();

    assert!(positions.len() == 2);
    assert!(positions.iter().all(|pos| *pos > 0.0 && *pos < 400.0));
}

#[test]
fn origin_at_far_edge() {
    let transform   = transform(Coord2(10.0, 10.0), Coord2(10.0, 10.0), Viewport::new(400.0, 400.0));
    let positions   = grid_positions(&transform, Axis::X).unwrap();

    assert!(positions.len() == 9);
    assert!(positions[0] == 40.0);
    assert!(positions[8] == 360.0);
}

#[test]
fn negative_origin_only_draws_visible_lines() {
    let transform   = transform(Coord2(10.0, 10.0), Coord2(-2.5, 0.0), Viewport::new(400.0, 400.0));
    let positions   = grid_positions(&transform, Axis::X).unwrap();

    assert!(positions == vec![20.0, 60.0, 100.0, 140.0, 180.0, 220.0, 260.0, 300.0, 340.0, 380.0]);
}

#[test]
fn origin_far_outside_viewport() {
    let transform   = transform(Coord2(10.0, 10.0), Coord2(1e9, -1e9), Viewport::new(400.0, 400.0));

    assert!(grid_positions(&transform, Axis::X).unwrap().len() == 9);
    assert!(grid_positions(&transform, Axis::Y).unwrap().len() == 9);
}

#[test]
fn axis_lines_cross_at_origin() {
    let settings    = DisplaySettings { origin_offset: Coord2(2.0, 3.0), ..DisplaySettings::default() };
    let axes        = build_axis_lines(&settings, Viewport::new(400.0, 200.0)).unwrap();

    assert!(axes == vec![
        LineSegment::new(Coord2(80.0, 0.0), Coord2(80.0, 200.0)),
        LineSegment::new(Coord2(0.0, 60.0), Coord2(400.0, 60.0))
    ]);
}

#[test]
fn zero_display_bounds_is_rejected_before_generating_lines() {
    let settings = DisplaySettings { display_bounds: Coord2(10.0, 0.0), ..DisplaySettings::default() };

    assert!(build_grid_lines(&settings, Viewport::new(400.0, 400.0))
        == Err(LayoutError::InvalidConfiguration(ConfigurationError::DisplayBounds(Coord2(10.0, 0.0)))));
    assert!(build_axis_lines(&settings, Viewport::new(400.0, 400.0)).is_err());
}

#[test]
fn huge_display_bounds_are_too_dense() {
    let settings = DisplaySettings { display_bounds: Coord2(1e12, 10.0), ..DisplaySettings::default() };

    assert!(build_grid_lines(&settings, Viewport::new(400.0, 400.0))
        == Err(LayoutError::InvalidConfiguration(ConfigurationError::GridTooDense(Axis::X))));
}
