//! Tests for extrusion operations.

use super::*;
use approx::assert_relative_eq;
use glam::{DVec2, DVec3};

fn pentagon() -> Polygon2D {
    Polygon2D::new(vec![
        DVec2::new(-2.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(2.0, 3.0),
        DVec2::new(0.0, 5.0),
        DVec2::new(-2.0, 3.0),
    ])
}

#[test]
fn test_extrude_rectangle_counts() {
    let square = Polygon2D::rectangle(DVec2::splat(10.0), false);
    let params = LinearExtrudeParams {
        height: 20.0,
        ..Default::default()
    };
    let mesh = linear_extrude(&square, &params).unwrap();

    assert_eq!(mesh.vertex_count(), 8);
    // 8 side triangles + 2 per cap
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.validate());
}

#[test]
fn test_extrude_centered() {
    let square = Polygon2D::rectangle(DVec2::splat(10.0), true);
    let params = LinearExtrudeParams {
        height: 20.0,
        center: true,
    };
    let mesh = linear_extrude(&square, &params).unwrap();

    let (min, max) = mesh.bounding_box().unwrap();
    assert_relative_eq!(min.z, -10.0);
    assert_relative_eq!(max.z, 10.0);
}

#[test]
fn test_extrude_volume_matches_area_times_height() {
    let profile = pentagon();
    // 4 x 3 rectangle plus a triangle of base 4, height 2
    assert_relative_eq!(profile.signed_area(), 16.0, epsilon = 1e-12);

    let mesh = linear_extrude(&profile, &LinearExtrudeParams { height: 2.5, center: true })
        .unwrap();
    assert_relative_eq!(mesh.volume(), 40.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_clockwise_outline_is_still_outward() {
    let mut profile = pentagon();
    profile.outer.reverse();
    assert!(profile.signed_area() < 0.0);

    let mesh = linear_extrude(&profile, &LinearExtrudeParams::default()).unwrap();
    assert_relative_eq!(mesh.volume(), 16.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_concave_outline() {
    // L-shape, area 3
    let profile = Polygon2D::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(2.0, 1.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 2.0),
        DVec2::new(0.0, 2.0),
    ]);
    let mesh = linear_extrude(&profile, &LinearExtrudeParams::default()).unwrap();

    assert_relative_eq!(mesh.volume(), 3.0, epsilon = 1e-9);
    assert!(mesh.contains_point(DVec3::new(0.5, 1.5, 0.5)));
    assert!(!mesh.contains_point(DVec3::new(1.5, 1.5, 0.5)));
    assert!(mesh.is_closed());
}

#[test]
fn test_extrude_with_hole() {
    let outer = Polygon2D::rectangle(DVec2::splat(4.0), true).outer;
    let hole = Polygon2D::rectangle(DVec2::splat(2.0), true).outer;
    let frame = Polygon2D::with_holes(outer, vec![hole]);
    assert!(frame.has_holes());

    let mesh = linear_extrude(&frame, &LinearExtrudeParams::default()).unwrap();

    assert_relative_eq!(mesh.volume(), 12.0, epsilon = 1e-9);
    assert!(!mesh.contains_point(DVec3::new(0.0, 0.0, 0.5)));
    assert!(mesh.contains_point(DVec3::new(1.5, 0.0, 0.5)));
    assert!(mesh.is_closed());
}

#[test]
fn test_extrude_invalid_height() {
    let square = Polygon2D::rectangle(DVec2::splat(10.0), false);
    for height in [0.0, -1.0, f64::NAN] {
        let params = LinearExtrudeParams {
            height,
            ..Default::default()
        };
        assert!(linear_extrude(&square, &params).is_err());
    }
}

#[test]
fn test_extrude_invalid_polygon() {
    let line = Polygon2D::new(vec![DVec2::ZERO, DVec2::X]);
    assert!(linear_extrude(&line, &LinearExtrudeParams::default()).is_err());
}
