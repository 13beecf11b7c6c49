// Host-side tests for point generation and mirroring.

use glam::Vec3;
use heart_core::shape::{displaced, mirror_points, radial_normal};
use heart_core::{CENTER_INDEX, HEART_HALF};

fn heart_points() -> Vec<Vec3> {
    mirror_points(&HEART_HALF.map(Vec3::from))
}

fn contains(points: &[Vec3], p: Vec3) -> bool {
    points.iter().any(|q| q.abs_diff_eq(p, 1e-6))
}

#[test]
fn single_point_mirrors_into_four_quadrants() {
    let points = mirror_points(&[Vec3::new(1.0, 0.0, 1.0)]);
    assert_eq!(
        points,
        vec![
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, -1.0),
        ]
    );
}

#[test]
fn points_on_mirror_planes_are_not_duplicated() {
    // On both planes: kept once
    assert_eq!(mirror_points(&[Vec3::new(0.0, 1.0, 0.0)]).len(), 1);
    // On x = 0 only: mirrored across z
    assert_eq!(mirror_points(&[Vec3::new(0.0, 1.0, 0.5)]).len(), 2);
    // On z = 0 only: mirrored across x
    assert_eq!(mirror_points(&[Vec3::new(0.5, 1.0, 0.0)]).len(), 2);
}

#[test]
fn heart_has_forty_points() {
    // 17 authored, 10 off the x = 0 plane, then 13 off the z = 0 plane
    assert_eq!(heart_points().len(), 40);
}

#[test]
fn heart_is_symmetric_across_both_planes() {
    let points = heart_points();
    for p in &points {
        assert!(contains(&points, Vec3::new(-p.x, p.y, p.z)), "missing x-mirror of {p}");
        assert!(contains(&points, Vec3::new(p.x, p.y, -p.z)), "missing z-mirror of {p}");
    }
}

#[test]
fn authored_points_keep_their_indices() {
    let points = heart_points();
    for (i, a) in HEART_HALF.iter().enumerate() {
        assert_eq!(points[i], Vec3::from(*a));
    }
    assert_eq!(points[CENTER_INDEX], Vec3::from(HEART_HALF[CENTER_INDEX]));
}

#[test]
fn radial_displacement_moves_along_the_rest_direction() {
    let moved = displaced(Vec3::new(0.0, 1.0, 0.0), 0.2);
    assert!(moved.abs_diff_eq(Vec3::new(0.0, 1.2, 0.0), 1e-6));

    // Negative displacement pulls inward
    let pulled = displaced(Vec3::new(2.0, 0.0, 0.0), -0.5);
    assert!(pulled.abs_diff_eq(Vec3::new(1.5, 0.0, 0.0), 1e-6));
}

#[test]
fn origin_has_no_radial_direction() {
    assert_eq!(radial_normal(Vec3::ZERO), Vec3::ZERO);
    assert_eq!(displaced(Vec3::ZERO, 0.3), Vec3::ZERO);
}
