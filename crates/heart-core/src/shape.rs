//! Point generation for the heart: one authored quadrant mirrored across
//! the x = 0 and z = 0 planes.

use glam::Vec3;

/// Mirror an authored quadrant into the full shape.
///
/// The x-mirror copies are appended first, then the z-mirror runs over the
/// set as extended by the x-mirror, so all four (±x, ±z) combinations end
/// up present. Points lying on a mirror plane are not duplicated. Authored
/// points keep their indices.
pub fn mirror_points(authored: &[Vec3]) -> Vec<Vec3> {
    let mut points = authored.to_vec();

    let left: Vec<Vec3> = points
        .iter()
        .filter(|p| p.x != 0.0)
        .map(|p| Vec3::new(-p.x, p.y, p.z))
        .collect();
    points.extend(left);

    let back: Vec<Vec3> = points
        .iter()
        .filter(|p| p.z != 0.0)
        .map(|p| Vec3::new(p.x, p.y, -p.z))
        .collect();
    points.extend(back);

    points
}

/// Outward unit direction of a rest point; zero for a point at the origin.
#[inline]
pub fn radial_normal(rest: Vec3) -> Vec3 {
    rest.normalize_or_zero()
}

/// Rest position pushed `d` units along its own radial direction.
#[inline]
pub fn displaced(rest: Vec3, d: f32) -> Vec3 {
    rest + radial_normal(rest) * d
}
