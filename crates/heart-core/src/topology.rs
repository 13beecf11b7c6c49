//! Edge discovery between heart points and the placement of the tube that
//! renders each edge.

use glam::{Quat, Vec3};

/// Connection between two points, addressed by index.
///
/// Edges are recorded per ordered pair, so a connected pair shows up as both
/// `(i, j)` and `(j, i)`; each one owns its own tube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

/// All ordered pairs of distinct points closer than `threshold` (exclusive).
pub fn build_edges(points: &[Vec3], threshold: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (i, p1) in points.iter().enumerate() {
        for (j, p2) in points.iter().enumerate() {
            if i != j && p1.distance(*p2) < threshold {
                edges.push(Edge { a: i, b: j });
            }
        }
    }
    edges
}

/// Placement of a tube stretched between two ball centers.
///
/// The tube mesh is a unit-height cylinder along +Y centered at the origin,
/// so `length` is its Y scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TubeTransform {
    pub midpoint: Vec3,
    pub length: f32,
    pub rotation: Quat,
}

impl Default for TubeTransform {
    fn default() -> Self {
        Self {
            midpoint: Vec3::ZERO,
            length: 0.0,
            rotation: Quat::IDENTITY,
        }
    }
}

impl TubeTransform {
    /// Tube from `p1` toward `p2`. Coincident endpoints give a zero-length
    /// tube with no rotation.
    pub fn between(p1: Vec3, p2: Vec3) -> Self {
        let delta = p2 - p1;
        let length = delta.length();
        let dir = delta.normalize_or_zero();
        let rotation = if dir == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_arc(Vec3::Y, dir)
        };
        Self {
            midpoint: p1 + delta * 0.5,
            length,
            rotation,
        }
    }

    /// Direction the tube points along (its rotated +Y axis).
    pub fn axis(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}
