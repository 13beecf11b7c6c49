//! Ray casting against balls and button boxes.

use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }
}

/// Axis-aligned box given by its min and max corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // Origin inside the sphere: report the exit point.
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Slab test. Returns the entry distance, or zero when the origin is inside.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];
        let (lo, hi) = (aabb.min[axis], aabb.max[axis]);
        if d.abs() < 1e-8 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (lo - o) * inv;
        let mut t1 = (hi - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

/// Nearest hit among several boxes.
pub fn ray_boxes(ray: &Ray, boxes: &[Aabb]) -> Option<f32> {
    boxes
        .iter()
        .filter_map(|b| ray_aabb(ray, b))
        .min_by(|a, b| a.total_cmp(b))
}

/// A hit on target `id` at distance `t` along the ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<I> {
    pub id: I,
    pub t: f32,
}

/// Hits sorted nearest first.
pub fn sorted_hits<I: Copy>(
    candidates: impl IntoIterator<Item = (I, Option<f32>)>,
) -> SmallVec<[Hit<I>; 4]> {
    let mut hits: SmallVec<[Hit<I>; 4]> = candidates
        .into_iter()
        .filter_map(|(id, t)| t.map(|t| Hit { id, t }))
        .collect();
    hits.sort_by(|a, b| a.t.total_cmp(&b.t));
    hits
}

/// Nearest hit only.
pub fn nearest_hit<I: Copy>(candidates: impl IntoIterator<Item = (I, Option<f32>)>) -> Option<Hit<I>> {
    sorted_hits(candidates).first().copied()
}
