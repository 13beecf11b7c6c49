//! Block letters for the buttons, built from axis-aligned rectangles so that
//! the extruded shape doubles as its own pick volume.

use crate::picking::Aabb;
use glam::{Vec2, Vec3};

/// Rectangle in em units: x grows right, y grows up, letter height is 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

const fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
    Rect {
        min: Vec2::new(x0, y0),
        max: Vec2::new(x1, y1),
    }
}

const LETTER_I: [Rect; 3] = [
    rect(0.0, 0.85, 0.6, 1.0),
    rect(0.2, 0.15, 0.4, 0.85),
    rect(0.0, 0.0, 0.6, 0.15),
];

const LETTER_U: [Rect; 3] = [
    rect(0.0, 0.2, 0.2, 1.0),
    rect(0.6, 0.2, 0.8, 1.0),
    rect(0.0, 0.0, 0.8, 0.2),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    I,
    U,
}

impl Glyph {
    pub fn rects(self) -> &'static [Rect] {
        match self {
            Glyph::I => &LETTER_I,
            Glyph::U => &LETTER_U,
        }
    }

    /// Extrude the letter into world-space boxes.
    ///
    /// `origin` is the bottom-left corner of the em box on the front face
    /// mid-plane; the extrusion is centered on `origin.z`.
    pub fn extrude(self, origin: Vec3, size: f32, depth: f32) -> Vec<Aabb> {
        let half = depth * 0.5;
        self.rects()
            .iter()
            .map(|r| {
                Aabb::new(
                    Vec3::new(r.min.x * size, r.min.y * size, -half),
                    Vec3::new(r.max.x * size, r.max.y * size, half),
                )
                .translated(origin)
            })
            .collect()
    }
}
