use crate::constants::CLICK_MAX_TRAVEL_PX;
use crate::interaction::PointerFrame;
use crate::state::OrbitCamera;
use glam::Vec2;

/// Pointer events accumulated between frames.
///
/// Frontends translate their native events into `moved`/`pressed`/
/// `released`/`wheel` calls; once per frame [`PointerState::frame`] drains
/// drag and wheel into the orbit camera and yields the picking ray and click.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    /// Surface pixel coordinates, origin top-left.
    pub x: f32,
    pub y: f32,
    pub inside: bool,
    pub down: bool,
    travel: f32,
    drag: Vec2,
    wheel: f32,
    clicked: bool,
}

impl PointerState {
    pub fn moved(&mut self, x: f32, y: f32) {
        if self.down {
            let delta = Vec2::new(x - self.x, y - self.y);
            self.drag += delta;
            self.travel += delta.length();
        }
        self.x = x;
        self.y = y;
        self.inside = true;
    }

    pub fn pressed(&mut self, x: f32, y: f32) {
        self.moved(x, y);
        self.down = true;
        self.travel = 0.0;
    }

    /// A release counts as a click unless the pointer was dragged.
    pub fn released(&mut self) {
        if self.down && self.travel <= CLICK_MAX_TRAVEL_PX {
            self.clicked = true;
        }
        self.down = false;
    }

    pub fn left(&mut self) {
        self.inside = false;
        self.down = false;
    }

    pub fn wheel(&mut self, delta: f32) {
        self.wheel += delta;
    }

    /// Drain this frame's input: apply drag/zoom to the camera, step its
    /// damping, then build the picking ray from the updated view.
    pub fn frame(&mut self, orbit: &mut OrbitCamera, width: f32, height: f32) -> PointerFrame {
        if self.drag != Vec2::ZERO {
            orbit.drag(self.drag.x, self.drag.y);
            self.drag = Vec2::ZERO;
        }
        if self.wheel != 0.0 {
            orbit.zoom(self.wheel);
            self.wheel = 0.0;
        }
        orbit.update();
        let ray = self
            .inside
            .then(|| orbit.screen_to_world_ray(self.x, self.y, width, height));
        PointerFrame {
            ray,
            clicked: std::mem::take(&mut self.clicked),
        }
    }
}
