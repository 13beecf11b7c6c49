//! Button hover/click handling and the colors it selects.
//!
//! Two letter buttons sit next to the heart. "I" toggles rainbow tubes,
//! "U" ratchets the pulse speed multiplier. A click flashes the button green
//! until a per-button deadline passes; a later click simply moves the
//! deadline, so the most recent click always decides when the flash ends.

use crate::constants::{
    BUTTON_DEPTH, BUTTON_I_COLOR, BUTTON_I_POSITION, BUTTON_SIZE, BUTTON_U_COLOR,
    BUTTON_U_POSITION, CLICK_COLOR, CLICK_FLASH_SEC, FLASH_FREQ_RATIO, SPEED_FACTOR, SPEED_WRAP,
    TUBE_COLOR,
};
use crate::glyph::Glyph;
use crate::picking::{nearest_hit, ray_boxes, Aabb, Ray};
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    /// "I": toggles rainbow tubes.
    Colorful,
    /// "U": multiplies the pulse speed.
    Speed,
}

#[derive(Clone, Debug)]
pub struct Button {
    pub kind: ButtonKind,
    pub glyph: Glyph,
    /// World-space extruded letter; also the pick volume.
    pub boxes: Vec<Aabb>,
    pub rest_color: Vec3,
    pub color: Vec3,
    /// Wall-clock second at which a click flash ends.
    pub revert_at: Option<f64>,
}

impl Button {
    pub fn new(kind: ButtonKind, origin: Vec3) -> Self {
        let (glyph, rest_color) = match kind {
            ButtonKind::Colorful => (Glyph::I, Vec3::from(BUTTON_I_COLOR)),
            ButtonKind::Speed => (Glyph::U, Vec3::from(BUTTON_U_COLOR)),
        };
        Self {
            kind,
            glyph,
            boxes: glyph.extrude(origin, BUTTON_SIZE, BUTTON_DEPTH),
            rest_color,
            color: rest_color,
            revert_at: None,
        }
    }

    pub fn hit(&self, ray: &Ray) -> Option<f32> {
        ray_boxes(ray, &self.boxes)
    }

    /// Color while the pointer rests on the button.
    pub fn hover_color(&self, t: f32, m: f32) -> Vec3 {
        match self.kind {
            ButtonKind::Colorful => rainbow(t, m),
            ButtonKind::Speed => flash(t, m),
        }
    }

    fn flashing(&self, now: f64) -> bool {
        matches!(self.revert_at, Some(at) if now < at)
    }
}

/// Phase shared by the time-driven colors. One full hue turn per pulse cycle.
#[inline]
fn color_phase(t: f32, m: f32) -> f32 {
    TAU * t * m
}

/// Three sinusoids offset by 0, 2 and 4 radians.
pub fn rainbow(t: f32, m: f32) -> Vec3 {
    let p = color_phase(t, m);
    Vec3::new(
        p.sin() * 0.5 + 0.5,
        (p + 2.0).sin() * 0.5 + 0.5,
        (p + 4.0).sin() * 0.5 + 0.5,
    )
}

/// Fast red-only flash.
pub fn flash(t: f32, m: f32) -> Vec3 {
    let p = color_phase(t, m) * FLASH_FREQ_RATIO;
    Vec3::new(p.sin() * 0.5 + 0.5, 0.0, 0.0)
}

/// Speed multiplier after one "U" click.
#[inline]
pub fn next_speed(m: f32) -> f32 {
    let next = m * SPEED_FACTOR;
    if next > SPEED_WRAP {
        1.0
    } else {
        next
    }
}

/// What the pointer did this frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerFrame {
    pub ray: Option<Ray>,
    pub clicked: bool,
}

#[derive(Clone, Debug)]
pub struct Interaction {
    pub buttons: Vec<Button>,
    pub colorful: bool,
    pub speed: f32,
    pub message_visible: bool,
    pub hovered: Option<ButtonKind>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(
            Vec3::from(BUTTON_I_POSITION),
            Vec3::from(BUTTON_U_POSITION),
        )
    }
}

impl Interaction {
    pub fn new(i_origin: Vec3, u_origin: Vec3) -> Self {
        Self {
            buttons: vec![
                Button::new(ButtonKind::Colorful, i_origin),
                Button::new(ButtonKind::Speed, u_origin),
            ],
            colorful: false,
            speed: 1.0,
            message_visible: false,
            hovered: None,
        }
    }

    pub fn button(&self, kind: ButtonKind) -> Option<&Button> {
        self.buttons.iter().find(|b| b.kind == kind)
    }

    /// Nearest button under the ray.
    pub fn pick(&self, ray: &Ray) -> Option<ButtonKind> {
        nearest_hit(self.buttons.iter().map(|b| (b.kind, b.hit(ray)))).map(|h| h.id)
    }

    /// Apply a click to `kind` at wall-clock `now` (seconds).
    pub fn click(&mut self, kind: ButtonKind, now: f64) {
        match kind {
            ButtonKind::Colorful => {
                self.colorful = !self.colorful;
                log::info!("[click] colorful={}", self.colorful);
            }
            ButtonKind::Speed => {
                self.speed = next_speed(self.speed);
                log::info!("[click] speed multiplier -> {:.4}", self.speed);
            }
        }
        if let Some(b) = self.buttons.iter_mut().find(|b| b.kind == kind) {
            b.color = Vec3::from(CLICK_COLOR);
            b.revert_at = Some(now + CLICK_FLASH_SEC);
        }
    }

    /// Per-frame hover, click and color selection.
    ///
    /// `center_hit` tells whether the ray hits the message-revealing ball.
    pub fn update(&mut self, pointer: &PointerFrame, center_hit: bool, t: f32, now: f64) {
        self.hovered = pointer.ray.as_ref().and_then(|r| self.pick(r));
        if pointer.clicked {
            if let Some(kind) = self.hovered {
                self.click(kind, now);
            }
        }

        let m = self.speed;
        let hovered = self.hovered;
        for b in &mut self.buttons {
            if b.flashing(now) {
                b.color = Vec3::from(CLICK_COLOR);
                continue;
            }
            b.revert_at = None;
            b.color = if hovered == Some(b.kind) {
                b.hover_color(t, m)
            } else {
                b.rest_color
            };
        }

        if center_hit != self.message_visible {
            log::info!("[message] visible={}", center_hit);
        }
        self.message_visible = center_hit;
    }

    /// Color every tube gets this frame.
    pub fn tube_color(&self, t: f32) -> Vec3 {
        if self.colorful {
            rainbow(t, self.speed)
        } else {
            Vec3::from(TUBE_COLOR)
        }
    }
}
