//! Camera state shared with the web and native frontends.
//!
//! These types avoid platform-specific APIs. Frontends feed pointer drags and
//! wheel deltas into [`OrbitCamera`] and read back matrices and picking rays.

use crate::constants::{
    CAMERA_DISTANCE, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING,
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};
use crate::picking::Ray;
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a pixel of a `width` x `height` surface.
    ///
    /// `sx`, `sy` are pixel coordinates with the origin at the top-left.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> Ray {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, p1 - self.eye)
    }
}

/// Tuning for [`OrbitCamera`].
#[derive(Clone, Copy, Debug)]
pub struct OrbitParams {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of angular velocity removed per frame.
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
        }
    }
}

/// Orbit controls around the origin with damped rotation.
///
/// Drags add angular velocity; every [`OrbitCamera::update`] applies a share
/// of it and decays the rest, so the view keeps gliding after release.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub camera: Camera,
    pub params: OrbitParams,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    yaw_vel: f32,
    pitch_vel: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitParams::default())
    }
}

impl OrbitCamera {
    pub fn new(params: OrbitParams) -> Self {
        let mut orbit = Self {
            camera: Camera::default(),
            params,
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_DISTANCE.clamp(params.min_distance, params.max_distance),
            yaw_vel: 0.0,
            pitch_vel: 0.0,
        };
        orbit.sync_eye();
        orbit
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Pointer drag in pixels.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.yaw_vel -= dx * self.params.rotate_speed;
        self.pitch_vel += dy * self.params.rotate_speed;
    }

    /// Wheel delta; positive moves away from the target.
    pub fn zoom(&mut self, delta: f32) {
        let factor = 1.0 + delta * self.params.zoom_speed;
        self.distance = (self.distance * factor.max(0.1))
            .clamp(self.params.min_distance, self.params.max_distance);
        self.sync_eye();
    }

    /// Advance damping by one frame.
    pub fn update(&mut self) {
        let d = self.params.damping;
        self.yaw += self.yaw_vel * d;
        self.pitch += self.pitch_vel * d;
        self.yaw_vel *= 1.0 - d;
        self.pitch_vel *= 1.0 - d;
        let limit = std::f32::consts::FRAC_PI_2 - 1e-3;
        self.pitch = self.pitch.clamp(-limit, limit);
        self.sync_eye();
    }

    fn sync_eye(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.camera.eye = self.camera.target + Vec3::new(x, y, z);
    }

    #[inline]
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> Ray {
        self.camera.screen_to_world_ray(sx, sy, width, height)
    }
}
