use glam::Vec3;

// Shared shape/animation tuning constants used by both web and native frontends.

// Authored half of the heart: the +x, +z quadrant. The last entry is the
// center point that reveals the hidden message.
pub const HEART_HALF: [[f32; 3]; 17] = [
    [0.0, 1.0, 0.0],
    [0.5, 1.2365, 0.0],
    [1.0, 1.0, 0.0],
    [1.138, 0.5, 0.0],
    [1.0, 0.0, 0.0],
    [0.745, -0.3725, 0.0],
    [-0.3577, -0.7153, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.7829, 0.5],
    [0.5, 0.8578, 0.5],
    [0.7845, 0.5, 0.5],
    [0.6189, -0.068, 0.5],
    [0.0, -0.5588, 0.5],
    [0.0, 0.4829, 0.63],
    [0.3858, 0.0912, 0.63],
    [0.0, -0.2215, 0.63],
    [0.0, 0.1365, 0.67286],
];
pub const CENTER_INDEX: usize = HEART_HALF.len() - 1;

// Visual sizing
pub const BALL_RADIUS: f32 = 0.1;
pub const TUBE_RADIUS_FRACTION: f32 = 0.2; // tube radius relative to ball radius
pub const EDGE_THRESHOLD: f32 = 0.7; // exclusive connection distance

// Pulse curve (time in cycle units, displacement in world units)
pub const PULSE_T1: f32 = 0.1;
pub const PULSE_T2: f32 = 0.15;
pub const PULSE_T3: f32 = 0.25;
pub const PULSE_V1: f32 = 0.4;
pub const PULSE_DT: f64 = 0.01; // clock advance per frame

// Interaction
pub const SPEED_FACTOR: f32 = 1.5; // multiplier applied per "U" click
pub const SPEED_WRAP: f32 = 20.0; // multiplier resets to 1 above this
pub const CLICK_FLASH_SEC: f64 = 0.3;
pub const FLASH_FREQ_RATIO: f32 = 6.0; // "U" hover flash relative to rainbow
pub const CLICK_MAX_TRAVEL_PX: f32 = 6.0; // pointer travel still treated as a click

// Palette
pub const BALL_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const TUBE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const BUTTON_I_COLOR: [f32; 3] = [0.2, 0.4, 1.0]; // blue-ish
pub const BUTTON_U_COLOR: [f32; 3] = [1.0, 0.25, 0.25]; // red-ish
pub const CLICK_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

// Buttons: letter height in world units, extrusion depth and placement
pub const BUTTON_SIZE: f32 = 0.5;
pub const BUTTON_DEPTH: f32 = 0.1;
pub const BUTTON_I_POSITION: [f32; 3] = [-1.9, -1.5, 0.0];
pub const BUTTON_U_POSITION: [f32; 3] = [1.6, -1.5, 0.0];

// Camera
pub const CAMERA_FOVY_DEG: f32 = 55.0;
pub const CAMERA_DISTANCE: f32 = 5.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per pixel dragged
pub const ORBIT_ZOOM_SPEED: f32 = 0.001; // fraction of distance per wheel unit

// Lighting
pub const LIGHT_POSITION: [f32; 3] = [-1.0, 2.0, 4.0];
pub const LIGHT_INTENSITY: f32 = 3.0;
pub const AMBIENT: f32 = 0.08;
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

#[inline]
pub fn light_dir_vec3() -> Vec3 {
    Vec3::from(LIGHT_POSITION).normalize()
}
