// Host-side tests for constants and their mathematical relationships.

use heart_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Pulse phases are ordered inside one cycle
    assert!(0.0 < PULSE_T1 && PULSE_T1 < PULSE_T2);
    assert!(PULSE_T2 < PULSE_T3 && PULSE_T3 < 1.0);
    assert!(PULSE_V1 > 0.0);
    assert!(PULSE_DT > 0.0 && PULSE_DT < PULSE_T1 as f64);

    // Speed ratchet grows and eventually wraps
    assert!(SPEED_FACTOR > 1.0);
    assert!(SPEED_WRAP > SPEED_FACTOR);
    assert!(CLICK_FLASH_SEC > 0.0);

    // Sizing
    assert!(BALL_RADIUS > 0.0);
    assert!(TUBE_RADIUS_FRACTION > 0.0 && TUBE_RADIUS_FRACTION < 1.0);
    assert!(EDGE_THRESHOLD > 2.0 * BALL_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_starts_inside_orbit_limits() {
    assert!(ORBIT_MIN_DISTANCE < CAMERA_DISTANCE);
    assert!(CAMERA_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn center_point_lies_on_the_symmetry_axis() {
    assert!(CENTER_INDEX < HEART_HALF.len());
    let c = HEART_HALF[CENTER_INDEX];
    assert_eq!(c[0], 0.0);
    assert!(c[2] > 0.0);
}

#[test]
fn light_direction_is_unit_length() {
    assert!((light_dir_vec3().length() - 1.0).abs() < 1e-6);
    assert!(light_dir_vec3().z > 0.0);
}

#[test]
fn palette_channels_in_unit_range() {
    for c in [BALL_COLOR, TUBE_COLOR, BUTTON_I_COLOR, BUTTON_U_COLOR, CLICK_COLOR] {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn shader_exposes_entry_points() {
    assert!(SCENE_WGSL.contains("fn vs_main"));
    assert!(SCENE_WGSL.contains("fn fs_main"));
}
