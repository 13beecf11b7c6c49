// Host-side tests for scene construction and the per-frame update.

use glam::Vec3;
use heart_core::picking::Ray;
use heart_core::shape::displaced;
use heart_core::{
    AnimationState, FrameInput, PointerFrame, SceneError, SceneParams, CENTER_INDEX, TUBE_COLOR,
};

fn scene() -> AnimationState {
    AnimationState::new(SceneParams::default()).expect("default scene")
}

fn pointing_at(ray: Ray, clicked: bool, now: f64) -> FrameInput {
    FrameInput {
        pointer: PointerFrame {
            ray: Some(ray),
            clicked,
        },
        now,
    }
}

#[test]
fn default_scene_layout() {
    let s = scene();
    assert_eq!(s.balls.len(), 40);
    assert!(!s.tubes.is_empty());
    assert_eq!(s.center_index(), CENTER_INDEX);
    assert_eq!(s.speed(), 1.0);
    assert!(!s.colorful());
    assert!(!s.message_visible());
    for t in &s.tubes {
        assert!(t.edge.a < s.balls.len() && t.edge.b < s.balls.len());
    }
}

#[test]
fn balls_follow_radial_displacement_every_frame() {
    let mut s = scene();
    for _ in 0..250 {
        s.frame(&FrameInput::default());
        let d = s.displacement();
        for b in &s.balls {
            assert!(b.position.abs_diff_eq(displaced(b.rest, d), 1e-5));
            assert!(b
                .position
                .abs_diff_eq(b.rest + b.rest.normalize_or_zero() * d, 1e-5));
        }
    }
}

#[test]
fn tubes_stay_attached_to_their_balls() {
    let mut s = scene();
    for _ in 0..37 {
        s.frame(&FrameInput::default());
    }
    for t in &s.tubes {
        let p1 = s.balls[t.edge.a].position;
        let p2 = s.balls[t.edge.b].position;
        assert!((t.transform.length - p1.distance(p2)).abs() < 1e-5);
        assert!(t.transform.midpoint.abs_diff_eq((p1 + p2) * 0.5, 1e-5));
    }
}

#[test]
fn single_ball_scenario() {
    let params = SceneParams {
        authored: vec![Vec3::new(0.0, 1.0, 0.0)],
        center_index: 0,
        ..SceneParams::default()
    };
    let mut s = AnimationState::new(params).expect("one-point scene");
    assert_eq!(s.balls.len(), 1);
    assert!(s.tubes.is_empty());

    // Land on the hold plateau
    s.clock.t = 0.12;
    s.frame(&FrameInput::default());
    let d = s.displacement();
    assert!((d - s.params().pulse.d1()).abs() < 1e-6);
    assert!(s.balls[0].position.abs_diff_eq(Vec3::new(0.0, 1.0 + d, 0.0), 1e-6));
}

#[test]
fn scene_keeps_the_params_it_validated() {
    let params = SceneParams {
        center_index: 3,
        ..SceneParams::default()
    };
    let mut s = AnimationState::new(params).expect("valid scene");
    assert_eq!(s.params().center_index, 3);
    assert_eq!(s.center_index(), 3);

    // The message follows the configured center ball, not the default one
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let target = s.balls[3].rest;
    s.frame(&pointing_at(Ray::new(eye, target - eye), false, 0.0));
    assert!(s.message_visible());
}

#[test]
fn origin_point_stays_put() {
    let params = SceneParams {
        authored: vec![Vec3::ZERO, Vec3::new(0.0, 0.5, 0.0)],
        center_index: 0,
        ..SceneParams::default()
    };
    let mut s = AnimationState::new(params).expect("two-point scene");
    for _ in 0..30 {
        s.frame(&FrameInput::default());
        assert_eq!(s.balls[0].position, Vec3::ZERO);
    }
}

#[test]
fn hovering_center_ball_reveals_message() {
    let mut s = scene();
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let center = s.balls[CENTER_INDEX].rest;

    s.frame(&pointing_at(Ray::new(eye, center - eye), false, 0.0));
    assert!(s.message_visible());

    s.frame(&pointing_at(Ray::new(eye, Vec3::new(0.0, 1.0, 0.0)), false, 0.1));
    assert!(!s.message_visible());

    s.frame(&pointing_at(Ray::new(eye, center - eye), false, 0.2));
    assert!(s.message_visible());

    // Pointer gone
    s.frame(&FrameInput::default());
    assert!(!s.message_visible());
}

#[test]
fn clicking_letters_through_the_frame() {
    let mut s = scene();
    let on_i = Ray::new(Vec3::new(-1.75, -1.25, 5.0), Vec3::NEG_Z);
    let on_u = Ray::new(Vec3::new(1.8, -1.45, 5.0), Vec3::NEG_Z);

    s.frame(&pointing_at(on_i, true, 0.0));
    assert!(s.colorful());
    assert_eq!(s.speed(), 1.0);

    s.frame(&pointing_at(on_u, true, 1.0));
    assert!((s.speed() - 1.5).abs() < 1e-6);

    // Hovering without a click changes nothing
    s.frame(&pointing_at(on_u, false, 2.0));
    assert!((s.speed() - 1.5).abs() < 1e-6);
    assert!(s.colorful());
}

#[test]
fn tube_color_tracks_colorful_mode() {
    let mut s = scene();
    s.frame(&FrameInput::default());
    assert_eq!(s.tube_color(), Vec3::from(TUBE_COLOR));

    s.interaction.colorful = true;
    s.frame(&FrameInput::default());
    let c = s.tube_color();
    assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
    assert!(s.instances().tubes.iter().all(|t| t.color[..3] == c.to_array()));
}

#[test]
fn instances_cover_every_drawable() {
    let s = scene();
    let inst = s.instances();
    assert_eq!(inst.balls.len(), s.balls.len());
    assert_eq!(inst.tubes.len(), s.tubes.len());
    // Three blocks per letter
    assert_eq!(inst.blocks.len(), 6);
}

#[test]
fn invalid_params_are_rejected() {
    let empty = SceneParams {
        authored: Vec::new(),
        ..SceneParams::default()
    };
    assert_eq!(AnimationState::new(empty).err(), Some(SceneError::EmptyShape));

    let out_of_range = SceneParams {
        center_index: 99,
        ..SceneParams::default()
    };
    assert_eq!(
        AnimationState::new(out_of_range).err(),
        Some(SceneError::CenterOutOfRange { index: 99, len: 17 })
    );

    let flat = SceneParams {
        ball_radius: 0.0,
        ..SceneParams::default()
    };
    assert_eq!(
        AnimationState::new(flat).err(),
        Some(SceneError::NonPositive {
            name: "ball_radius",
            value: 0.0
        })
    );
}
