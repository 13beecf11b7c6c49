// Host-side tests for button picking, clicks and colors.

use glam::Vec3;
use heart_core::picking::Ray;
use heart_core::{
    flash, next_speed, rainbow, ButtonKind, Interaction, PointerFrame, BUTTON_I_COLOR,
    BUTTON_U_COLOR, CLICK_COLOR,
};

fn on_i() -> Ray {
    Ray::new(Vec3::new(-1.75, -1.25, 5.0), Vec3::NEG_Z)
}

fn on_u() -> Ray {
    Ray::new(Vec3::new(1.8, -1.45, 5.0), Vec3::NEG_Z)
}

fn idle() -> PointerFrame {
    PointerFrame::default()
}

fn color(ix: &Interaction, kind: ButtonKind) -> Vec3 {
    ix.button(kind).map(|b| b.color).unwrap_or(Vec3::NAN)
}

#[test]
fn speed_ratchets_then_wraps() {
    let expected = [1.5, 2.25, 3.375, 5.0625, 7.59375, 11.390625, 17.085_938];
    let mut m = 1.0;
    for e in expected {
        m = next_speed(m);
        assert!((m - e).abs() < 1e-4, "expected {e}, got {m}");
    }
    // 17.09 * 1.5 exceeds the wrap limit
    assert_eq!(next_speed(m), 1.0);
    assert_eq!(next_speed(14.0), 1.0);
    assert!((next_speed(13.0) - 19.5).abs() < 1e-6);
}

#[test]
fn picking_finds_each_letter() {
    let ix = Interaction::default();
    assert_eq!(ix.pick(&on_i()), Some(ButtonKind::Colorful));
    assert_eq!(ix.pick(&on_u()), Some(ButtonKind::Speed));
    // Between the letters
    let gap = Ray::new(Vec3::new(0.0, -1.25, 5.0), Vec3::NEG_Z);
    assert_eq!(ix.pick(&gap), None);
    // Inside the "U" bowl
    let bowl = Ray::new(Vec3::new(1.8, -1.1, 5.0), Vec3::NEG_Z);
    assert_eq!(ix.pick(&bowl), None);
}

#[test]
fn colorful_toggles_on_each_click() {
    let mut ix = Interaction::default();
    ix.click(ButtonKind::Colorful, 0.0);
    assert!(ix.colorful);
    ix.click(ButtonKind::Colorful, 1.0);
    assert!(!ix.colorful);
    assert_eq!(ix.speed, 1.0);
}

#[test]
fn click_flash_reverts_after_deadline() {
    let mut ix = Interaction::default();
    ix.click(ButtonKind::Speed, 0.0);
    assert_eq!(color(&ix, ButtonKind::Speed), Vec3::from(CLICK_COLOR));

    ix.update(&idle(), false, 0.0, 0.1);
    assert_eq!(color(&ix, ButtonKind::Speed), Vec3::from(CLICK_COLOR));

    ix.update(&idle(), false, 0.0, 0.31);
    assert_eq!(color(&ix, ButtonKind::Speed), Vec3::from(BUTTON_U_COLOR));
    assert_eq!(color(&ix, ButtonKind::Colorful), Vec3::from(BUTTON_I_COLOR));
}

#[test]
fn latest_click_decides_flash_end() {
    let mut ix = Interaction::default();
    ix.click(ButtonKind::Colorful, 0.0);
    ix.click(ButtonKind::Colorful, 0.2);

    // First deadline passed, second still pending
    ix.update(&idle(), false, 0.0, 0.35);
    assert_eq!(color(&ix, ButtonKind::Colorful), Vec3::from(CLICK_COLOR));

    ix.update(&idle(), false, 0.0, 0.51);
    assert_eq!(color(&ix, ButtonKind::Colorful), Vec3::from(BUTTON_I_COLOR));
}

#[test]
fn click_only_applies_to_hovered_button() {
    let mut ix = Interaction::default();
    let miss = PointerFrame {
        ray: Some(Ray::new(Vec3::new(0.0, 3.0, 5.0), Vec3::NEG_Z)),
        clicked: true,
    };
    ix.update(&miss, false, 0.0, 0.0);
    assert!(!ix.colorful);
    assert_eq!(ix.speed, 1.0);

    let hit = PointerFrame {
        ray: Some(on_u()),
        clicked: true,
    };
    ix.update(&hit, false, 0.0, 0.0);
    assert!((ix.speed - 1.5).abs() < 1e-6);
    assert_eq!(ix.hovered, Some(ButtonKind::Speed));
}

#[test]
fn hover_colors_follow_pulse_time() {
    let mut ix = Interaction::default();
    let t = 0.37;
    ix.update(
        &PointerFrame {
            ray: Some(on_i()),
            clicked: false,
        },
        false,
        t,
        0.0,
    );
    assert!(color(&ix, ButtonKind::Colorful).abs_diff_eq(rainbow(t, 1.0), 1e-6));
    assert_eq!(color(&ix, ButtonKind::Speed), Vec3::from(BUTTON_U_COLOR));

    ix.update(
        &PointerFrame {
            ray: Some(on_u()),
            clicked: false,
        },
        false,
        t,
        0.0,
    );
    assert!(color(&ix, ButtonKind::Speed).abs_diff_eq(flash(t, 1.0), 1e-6));
    assert_eq!(color(&ix, ButtonKind::Colorful), Vec3::from(BUTTON_I_COLOR));
}

#[test]
fn generated_colors_stay_in_unit_range() {
    for i in 0..200 {
        let t = i as f32 * 0.013;
        for m in [1.0_f32, 3.375, 17.085_938] {
            let c = rainbow(t, m);
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
            let f = flash(t, m);
            assert!(f.x >= 0.0 && f.x <= 1.0);
            assert_eq!((f.y, f.z), (0.0, 0.0));
        }
    }
}

#[test]
fn message_visibility_follows_center_hit() {
    let mut ix = Interaction::default();
    ix.update(&idle(), true, 0.0, 0.0);
    assert!(ix.message_visible);
    ix.update(&idle(), false, 0.0, 0.1);
    assert!(!ix.message_visible);
}
