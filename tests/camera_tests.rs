// Camera rigs and the pointer controller that drives them.

use glam::Vec3;
use showcase_core::*;
use std::f32::consts::{FRAC_PI_2, TAU};

fn first_person() -> Camera {
    Camera::new(&CameraConfig::default(), Projection::default())
}

fn orbit() -> Camera {
    Camera::new(&ShowcaseConfig::orbit().camera, Projection::default())
}

fn fp_rig(cam: &Camera) -> &FirstPersonRig {
    match &cam.rig {
        CameraRig::FirstPerson(r) => r,
        CameraRig::Orbit(_) => panic!("expected first-person rig"),
    }
}

fn orbit_rig(cam: &Camera) -> &OrbitRig {
    match &cam.rig {
        CameraRig::Orbit(r) => r,
        CameraRig::FirstPerson(_) => panic!("expected orbit rig"),
    }
}

#[test]
fn first_person_starts_at_eye_height_facing_negative_z() {
    let cam = first_person();
    assert!(cam.is_first_person());
    assert!((cam.eye() - Vec3::new(0.0, EYE_HEIGHT, 12.0)).length() < 1e-6);
    assert!((cam.forward() - Vec3::NEG_Z).length() < 1e-5);
}

#[test]
fn pitch_is_clamped_for_any_drag() {
    let mut cam = first_person();
    cam.drag(0.0, -1.0e6);
    assert_eq!(fp_rig(&cam).pitch, MAX_PITCH);
    cam.drag(0.0, 1.0e6);
    assert_eq!(fp_rig(&cam).pitch, MIN_PITCH);
    assert!(MAX_PITCH < FRAC_PI_2);
}

#[test]
fn dragging_right_turns_the_view_right() {
    let mut cam = first_person();
    cam.drag(100.0, 0.0);
    let fwd = cam.forward();
    assert!(fwd.x > 0.0, "forward {:?}", fwd);
    assert!(fwd.y.abs() < 1e-5);
}

#[test]
fn yaw_stays_wrapped_over_long_sessions() {
    let mut cam = first_person();
    for _ in 0..10_000 {
        cam.drag(-500.0, 0.0);
    }
    let yaw = fp_rig(&cam).yaw;
    assert!((0.0..TAU).contains(&yaw), "yaw {}", yaw);
}

#[test]
fn wheel_moves_along_view_axis_and_keeps_eye_height() {
    let mut cam = first_person();
    cam.wheel(100.0);
    // positive delta steps back, away from the view direction
    assert!((cam.eye().z - 13.0).abs() < 1e-4);

    cam.drag(0.0, -200.0); // look up
    cam.wheel(-500.0);
    assert_eq!(cam.eye().y, EYE_HEIGHT);
    assert!(cam.eye().z < 13.0);
}

#[test]
fn orbit_starts_on_its_sphere() {
    let cam = orbit();
    let rig = orbit_rig(&cam);
    assert!(!cam.is_first_person());
    let dist = (cam.eye() - rig.target()).length();
    assert!((dist - ORBIT_START_RADIUS).abs() < 1e-4);
    assert!((rig.phi - ORBIT_START_PHI).abs() < 1e-6);
}

#[test]
fn orbit_radius_and_phi_are_clamped() {
    let mut cam = orbit();
    cam.wheel(1.0e6);
    assert_eq!(orbit_rig(&cam).radius, ORBIT_MAX_RADIUS);
    cam.wheel(-1.0e6);
    assert_eq!(orbit_rig(&cam).radius, ORBIT_MIN_RADIUS);

    cam.drag(0.0, 1.0e6);
    assert_eq!(orbit_rig(&cam).phi, ORBIT_MIN_PHI);
    cam.drag(0.0, -1.0e6);
    assert_eq!(orbit_rig(&cam).phi, ORBIT_MAX_PHI);
}

#[test]
fn orbit_eye_is_recomputed_on_update() {
    let mut cam = orbit();
    let before = cam.eye();
    cam.drag(80.0, 0.0);
    assert_eq!(cam.eye(), before, "eye follows the rig only on update");
    cam.update();
    let rig = orbit_rig(&cam);
    assert!((cam.eye() - rig.spherical_eye()).length() < 1e-6);
    assert!((cam.eye() - before).length() > 0.1);
}

#[test]
fn orbit_target_projects_to_screen_centre() {
    let mut cam = orbit();
    cam.set_aspect(16.0 / 9.0);
    let clip = cam.view_projection() * Vec3::from(ORBIT_TARGET).extend(1.0);
    assert!(clip.w > 0.0);
    assert!((clip.x / clip.w).abs() < 1e-5);
    assert!((clip.y / clip.w).abs() < 1e-5);
}

#[test]
fn invalid_aspect_is_ignored() {
    let mut cam = first_person();
    cam.set_aspect(2.0);
    cam.set_aspect(0.0);
    cam.set_aspect(f32::NAN);
    cam.set_aspect(-1.0);
    assert_eq!(cam.aspect(), 2.0);
}

#[test]
fn pointer_move_without_press_leaves_camera_unchanged() {
    let mut ctl = CameraController::new(first_person());
    let before = ctl.camera.clone();
    assert!(!ctl.on_pointer_move(100.0, 40.0));
    assert!(!ctl.on_pointer_move(700.0, 500.0));
    assert_eq!(ctl.camera, before);
}

#[test]
fn only_primary_button_starts_a_drag() {
    let mut ctl = CameraController::new(first_person());
    assert_eq!(ctl.on_pointer_down(10.0, 10.0, PointerButton::Secondary), None);
    assert!(!ctl.is_dragging());
    assert_eq!(
        ctl.on_pointer_down(10.0, 10.0, PointerButton::from_dom(0)),
        Some(CursorStyle::Grabbing)
    );
    assert!(ctl.is_dragging());
}

#[test]
fn drag_travel_survives_release_until_next_press() {
    let mut ctl = CameraController::new(first_person());
    ctl.on_pointer_down(0.0, 0.0, PointerButton::Primary);
    assert!(ctl.on_pointer_move(3.0, 4.0));
    assert!(ctl.on_pointer_move(3.0, 0.0));
    assert_eq!(ctl.on_pointer_up(), CursorStyle::Grab);
    let drag = ctl.drag_state();
    assert!(!drag.is_down);
    assert!((drag.travel - 9.0).abs() < 1e-5);

    ctl.on_pointer_down(5.0, 5.0, PointerButton::Primary);
    assert_eq!(ctl.drag_state().travel, 0.0);
}

#[test]
fn non_finite_input_is_ignored() {
    let mut ctl = CameraController::new(first_person());
    let before = ctl.camera.clone();
    ctl.on_wheel(f32::NAN);
    ctl.on_wheel(f32::INFINITY);
    assert_eq!(ctl.on_pointer_down(f32::NAN, 0.0, PointerButton::Primary), None);
    ctl.on_pointer_down(0.0, 0.0, PointerButton::Primary);
    assert!(!ctl.on_pointer_move(f32::NAN, 1.0));
    assert_eq!(ctl.camera, before);
}

#[test]
fn cursor_css_names() {
    assert_eq!(CursorStyle::Grab.css(), "grab");
    assert_eq!(CursorStyle::Grabbing.css(), "grabbing");
    assert_eq!(CursorStyle::Pointer.css(), "pointer");
}
