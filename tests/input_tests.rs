// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn css_position_scales_to_backing_store() {
    let px = css_to_backing_px(
        Vec2::new(150.0, 100.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(400.0, 200.0),
    );
    assert_eq!(px, Vec2::new(200.0, 200.0));
}

#[test]
fn collapsed_rect_passes_css_offset_through() {
    let px = css_to_backing_px(
        Vec2::new(30.0, 40.0),
        Vec2::new(10.0, 10.0),
        Vec2::ZERO,
        Vec2::new(400.0, 200.0),
    );
    assert_eq!(px, Vec2::new(20.0, 30.0));
}

#[test]
fn wheel_deltas_normalize_to_pixels() {
    assert_eq!(wheel_delta_px(120.0, DOM_DELTA_PIXEL, 16.0, 800.0), 120.0);
    assert_eq!(wheel_delta_px(3.0, DOM_DELTA_LINE, 16.0, 800.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, DOM_DELTA_PAGE, 16.0, 800.0), -800.0);
    // unknown modes are treated as pixels
    assert_eq!(wheel_delta_px(5.0, 7, 16.0, 800.0), 5.0);
}

#[test]
fn non_finite_wheel_delta_is_zero() {
    assert_eq!(wheel_delta_px(f64::NAN, DOM_DELTA_PIXEL, 16.0, 800.0), 0.0);
    assert_eq!(wheel_delta_px(f64::INFINITY, DOM_DELTA_LINE, 16.0, 800.0), 0.0);
}
