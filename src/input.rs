use glam::Vec2;

// DOM WheelEvent.deltaMode values
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Map a client-space (CSS px) position to canvas backing-store pixels.
///
/// - `rect_origin`, `rect_size`: the canvas bounding rect in CSS px
/// - `backing`: canvas width/height attributes
#[inline]
pub fn css_to_backing_px(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    let css = client - rect_origin;
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return css;
    }
    css / rect_size * backing
}

/// Normalize a wheel delta to pixels regardless of the browser's delta mode.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_height_px: f64, page_height_px: f64) -> f32 {
    let px = match delta_mode {
        DOM_DELTA_LINE => delta_y * line_height_px,
        DOM_DELTA_PAGE => delta_y * page_height_px,
        _ => delta_y,
    };
    if px.is_finite() {
        px as f32
    } else {
        0.0
    }
}
