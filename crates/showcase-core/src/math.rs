use std::f32::consts::TAU;

/// Clamp that never returns NaN: a NaN input lands on `lo`.
#[inline]
pub fn clamp_total(value: f32, lo: f32, hi: f32) -> f32 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Wrap an unbounded angle into `[0, TAU)` so long sessions keep precision.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    if angle.is_finite() {
        angle.rem_euclid(TAU)
    } else {
        0.0
    }
}
