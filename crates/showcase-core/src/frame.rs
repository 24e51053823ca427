//! Per-frame animation steps, run in order by [`crate::Showcase::tick`].

use crate::config::InteractionConfig;
use crate::math::{lerp, wrap_angle};
use crate::pickable::{ObjectId, PickableRegistry};
use glam::{Mat4, Vec2};

const TILT_SNAP: f32 = 1e-4;

/// Advance each object's spin by `spin_rate * dt`.
pub fn advance_spin(registry: &mut PickableRegistry, dt_sec: f32) {
    if !dt_sec.is_finite() || dt_sec <= 0.0 {
        return;
    }
    for o in registry.iter_mut() {
        o.transform.rotation.y = wrap_angle(o.transform.rotation.y + o.spin_rate * dt_sec);
    }
}

/// Exponential smoothing of every object's scale toward its target.
pub fn smooth_scales(registry: &mut PickableRegistry, factor: f32) {
    for o in registry.iter_mut() {
        let s = lerp(o.scale(), o.target_scale, factor);
        o.set_scale(s);
    }
}

/// Lean the hovered object toward the pointer; let every other object's
/// lean decay back to rest.
pub fn step_tilt(
    registry: &mut PickableRegistry,
    hovered: Option<ObjectId>,
    pointer_ndc: Option<Vec2>,
    view_proj: Mat4,
    cfg: &InteractionConfig,
) {
    for o in registry.iter_mut() {
        let reinforced = hovered == Some(o.id);
        match (reinforced, pointer_ndc) {
            (true, Some(ndc)) => {
                let clip = view_proj * o.transform.position.extend(1.0);
                let offset = if clip.w > 0.0 {
                    (ndc - clip.truncate().truncate() / clip.w).clamp(Vec2::NEG_ONE, Vec2::ONE)
                } else {
                    Vec2::ZERO
                };
                let target = Vec2::new(-offset.y, offset.x) * cfg.tilt_max;
                o.tilt += (target - o.tilt) * cfg.tilt_blend;
                o.tilt = o.tilt.clamp(Vec2::splat(-cfg.tilt_max), Vec2::splat(cfg.tilt_max));
            }
            _ => {
                o.tilt *= cfg.tilt_decay;
                if o.tilt.length_squared() < TILT_SNAP * TILT_SNAP {
                    o.tilt = Vec2::ZERO;
                }
            }
        }
    }
}
