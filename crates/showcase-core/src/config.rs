//! Tuning for the controller, gathered from `constants.rs`.
//!
//! The camera mode is picked once, when the config is built, and never
//! switches during a session.

use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Debug, PartialEq)]
pub struct FirstPersonConfig {
    pub start_position: Vec3,
    pub start_yaw: f32,
    pub start_pitch: f32,
    pub eye_height: f32,
    pub look_speed: f32,
    pub move_speed: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for FirstPersonConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::from(FIRST_PERSON_START),
            start_yaw: 0.0,
            start_pitch: 0.0,
            eye_height: EYE_HEIGHT,
            look_speed: LOOK_SPEED_RAD_PER_PX,
            move_speed: MOVE_SPEED_PER_WHEEL_UNIT,
            min_pitch: MIN_PITCH,
            max_pitch: MAX_PITCH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub target: Vec3,
    pub start_radius: f32,
    pub start_theta: f32,
    pub start_phi: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_phi: f32,
    pub max_phi: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            target: Vec3::from(ORBIT_TARGET),
            start_radius: ORBIT_START_RADIUS,
            start_theta: 0.0,
            start_phi: ORBIT_START_PHI,
            rotate_speed: ORBIT_ROTATE_SPEED_RAD_PER_PX,
            zoom_speed: ORBIT_ZOOM_SPEED_PER_WHEEL_UNIT,
            min_radius: ORBIT_MIN_RADIUS,
            max_radius: ORBIT_MAX_RADIUS,
            min_phi: ORBIT_MIN_PHI,
            max_phi: ORBIT_MAX_PHI,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CameraConfig {
    FirstPerson(FirstPersonConfig),
    Orbit(OrbitConfig),
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig::FirstPerson(FirstPersonConfig::default())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub hover_multiplier: f32,
    pub click_multiplier: f32,
    pub click_feedback_ms: u32,
    pub click_flash_color: [f32; 3],
    pub click_slop_px: f32,
    pub scale_smoothing: f32,
    pub tilt_max: f32,
    pub tilt_blend: f32,
    pub tilt_decay: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hover_multiplier: HOVER_SCALE_MULTIPLIER,
            click_multiplier: CLICK_SCALE_MULTIPLIER,
            click_feedback_ms: CLICK_FEEDBACK_MS,
            click_flash_color: CLICK_FLASH_COLOR,
            click_slop_px: CLICK_SLOP_PX,
            scale_smoothing: SCALE_SMOOTHING,
            tilt_max: TILT_MAX_RAD,
            tilt_blend: TILT_BLEND,
            tilt_decay: TILT_DECAY,
        }
    }
}

/// Perspective parameters; the aspect ratio comes from the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_radians: FOV_Y_DEG.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowcaseConfig {
    pub camera: CameraConfig,
    pub interaction: InteractionConfig,
    pub projection: Projection,
}

impl ShowcaseConfig {
    pub fn orbit() -> Self {
        Self {
            camera: CameraConfig::Orbit(OrbitConfig::default()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.camera {
            CameraConfig::FirstPerson(fp) => {
                positive("look_speed", fp.look_speed)?;
                positive("move_speed", fp.move_speed)?;
                if !fp.eye_height.is_finite() {
                    return Err(ConfigError::NonPositive {
                        name: "eye_height",
                        value: fp.eye_height,
                    });
                }
                ordered("pitch", fp.min_pitch, fp.max_pitch)?;
                if fp.min_pitch <= -FRAC_PI_2 || fp.max_pitch >= FRAC_PI_2 {
                    return Err(ConfigError::PitchOutOfRange {
                        min: fp.min_pitch,
                        max: fp.max_pitch,
                    });
                }
            }
            CameraConfig::Orbit(o) => {
                positive("rotate_speed", o.rotate_speed)?;
                positive("zoom_speed", o.zoom_speed)?;
                positive("min_radius", o.min_radius)?;
                ordered("radius", o.min_radius, o.max_radius)?;
                ordered("phi", o.min_phi, o.max_phi)?;
                // on the Y axis the look-at up vector degenerates
                if o.min_phi <= 0.0 || o.max_phi >= PI {
                    return Err(ConfigError::PolarOutOfRange {
                        min: o.min_phi,
                        max: o.max_phi,
                    });
                }
            }
        }
        let i = &self.interaction;
        at_least_one("hover_multiplier", i.hover_multiplier)?;
        at_least_one("click_multiplier", i.click_multiplier)?;
        positive("click_slop_px", i.click_slop_px)?;
        factor("scale_smoothing", i.scale_smoothing)?;
        factor("tilt_blend", i.tilt_blend)?;
        factor("tilt_decay", i.tilt_decay)?;
        positive("tilt_max", i.tilt_max)?;
        positive("fovy_radians", self.projection.fovy_radians)?;
        positive("znear", self.projection.znear)?;
        ordered("depth", self.projection.znear, self.projection.zfar)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn at_least_one(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::MultiplierBelowOne { name, value })
    }
}

fn ordered(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ConfigError::EmptyRange { name, min, max });
    }
    Ok(())
}

fn factor(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::FactorOutOfRange { name, value })
    }
}
