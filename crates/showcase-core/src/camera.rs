//! Camera state for the two navigation modes.
//!
//! The mode is a sealed enum fixed at construction: first-person look at a
//! pinned eye height, or orbit around a target on spherical coordinates.

use crate::config::{CameraConfig, FirstPersonConfig, OrbitConfig, Projection};
use crate::math::{clamp_total, wrap_angle};
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct FirstPersonRig {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    cfg: FirstPersonConfig,
}

impl FirstPersonRig {
    fn new(cfg: &FirstPersonConfig) -> Self {
        let mut position = cfg.start_position;
        position.y = cfg.eye_height;
        Self {
            position,
            yaw: wrap_angle(cfg.start_yaw),
            pitch: clamp_total(cfg.start_pitch, cfg.min_pitch, cfg.max_pitch),
            cfg: cfg.clone(),
        }
    }

    pub fn config(&self) -> &FirstPersonConfig {
        &self.cfg
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    fn look(&mut self, dx: f32, dy: f32) {
        self.yaw = wrap_angle(self.yaw - dx * self.cfg.look_speed);
        self.pitch = clamp_total(
            self.pitch - dy * self.cfg.look_speed,
            self.cfg.min_pitch,
            self.cfg.max_pitch,
        );
    }

    fn wheel(&mut self, delta: f32) {
        // local +Z points away from the view direction, so a positive
        // (scroll-down) delta steps back
        let local_z = self.orientation() * Vec3::Z;
        self.position += local_z * (delta * self.cfg.move_speed);
        self.pin_eye_height();
    }

    fn pin_eye_height(&mut self) {
        self.position.y = self.cfg.eye_height;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitRig {
    pub radius: f32,
    /// Azimuth about +Y.
    pub theta: f32,
    /// Polar angle from +Y.
    pub phi: f32,
    eye: Vec3,
    cfg: OrbitConfig,
}

impl OrbitRig {
    fn new(cfg: &OrbitConfig) -> Self {
        let mut rig = Self {
            radius: clamp_total(cfg.start_radius, cfg.min_radius, cfg.max_radius),
            theta: wrap_angle(cfg.start_theta),
            phi: clamp_total(cfg.start_phi, cfg.min_phi, cfg.max_phi),
            eye: cfg.target,
            cfg: cfg.clone(),
        };
        rig.recompute_eye();
        rig
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.cfg
    }

    pub fn target(&self) -> Vec3 {
        self.cfg.target
    }

    /// Eye position as of the last frame update.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn spherical_eye(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.cfg.target
            + self.radius * Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }

    fn recompute_eye(&mut self) {
        self.eye = self.spherical_eye();
    }

    fn rotate(&mut self, dx: f32, dy: f32) {
        self.theta = wrap_angle(self.theta - dx * self.cfg.rotate_speed);
        self.phi = clamp_total(
            self.phi - dy * self.cfg.rotate_speed,
            self.cfg.min_phi,
            self.cfg.max_phi,
        );
    }

    fn zoom(&mut self, delta: f32) {
        self.radius = clamp_total(
            self.radius + delta * self.cfg.zoom_speed,
            self.cfg.min_radius,
            self.cfg.max_radius,
        );
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CameraRig {
    FirstPerson(FirstPersonRig),
    Orbit(OrbitRig),
}

/// Right-handed perspective camera driven by a [`CameraRig`].
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub rig: CameraRig,
    pub projection: Projection,
    aspect: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig, projection: Projection) -> Self {
        let rig = match config {
            CameraConfig::FirstPerson(fp) => CameraRig::FirstPerson(FirstPersonRig::new(fp)),
            CameraConfig::Orbit(o) => CameraRig::Orbit(OrbitRig::new(o)),
        };
        Self {
            rig,
            projection,
            aspect: 1.0,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Ignores non-finite or non-positive ratios (e.g. a collapsed canvas).
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn is_first_person(&self) -> bool {
        matches!(self.rig, CameraRig::FirstPerson(_))
    }

    pub fn eye(&self) -> Vec3 {
        match &self.rig {
            CameraRig::FirstPerson(fp) => fp.position,
            CameraRig::Orbit(o) => o.eye(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        match &self.rig {
            CameraRig::FirstPerson(fp) => fp.orientation() * Vec3::NEG_Z,
            CameraRig::Orbit(o) => (o.target() - o.eye()).normalize_or_zero(),
        }
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        match &self.rig {
            CameraRig::FirstPerson(fp) => {
                Mat4::from_rotation_translation(fp.orientation(), fp.position).inverse()
            }
            CameraRig::Orbit(o) => Mat4::look_at_rh(o.eye(), o.target(), Vec3::Y),
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.projection.fovy_radians,
            self.aspect,
            self.projection.znear,
            self.projection.zfar,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Apply a pointer-drag delta in pixels.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        match &mut self.rig {
            CameraRig::FirstPerson(fp) => fp.look(dx, dy),
            CameraRig::Orbit(o) => o.rotate(dx, dy),
        }
    }

    pub fn wheel(&mut self, delta: f32) {
        match &mut self.rig {
            CameraRig::FirstPerson(fp) => fp.wheel(delta),
            CameraRig::Orbit(o) => o.zoom(delta),
        }
    }

    /// Per-frame update: re-pin eye height or re-derive the orbit eye.
    pub fn update(&mut self) {
        match &mut self.rig {
            CameraRig::FirstPerson(fp) => fp.pin_eye_height(),
            CameraRig::Orbit(o) => o.recompute_eye(),
        }
    }
}
