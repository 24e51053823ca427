use std::f32::consts::{FRAC_PI_2, TAU};

// Shared interaction and camera tuning constants.

// Hover / click feedback
pub const HOVER_SCALE_MULTIPLIER: f32 = 1.12; // target scale while hovered
pub const CLICK_SCALE_MULTIPLIER: f32 = 1.5; // immediate pop on click
pub const CLICK_FEEDBACK_MS: u32 = 300; // delay before the click pop resets
pub const CLICK_FLASH_COLOR: [f32; 3] = [1.0, 0.85, 0.35]; // temporary material override
pub const CLICK_SLOP_PX: f32 = 6.0; // pointer travel that turns a click into a drag

// Frame smoothing
pub const SCALE_SMOOTHING: f32 = 0.14; // per-tick lerp factor toward target scale
pub const SPIN_RATE_RAD_PER_SEC: f32 = TAU / 20.0; // one full turn every 20 seconds

// Look-toward-cursor tilt on the hovered object
pub const TILT_MAX_RAD: f32 = 0.25;
pub const TILT_BLEND: f32 = 0.12; // new = (1-a)*old + a*target
pub const TILT_DECAY: f32 = 0.90; // multiplier applied to non-hovered tilt each tick

// First-person camera
pub const EYE_HEIGHT: f32 = 1.6;
pub const LOOK_SPEED_RAD_PER_PX: f32 = 0.0025;
pub const MOVE_SPEED_PER_WHEEL_UNIT: f32 = 0.01;
pub const PITCH_EPSILON: f32 = 0.01;
pub const MAX_PITCH: f32 = FRAC_PI_2 - PITCH_EPSILON;
pub const MIN_PITCH: f32 = -MAX_PITCH;
pub const FIRST_PERSON_START: [f32; 3] = [0.0, EYE_HEIGHT, 12.0];

// Orbit camera
pub const ORBIT_ROTATE_SPEED_RAD_PER_PX: f32 = 0.005;
pub const ORBIT_ZOOM_SPEED_PER_WHEEL_UNIT: f32 = 0.02;
pub const ORBIT_MIN_RADIUS: f32 = 4.0;
pub const ORBIT_MAX_RADIUS: f32 = 40.0;
pub const ORBIT_START_RADIUS: f32 = 16.0;
pub const ORBIT_MIN_PHI: f32 = 0.15; // polar angle from +Y
pub const ORBIT_MAX_PHI: f32 = FRAC_PI_2 - 0.05; // keep the eye above the floor
pub const ORBIT_START_PHI: f32 = 1.2;
pub const ORBIT_TARGET: [f32; 3] = [0.0, 1.5, 0.0];

// Projection
pub const FOV_Y_DEG: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 500.0;

// Panels
pub const TYPEWRITER_MS_PER_CHAR: u32 = 40;
pub const LINK_PANEL_TITLE: &str = "Wirtschaftsinformatik 2.0";
pub const MESSAGE_PANEL_TITLE: &str = "Information";
pub const LINK_PANEL_BUTTON: &str = "Open page";
pub const PANEL_CLOSED_SCALE: f32 = 0.001; // an in-scene panel shrinks to this fraction when closed
