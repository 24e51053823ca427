// Page wiring and renderer tuning for the web front-end.

// DOM hooks
pub const CANVAS_ID: &str = "scene-canvas";
pub const PICKABLE_SELECTOR: &str = "[data-pickable]";
pub const CAMERA_MODE_ATTR: &str = "data-camera-mode";
pub const VOICE_BUTTON_ID: &str = "voice-button";
pub const VOICE_LANG: &str = "en-US";

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches / stalls

// Wheel normalization (DOM deltaMode)
pub const LINE_HEIGHT_PX: f64 = 16.0;

// Renderer
pub const SKY_COLOR: [f64; 3] = [0.53, 0.71, 0.92];
pub const FLOOR_COLOR: [f32; 3] = [0.18, 0.21, 0.25];
pub const FLOOR_SIZE: f32 = 200.0;
pub const LIGHT_DIR: [f32; 3] = [-0.4, -1.0, -0.6];
pub const AMBIENT: f32 = 0.35;
pub const INITIAL_INSTANCE_CAPACITY: usize = 64;
