//! Pointer and wheel handling for the camera.

use crate::camera::Camera;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            b => PointerButton::Other(b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
    Grab,
    Grabbing,
    Pointer,
}

impl CursorStyle {
    pub fn css(self) -> &'static str {
        match self {
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
            CursorStyle::Pointer => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerDragState {
    pub is_down: bool,
    pub last_position: Vec2,
    /// Pixels travelled since the last pointer-down; kept after release so
    /// the following click can tell a tap from a look-drag.
    pub travel: f32,
}

#[derive(Clone, Debug)]
pub struct CameraController {
    pub camera: Camera,
    drag: PointerDragState,
}

impl CameraController {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            drag: PointerDragState::default(),
        }
    }

    pub fn drag_state(&self) -> PointerDragState {
        self.drag
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_down
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32, button: PointerButton) -> Option<CursorStyle> {
        if button != PointerButton::Primary || !x.is_finite() || !y.is_finite() {
            return None;
        }
        self.drag = PointerDragState {
            is_down: true,
            last_position: Vec2::new(x, y),
            travel: 0.0,
        };
        Some(CursorStyle::Grabbing)
    }

    /// Returns true when the camera moved.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        if !self.drag.is_down || !x.is_finite() || !y.is_finite() {
            return false;
        }
        let pos = Vec2::new(x, y);
        let delta = pos - self.drag.last_position;
        self.drag.last_position = pos;
        self.drag.travel += delta.length();
        self.camera.drag(delta.x, delta.y);
        true
    }

    pub fn on_pointer_up(&mut self) -> CursorStyle {
        self.drag.is_down = false;
        CursorStyle::Grab
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        if delta_y.is_finite() {
            self.camera.wheel(delta_y);
        }
    }
}
