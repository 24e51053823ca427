//! The owned interaction controller: camera, picking, hover, click feedback
//! and the frame tick behind one object.

use crate::camera::Camera;
use crate::config::ShowcaseConfig;
use crate::constants::PANEL_CLOSED_SCALE;
use crate::controller::{CameraController, CursorStyle, PointerButton, PointerDragState};
use crate::error::ConfigError;
use crate::feedback::{ClickFeedback, FeedbackTicket};
use crate::frame;
use crate::hover::{HoverMachine, HoverState, HoverTransitions};
use crate::panel::{PanelButton, PanelKind};
use crate::pickable::{ObjectId, ObjectKind, PickableRegistry};
use crate::picker::{self, Hit, Viewport};
use crate::voice::{self, VoiceCommand};
use glam::Vec2;

/// Shows click payloads. Each call replaces any panel of the same kind.
pub trait PanelDisplay {
    fn show_message(&mut self, text: &str);
    fn show_link(&mut self, url: &str);
    /// Follow a link directly, e.g. from an in-scene panel's Open button.
    fn open_url(&mut self, url: &str);
}

pub trait SceneRenderer {
    fn render(&mut self, scene: &PickableRegistry, camera: &Camera);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOutcome {
    pub target: ObjectId,
    /// Hand back to [`Showcase::complete_click_feedback`] after
    /// [`Showcase::feedback_duration_ms`].
    pub ticket: FeedbackTicket,
}

pub struct Showcase {
    config: ShowcaseConfig,
    registry: PickableRegistry,
    controller: CameraController,
    hover: HoverMachine,
    feedback: ClickFeedback,
    viewport: Viewport,
    pointer: Option<Vec2>,
    cursor: CursorStyle,
    cursor_dirty: bool,
}

impl Showcase {
    pub fn new(config: ShowcaseConfig, registry: PickableRegistry) -> Result<Self, ConfigError> {
        config.validate()?;
        let camera = Camera::new(&config.camera, config.projection);
        Ok(Self {
            hover: HoverMachine::new(config.interaction.hover_multiplier),
            feedback: ClickFeedback::new(&config.interaction),
            controller: CameraController::new(camera),
            registry,
            config,
            viewport: Viewport::new(1.0, 1.0),
            pointer: None,
            cursor: CursorStyle::Grab,
            cursor_dirty: true,
        })
    }

    /// Back to the freshly-constructed state, keeping the viewport.
    pub fn reset(&mut self) {
        let mut camera = Camera::new(&self.config.camera, self.config.projection);
        if let Some(aspect) = self.viewport.aspect() {
            camera.set_aspect(aspect);
        }
        self.controller = CameraController::new(camera);
        self.hover = HoverMachine::new(self.config.interaction.hover_multiplier);
        self.feedback.clear();
        self.registry.reset_animation();
        self.pointer = None;
        self.set_cursor(CursorStyle::Grab);
        log::info!("[showcase] reset");
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn registry(&self) -> &PickableRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &Camera {
        &self.controller.camera
    }

    pub fn drag_state(&self) -> PointerDragState {
        self.controller.drag_state()
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    pub fn hovered(&self) -> Option<ObjectId> {
        self.hover.hovered()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        let vp = Viewport::new(width, height);
        if let Some(aspect) = vp.aspect() {
            self.viewport = vp;
            self.controller.camera.set_aspect(aspect);
        }
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// The cursor style to apply, if it changed since the last call.
    pub fn take_cursor_change(&mut self) -> Option<CursorStyle> {
        std::mem::take(&mut self.cursor_dirty).then_some(self.cursor)
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        if cursor != self.cursor {
            self.cursor = cursor;
            self.cursor_dirty = true;
        }
    }

    fn hover_cursor(&self) -> CursorStyle {
        if self.hover.hovered().is_some() {
            CursorStyle::Pointer
        } else {
            CursorStyle::Grab
        }
    }

    pub fn pick_at(&self, x: f32, y: f32) -> Option<Hit> {
        picker::pick(
            x,
            y,
            self.viewport,
            &self.controller.camera,
            self.registry.as_slice(),
        )
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32, button: PointerButton) {
        if let Some(c) = self.controller.on_pointer_down(x, y, button) {
            self.pointer = Some(Vec2::new(x, y));
            self.set_cursor(c);
        }
    }

    /// Drags look around; otherwise the pointer is hover-picked.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> HoverTransitions {
        if !x.is_finite() || !y.is_finite() {
            return HoverTransitions::new();
        }
        self.pointer = Some(Vec2::new(x, y));
        if self.controller.is_dragging() {
            self.controller.on_pointer_move(x, y);
            return HoverTransitions::new();
        }
        self.refresh_hover()
    }

    pub fn on_pointer_up(&mut self) -> HoverTransitions {
        let c = self.controller.on_pointer_up();
        self.set_cursor(c);
        self.refresh_hover()
    }

    /// Pointer capture lost: same as a release.
    pub fn on_pointer_cancel(&mut self) -> HoverTransitions {
        self.on_pointer_up()
    }

    /// Pointer left the canvas: nothing stays hovered.
    pub fn on_pointer_leave(&mut self) -> HoverTransitions {
        self.pointer = None;
        let t = self.hover.clear(&mut self.registry);
        if !t.is_empty() {
            self.set_cursor(self.hover_cursor());
        }
        t
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        self.controller.on_wheel(delta_y);
    }

    fn refresh_hover(&mut self) -> HoverTransitions {
        let Some(p) = self.pointer else {
            return HoverTransitions::new();
        };
        let hit = self.pick_at(p.x, p.y).map(|h| h.id);
        let t = self.hover.update(hit, &mut self.registry);
        if !t.is_empty() || self.hover.hovered().is_some() {
            self.set_cursor(self.hover_cursor());
        }
        t
    }

    /// Click at a pixel. Releases that ended a look-drag are ignored.
    /// Presses on an in-scene panel go to its buttons and hand out no ticket.
    pub fn on_click(&mut self, x: f32, y: f32, panel: &mut dyn PanelDisplay) -> Option<ClickOutcome> {
        let travel = self.controller.drag_state().travel;
        if travel > self.config.interaction.click_slop_px {
            log::debug!("[click] ignored after {:.1}px drag", travel);
            return None;
        }
        let hit = self.pick_at(x, y)?;
        if self.registry.get(hit.id)?.kind == ObjectKind::Plane {
            self.press_panel(hit, panel);
            return None;
        }
        self.click_object(hit.id, panel)
    }

    /// Open follows the panel's link; any press then closes the panel.
    pub fn press_panel(&mut self, hit: Hit, panel: &mut dyn PanelDisplay) -> Option<PanelButton> {
        let obj = self.registry.get(hit.id)?;
        let uv = hit.plane_uv(obj.kind)?;
        let url = obj.url.clone();
        let button = PanelButton::at_uv(PanelKind::for_url(url.as_deref()), uv);
        log::info!("[panel] {:?} pressed on {:?}", button, hit.id);
        if let (PanelButton::Open, Some(url)) = (button, url.as_deref()) {
            panel.open_url(url);
        }
        self.dismiss_panel(hit.id);
        Some(button)
    }

    /// Shrink an in-scene panel away. It stays out of picking until
    /// [`Showcase::reset`]. Returns false if it was already closed.
    pub fn dismiss_panel(&mut self, id: ObjectId) -> bool {
        if self.registry.get(id).map_or(true, |o| o.dismissed) {
            return false;
        }
        if self.hover.hovered() == Some(id) {
            self.hover.clear(&mut self.registry);
            self.set_cursor(self.hover_cursor());
        }
        self.feedback.cancel(id);
        if let Some(obj) = self.registry.get_mut(id) {
            obj.dismissed = true;
            obj.target_scale = obj.base_scale * PANEL_CLOSED_SCALE;
            obj.flash = None;
        }
        true
    }

    /// Pop the object, dispatch its payload and hand out the reset ticket.
    pub fn click_object(&mut self, id: ObjectId, panel: &mut dyn PanelDisplay) -> Option<ClickOutcome> {
        let obj = self.registry.get(id)?;
        let (url, message) = (obj.url.clone(), obj.message.clone());
        log::info!("[click] {} {:?}", obj.kind.name(), id);
        if let Some(url) = url.as_deref() {
            panel.show_link(url);
        }
        if let Some(text) = message.as_deref() {
            panel.show_message(text);
        }
        let ticket = self.feedback.start(id, &mut self.registry)?;
        Some(ClickOutcome { target: id, ticket })
    }

    /// Click the first object of `kind`, as if the pointer had hit it.
    pub fn click_kind(&mut self, kind: ObjectKind, panel: &mut dyn PanelDisplay) -> Option<ClickOutcome> {
        match self.registry.first_of_kind(kind) {
            Some(id) => self.click_object(id, panel),
            None => {
                log::warn!("[click] no {} in the scene", kind.name());
                None
            }
        }
    }

    pub fn handle_voice_command(
        &mut self,
        transcript: &str,
        panel: &mut dyn PanelDisplay,
    ) -> Option<ClickOutcome> {
        match voice::parse_command(transcript) {
            Some(VoiceCommand::Click(kind)) => {
                log::info!("[voice] '{}' -> click {}", transcript, kind.name());
                self.click_kind(kind, panel)
            }
            None => {
                log::info!("[voice] command not understood. {}", voice::VOICE_HINT);
                None
            }
        }
    }

    pub fn feedback_duration_ms(&self) -> u32 {
        self.feedback.duration_ms()
    }

    /// Run a deferred click reset. Stale (superseded) tickets do nothing.
    pub fn complete_click_feedback(&mut self, ticket: FeedbackTicket) -> bool {
        self.feedback.complete(ticket, &mut self.registry)
    }

    /// One display frame: camera, spin, scale smoothing, tilt, render.
    pub fn tick(&mut self, dt_sec: f32, renderer: &mut dyn SceneRenderer) {
        let cfg = &self.config.interaction;
        self.controller.camera.update();
        frame::advance_spin(&mut self.registry, dt_sec);
        frame::smooth_scales(&mut self.registry, cfg.scale_smoothing);
        let pointer_ndc = self.pointer.and_then(|p| self.viewport.to_ndc(p.x, p.y));
        frame::step_tilt(
            &mut self.registry,
            self.hover.hovered(),
            pointer_ndc,
            self.controller.camera.view_projection(),
            cfg,
        );
        renderer.render(&self.registry, &self.controller.camera);
    }
}
