//! Content model for the information panels opened by a click.

use crate::constants::{
    LINK_PANEL_BUTTON, LINK_PANEL_TITLE, MESSAGE_PANEL_TITLE, TYPEWRITER_MS_PER_CHAR,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    Message,
    Link,
}

impl PanelKind {
    /// Panels with a URL are link panels.
    pub fn for_url(url: Option<&str>) -> PanelKind {
        match url {
            Some(_) => PanelKind::Link,
            None => PanelKind::Message,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelContent {
    pub kind: PanelKind,
    pub title: String,
    /// Message text, or the URL itself for link panels.
    pub body: String,
    pub url: Option<String>,
    pub link_label: String,
}

impl PanelContent {
    pub fn message(text: &str) -> Self {
        Self {
            kind: PanelKind::Message,
            title: MESSAGE_PANEL_TITLE.to_string(),
            body: text.to_string(),
            url: None,
            link_label: LINK_PANEL_BUTTON.to_string(),
        }
    }

    pub fn link(url: &str) -> Self {
        Self {
            kind: PanelKind::Link,
            title: LINK_PANEL_TITLE.to_string(),
            body: url.to_string(),
            url: Some(url.to_string()),
            link_label: LINK_PANEL_BUTTON.to_string(),
        }
    }

    /// DOM id of the overlay; one overlay per kind is alive at a time.
    pub fn overlay_id(&self) -> &'static str {
        match self.kind {
            PanelKind::Message => "animated-overlay",
            PanelKind::Link => "link-overlay",
        }
    }
}

/// Reveals a message one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    ms_per_char: u32,
    carry_ms: f64,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self::with_speed(text, TYPEWRITER_MS_PER_CHAR)
    }

    pub fn with_speed(text: &str, ms_per_char: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            ms_per_char: ms_per_char.max(1),
            carry_ms: 0.0,
        }
    }

    /// Advance by `elapsed_ms`; returns true when more text became visible.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        if self.is_done() || !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return false;
        }
        self.carry_ms += elapsed_ms;
        let step = self.ms_per_char as f64;
        let whole = (self.carry_ms / step).floor() as usize;
        if whole == 0 {
            return false;
        }
        self.carry_ms -= whole as f64 * step;
        let before = self.shown;
        self.shown = self.shown.saturating_add(whole).min(self.chars.len());
        self.shown > before
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn finish(&mut self) {
        self.shown = self.chars.len();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelButton {
    Open,
    Close,
}

impl PanelButton {
    /// Button under a UV hit on an in-scene panel (v measured up from the
    /// bottom edge). Any hit outside the Open button closes the panel.
    pub fn at_uv(kind: PanelKind, uv: Vec2) -> PanelButton {
        let on_open = uv.x > 0.15 && uv.x < 0.45 && uv.y > 0.2 && uv.y < 0.4;
        if kind == PanelKind::Link && on_open {
            PanelButton::Open
        } else {
            PanelButton::Close
        }
    }
}
