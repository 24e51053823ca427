//! DOM information panels shown on click.
//!
//! Styling lives in the page stylesheet (`.panel-overlay`, `.panel-card`, ...);
//! this module only builds the structure and wires the buttons.

use crate::dom;
use showcase_core::{PanelContent, PanelDisplay, PanelKind, Typewriter};
use wasm_bindgen::JsCast;
use web_sys as web;

fn open_in_new_tab(url: &str) {
    if let Some(w) = web::window() {
        if w.open_with_url_and_target_and_features(url, "_blank", "noopener").is_err() {
            log::warn!("[panel] could not open {}", url);
        }
    }
}

pub struct DomPanels {
    document: web::Document,
    // message body still being typed out
    typing: Option<(Typewriter, web::Element)>,
}

impl DomPanels {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            typing: None,
        }
    }

    /// Reveal more of the current message; called once per frame.
    pub fn advance(&mut self, elapsed_ms: f64) {
        let Some((tw, el)) = self.typing.as_mut() else {
            return;
        };
        if tw.advance(elapsed_ms) {
            el.set_text_content(Some(&tw.visible()));
        }
        if tw.is_done() || !el.is_connected() {
            self.typing = None;
        }
    }

    fn remove_existing(&self, id: &str) {
        if let Some(old) = self.document.get_element_by_id(id) {
            old.remove();
        }
    }

    fn div(&self, class: &str) -> Option<web::Element> {
        let el = self.document.create_element("div").ok()?;
        el.set_class_name(class);
        Some(el)
    }

    fn button(&self, class: &str, label: &str) -> Option<web::Element> {
        let el = self.document.create_element("button").ok()?;
        el.set_class_name(class);
        el.set_text_content(Some(label));
        Some(el)
    }

    /// Build the overlay for `content` and return its body element.
    fn build(&self, content: &PanelContent) -> Option<web::Element> {
        let id = content.overlay_id();
        self.remove_existing(id);

        let overlay = self.div("panel-overlay")?;
        overlay.set_id(id);
        let card = self.div("panel-card")?;
        let title = self.div("panel-title")?;
        title.set_text_content(Some(&content.title));
        let body = self.div("panel-body")?;
        let close = self.button("panel-close", "Close")?;

        _ = card.append_child(&title);
        _ = card.append_child(&body);
        match (content.kind, content.url.as_deref()) {
            (PanelKind::Link, Some(url)) => {
                body.set_text_content(Some(url));
                let open = self.button("panel-open", &content.link_label)?;
                let buttons = self.div("panel-buttons")?;
                _ = buttons.append_child(&open);
                _ = buttons.append_child(&close);
                _ = card.append_child(&buttons);

                let url = url.to_string();
                let overlay_open = overlay.clone();
                dom::add_listener::<web::Event>(&open, "click", move |_| {
                    open_in_new_tab(&url);
                    overlay_open.remove();
                });
            }
            _ => {
                _ = card.append_child(&close);
            }
        }

        let overlay_close = overlay.clone();
        dom::add_listener::<web::Event>(&close, "click", move |_| overlay_close.remove());

        // backdrop click closes; clicks inside the card do not
        let overlay_backdrop = overlay.clone();
        dom::add_listener::<web::MouseEvent>(&overlay, "click", move |ev| {
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .is_some_and(|t| t == overlay_backdrop);
            if on_backdrop {
                overlay_backdrop.remove();
            }
        });

        _ = overlay.append_child(&card);
        let parent = self.document.body()?;
        _ = parent.append_child(&overlay);
        Some(body)
    }
}

impl PanelDisplay for DomPanels {
    fn show_message(&mut self, text: &str) {
        match self.build(&PanelContent::message(text)) {
            Some(body) => self.typing = Some((Typewriter::new(text), body)),
            None => log::warn!("[panel] could not build message overlay"),
        }
    }

    fn show_link(&mut self, url: &str) {
        if self.build(&PanelContent::link(url)).is_none() {
            log::warn!("[panel] could not build link overlay");
        }
    }

    fn open_url(&mut self, url: &str) {
        open_in_new_tab(url);
    }
}
