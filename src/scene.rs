//! Read the showcase layout from the page markup.
//!
//! ```html
//! <canvas id="scene-canvas" data-camera-mode="first-person"></canvas>
//! <div data-pickable="cube" data-position="-9 2 0" data-url="https://..."></div>
//! <div data-pickable="sphere" data-position="-3 2 0" data-message="..."></div>
//! ```

use crate::constants::{CAMERA_MODE_ATTR, PICKABLE_SELECTOR};
use showcase_core::{ObjectSpec, PickableRegistry, ShowcaseConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn read_config(canvas: &web::HtmlCanvasElement) -> ShowcaseConfig {
    match canvas.get_attribute(CAMERA_MODE_ATTR).as_deref().map(str::trim) {
        Some("orbit") => ShowcaseConfig::orbit(),
        Some("first-person") | Some("") | None => ShowcaseConfig::default(),
        Some(other) => {
            log::warn!("[scene] unknown camera mode '{}', using first-person", other);
            ShowcaseConfig::default()
        }
    }
}

/// Objects described by `[data-pickable]` elements; bad entries are skipped.
/// Falls back to the built-in layout when the page describes none.
pub fn read_registry(document: &web::Document) -> PickableRegistry {
    let mut specs = Vec::new();
    if let Ok(nodes) = document.query_selector_all(PICKABLE_SELECTOR) {
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let attr = |name: &str| el.get_attribute(name);
            let kind = attr("data-pickable").unwrap_or_default();
            let position = attr("data-position");
            let scale = attr("data-scale");
            let url = attr("data-url");
            let message = attr("data-message");
            match ObjectSpec::from_attributes(
                &kind,
                position.as_deref(),
                scale.as_deref(),
                url.as_deref(),
                message.as_deref(),
            ) {
                Ok(spec) => specs.push(spec),
                Err(e) => log::warn!("[scene] skipping element {}: {}", i, e),
            }
        }
    }
    if specs.is_empty() {
        log::info!("[scene] no pickables in page; using default layout");
        return PickableRegistry::default_layout();
    }
    log::info!("[scene] {} pickables", specs.len());
    PickableRegistry::new(specs)
}
