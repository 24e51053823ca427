#![cfg(target_arch = "wasm32")]
use fnv::FnvHashMap;
use instant::Instant;
use showcase_core::Showcase;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod scene;
mod voice;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let config = scene::read_config(&canvas);
    let registry = scene::read_registry(&document);
    let mut showcase = Showcase::new(config, registry)
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;
    showcase.set_viewport(canvas.width() as f32, canvas.height() as f32);
    dom::apply_cursor(&canvas, &mut showcase);
    log::info!(
        "[init] {} objects, {} camera",
        showcase.registry().len(),
        if showcase.camera().is_first_person() {
            "first-person"
        } else {
            "orbit"
        }
    );

    let showcase = Rc::new(RefCell::new(showcase));
    let panels = Rc::new(RefCell::new(overlay::DomPanels::new(document.clone())));
    let reset_timers: events::ResetTimers = Rc::new(RefCell::new(FnvHashMap::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        showcase: showcase.clone(),
        panels: panels.clone(),
        reset_timers: reset_timers.clone(),
    });

    if let Err(e) = voice::wire_voice(&document, showcase.clone(), panels.clone(), reset_timers) {
        log::warn!("[voice] disabled: {:?}", e);
    }

    // Initialize WebGPU; without it the page stays interactive but blank
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        showcase,
        panels,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
