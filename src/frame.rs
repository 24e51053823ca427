use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::overlay::DomPanels;
use crate::render;
use instant::Instant;
use showcase_core::{Camera, PickableRegistry, SceneRenderer, Showcase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub showcase: Rc<RefCell<Showcase>>,
    pub panels: Rc<RefCell<DomPanels>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

/// Stand-in while WebGPU is unavailable; the interaction state still advances.
struct NoRender;

impl SceneRenderer for NoRender {
    fn render(&mut self, _scene: &PickableRegistry, _camera: &Camera) {}
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        let w = self.canvas.width();
        let h = self.canvas.height();
        let mut showcase = self.showcase.borrow_mut();
        showcase.set_viewport(w as f32, h as f32);
        match self.gpu.as_mut() {
            Some(g) => {
                g.resize_if_needed(w, h);
                showcase.tick(dt_sec, g);
            }
            None => showcase.tick(dt_sec, &mut NoRender),
        }
        dom::apply_cursor(&self.canvas, &mut showcase);
        drop(showcase);

        self.panels.borrow_mut().advance(dt.as_secs_f64() * 1000.0);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickClosure) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
