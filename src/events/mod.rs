mod pointer;

pub use pointer::wire_input_handlers;

use crate::overlay::DomPanels;
use fnv::FnvHashMap;
use showcase_core::{ClickOutcome, ObjectId, Showcase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pending `setTimeout` handles for click resets, one per object.
pub type ResetTimers = Rc<RefCell<FnvHashMap<ObjectId, i32>>>;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub showcase: Rc<RefCell<Showcase>>,
    pub panels: Rc<RefCell<DomPanels>>,
    pub reset_timers: ResetTimers,
}

/// Arm the reset for a click pop. A newer click on the same object cancels
/// the older timeout; the ticket check in the core makes a late one a no-op.
pub fn schedule_feedback_reset(
    showcase: &Rc<RefCell<Showcase>>,
    timers: &ResetTimers,
    outcome: ClickOutcome,
) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(old) = timers.borrow_mut().remove(&outcome.target) {
        window.clear_timeout_with_handle(old);
    }

    let delay_ms = showcase.borrow().feedback_duration_ms() as i32;
    let showcase_cb = showcase.clone();
    let timers_cb = timers.clone();
    let cb = Closure::once_into_js(move || {
        if showcase_cb
            .borrow_mut()
            .complete_click_feedback(outcome.ticket)
        {
            timers_cb.borrow_mut().remove(&outcome.target);
        }
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
    {
        Ok(handle) => {
            timers.borrow_mut().insert(outcome.target, handle);
        }
        Err(e) => {
            // no timer: reset right away rather than leave the object popped
            log::warn!("[click] setTimeout failed: {:?}", e);
            showcase.borrow_mut().complete_click_feedback(outcome.ticket);
        }
    }
}
