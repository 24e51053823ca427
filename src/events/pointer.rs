use super::{schedule_feedback_reset, InputWiring};
use crate::constants::LINE_HEIGHT_PX;
use crate::dom;
use crate::input;
use showcase_core::PointerButton;
use web_sys as web;

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointer_exit(&w);
    wire_wheel(&w);
    wire_click(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener::<web::PointerEvent>(&target, "pointerdown", move |ev| {
        let pos = dom::event_canvas_px(&ev, &w.canvas);
        let button = PointerButton::from_dom(ev.button());
        let mut showcase = w.showcase.borrow_mut();
        showcase.on_pointer_down(pos.x, pos.y, button);
        if showcase.drag_state().is_down {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
        }
        dom::apply_cursor(&w.canvas, &mut showcase);
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener::<web::PointerEvent>(&target, "pointermove", move |ev| {
        let pos = dom::event_canvas_px(&ev, &w.canvas);
        let mut showcase = w.showcase.borrow_mut();
        let transitions = showcase.on_pointer_move(pos.x, pos.y);
        for t in &transitions {
            log::debug!("[hover] {:?}", t);
        }
        dom::apply_cursor(&w.canvas, &mut showcase);
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener::<web::PointerEvent>(&target, "pointerup", move |ev| {
        if w.canvas.has_pointer_capture(ev.pointer_id()) {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
        let mut showcase = w.showcase.borrow_mut();
        showcase.on_pointer_up();
        dom::apply_cursor(&w.canvas, &mut showcase);
    });
}

fn wire_pointer_exit(w: &InputWiring) {
    let wc = w.clone();
    let target = w.canvas.clone();
    dom::add_listener::<web::PointerEvent>(&target, "pointercancel", move |_| {
        let mut showcase = wc.showcase.borrow_mut();
        showcase.on_pointer_cancel();
        dom::apply_cursor(&wc.canvas, &mut showcase);
    });

    let wl = w.clone();
    dom::add_listener::<web::PointerEvent>(&target, "pointerleave", move |_| {
        let mut showcase = wl.showcase.borrow_mut();
        // a captured drag keeps going outside the canvas
        if showcase.drag_state().is_down {
            return;
        }
        showcase.on_pointer_leave();
        dom::apply_cursor(&wl.canvas, &mut showcase);
    });
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_active_listener::<web::WheelEvent>(&target, "wheel", move |ev| {
        ev.prevent_default();
        let page_px = w.canvas.client_height() as f64;
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), LINE_HEIGHT_PX, page_px);
        w.showcase.borrow_mut().on_wheel(delta);
    });
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener::<web::MouseEvent>(&target, "click", move |ev| {
        let pos = dom::event_canvas_px(&ev, &w.canvas);
        let outcome = {
            let mut panels = w.panels.borrow_mut();
            w.showcase
                .borrow_mut()
                .on_click(pos.x, pos.y, &mut *panels)
        };
        if let Some(outcome) = outcome {
            schedule_feedback_reset(&w.showcase, &w.reset_timers, outcome);
        }
    });
}
