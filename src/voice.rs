//! Voice commands through the browser's SpeechRecognition API.
//!
//! The API is not in every browser (and only prefixed in some), so it is
//! looked up dynamically; without it no microphone button is shown.

use crate::constants::{VOICE_BUTTON_ID, VOICE_LANG};
use crate::dom;
use crate::events::{schedule_feedback_reset, ResetTimers};
use crate::overlay::DomPanels;
use js_sys::{Array, Function, Reflect};
use showcase_core::{Showcase, VOICE_HINT};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn recognition_ctor(window: &web::Window) -> Option<Function> {
    ["SpeechRecognition", "webkitSpeechRecognition"]
        .iter()
        .filter_map(|name| Reflect::get(window, &JsValue::from_str(name)).ok())
        .find_map(|v| v.dyn_into::<Function>().ok())
}

fn set_prop(target: &JsValue, key: &str, value: &JsValue) {
    _ = Reflect::set(target, &JsValue::from_str(key), value);
}

fn call_method(target: &JsValue, name: &str) -> Result<(), JsValue> {
    let f: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    f.call0(target).map(|_| ())
}

/// `event.results[0][0].transcript`
fn first_transcript(ev: &JsValue) -> Option<String> {
    let results = Reflect::get(ev, &JsValue::from_str("results")).ok()?;
    let alternatives = Reflect::get_u32(&results, 0).ok()?;
    let best = Reflect::get_u32(&alternatives, 0).ok()?;
    Reflect::get(&best, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}

fn on_event(target: &JsValue, event: &str, handler: impl FnMut(JsValue) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(JsValue)>);
    set_prop(target, event, closure.as_ref());
    closure.forget();
}

pub fn wire_voice(
    document: &web::Document,
    showcase: Rc<RefCell<Showcase>>,
    panels: Rc<RefCell<DomPanels>>,
    timers: ResetTimers,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let Some(ctor) = recognition_ctor(&window) else {
        log::info!("[voice] speech recognition not supported; voice commands disabled");
        return Ok(());
    };
    let recognition = Reflect::construct(&ctor, &Array::new())
        .map_err(|e| anyhow::anyhow!("SpeechRecognition: {:?}", e))?;
    set_prop(&recognition, "continuous", &JsValue::FALSE);
    set_prop(&recognition, "lang", &JsValue::from_str(VOICE_LANG));
    set_prop(&recognition, "interimResults", &JsValue::FALSE);
    set_prop(&recognition, "maxAlternatives", &JsValue::from_f64(1.0));

    let button = document
        .create_element("button")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    button.set_id(VOICE_BUTTON_ID);
    button.set_text_content(Some("🎤"));
    _ = button.set_attribute("title", VOICE_HINT);
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    _ = body.append_child(&button);

    let listening = Rc::new(Cell::new(false));
    let set_listening = {
        let listening = listening.clone();
        let button = button.clone();
        move |on: bool| {
            listening.set(on);
            _ = button.class_list().toggle_with_force("listening", on);
        }
    };

    {
        let set_listening = set_listening.clone();
        on_event(&recognition, "onresult", move |ev| {
            set_listening(false);
            let Some(transcript) = first_transcript(&ev) else {
                log::warn!("[voice] result without transcript");
                return;
            };
            let outcome = {
                let mut panels = panels.borrow_mut();
                showcase
                    .borrow_mut()
                    .handle_voice_command(&transcript, &mut *panels)
            };
            if let Some(outcome) = outcome {
                schedule_feedback_reset(&showcase, &timers, outcome);
            }
        });
    }
    {
        let set_listening = set_listening.clone();
        let rec = recognition.clone();
        on_event(&recognition, "onspeechend", move |_| {
            _ = call_method(&rec, "stop");
            set_listening(false);
        });
    }
    {
        let set_listening = set_listening.clone();
        on_event(&recognition, "onerror", move |ev| {
            let kind = Reflect::get(&ev, &JsValue::from_str("error"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default();
            log::warn!("[voice] recognition error: {}", kind);
            set_listening(false);
        });
    }
    {
        let set_listening = set_listening.clone();
        on_event(&recognition, "onend", move |_| set_listening(false));
    }

    dom::add_listener::<web::Event>(&button, "click", move |_| {
        if listening.get() {
            _ = call_method(&recognition, "stop");
            set_listening(false);
            return;
        }
        match call_method(&recognition, "start") {
            Ok(()) => {
                log::info!("[voice] listening. {}", VOICE_HINT);
                set_listening(true);
            }
            Err(e) => log::warn!("[voice] could not start: {:?}", e),
        }
    });
    Ok(())
}
