use crate::callbacks;
use crate::frame::SharedFrame;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, frame: &SharedFrame) {
    if ev.repeat() || !input::is_reset_key(&ev.key()) {
        return;
    }
    let mut events = Vec::new();
    let accepted = frame.borrow_mut().pin.reset(&mut events);
    if accepted {
        ev.prevent_default();
    }
    callbacks::dispatch(frame, events);
}

pub fn wire_global_keydown(frame: SharedFrame) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &frame);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
