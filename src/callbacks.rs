use crate::constants::{ON_COMMITTED, ON_FINISHED, ON_RESET};
use crate::dom;
use crate::frame::{self, SharedFrame};
use crate::overlay;
use pin_core::{PinEvent, Signature};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Route core events to the page. Runs with the frame context unborrowed so
/// page callbacks may re-enter the module.
pub fn dispatch(ctx: &SharedFrame, events: Vec<PinEvent>) {
    if events.is_empty() {
        return;
    }
    let document = ctx.borrow().document.clone();
    for event in events {
        match event {
            PinEvent::DisplayChanged(display) => {
                dom::set_pin_display(&document, &display);
            }
            PinEvent::ResetRequested => {
                log::info!("[pin] reset requested");
                call_hook(ON_RESET, &JsValue::UNDEFINED);
            }
            PinEvent::SelectionCommitted(signature) => {
                log::info!("[pin] committed {:?}", signature.pin());
                call_hook(ON_COMMITTED, &signature_to_js(&signature));
            }
            PinEvent::ModuleFinished => {
                overlay::hide(&document);
                call_hook(ON_FINISHED, &JsValue::UNDEFINED);
                teardown(ctx);
            }
        }
    }
    let enabled = ctx.borrow().pin.reset_enabled();
    dom::set_reset_enabled(&document, enabled);
}

/// Stop all scheduling and hand every render resource back.
pub fn teardown(ctx: &SharedFrame) {
    frame::cancel(ctx);
    let mut guard = ctx.borrow_mut();
    let c = &mut *guard;
    if c.pin.is_disposed() {
        return;
    }
    c.pin.dispose(&mut c.renderer);
    log::info!("[pin] disposed, {} render resources released", c.renderer.released());
}

fn call_hook(name: &str, arg: &JsValue) {
    let Some(window) = web::window() else {
        return;
    };
    let hook = match js_sys::Reflect::get(&window, &JsValue::from_str(name)) {
        Ok(v) => v,
        Err(_) => return,
    };
    if let Some(f) = hook.dyn_ref::<js_sys::Function>() {
        if let Err(e) = f.call1(&JsValue::NULL, arg) {
            log::error!("[pin] {} threw: {:?}", name, e);
        }
    }
}

fn vec3_to_js(v: [f32; 3]) -> js_sys::Array {
    v.iter().map(|c| JsValue::from_f64(*c as f64)).collect()
}

fn set(obj: &js_sys::Object, key: &str, value: &JsValue) {
    _ = js_sys::Reflect::set(obj, &JsValue::from_str(key), value);
}

/// Plain JS object mirror of a [`Signature`]:
/// `{ pin, stars: [{ id, position, color, opacity, scale }], connectors: [{ from, to, color }],
///    centroid, boundingRadius }`.
fn signature_to_js(signature: &Signature) -> JsValue {
    let root = js_sys::Object::new();
    let pin: js_sys::Array = signature
        .pin()
        .iter()
        .map(|id| JsValue::from_f64(id.0 as f64))
        .collect();
    set(&root, "pin", &pin);

    let stars = js_sys::Array::new();
    for star in &signature.stars {
        let o = js_sys::Object::new();
        set(&o, "id", &JsValue::from_f64(star.id.0 as f64));
        set(&o, "position", &vec3_to_js(star.position.to_array()));
        set(&o, "color", &vec3_to_js(star.color));
        set(&o, "opacity", &JsValue::from_f64(star.opacity as f64));
        set(&o, "scale", &JsValue::from_f64(star.scale as f64));
        stars.push(&o);
    }
    set(&root, "stars", &stars);

    let connectors = js_sys::Array::new();
    for seg in &signature.connectors {
        let o = js_sys::Object::new();
        set(&o, "from", &vec3_to_js(seg.from.to_array()));
        set(&o, "to", &vec3_to_js(seg.to.to_array()));
        set(&o, "color", &vec3_to_js(seg.color));
        connectors.push(&o);
    }
    set(&root, "connectors", &connectors);

    set(&root, "centroid", &vec3_to_js(signature.centroid().to_array()));
    set(
        &root,
        "boundingRadius",
        &JsValue::from_f64(signature.bounding_radius() as f64),
    );
    root.into()
}
