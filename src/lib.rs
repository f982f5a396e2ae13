#![cfg(target_arch = "wasm32")]
//! Browser host for the constellation PIN module: a 2D canvas renderer,
//! DOM pointer/keyboard wiring and a requestAnimationFrame loop around
//! [`pin_core::ConstellationPin`].

use pin_core::{ConstellationPin, PinConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod callbacks;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod projection;
mod render;
mod settings;

thread_local! {
    // The mounted module, if any. One per page.
    static ACTIVE: RefCell<Option<frame::SharedFrame>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, frame: frame::SharedFrame) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        let (w, h) = (canvas_resize.width() as f32, canvas_resize.height() as f32);
        frame.borrow_mut().pin.resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Read `data-*` overrides from the canvas element.
fn config_from_canvas(canvas: &web::HtmlCanvasElement) -> PinConfig {
    let mut config = PinConfig::default();
    for key in settings::SETTING_KEYS {
        if let Some(value) = canvas.get_attribute(key) {
            if !settings::apply_setting(&mut config, key, &value) {
                log::warn!("ignoring {}={:?}", key, value);
            }
        }
    }
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pin-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let config = config_from_canvas(&canvas);
    let pin = ConstellationPin::new(config)?;
    let renderer = render::CanvasRenderer::new(&canvas)?;
    log::info!(
        "[pin] field of {} stars (seed {})",
        pin.field().len(),
        pin.config().seed
    );

    let frame = Rc::new(RefCell::new(frame::FrameContext::new(
        pin,
        renderer,
        document.clone(),
    )));
    ACTIVE.with(|a| *a.borrow_mut() = Some(frame.clone()));

    overlay::show(&document);
    wire_canvas_resize(&canvas, frame.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        frame: frame.clone(),
    });
    events::wire_global_keydown(frame.clone());
    {
        let frame = frame.clone();
        dom::add_click_listener(&document, constants::RESET_ID, move || {
            let mut events = Vec::new();
            frame.borrow_mut().pin.reset(&mut events);
            callbacks::dispatch(&frame, events);
        });
    }

    let mut events = Vec::new();
    frame
        .borrow_mut()
        .pin
        .scene_ready(canvas.width() as f32, canvas.height() as f32, &mut events);
    callbacks::dispatch(&frame, events);

    frame::start_loop(frame);
    Ok(())
}

/// Clear the current selection from page script; same as pressing Escape.
#[wasm_bindgen(js_name = constellationReset)]
pub fn constellation_reset() -> bool {
    let Some(frame) = ACTIVE.with(|a| a.borrow().clone()) else {
        return false;
    };
    let mut events = Vec::new();
    let accepted = frame.borrow_mut().pin.reset(&mut events);
    callbacks::dispatch(&frame, events);
    accepted
}

/// Unmount the module early: stop the loop and release every resource.
#[wasm_bindgen(js_name = constellationDispose)]
pub fn constellation_dispose() {
    if let Some(frame) = ACTIVE.with(|a| a.borrow_mut().take()) {
        callbacks::teardown(&frame);
        overlay::hide(&frame.borrow().document);
    }
}
