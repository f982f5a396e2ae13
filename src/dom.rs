use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Write the `*`/`_` slot string into the page.
pub fn set_pin_display(document: &web::Document, display: &str) {
    if let Some(el) = document.get_element_by_id(crate::constants::SLOTS_ID) {
        el.set_text_content(Some(display));
    }
}

pub fn set_reset_enabled(document: &web::Document, enabled: bool) {
    if let Some(el) = document.get_element_by_id(crate::constants::RESET_ID) {
        if let Ok(button) = el.dyn_into::<web::HtmlButtonElement>() {
            button.set_disabled(!enabled);
        }
    }
}
