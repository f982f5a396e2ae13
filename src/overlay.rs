use crate::constants::MODULE_ID;
use web_sys as web;

// The module container: shown at mount, hidden once the module finishes.

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODULE_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODULE_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

