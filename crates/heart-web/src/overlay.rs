use crate::constants::MESSAGE_ID;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MESSAGE_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MESSAGE_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn set_visible(document: &web::Document, visible: bool) {
    if visible {
        show(document);
    } else {
        hide(document);
    }
}
