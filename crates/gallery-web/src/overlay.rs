use crate::dom;
use gallery_core::{Product, ViewState};
use web_sys as web;

const FOCUS_OVERLAY: &str = "focus-overlay";
const NOT_FOUND: &str = "not-found";

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.set_attribute("style", "display:none");
    }
}

pub fn show_focus(document: &web::Document, exhibit_id: u32) {
    if let Some(el) = document.get_element_by_id(FOCUS_OVERLAY) {
        let _ = el.set_attribute("data-exhibit", &exhibit_id.to_string());
    }
    dom::set_text(document, "focus-title", &format!("Piece {exhibit_id}"));
    show(document, FOCUS_OVERLAY);
}

#[inline]
pub fn hide_focus(document: &web::Document) {
    hide(document, FOCUS_OVERLAY);
}

/// Terminal state for unknown routes.
pub fn show_not_found(document: &web::Document) {
    dom::set_text(document, NOT_FOUND, "Product not found");
    show(document, NOT_FOUND);
}

/// Mirror the viewer selection into the product panel.
pub fn show_selection(document: &web::Document, product: &Product, view: &ViewState) {
    if let Some(variant) = view.variant(product) {
        dom::set_text(document, "variant-name", &variant.name);
        dom::set_text(document, "variant-description", &variant.description);
        dom::set_text(document, "variant-price", variant.price.as_deref().unwrap_or(""));
    }
    if let Some(color) = view.color(product) {
        dom::set_text(document, "color-name", &color.name);
        if let Some(body) = document.body() {
            let style = format!("background:{};color:{}", color.bg, color.text_color);
            let _ = body.set_attribute("style", &style);
        }
    }
}
