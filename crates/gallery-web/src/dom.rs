use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// Match the canvas backing store to its CSS size and return the aspect ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f32 {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn navigate(path: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window
        .location()
        .assign(path)
        .map_err(|e| anyhow::anyhow!("navigation to {path} failed: {e:?}"))
}
