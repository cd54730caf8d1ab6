use crate::dom;
use crate::frame::{FrameContext, Mode};
use crate::listeners::ListenerGuard;
use gallery_core::ActivityKind;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer input on the product page counts as activity and cancels the tour.
/// Keydown is wired with the keyboard handlers.
pub fn wire_activity(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let target: &web::EventTarget = window.as_ref();
    let mut guards = Vec::new();
    for kind in [ActivityKind::PointerMove, ActivityKind::PointerDown] {
        let ctx = ctx.clone();
        guards.push(ListenerGuard::new(target, kind.event_name(), move |_| {
            let mut ctx = ctx.borrow_mut();
            let now = ctx.now();
            if let Mode::Viewer(session) = &mut ctx.mode {
                session.record_activity(kind, now);
            }
        })?);
    }
    Ok(guards)
}

/// Focus overlay ("View Piece", close) and the product page's back link.
pub fn wire_overlay_buttons(
    document: &web::Document,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let mut guards = Vec::new();

    let ctx_view = ctx.clone();
    guards.extend(ListenerGuard::on_element(document, "view-piece", "click", move |_| {
        if let Err(e) = ctx_view.borrow_mut().open_focused() {
            log::error!("[route] {e:#}");
        }
    })?);

    let ctx_close = ctx.clone();
    guards.extend(ListenerGuard::on_element(document, "close-focus", "click", move |_| {
        ctx_close.borrow_mut().dismiss_focus();
    })?);

    guards.extend(ListenerGuard::on_element(document, "back-to-gallery", "click", |ev| {
        ev.prevent_default();
        if let Err(e) = dom::navigate("/") {
            log::error!("[route] {e:#}");
        }
    })?);

    Ok(guards)
}
