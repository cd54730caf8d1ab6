use crate::frame::{FrameContext, Mode};
use crate::listeners::ListenerGuard;
use gallery_core::ActivityKind;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, ctx: &mut FrameContext) {
    let key = ev.key();
    let now = ctx.now();
    if let Mode::Viewer(session) = &mut ctx.mode {
        session.record_activity(ActivityKind::KeyDown, now);
        return;
    }
    if ctx.keys.set_key(&key, true) {
        // arrows would otherwise scroll the page
        ev.prevent_default();
        return;
    }
    match key.as_str() {
        "Escape" => ctx.dismiss_focus(),
        "Enter" => {
            if let Err(e) = ctx.open_focused() {
                log::error!("[route] {e:#}");
            }
        }
        _ => {}
    }
}

#[inline]
pub fn handle_keyup(ev: &web::KeyboardEvent, ctx: &mut FrameContext) {
    ctx.keys.set_key(&ev.key(), false);
}

/// Held-key tracking plus the viewer's keydown activity source. Keys are
/// released on window blur so a key held while focus leaves doesn't stick.
pub fn wire_keyboard(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Vec<ListenerGuard>> {
    let target: &web::EventTarget = window.as_ref();
    let mut guards = Vec::with_capacity(3);

    let ctx_down = ctx.clone();
    guards.push(ListenerGuard::new(target, "keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keydown(ev, &mut ctx_down.borrow_mut());
        }
    })?);

    let ctx_up = ctx.clone();
    guards.push(ListenerGuard::new(target, "keyup", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keyup(ev, &mut ctx_up.borrow_mut());
        }
    })?);

    let ctx_blur = ctx.clone();
    guards.push(ListenerGuard::new(target, "blur", move |_| {
        ctx_blur.borrow_mut().keys.clear();
    })?);

    Ok(guards)
}
