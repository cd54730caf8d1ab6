#![cfg(target_arch = "wasm32")]
//! Browser front-end: routes the page, wires DOM input into a session and
//! drives it from `requestAnimationFrame`. Drawing is left to an external
//! renderer registered with [`set_scene_sink`].

mod dom;
mod events;
mod frame;
mod listeners;
mod overlay;

use frame::{FrameContext, Mode};
use gallery_core::{
    ActivityParams, CameraParams, Catalog, GallerySession, PlayerParams, Route, TourParams,
    ViewerSession,
};
use listeners::ListenerGuard;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// A mounted page session. Dropping it removes every listener it added.
struct App {
    ctx: Rc<RefCell<FrameContext>>,
    _listeners: Vec<ListenerGuard>,
}

impl App {
    fn mount(window: &web::Window, ctx: FrameContext) -> anyhow::Result<Self> {
        let document = ctx.document.clone();
        let is_viewer = matches!(ctx.mode, Mode::Viewer(_));
        let ctx = Rc::new(RefCell::new(ctx));
        ctx.borrow_mut().resize();

        let mut listeners = events::wire_keyboard(window, &ctx)?;
        if is_viewer {
            listeners.extend(events::wire_activity(window, &ctx)?);
        }
        listeners.extend(events::wire_overlay_buttons(&document, &ctx)?);

        let ctx_resize = ctx.clone();
        listeners.push(ListenerGuard::new(window.as_ref(), "resize", move |_| {
            ctx_resize.borrow_mut().resize();
        })?);

        overlay::hide_focus(&document);
        frame::start_loop(ctx.clone());
        Ok(Self {
            ctx,
            _listeners: listeners,
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Ok(mut ctx) = self.ctx.try_borrow_mut() {
            ctx.running = false;
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let path = window
        .location()
        .pathname()
        .map_err(|e| anyhow::anyhow!("no pathname: {e:?}"))?;

    let catalog = Catalog::builtin()?;
    let route = Route::parse(&path).resolve(&catalog);
    log::info!("[route] {path} -> {route}");

    let mode = match route {
        Route::Gallery => Mode::Gallery(GallerySession::with_corridor(
            PlayerParams::default(),
            CameraParams::default(),
        )),
        Route::Product(id) => Mode::Viewer(ViewerSession::new(
            catalog.product(id)?.clone(),
            TourParams::default(),
            ActivityParams::default(),
            Duration::ZERO,
        )),
        Route::NotFound => {
            overlay::show_not_found(&document);
            return Ok(());
        }
    };

    let canvas = dom::canvas_by_id(&document, "app-canvas");
    if canvas.is_none() {
        log::warn!("missing #app-canvas; aspect stays at its default");
    }
    let app = App::mount(&window, FrameContext::new(mode, document, canvas))?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

fn with_context<R>(f: impl FnOnce(&mut FrameContext) -> R) -> Option<R> {
    APP.with(|slot| {
        let slot = slot.borrow();
        let app = slot.as_ref()?;
        match app.ctx.try_borrow_mut() {
            Ok(mut ctx) => Some(f(&mut ctx)),
            Err(_) => {
                log::warn!("session busy; call ignored");
                None
            }
        }
    })
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Register the renderer callback. It receives one `Float32Array` per frame:
/// a scene packet on the gallery page, a viewer packet on a product page.
#[wasm_bindgen]
pub fn set_scene_sink(sink: js_sys::Function) {
    with_context(|ctx| ctx.sink = Some(sink));
}

/// Called by the renderer once the product entry animation has finished.
#[wasm_bindgen]
pub fn viewer_arrived() {
    with_context(|ctx| ctx.arrive());
}

#[wasm_bindgen]
pub fn select_variant(index: usize) -> Result<(), JsValue> {
    with_context(|ctx| ctx.select_variant(index))
        .unwrap_or(Ok(()))
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn select_color(index: usize) -> Result<(), JsValue> {
    with_context(|ctx| ctx.select_color(index))
        .unwrap_or(Ok(()))
        .map_err(to_js)
}

/// Pointer picking result from the renderer; only feeds frame highlights.
#[wasm_bindgen]
pub fn hover_exhibit(exhibit_id: Option<u32>) {
    with_context(|ctx| ctx.set_hovered(exhibit_id));
}

/// A clicked exhibit: navigate to its product page.
#[wasm_bindgen]
pub fn select_exhibit(exhibit_id: u32) -> Result<(), JsValue> {
    with_context(|ctx| ctx.open_exhibit(exhibit_id))
        .unwrap_or(Ok(()))
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn dismiss_focus() {
    with_context(|ctx| ctx.dismiss_focus());
}

/// Tear the session down: stops the frame loop and removes its listeners.
#[wasm_bindgen]
pub fn stop() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        log::info!("session stopped");
    }
}
