use crate::dom;
use crate::overlay;
use gallery_core::{
    FocusTransition, GallerySession, MoveKeys, Result as CoreResult, ScenePacket, ViewState,
    ViewerPacket, ViewerSession,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Which page this session drives.
pub enum Mode {
    Gallery(GallerySession),
    Viewer(ViewerSession),
}

pub struct FrameContext {
    pub mode: Mode,
    pub keys: MoveKeys,
    pub document: web::Document,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub sink: Option<js_sys::Function>,
    pub running: bool,

    pub started: Instant,
    pub last_instant: Instant,
    pub last_view: Option<ViewState>,
}

impl FrameContext {
    pub fn new(mode: Mode, document: web::Document, canvas: Option<web::HtmlCanvasElement>) -> Self {
        let now = Instant::now();
        Self {
            mode,
            keys: MoveKeys::default(),
            document,
            canvas,
            sink: None,
            running: true,
            started: now,
            last_instant: now,
            last_view: None,
        }
    }

    /// Session-relative clock for the viewer's timers.
    #[inline]
    pub fn now(&self) -> std::time::Duration {
        self.started.elapsed()
    }

    /// One animation frame. Returns the packet for the renderer sink.
    pub fn frame(&mut self) -> js_sys::Float32Array {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let session_time = self.now();

        match &mut self.mode {
            Mode::Gallery(session) => {
                let report = session.tick(self.keys.intent(), dt);
                for t in &report.transitions {
                    match *t {
                        FocusTransition::Acquired(id) => overlay::show_focus(&self.document, id),
                        FocusTransition::Released(_) => overlay::hide_focus(&self.document),
                    }
                }
                js_sys::Float32Array::from(ScenePacket::from_session(session).as_floats())
            }
            Mode::Viewer(session) => {
                session.advance(session_time);
                let view = session.view();
                if self.last_view != Some(view) {
                    overlay::show_selection(&self.document, session.product(), &view);
                    self.last_view = Some(view);
                }
                js_sys::Float32Array::from(ViewerPacket::from_session(session).as_floats())
            }
        }
    }

    pub fn resize(&mut self) {
        let Some(canvas) = &self.canvas else { return };
        let aspect = dom::sync_canvas_backing_size(canvas);
        if let Mode::Gallery(session) = &mut self.mode {
            session.set_aspect(aspect);
        }
    }

    pub fn dismiss_focus(&mut self) {
        if let Mode::Gallery(session) = &mut self.mode {
            if session.dismiss_focus().is_some() {
                overlay::hide_focus(&self.document);
            }
        }
    }

    /// Navigate to the product page of `exhibit_id`.
    pub fn open_exhibit(&mut self, exhibit_id: u32) -> anyhow::Result<()> {
        if let Mode::Gallery(session) = &self.mode {
            let request = session.navigate(exhibit_id)?;
            self.running = false;
            dom::navigate(&request.path())?;
        }
        Ok(())
    }

    pub fn open_focused(&mut self) -> anyhow::Result<()> {
        let focused = match &self.mode {
            Mode::Gallery(session) => session.focus().focused_id(),
            Mode::Viewer(_) => None,
        };
        match focused {
            Some(id) => self.open_exhibit(id),
            None => Ok(()),
        }
    }

    pub fn set_hovered(&mut self, exhibit_id: Option<u32>) {
        if let Mode::Gallery(session) = &mut self.mode {
            session.set_hovered(exhibit_id);
        }
    }

    pub fn arrive(&mut self) {
        let now = self.now();
        if let Mode::Viewer(session) = &mut self.mode {
            session.arrive(now);
        }
    }

    pub fn select_variant(&mut self, index: usize) -> CoreResult<()> {
        match &mut self.mode {
            Mode::Viewer(session) => session.select_variant(index),
            Mode::Gallery(_) => Ok(()),
        }
    }

    pub fn select_color(&mut self, index: usize) -> CoreResult<()> {
        match &mut self.mode {
            Mode::Viewer(session) => session.select_color(index),
            Mode::Gallery(_) => Ok(()),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (packet, sink) = {
            let mut ctx = frame_ctx.borrow_mut();
            if !ctx.running {
                log::info!("frame loop stopped");
                drop(ctx);
                // Dropping the closure breaks the cycle; wasm-bindgen defers
                // the free until this call returns
                let _ = tick_clone.borrow_mut().take();
                return;
            }
            (ctx.frame(), ctx.sink.clone())
        };
        // Context borrow is released here so the sink may call back into exports
        if let Some(sink) = sink {
            if let Err(e) = sink.call1(&JsValue::NULL, &packet) {
                log::error!("scene sink error: {:?}", e);
            }
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
