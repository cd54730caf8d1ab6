//! DOM listeners scoped to a session.
//!
//! A [`ListenerGuard`] owns the closure it registered and removes the
//! listener when dropped, so tearing a session down leaves nothing attached
//! to the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("failed to add {event} listener: {e:?}"))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listener on the element with `element_id`, or `None` when the page has no such element.
    pub fn on_element(
        document: &web::Document,
        element_id: &str,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Option<Self>> {
        match document.get_element_by_id(element_id) {
            Some(el) => Self::new(el.as_ref(), event, handler).map(Some),
            None => Ok(None),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        log::debug!("removed {} listener", self.event);
    }
}
