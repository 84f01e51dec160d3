use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An `addEventListener` registration that is removed when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener({}): {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Listen on `window`.
    pub fn on_window(
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        Self::new(&window, kind, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// A pending `setTimeout`, cleared when dropped.
pub struct Timeout {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: f64, callback: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms.max(0.0) as i32,
            )
            .map_err(|e| anyhow::anyhow!("setTimeout: {:?}", e))?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.handle);
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Self-rescheduling `requestAnimationFrame` loop. Dropping it cancels the
/// outstanding request and releases the callback.
pub struct FrameLoop {
    request: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let request: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Tick = Rc::new(RefCell::new(None));

        let request_tick = request.clone();
        let weak_tick = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            request_tick.set(None);
            on_frame(timestamp);
            // the loop may have been dropped while running the frame
            let Some(tick) = weak_tick.upgrade() else {
                return;
            };
            if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    request_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = {
            let cb = tick.borrow();
            let cb = cb
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("frame callback missing"))?;
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?
        };
        request.set(Some(id));
        Ok(Self { request, tick })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(w), Some(id)) = (web::window(), self.request.take()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
