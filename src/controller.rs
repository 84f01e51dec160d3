use crate::capability::capabilities;
use crate::constants::{EVENT_ORIENTATION, EVENT_POINTER_MOVE, EVENT_RESIZE};
use crate::core::{InputSource, ParallaxConfig, ParallaxScene};
use crate::dom;
use crate::events::{EventListener, FrameLoop, Timeout};
use crate::options;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type SharedController = Rc<RefCell<SceneController>>;
type WeakController = Weak<RefCell<SceneController>>;

/// Browser handles that only exist while the scene is enabled.
struct Subscriptions {
    input: EventListener,
    _resize: EventListener,
    _support: Option<Timeout>,
    _frame: FrameLoop,
}

/// One mounted scene: its element, cached layers, motion state and live
/// subscriptions. Callbacks hold weak references back to it.
pub struct SceneController {
    element: web::HtmlElement,
    layers: Vec<web::HtmlElement>,
    scene: ParallaxScene,
    // cleared for good once the support delay passes without a tilt sample
    orientation_supported: bool,
    subscriptions: Option<Subscriptions>,
}

impl SceneController {
    pub fn scene(&self) -> &ParallaxScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut ParallaxScene {
        &mut self.scene
    }

    /// Re-scan `.layer` children, reset their styles and cache their depths.
    pub fn update_layers(&mut self) {
        let caps = capabilities();
        let scanned = dom::scan_layers(&self.element);
        for (i, (layer, _)) in scanned.iter().enumerate() {
            if caps.transform_3d {
                caps.accelerate(layer);
            }
            let style = layer.style();
            _ = style.set_property("position", if i == 0 { "relative" } else { "absolute" });
            _ = style.set_property("display", "block");
            _ = style.set_property("left", "0");
            _ = style.set_property("top", "0");
        }
        self.scene.set_depths(scanned.iter().map(|(_, depth)| *depth));
        self.layers = scanned.into_iter().map(|(layer, _)| layer).collect();
        log::info!("[scene] {} layers", self.layers.len());
    }

    pub fn update_dimensions(&mut self) {
        let (w, h) = dom::viewport_size();
        self.scene.resize_viewport(w, h);
    }

    fn frame(&mut self, now_ms: f64) {
        let (left, top, width, height) = dom::bounds(&self.element);
        let Some(offsets) = self.scene.frame(now_ms, left, top, width, height) else {
            return;
        };
        let caps = capabilities();
        for (layer, offset) in self.layers.iter().zip(offsets) {
            caps.set_position(layer, *offset);
        }
    }

    fn source(&self) -> InputSource {
        InputSource::select(self.orientation_supported)
    }
}

/// Build a scene on `element` and start it. Configuration is layered:
/// defaults, then `js_options`, then the element's `data-*` attributes.
pub fn mount(element: web::HtmlElement, js_options: &JsValue) -> anyhow::Result<SharedController> {
    let caps = capabilities();
    let config = ParallaxConfig::layered(
        options::config_options(js_options),
        dom::config_attributes(&element),
    );
    let calibration_delay = config.calibration_delay_ms;
    let source = InputSource::select(caps.orientation);

    if caps.transform_3d {
        caps.accelerate(&element);
    }
    dom::ensure_positioned(&element);

    let ctrl = Rc::new(RefCell::new(SceneController {
        element,
        layers: Vec::new(),
        scene: ParallaxScene::new(config, source),
        orientation_supported: caps.orientation,
        subscriptions: None,
    }));
    {
        let mut c = ctrl.borrow_mut();
        c.update_layers();
        c.update_dimensions();
    }
    enable(&ctrl)?;
    ctrl.borrow_mut()
        .scene
        .queue_calibration(dom::now_ms(), calibration_delay);
    log::info!("[scene] mounted with {:?} input", source);
    Ok(ctrl)
}

/// Attach listeners and start the frame loop. Any handle acquired before a
/// failure is released on return.
pub fn enable(ctrl: &SharedController) -> anyhow::Result<bool> {
    let (source, support_delay) = {
        let c = ctrl.borrow();
        if c.scene.is_enabled() {
            return Ok(false);
        }
        (c.source(), c.scene.config().support_delay_ms)
    };
    let weak = Rc::downgrade(ctrl);
    let input = wire_input(&weak, source)?;
    let resize = wire_resize(&weak)?;
    let support = match source {
        InputSource::Orientation => Some(wire_support_timer(&weak, support_delay)?),
        InputSource::Pointer => None,
    };
    let frame = wire_frame(&weak)?;

    let mut c = ctrl.borrow_mut();
    c.scene.enable(source);
    c.subscriptions = Some(Subscriptions {
        input,
        _resize: resize,
        _support: support,
        _frame: frame,
    });
    log::debug!("[scene] enabled ({:?})", source);
    Ok(true)
}

/// Remove every listener and cancel the pending frame.
pub fn disable(ctrl: &SharedController) -> bool {
    let released = {
        let mut c = ctrl.borrow_mut();
        if !c.scene.disable() {
            return false;
        }
        c.subscriptions.take()
    };
    drop(released);
    log::debug!("[scene] disabled");
    true
}

fn wire_input(weak: &WeakController, source: InputSource) -> anyhow::Result<EventListener> {
    let weak = weak.clone();
    match source {
        InputSource::Orientation => EventListener::on_window(EVENT_ORIENTATION, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
                return;
            };
            if capabilities().desktop {
                return;
            }
            if let Some(ctrl) = weak.upgrade() {
                ctrl.borrow_mut().scene.on_orientation(
                    ev.beta().map(|b| b as f32),
                    ev.gamma().map(|g| g as f32),
                );
            }
        }),
        InputSource::Pointer => EventListener::on_window(EVENT_POINTER_MOVE, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            if let Some(ctrl) = weak.upgrade() {
                ctrl.borrow_mut()
                    .scene
                    .on_pointer(ev.client_x() as f32, ev.client_y() as f32);
            }
        }),
    }
}

fn wire_resize(weak: &WeakController) -> anyhow::Result<EventListener> {
    let weak = weak.clone();
    EventListener::on_window(EVENT_RESIZE, move |_| {
        if let Some(ctrl) = weak.upgrade() {
            ctrl.borrow_mut().update_dimensions();
        }
    })
}

// No tilt sample within the delay: swap the orientation listener for the
// pointer one. Runs at most once per enable.
fn wire_support_timer(weak: &WeakController, delay_ms: f64) -> anyhow::Result<Timeout> {
    let weak = weak.clone();
    Timeout::new(delay_ms, move || {
        let Some(ctrl) = weak.upgrade() else {
            return;
        };
        if !ctrl.borrow_mut().scene.fall_back_to_pointer() {
            return;
        }
        ctrl.borrow_mut().orientation_supported = false;
        log::debug!("[scene] no orientation events, using pointer input");
        match wire_input(&weak, InputSource::Pointer) {
            Ok(listener) => {
                let previous = ctrl
                    .borrow_mut()
                    .subscriptions
                    .as_mut()
                    .map(|s| std::mem::replace(&mut s.input, listener));
                drop(previous);
            }
            Err(e) => log::error!("pointer fallback failed: {:?}", e),
        }
    })
}

fn wire_frame(weak: &WeakController) -> anyhow::Result<FrameLoop> {
    let weak = weak.clone();
    FrameLoop::start(move |timestamp| {
        if let Some(ctrl) = weak.upgrade() {
            ctrl.borrow_mut().frame(timestamp);
        }
    })
}
