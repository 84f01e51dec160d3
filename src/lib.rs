#![cfg(target_arch = "wasm32")]
use crate::core::Limit;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod capability;
mod constants;
mod controller;
mod core;
mod dom;
mod events;
mod options;

thread_local! {
    // Scene mounted on `#scene` at startup; lives as long as the page.
    static DEFAULT_SCENE: RefCell<Option<Parallax>> = const { RefCell::new(None) };
}

/// Pointer/tilt driven parallax over the `.layer` children of an element.
#[wasm_bindgen]
pub struct Parallax {
    inner: controller::SharedController,
}

#[wasm_bindgen]
impl Parallax {
    #[wasm_bindgen(constructor)]
    pub fn new(element: web::HtmlElement, options: JsValue) -> Result<Parallax, JsValue> {
        let inner = controller::mount(element, &options)
            .map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
        Ok(Parallax { inner })
    }

    pub fn enable(&self) -> Result<bool, JsValue> {
        controller::enable(&self.inner).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    pub fn disable(&self) -> bool {
        controller::disable(&self.inner)
    }

    #[wasm_bindgen(js_name = isEnabled)]
    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().scene().is_enabled()
    }

    #[wasm_bindgen(js_name = updateLayers)]
    pub fn update_layers(&self) {
        self.inner.borrow_mut().update_layers();
    }

    pub fn calibrate(&self, x: Option<bool>, y: Option<bool>) {
        self.inner.borrow_mut().scene_mut().calibrate(x, y);
    }

    pub fn invert(&self, x: Option<bool>, y: Option<bool>) {
        self.inner.borrow_mut().scene_mut().invert(x, y);
    }

    pub fn friction(&self, x: Option<f32>, y: Option<f32>) {
        self.inner.borrow_mut().scene_mut().friction(x, y);
    }

    pub fn scalar(&self, x: Option<f32>, y: Option<f32>) {
        self.inner.borrow_mut().scene_mut().scalar(x, y);
    }

    /// A number bounds the axis, `false` removes the bound, `undefined`
    /// leaves it alone.
    pub fn limit(&self, x: JsValue, y: JsValue) {
        let x: Option<Limit> = options::limit_arg(&x);
        let y: Option<Limit> = options::limit_arg(&y);
        self.inner.borrow_mut().scene_mut().limit(x, y);
    }

    pub fn origin(&self, x: Option<f32>, y: Option<f32>) {
        self.inner.borrow_mut().scene_mut().origin(x, y);
    }
}

impl Drop for Parallax {
    fn drop(&mut self) {
        controller::disable(&self.inner);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-scene starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if !STARTED.swap(true, Ordering::SeqCst) {
        if let Err(e) = mount_default_scene() {
            log::error!("init error: {:?}", e);
        }
    }
    Ok(())
}

fn mount_default_scene() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(el) = document.get_element_by_id(constants::DEFAULT_SCENE_ID) else {
        log::info!("no #{} element; waiting for explicit mounts", constants::DEFAULT_SCENE_ID);
        return Ok(());
    };
    let el: web::HtmlElement = el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let scene = Parallax::new(el, JsValue::UNDEFINED)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    DEFAULT_SCENE.with(|slot| *slot.borrow_mut() = Some(scene));
    Ok(())
}
