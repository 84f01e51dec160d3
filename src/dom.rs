use crate::constants::{DEPTH_ATTRIBUTE, LAYER_CLASS};
use crate::core::{deserialize, ConfigKey, DataValue};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds on the same clock as animation-frame timestamps.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[inline]
pub fn data_attribute(el: &web::Element, name: &str) -> Option<DataValue> {
    el.get_attribute(&format!("data-{}", name))
        .and_then(|raw| deserialize(&raw))
}

/// Configuration overrides declared on the scene element.
pub fn config_attributes(el: &web::Element) -> Vec<(ConfigKey, DataValue)> {
    ConfigKey::ALL
        .iter()
        .filter_map(|&key| data_attribute(el, key.attribute_name()).map(|v| (key, v)))
        .collect()
}

/// Children marked as layers, in document order, with their depth.
/// Missing or non-numeric depths read as 0.
pub fn scan_layers(scene: &web::Element) -> Vec<(web::HtmlElement, f32)> {
    let collection = scene.get_elements_by_class_name(LAYER_CLASS);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| {
            let depth = match data_attribute(&el, DEPTH_ATTRIBUTE) {
                Some(DataValue::Number(n)) => n as f32,
                _ => 0.0,
            };
            (el, depth)
        })
        .collect()
}

/// `(left, top, width, height)` of the element's bounding client rect.
#[inline]
pub fn bounds(el: &web::Element) -> (f32, f32, f32, f32) {
    let rect = el.get_bounding_client_rect();
    (
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn computed_property(el: &web::Element, css_name: &str) -> Option<String> {
    web::window()?
        .get_computed_style(el)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value(css_name).ok())
}

/// Give a statically positioned scene a containing block for its layers.
pub fn ensure_positioned(el: &web::HtmlElement) {
    if computed_property(el, "position").as_deref() == Some("static") {
        _ = el.style().set_property("position", "relative");
    }
}
