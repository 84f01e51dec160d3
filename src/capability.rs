use crate::constants::{ACCELERATE_STYLES, ORIENTATION_EVENT_CONSTRUCTOR, TRANSLATE3D_PROBE};
use crate::core::platform::is_mobile_user_agent;
use crate::core::style::{placement, vendor_candidates, Placement, TransformMode};
use crate::dom;
use fnv::FnvHashMap;
use glam::Vec2;
use std::sync::OnceLock;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Browser features probed once per page and shared by every scene.
#[derive(Debug, Default)]
pub struct Capabilities {
    pub transform_2d: bool,
    pub transform_3d: bool,
    pub orientation: bool,
    pub desktop: bool,
    // unprefixed CSS name -> name the browser accepts
    properties: FnvHashMap<&'static str, String>,
}

static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();

#[inline]
pub fn capabilities() -> &'static Capabilities {
    CAPABILITIES.get_or_init(detect)
}

impl Capabilities {
    #[inline]
    pub fn transform_mode(&self) -> TransformMode {
        TransformMode::from_support(self.transform_2d, self.transform_3d)
    }

    /// Vendor-resolved name for a CSS property, or the property itself.
    pub fn property<'a>(&'a self, name: &'a str) -> &'a str {
        self.properties.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn set_css(&self, el: &web::HtmlElement, name: &str, value: &str) {
        _ = el.style().set_property(self.property(name), value);
    }

    /// Promote an element to its own compositing layer.
    pub fn accelerate(&self, el: &web::HtmlElement) {
        for (name, value) in ACCELERATE_STYLES {
            self.set_css(el, name, value);
        }
    }

    pub fn set_position(&self, el: &web::HtmlElement, offset: Vec2) {
        match placement(self.transform_mode(), offset) {
            Placement::Transform(t) => self.set_css(el, "transform", &t),
            Placement::Offset { left, top } => {
                let style = el.style();
                _ = style.set_property("left", &left);
                _ = style.set_property("top", &top);
            }
        }
    }
}

fn detect() -> Capabilities {
    let desktop = !is_mobile_user_agent(&dom::user_agent());
    let orientation = web::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str(ORIENTATION_EVENT_CONSTRUCTOR)))
        .and_then(Result::ok)
        .unwrap_or(false);

    let probe = dom::window_document()
        .and_then(|d| d.create_element("div").ok())
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let Some(probe) = probe else {
        log::warn!("[capability] no document; transforms disabled");
        return Capabilities {
            orientation,
            desktop,
            ..Default::default()
        };
    };

    let mut properties = FnvHashMap::default();
    for (name, _) in ACCELERATE_STYLES {
        if let Some(resolved) = resolve_property(&probe, name) {
            properties.insert(name, resolved);
        }
    }
    let transform_2d = properties.contains_key("transform");
    let mut caps = Capabilities {
        transform_2d,
        transform_3d: false,
        orientation,
        desktop,
        properties,
    };
    if transform_2d {
        caps.transform_3d = probe_3d(&probe, caps.property("transform"));
    }
    log::info!(
        "[capability] transform2d={} transform3d={} orientation={} desktop={}",
        caps.transform_2d,
        caps.transform_3d,
        caps.orientation,
        caps.desktop
    );
    caps
}

// First vendor spelling the element's style object knows about.
fn resolve_property(probe: &web::HtmlElement, property: &str) -> Option<String> {
    let style = probe.style();
    vendor_candidates(property)
        .into_iter()
        .find(|(_, js)| {
            js_sys::Reflect::get(&style, &JsValue::from_str(js))
                .map(|v| !v.is_undefined())
                .unwrap_or(false)
        })
        .map(|(css, _)| css)
}

fn probe_3d(probe: &web::HtmlElement, transform: &str) -> bool {
    let Some(body) = dom::window_document().and_then(|d| d.body()) else {
        return false;
    };
    if body.append_child(probe).is_err() {
        return false;
    }
    _ = probe.style().set_property(transform, TRANSLATE3D_PROBE);
    let value = dom::computed_property(probe, transform);
    _ = body.remove_child(probe);
    matches!(value.as_deref(), Some(v) if !v.is_empty() && v != "none")
}
