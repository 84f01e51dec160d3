use crate::core::{deserialize, ConfigKey, DataValue, Limit};
use wasm_bindgen::JsValue;

/// Loosely typed JS value as a config value; `null` / `undefined` are unset.
pub fn data_value(value: &JsValue) -> Option<DataValue> {
    if let Some(b) = value.as_bool() {
        Some(DataValue::Bool(b))
    } else if let Some(n) = value.as_f64() {
        Some(DataValue::Number(n))
    } else if let Some(s) = value.as_string() {
        deserialize(&s)
    } else {
        None
    }
}

/// Read every known key from a plain options object.
pub fn config_options(options: &JsValue) -> Vec<(ConfigKey, DataValue)> {
    if !options.is_object() {
        return Vec::new();
    }
    ConfigKey::ALL
        .iter()
        .filter_map(|&key| {
            let raw = js_sys::Reflect::get(options, &JsValue::from_str(key.option_name())).ok()?;
            data_value(&raw).map(|v| (key, v))
        })
        .collect()
}

/// `undefined` keeps the current limit; numbers bound it; anything else
/// (including `false`) removes it.
pub fn limit_arg(value: &JsValue) -> Option<Limit> {
    if value.is_undefined() {
        return None;
    }
    Some(match data_value(value) {
        Some(DataValue::Number(n)) => Limit::from_value(n),
        _ => Limit::Unbounded,
    })
}
