//! JS value ⇄ card data conversion at the wasm-bindgen boundary

use serde::de::DeserializeOwned;
use shared::dto::from_host_json;
use shared::error::CardError;
use wasm_bindgen::JsValue;

/// Error surfaced to JavaScript as a plain string.
pub fn to_js_error(err: CardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Decode a host object; `undefined` and `null` both mean "not set".
///
/// The object goes through `JSON.stringify` first, so marketplace values with
/// a `toJSON` form (BigNumber prices) are decoded from their JSON text rather
/// than their internal fields.
pub fn decode_optional<T: DeserializeOwned>(value: JsValue) -> Result<Option<T>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json: String = js_sys::JSON::stringify(&value)?.into();
    from_host_json(&json).map_err(to_js_error)
}

/// Host options as JSON, `null` when none were given.
pub fn decode_options(value: JsValue) -> Result<serde_json::Value, JsValue> {
    Ok(decode_optional(value)?.unwrap_or(serde_json::Value::Null))
}
