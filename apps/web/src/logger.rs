use log::Level;
use wasm_bindgen::JsValue;

/// `?debug` anywhere in the query string turns on debug output.
pub fn level_for(query: &str) -> Level {
    let debug = query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair.split('=').next() == Some("debug"));
    if debug {
        Level::Debug
    } else {
        Level::Info
    }
}

pub fn init(query: &str) {
    if let Err(error) = console_log::init_with_level(level_for(query)) {
        web_sys::console::warn_1(&JsValue::from(format!("logger already set: {error}")));
    }
}
