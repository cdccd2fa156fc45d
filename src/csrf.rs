//! Anti-forgery token lookup
//!
//! Order: cookie, then `<meta>` tag, then the empty string. The backend
//! decides what an empty token means.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

use crate::config::CsrfConfig;

/// Extract `name`'s value from a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim_start)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

pub fn resolve_token(cookies: &str, cookie_name: &str, meta_content: Option<String>) -> String {
    cookie_value(cookies, cookie_name)
        .or(meta_content)
        .unwrap_or_default()
}

/// Current token for the page
pub fn current_token(config: &CsrfConfig) -> String {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return String::new();
    };

    let cookies = document
        .clone()
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default();

    let meta_content = document
        .query_selector(&format!("meta[name=\"{}\"]", config.meta_name))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));

    resolve_token(&cookies, &config.cookie_name, meta_content)
}
