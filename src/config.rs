//! Page-scoped configuration read from the rendered document.
//!
//! The server template supplies the current post id (`window.POST_ID`, or a
//! `data-post-id` attribute on `<body>`) and may override the log level with
//! `data-log-level`. Everything else is fixed by the backend's conventions.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const DEFAULT_SHOW_DELAY_MS: u64 = 500;
pub const DEFAULT_HIDE_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Post rendered by the current page; only the detail page sets it.
    pub post_id: Option<String>,
    /// Cookie holding the anti-forgery token.
    pub csrf_cookie: String,
    /// Header carrying the token on asynchronous requests.
    pub csrf_header: String,
    /// Form field carrying the token on navigation submits.
    pub csrf_field: String,
    /// Hover delay before a picker opens.
    pub show_delay: Duration,
    /// Delay before a picker closes after the pointer leaves.
    pub hide_delay: Duration,
    pub log_level: log::Level,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            post_id: None,
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            csrf_field: DEFAULT_CSRF_FIELD.to_owned(),
            show_delay: Duration::from_millis(DEFAULT_SHOW_DELAY_MS),
            hide_delay: Duration::from_millis(DEFAULT_HIDE_DELAY_MS),
            log_level: log::Level::Info,
        }
    }
}

impl PageConfig {
    /// Build the config for the live page.
    ///
    /// `window.POST_ID` wins over `<body data-post-id>`; a missing or blank
    /// value leaves `post_id` unset.
    #[cfg(feature = "browser")]
    pub fn from_document(window: &web_sys::Window, document: &web_sys::Document) -> Self {
        let global_post_id = match js_sys::Reflect::get(window, &wasm_bindgen::JsValue::from_str("POST_ID")) {
            Ok(value) => crate::dom::browser::id_from_js(&value),
            Err(_) => None,
        };
        let body = document.body();
        let body_post_id = body
            .as_ref()
            .and_then(|body| body.get_attribute("data-post-id"))
            .and_then(|raw| parse_post_id(&raw));
        let log_level = parse_log_level(body.and_then(|body| body.get_attribute("data-log-level")).as_deref());

        Self {
            post_id: global_post_id.or(body_post_id),
            log_level,
            ..Self::default()
        }
    }
}

/// Normalize a post id supplied by the page. Blank values count as absent.
pub fn parse_post_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Parse a log level name, falling back to `Info` when absent or unknown.
pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    match raw.map(|value| value.trim().parse::<log::Level>()) {
        Some(Ok(level)) => level,
        _ => log::Level::Info,
    }
}
