//! The document operations handlers rely on.
//!
//! SYSTEM CONTEXT
//! ==============
//! Handlers never call `web-sys` directly; they go through [`Page`]. The
//! browser build implements it over the live document (`browser`), tests use
//! an in-memory document (`fake`).
//!
//! ERROR HANDLING
//! ==============
//! A missing element is an expected condition (the feed and detail templates
//! expose different subsets of ids), so element lookups return
//! [`DomError::Missing`] and callers log and move on.

#[cfg(feature = "browser")]
pub mod browser;
#[cfg(test)]
pub mod fake;

use crate::net::types::FormPost;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("element #{0} not found")]
    Missing(String),

    #[error("DOM call failed: {0}")]
    Js(String),
}

pub type DomResult<T> = Result<T, DomError>;

pub trait Page {
    /// Whether the element's inline `display` is `block`.
    fn is_displayed(&self, id: &str) -> DomResult<bool>;

    /// Set the element's inline `display` to `block` or `none`.
    fn set_displayed(&self, id: &str, visible: bool) -> DomResult<()>;

    /// Set `display: none` on every element carrying `class`.
    fn hide_all(&self, class: &str);

    fn add_classes(&self, id: &str, classes: &[&str]) -> DomResult<()>;

    fn remove_classes(&self, id: &str, classes: &[&str]) -> DomResult<()>;

    /// Toggle `class` and return whether the element now carries it.
    fn toggle_class(&self, id: &str, class: &str) -> DomResult<bool>;

    /// Focus the first `input` inside the element, if there is one.
    fn focus_first_input(&self, id: &str) -> DomResult<()>;

    fn set_text(&self, id: &str, text: &str) -> DomResult<()>;

    /// Current value of a text input or textarea.
    fn input_value(&self, id: &str) -> DomResult<String>;

    fn set_input_value(&self, id: &str, value: &str) -> DomResult<()>;

    /// Number of files selected in a file input.
    fn file_count(&self, id: &str) -> DomResult<u32>;

    /// Drop the selection of a file input.
    fn clear_files(&self, id: &str) -> DomResult<()>;

    /// Remove all children of the element.
    fn clear_children(&self, id: &str) -> DomResult<()>;

    /// Blocking message box.
    fn alert(&self, message: &str);

    /// Blocking yes/no question; `false` when the dialog cannot be shown.
    fn confirm(&self, message: &str) -> bool;

    /// Blocking text prompt; `None` when cancelled.
    fn prompt(&self, message: &str) -> Option<String>;

    /// Build a hidden-field POST form and submit it, navigating away.
    fn submit_form(&self, form: &FormPost) -> DomResult<()>;
}
