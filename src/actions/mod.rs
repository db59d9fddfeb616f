//! Event handlers wired to the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each handler is split in two: a synchronous half that reads the page and
//! decides what to send, and an "apply" half that takes the request outcome
//! and patches the page. Both halves only see the [`crate::dom::Page`] trait
//! and are tested against the in-memory page. The browser build adds a thin
//! glue function per handler that performs the request in between with
//! `wasm_bindgen_futures::spawn_local`.

pub mod comment;
pub mod dismiss;
pub mod picker;
pub mod post;
pub mod reaction;
