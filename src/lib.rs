//! # posts-client
//!
//! WASM interaction layer for the server-rendered posts feed and post detail
//! pages. The page markup is produced elsewhere; this crate attaches to the
//! elements it finds by id and class, talks to the posts endpoints over HTTP,
//! and patches the DOM with the JSON replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` holds the pure models (reactions, pickers, comment drafts, the
//! controller), `net` describes the endpoints and performs the requests,
//! `dom` is the seam between handlers and the document, and `actions` are the
//! handlers themselves. `app` is the browser entry point that exports the
//! handlers to page scripts.

#[cfg(feature = "browser")]
pub mod app;

pub mod actions;
pub mod config;
pub mod dom;
pub mod ids;
pub mod net;
pub mod state;
pub mod strings;
pub mod util;
