//! Networking modules for the posts endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoint paths and bodies and, in the browser, performs the
//! requests with `gloo-net`; `types` defines the JSON replies and navigation
//! form payloads; `error` is the request failure type.

pub mod api;
pub mod error;
pub mod types;
