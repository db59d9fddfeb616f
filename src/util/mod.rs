//! Small text helpers with no DOM or network dependency.
//!
//! SYSTEM CONTEXT
//! ==============
//! Kept apart from `dom` so the parsing they do can be tested natively.

pub mod cookie;
pub mod html;
