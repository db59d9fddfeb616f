//! Interaction state and the pure rules that drive the handlers.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM or the network. `controller` owns the little
//! state that outlives a single event; the other modules turn server replies
//! and form contents into decisions the handlers apply.

pub mod comment;
pub mod controller;
pub mod picker;
pub mod reaction;
