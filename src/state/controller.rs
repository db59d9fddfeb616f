//! Page interaction controller state.
//!
//! DESIGN
//! ======
//! One `Controller` exists per page load. It owns the anti-forgery token read
//! at startup, the shared picker timer slot, and a generation counter per
//! request target. Handlers receive it explicitly instead of reaching for
//! globals.
//!
//! Each target remembers the newest generation whose successful reply was
//! applied. A reply older than that is stale and dropped, so a slow reply
//! cannot overwrite the state a later click produced. A successful reply is
//! still applied when a newer request is outstanding or has failed.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::collections::HashMap;

use super::picker::{PendingPicker, PickerAction, TimerSlot};
use crate::config::PageConfig;
use crate::util::cookie::find_cookie;

/// Something a request mutates, for superseded-reply detection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RequestTarget {
    PostReaction(String),
    CommentReaction(String),
}

#[derive(Clone, Copy, Debug, Default)]
struct Generations {
    issued: u64,
    applied: u64,
}

pub struct Controller {
    config: PageConfig,
    token: Option<String>,
    timers: RefCell<TimerSlot>,
    generations: RefCell<HashMap<RequestTarget, Generations>>,
    #[cfg(feature = "browser")]
    armed: RefCell<Option<gloo_timers::callback::Timeout>>,
}

impl Controller {
    /// Build the controller, reading the token from `cookies` once.
    pub fn new(config: PageConfig, cookies: &str) -> Self {
        let token = find_cookie(cookies, &config.csrf_cookie);
        if token.is_none() {
            log::warn!("no {} cookie; state-changing requests will be rejected", config.csrf_cookie);
        }
        Self {
            config,
            token,
            timers: RefCell::new(TimerSlot::default()),
            generations: RefCell::new(HashMap::new()),
            #[cfg(feature = "browser")]
            armed: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Token value to send; empty when the cookie was missing.
    pub fn token_or_empty(&self) -> &str {
        self.token().unwrap_or_default()
    }

    pub fn schedule_picker(&self, post_id: &str, action: PickerAction) -> u64 {
        self.timers.borrow_mut().schedule(post_id, action)
    }

    /// Claim the transition for a fired picker timer.
    pub fn take_due_picker(&self, ticket: u64) -> Option<PendingPicker> {
        self.timers.borrow_mut().fire(ticket)
    }

    /// Hold the browser timer backing the current ticket; dropping the old one cancels it.
    #[cfg(feature = "browser")]
    pub fn arm_timer(&self, timeout: gloo_timers::callback::Timeout) {
        *self.armed.borrow_mut() = Some(timeout);
    }

    /// Start a new request for `target` and return its generation.
    pub fn begin_request(&self, target: RequestTarget) -> u64 {
        let mut generations = self.generations.borrow_mut();
        let entry = generations.entry(target).or_default();
        entry.issued += 1;
        entry.issued
    }

    /// Whether a reply for `generation` is older than one already applied.
    pub fn is_stale(&self, target: &RequestTarget, generation: u64) -> bool {
        self.generations
            .borrow()
            .get(target)
            .is_some_and(|entry| generation <= entry.applied)
    }

    /// Record that the successful reply for `generation` reached the page.
    pub fn mark_applied(&self, target: &RequestTarget, generation: u64) {
        if let Some(entry) = self.generations.borrow_mut().get_mut(target) {
            entry.applied = entry.applied.max(generation);
        }
    }
}
