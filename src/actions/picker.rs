//! Reaction picker show/hide handlers.
//!
//! Hover uses delayed transitions through the controller's single timer slot.
//! Click toggles immediately. Every path that opens a picker first closes all
//! of them, so at most one is open at a time.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

#[cfg(feature = "browser")]
use std::rc::Rc;
#[cfg(feature = "browser")]
use std::time::Duration;

#[cfg(feature = "browser")]
use crate::dom::browser::BrowserPage;
use crate::dom::Page;
use crate::ids;
use crate::state::controller::Controller;
use crate::state::picker::PickerAction;

/// Arm the hover-intent timer that opens `post_id`'s picker. Returns the timer ticket.
pub fn delay_show_reactions(ctrl: &Controller, post_id: &str) -> u64 {
    ctrl.schedule_picker(post_id, PickerAction::Show)
}

/// Arm the timer that closes `post_id`'s picker. Returns the timer ticket.
pub fn hide_reactions(ctrl: &Controller, post_id: &str) -> u64 {
    ctrl.schedule_picker(post_id, PickerAction::Hide)
}

/// Apply the transition for a fired timer, unless a newer timer replaced it.
pub fn fire_picker_timer(ctrl: &Controller, page: &impl Page, ticket: u64) {
    let Some(due) = ctrl.take_due_picker(ticket) else {
        return;
    };
    let picker = ids::reaction_picker(&due.post_id);
    let result = match due.action {
        PickerAction::Show => page.is_displayed(&picker).and_then(|_| {
            page.hide_all(ids::PICKER_CLASS);
            page.set_displayed(&picker, true)
        }),
        PickerAction::Hide => page.set_displayed(&picker, false),
    };
    if let Err(err) = result {
        log::warn!("picker timer for post {}: {err}", due.post_id);
    }
}

/// Click toggle: close every picker, then flip this one.
pub fn show_reaction_picker(page: &impl Page, post_id: &str) {
    let picker = ids::reaction_picker(post_id);
    let was_visible = match page.is_displayed(&picker) {
        Ok(visible) => visible,
        Err(err) => {
            log::warn!("reaction picker toggle: {err}");
            return;
        }
    };
    hide_all_pickers(page);
    if let Err(err) = page.set_displayed(&picker, !was_visible) {
        log::warn!("reaction picker toggle: {err}");
    }
}

/// Close one post's picker right away.
pub fn hide_picker(page: &impl Page, post_id: &str) {
    if let Err(err) = page.set_displayed(&ids::reaction_picker(post_id), false) {
        log::debug!("no picker to hide: {err}");
    }
}

pub fn hide_all_pickers(page: &impl Page) {
    page.hide_all(ids::PICKER_CLASS);
}

/// Back `ticket` with a browser timeout that fires after `delay`.
#[cfg(feature = "browser")]
fn arm(ctrl: &Rc<Controller>, ticket: u64, delay: Duration) {
    let weak = Rc::downgrade(ctrl);
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    let timeout = gloo_timers::callback::Timeout::new(millis, move || {
        let (Some(ctrl), Some(page)) = (weak.upgrade(), BrowserPage::current()) else {
            return;
        };
        fire_picker_timer(&ctrl, &page, ticket);
    });
    ctrl.arm_timer(timeout);
}

#[cfg(feature = "browser")]
pub fn delay_show(ctrl: &Rc<Controller>, post_id: &str) {
    let ticket = delay_show_reactions(ctrl, post_id);
    arm(ctrl, ticket, ctrl.config().show_delay);
}

#[cfg(feature = "browser")]
pub fn delay_hide(ctrl: &Rc<Controller>, post_id: &str) {
    let ticket = hide_reactions(ctrl, post_id);
    arm(ctrl, ticket, ctrl.config().hide_delay);
}
