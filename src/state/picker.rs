//! Reaction picker scheduling.
//!
//! Hovering a reaction button opens its picker after a short delay and leaving
//! closes it after another. Both delays go through one [`TimerSlot`]: arming a
//! new timer replaces whatever was pending, for any post. Moving quickly from
//! one post's button to another's therefore cancels the first post's pending
//! transition.
//!
//! Each armed timer gets a ticket. When a timer fires it hands its ticket back
//! and only the ticket still held by the slot takes effect, so a timer that was
//! replaced but not yet torn down is a no-op.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerAction {
    Show,
    Hide,
}

/// A delayed picker transition waiting for its timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPicker {
    pub ticket: u64,
    pub post_id: String,
    pub action: PickerAction,
}

/// The single pending-timer slot shared by every picker on the page.
#[derive(Debug, Default)]
pub struct TimerSlot {
    next_ticket: u64,
    pending: Option<PendingPicker>,
}

impl TimerSlot {
    /// Arm a transition, replacing any pending one. Returns its ticket.
    pub fn schedule(&mut self, post_id: &str, action: PickerAction) -> u64 {
        self.next_ticket += 1;
        if let Some(replaced) = self.pending.take() {
            log::debug!("picker timer for post {} replaced", replaced.post_id);
        }
        self.pending = Some(PendingPicker {
            ticket: self.next_ticket,
            post_id: post_id.to_owned(),
            action,
        });
        self.next_ticket
    }

    /// Claim the transition for a fired timer, if `ticket` is still current.
    pub fn fire(&mut self, ticket: u64) -> Option<PendingPicker> {
        if self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            return self.pending.take();
        }
        None
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<&PendingPicker> {
        self.pending.as_ref()
    }
}
