//! Reaction kinds and the visual outcome of a reaction reply.
//!
//! The DOM is never updated before the server answers, so there is nothing to
//! roll back: a reply is turned into a [`ReactionView`] and applied as a whole.

#[cfg(test)]
#[path = "reaction_test.rs"]
mod reaction_test;

use crate::net::types::ReactionResponse;
use crate::strings;

/// Kind sent when the caller does not name one, and the only kind comments use.
pub const DEFAULT_REACTION: &str = "like";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    #[default]
    Like,
    Love,
    Haha,
    Sad,
    Angry,
}

impl ReactionKind {
    pub const ALL: [Self; 5] = [Self::Like, Self::Love, Self::Haha, Self::Sad, Self::Angry];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Haha => "haha",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }

    /// Localized button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Like => strings::LABEL_LIKE,
            Self::Love => strings::LABEL_LOVE,
            Self::Haha => strings::LABEL_HAHA,
            Self::Sad => strings::LABEL_SAD,
            Self::Angry => strings::LABEL_ANGRY,
        }
    }
}

/// Label for a raw kind string; unknown kinds read as "like".
pub fn label_for(raw: &str) -> &'static str {
    ReactionKind::parse(raw).unwrap_or_default().label()
}

/// Outcome the server reports for a reaction toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionStatus {
    Added,
    Changed,
    Removed,
}

impl ReactionStatus {
    /// Map the wire `status`; anything unrecognized counts as removed.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("added") => Self::Added,
            Some("changed") => Self::Changed,
            _ => Self::Removed,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Added | Self::Changed)
    }
}

/// What a post reaction control should look like after a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionView {
    pub active: bool,
    pub label: &'static str,
    /// Replacement counter text, when the server sent a total.
    pub count: Option<String>,
}

/// Interpret a post reaction reply for the kind that was requested.
pub fn post_reaction_view(kind: &str, resp: &ReactionResponse) -> ReactionView {
    let active = ReactionStatus::from_wire(resp.status.as_deref()).is_active();
    ReactionView {
        active,
        label: if active { label_for(kind) } else { strings::LABEL_LIKE },
        count: resp.total_count_text(),
    }
}

/// Whether a comment like link should render as active after a reply.
pub fn comment_reaction_active(resp: &ReactionResponse) -> bool {
    ReactionStatus::from_wire(resp.status.as_deref()).is_active()
}
