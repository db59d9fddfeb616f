//! Element ids and class names the page markup exposes.
//!
//! Every naming convention the templates rely on is resolved here, so a
//! renamed id is a one-line change instead of a hunt through handlers.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

/// Class shared by every reaction picker panel.
pub const PICKER_CLASS: &str = "reaction-picker";
/// Class shared by every reaction trigger button.
pub const REACTION_BUTTON_CLASS: &str = "reaction-btn";

/// Text control for a top-level comment.
pub const MAIN_COMMENT_INPUT: &str = "main-comment-input";
/// File input attached to the top-level comment form.
pub const COMMENT_FILES: &str = "comment-files";
/// Thumbnail container for files picked in the top-level comment form.
pub const MAIN_PREVIEW: &str = "main-preview";

/// Bootstrap utility class that hides an element.
pub const HIDDEN_CLASS: &str = "d-none";
/// Marks a post reaction button as reacted.
pub const REACTION_ACTIVE_CLASS: &str = "reaction-active";
/// Greyed-out look of an inactive control.
pub const MUTED_CLASS: &str = "text-muted";
/// Classes that mark a comment like link as active.
pub const COMMENT_LIKE_ACTIVE_CLASSES: [&str; 2] = ["text-primary", "fw-bold"];

pub fn reaction_picker(post_id: &str) -> String {
    format!("reaction-picker-{post_id}")
}

pub fn post_like_button(post_id: &str) -> String {
    format!("btn-post-like-{post_id}")
}

pub fn post_like_text(post_id: &str) -> String {
    format!("text-post-like-{post_id}")
}

pub fn reaction_count(post_id: &str) -> String {
    format!("reaction-count-{post_id}")
}

/// Text control for a comment: the main input, or the reply input under `parent_id`.
pub fn comment_input(parent_id: Option<&str>) -> String {
    match parent_id {
        Some(parent_id) => format!("reply-input-{parent_id}"),
        None => MAIN_COMMENT_INPUT.to_owned(),
    }
}

pub fn reply_form(comment_id: &str) -> String {
    format!("reply-form-{comment_id}")
}

pub fn reply_box(comment_id: &str) -> String {
    format!("reply-box-{comment_id}")
}

pub fn comment_like(comment_id: &str) -> String {
    format!("comment-like-{comment_id}")
}
