//! Comment creation, deletion, and reply boxes on the post detail page.
//!
//! Comment failures are only logged; the draft stays in its control so the
//! user can try again. Deleting a comment reports refusals with an alert but
//! leaves removing the comment's markup to the page.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

#[cfg(feature = "browser")]
use std::rc::Rc;

#[cfg(feature = "browser")]
use crate::dom::browser::BrowserPage;
use crate::dom::{DomError, Page};
use crate::ids;
#[cfg(feature = "browser")]
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::DeleteCommentResponse;
use crate::state::comment::{CommentDraft, CommentSubmission};
use crate::state::controller::Controller;
use crate::strings;

/// A comment ready to be posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedComment {
    pub post_id: String,
    pub submission: CommentSubmission,
}

/// Read the comment form and decide what to send.
///
/// Returns `None` (and sends nothing) when the text control is missing, the
/// draft is blank with no files, or the page has no post id.
pub fn prepare_comment(ctrl: &Controller, page: &impl Page, parent_id: Option<&str>) -> Option<PreparedComment> {
    let input = ids::comment_input(parent_id);
    let text = match page.input_value(&input) {
        Ok(text) => text,
        Err(err) => {
            log::error!("comment input unavailable: {err}");
            return None;
        }
    };
    let file_count = match page.file_count(ids::COMMENT_FILES) {
        Ok(count) => Some(count),
        Err(DomError::Missing(_)) => None,
        Err(err) => {
            log::warn!("comment attachments unreadable: {err}");
            None
        }
    };

    let draft = CommentDraft {
        parent_id: parent_id.map(str::to_owned),
        text,
        file_count,
    };
    let Some(submission) = draft.into_submission() else {
        log::debug!("blank comment not sent");
        return None;
    };
    let Some(post_id) = ctrl.config().post_id.clone() else {
        log::error!("page has no post id; comment not sent");
        return None;
    };
    Some(PreparedComment { post_id, submission })
}

/// Reset the form after a successful post, or log the failure.
pub fn finish_comment(page: &impl Page, prepared: &PreparedComment, outcome: Result<serde_json::Value, ApiError>) {
    match outcome {
        Ok(body) => log::info!("comment posted on post {}: {body}", prepared.post_id),
        Err(err) => {
            log::error!("comment on post {} failed: {err}", prepared.post_id);
            return;
        }
    }

    let parent_id = prepared.submission.parent_id.as_deref();
    if let Err(err) = page.set_input_value(&ids::comment_input(parent_id), "") {
        log::warn!("comment input not cleared: {err}");
    }
    match parent_id {
        Some(parent_id) => {
            if let Err(err) = page.add_classes(&ids::reply_form(parent_id), &[ids::HIDDEN_CLASS]) {
                log::debug!("reply form not hidden: {err}");
            }
        }
        None => {
            if let Err(err) = page.clear_files(ids::COMMENT_FILES) {
                log::debug!("attachments not cleared: {err}");
            }
            if let Err(err) = page.clear_children(ids::MAIN_PREVIEW) {
                log::debug!("attachment preview not cleared: {err}");
            }
        }
    }
}

/// Ask before deleting a comment.
pub fn confirm_comment_delete(page: &impl Page) -> bool {
    page.confirm(strings::CONFIRM_DELETE_COMMENT)
}

/// Report the outcome of a comment delete.
///
/// A refusal is shown with the server's message, or a generic one. Success
/// only logs: the comment's markup stays until the page removes it.
pub fn finish_comment_delete(page: &impl Page, comment_id: &str, outcome: Result<DeleteCommentResponse, ApiError>) {
    match outcome {
        Ok(resp) if resp.is_ok() => log::info!("comment {comment_id} deleted"),
        Ok(resp) => page.alert(resp.error_message().unwrap_or(strings::GENERIC_ERROR)),
        Err(err) => log::error!("delete comment {comment_id} failed: {err}"),
    }
}

/// Show or hide the reply box under a comment, focusing it when shown.
pub fn show_reply(page: &impl Page, comment_id: &str) {
    let reply_box = ids::reply_box(comment_id);
    match page.toggle_class(&reply_box, ids::HIDDEN_CLASS) {
        Ok(true) => {}
        Ok(false) => {
            if let Err(err) = page.focus_first_input(&reply_box) {
                log::debug!("reply input not focused: {err}");
            }
        }
        Err(err) => log::warn!("reply box toggle: {err}"),
    }
}

#[cfg(feature = "browser")]
pub fn submit_comment(ctrl: &Rc<Controller>, page: BrowserPage, parent_id: Option<&str>) {
    let Some(prepared) = prepare_comment(ctrl, &page, parent_id) else {
        return;
    };
    let form = match page.comment_form_data(&prepared.submission) {
        Ok(form) => form,
        Err(err) => {
            finish_comment(&page, &prepared, Err(ApiError::Body(err.to_string())));
            return;
        }
    };
    let ctrl = Rc::clone(ctrl);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = api::create_comment(&prepared.post_id, form, &ctrl.config().csrf_header, ctrl.token_or_empty()).await;
        finish_comment(&page, &prepared, outcome);
    });
}

#[cfg(feature = "browser")]
pub fn delete_comment(ctrl: &Rc<Controller>, page: BrowserPage, comment_id: &str) {
    if !confirm_comment_delete(&page) {
        return;
    }
    let ctrl = Rc::clone(ctrl);
    let comment_id = comment_id.to_owned();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = api::delete_comment(&comment_id, &ctrl.config().csrf_header, ctrl.token_or_empty()).await;
        finish_comment_delete(&page, &comment_id, outcome);
    });
}
