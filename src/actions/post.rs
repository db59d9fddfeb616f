//! Share and delete for a whole post.
//!
//! Both are confirmation-gated native form submits: the browser navigates to
//! the endpoint and the server redirects back, so there is no reply to apply.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use crate::dom::Page;
use crate::net::api;
use crate::net::types::FormPost;
use crate::state::controller::Controller;
use crate::strings;

/// Ask for an optional caption and share the post. Returns whether the form was submitted.
///
/// An empty caption is a valid answer; only cancelling the prompt aborts.
pub fn share_post(ctrl: &Controller, page: &impl Page, post_id: &str) -> bool {
    let Some(caption) = page.prompt(strings::SHARE_CAPTION_PROMPT) else {
        return false;
    };
    let form = api::share_form(post_id, &ctrl.config().csrf_field, ctrl.token_or_empty(), &caption);
    submit(page, post_id, "share", &form)
}

/// Confirm and delete the post. Returns whether the form was submitted.
pub fn delete_post(ctrl: &Controller, page: &impl Page, post_id: &str) -> bool {
    if !page.confirm(strings::CONFIRM_DELETE_POST) {
        return false;
    }
    let form = api::delete_form(post_id, &ctrl.config().csrf_field, ctrl.token_or_empty());
    submit(page, post_id, "delete", &form)
}

fn submit(page: &impl Page, post_id: &str, what: &str, form: &FormPost) -> bool {
    match page.submit_form(form) {
        Ok(()) => true,
        Err(err) => {
            log::error!("{what} post {post_id}: {err}");
            false
        }
    }
}
