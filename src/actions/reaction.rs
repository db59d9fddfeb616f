//! Reaction toggles for posts and comments.
//!
//! The page only changes once the server has answered. A reply older than
//! one already applied for the same target is dropped.

#[cfg(test)]
#[path = "reaction_test.rs"]
mod reaction_test;

#[cfg(feature = "browser")]
use std::rc::Rc;

use super::picker::hide_picker;
#[cfg(feature = "browser")]
use crate::dom::browser::BrowserPage;
use crate::dom::Page;
use crate::ids;
#[cfg(feature = "browser")]
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::ReactionResponse;
use crate::state::controller::{Controller, RequestTarget};
use crate::state::reaction::{ReactionView, comment_reaction_active, post_reaction_view};
use crate::strings;

/// An in-flight post reaction toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostReactionRequest {
    pub post_id: String,
    pub kind: String,
    pub generation: u64,
}

impl PostReactionRequest {
    fn target(&self) -> RequestTarget {
        RequestTarget::PostReaction(self.post_id.clone())
    }
}

/// Close the post's picker and register a new toggle request.
pub fn begin_post_reaction(ctrl: &Controller, page: &impl Page, post_id: &str, kind: &str) -> PostReactionRequest {
    hide_picker(page, post_id);
    let generation = ctrl.begin_request(RequestTarget::PostReaction(post_id.to_owned()));
    PostReactionRequest {
        post_id: post_id.to_owned(),
        kind: kind.to_owned(),
        generation,
    }
}

/// Apply the outcome of a post reaction toggle.
///
/// Failures raise a blocking alert and leave the control as it was.
pub fn finish_post_reaction(
    ctrl: &Controller,
    page: &impl Page,
    req: &PostReactionRequest,
    outcome: Result<ReactionResponse, ApiError>,
) {
    let target = req.target();
    if ctrl.is_stale(&target, req.generation) {
        log::warn!("dropping superseded reaction reply for post {}", req.post_id);
        return;
    }
    match outcome {
        Ok(resp) => {
            ctrl.mark_applied(&target, req.generation);
            apply_post_reaction(page, &req.post_id, &post_reaction_view(&req.kind, &resp));
        }
        Err(err) => {
            log::error!("reaction on post {} failed: {err}", req.post_id);
            page.alert(strings::REACTION_FAILED);
        }
    }
}

fn apply_post_reaction(page: &impl Page, post_id: &str, view: &ReactionView) {
    let button = ids::post_like_button(post_id);
    let styled = if view.active {
        page.add_classes(&button, &[ids::REACTION_ACTIVE_CLASS])
            .and_then(|()| page.remove_classes(&button, &[ids::MUTED_CLASS]))
    } else {
        page.remove_classes(&button, &[ids::REACTION_ACTIVE_CLASS])
            .and_then(|()| page.add_classes(&button, &[ids::MUTED_CLASS]))
    };
    if let Err(err) = styled {
        log::warn!("reaction button for post {post_id}: {err}");
    }
    if let Err(err) = page.set_text(&ids::post_like_text(post_id), view.label) {
        log::warn!("reaction label for post {post_id}: {err}");
    }
    if let Some(count) = view.count.as_deref() {
        if let Err(err) = page.set_text(&ids::reaction_count(post_id), count) {
            log::debug!("reaction count for post {post_id}: {err}");
        }
    }
}

/// Register a new like toggle for a comment and return its generation.
pub fn begin_comment_like(ctrl: &Controller, comment_id: &str) -> u64 {
    ctrl.begin_request(RequestTarget::CommentReaction(comment_id.to_owned()))
}

/// Apply the outcome of a comment like toggle. Failures are only logged.
pub fn finish_comment_like(
    ctrl: &Controller,
    page: &impl Page,
    comment_id: &str,
    generation: u64,
    outcome: Result<ReactionResponse, ApiError>,
) {
    let target = RequestTarget::CommentReaction(comment_id.to_owned());
    if ctrl.is_stale(&target, generation) {
        log::warn!("dropping superseded reaction reply for comment {comment_id}");
        return;
    }
    let resp = match outcome {
        Ok(resp) => {
            ctrl.mark_applied(&target, generation);
            resp
        }
        Err(err) => {
            log::error!("reaction on comment {comment_id} failed: {err}");
            return;
        }
    };
    let link = ids::comment_like(comment_id);
    let styled = if comment_reaction_active(&resp) {
        page.add_classes(&link, &ids::COMMENT_LIKE_ACTIVE_CLASSES)
            .and_then(|()| page.remove_classes(&link, &[ids::MUTED_CLASS]))
    } else {
        page.remove_classes(&link, &ids::COMMENT_LIKE_ACTIVE_CLASSES)
            .and_then(|()| page.add_classes(&link, &[ids::MUTED_CLASS]))
    };
    if let Err(err) = styled {
        log::warn!("like link for comment {comment_id}: {err}");
    }
}

#[cfg(feature = "browser")]
pub fn toggle_reaction(ctrl: &Rc<Controller>, page: BrowserPage, post_id: &str, kind: &str) {
    let req = begin_post_reaction(ctrl, &page, post_id, kind);
    let ctrl = Rc::clone(ctrl);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome =
            api::toggle_post_reaction(&req.post_id, &req.kind, &ctrl.config().csrf_header, ctrl.token_or_empty()).await;
        finish_post_reaction(&ctrl, &page, &req, outcome);
    });
}

#[cfg(feature = "browser")]
pub fn toggle_comment_like(ctrl: &Rc<Controller>, page: BrowserPage, comment_id: &str) {
    let generation = begin_comment_like(ctrl, comment_id);
    let ctrl = Rc::clone(ctrl);
    let comment_id = comment_id.to_owned();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = api::toggle_comment_reaction(&comment_id, &ctrl.config().csrf_header, ctrl.token_or_empty()).await;
        finish_comment_like(&ctrl, &page, &comment_id, generation, outcome);
    });
}
