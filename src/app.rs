//! Browser entry point and the functions page templates call.
//!
//! The module start hook sets up logging, reads the page config and the
//! anti-forgery cookie into a [`Controller`], and installs the click-outside
//! listener. Templates call the exported handlers from `onclick` /
//! `onmouseenter` attributes using their historical names, passing post and
//! comment ids as numbers or strings.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::actions::{comment, dismiss, picker, post, reaction};
use crate::config::PageConfig;
use crate::dom::browser::{BrowserPage, id_from_js};
use crate::state::controller::Controller;
use crate::state::reaction::DEFAULT_REACTION;
use crate::util::html;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<Controller>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(page) = BrowserPage::current() else {
        web_sys::console::error_1(&JsValue::from_str("posts-client: no document"));
        return;
    };
    let config = PageConfig::from_document(page.window(), page.document());
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("posts-client: logger not installed: {err}")));
    }

    let controller = Rc::new(Controller::new(config, &page.cookies()));
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));

    if let Err(err) = dismiss::install(&page) {
        log::error!("click-outside listener not installed: {err}");
    }
    log::info!("posts client loaded");
}

/// Run `f` with the controller and the current page, logging if either is missing.
fn with_controller(f: impl FnOnce(&Rc<Controller>, BrowserPage)) {
    let Some(page) = BrowserPage::current() else {
        log::error!("no document");
        return;
    };
    let controller = CONTROLLER.with(|slot| slot.borrow().clone());
    match controller {
        Some(ctrl) => f(&ctrl, page),
        None => log::error!("handler called before start"),
    }
}

fn required_id(value: &JsValue, what: &str) -> Option<String> {
    let id = id_from_js(value);
    if id.is_none() {
        log::warn!("{what} id missing: {value:?}");
    }
    id
}

#[wasm_bindgen(js_name = delayShowReactions)]
pub fn delay_show_reactions(post_id: JsValue) {
    let Some(post_id) = required_id(&post_id, "post") else {
        return;
    };
    with_controller(|ctrl, _| picker::delay_show(ctrl, &post_id));
}

#[wasm_bindgen(js_name = hideReactions)]
pub fn hide_reactions(post_id: JsValue) {
    let Some(post_id) = required_id(&post_id, "post") else {
        return;
    };
    with_controller(|ctrl, _| picker::delay_hide(ctrl, &post_id));
}

#[wasm_bindgen(js_name = showReactionPicker)]
pub fn show_reaction_picker(post_id: JsValue) {
    let Some(post_id) = required_id(&post_id, "post") else {
        return;
    };
    with_controller(|_, page| picker::show_reaction_picker(&page, &post_id));
}

#[wasm_bindgen(js_name = toggleReaction)]
pub fn toggle_reaction(post_id: JsValue, kind: Option<String>) {
    let Some(post_id) = required_id(&post_id, "post") else {
        return;
    };
    let kind = kind.unwrap_or_else(|| DEFAULT_REACTION.to_owned());
    with_controller(|ctrl, page| reaction::toggle_reaction(ctrl, page, &post_id, &kind));
}

#[wasm_bindgen(js_name = sharePost)]
pub fn share_post(post_id: JsValue) {
    let Some(post_id) = required_id(&post_id, "post") else {
        return;
    };
    with_controller(|ctrl, page| {
        post::share_post(ctrl, &page, &post_id);
    });
}

#[wasm_bindgen(js_name = deletePost)]
pub fn delete_post(post_id: JsValue) {
    let Some(post_id) = required_id(&post_id, "post") else {
        return;
    };
    with_controller(|ctrl, page| {
        post::delete_post(ctrl, &page, &post_id);
    });
}

/// Submit the main comment form, or the reply form under `parent_id`.
#[wasm_bindgen(js_name = submitComment)]
pub fn submit_comment(parent_id: JsValue) {
    let parent_id = id_from_js(&parent_id);
    with_controller(|ctrl, page| comment::submit_comment(ctrl, page, parent_id.as_deref()));
}

#[wasm_bindgen(js_name = toggleCommentLike)]
pub fn toggle_comment_like(comment_id: JsValue) {
    let Some(comment_id) = required_id(&comment_id, "comment") else {
        return;
    };
    with_controller(|ctrl, page| reaction::toggle_comment_like(ctrl, page, &comment_id));
}

#[wasm_bindgen(js_name = deleteComment)]
pub fn delete_comment(comment_id: JsValue) {
    let Some(comment_id) = required_id(&comment_id, "comment") else {
        return;
    };
    with_controller(|ctrl, page| comment::delete_comment(ctrl, page, &comment_id));
}

#[wasm_bindgen(js_name = showReply)]
pub fn show_reply(comment_id: JsValue) {
    let Some(comment_id) = required_id(&comment_id, "comment") else {
        return;
    };
    with_controller(|_, page| comment::show_reply(&page, &comment_id));
}

#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html(text: &str) -> String {
    html::escape_html(text)
}
