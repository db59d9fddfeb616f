//! HTTP helpers for the posts endpoints.
//!
//! Path and body builders are plain functions so they can be tested
//! natively. The request functions exist only in the browser build and use
//! `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Every request returns `Result<_, ApiError>`; handlers decide whether a
//! failure is logged or surfaced. Nothing is retried and nothing times out.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use super::types::FormPost;
#[cfg(feature = "browser")]
use super::{
    error::ApiError,
    types::{DeleteCommentResponse, ReactionResponse},
};

#[cfg(feature = "browser")]
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

pub fn post_reaction_endpoint(post_id: &str) -> String {
    format!("/posts/{post_id}/reaction/")
}

pub fn post_share_endpoint(post_id: &str) -> String {
    format!("/posts/{post_id}/share/")
}

pub fn post_delete_endpoint(post_id: &str) -> String {
    format!("/posts/{post_id}/delete/")
}

pub fn comment_create_endpoint(post_id: &str) -> String {
    format!("/posts/{post_id}/comment/")
}

pub fn comment_reaction_endpoint(comment_id: &str) -> String {
    format!("/posts/comment/{comment_id}/reaction/")
}

pub fn comment_delete_endpoint(comment_id: &str) -> String {
    format!("/posts/comment/{comment_id}/delete/")
}

/// Form-urlencoded body for the reaction endpoints: `reaction=<kind>`.
pub fn reaction_body(kind: &str) -> String {
    format!("reaction={}", utf8_percent_encode(kind, NON_ALPHANUMERIC))
}

/// Navigation form that shares a post with an optional caption.
pub fn share_form(post_id: &str, csrf_field: &str, token: &str, caption: &str) -> FormPost {
    FormPost {
        action: post_share_endpoint(post_id),
        fields: vec![
            (csrf_field.to_owned(), token.to_owned()),
            ("caption".to_owned(), caption.to_owned()),
        ],
    }
}

/// Navigation form that deletes a post.
pub fn delete_form(post_id: &str, csrf_field: &str, token: &str) -> FormPost {
    FormPost {
        action: post_delete_endpoint(post_id),
        fields: vec![(csrf_field.to_owned(), token.to_owned())],
    }
}

#[cfg(feature = "browser")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    let status = resp.status();
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(feature = "browser")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(ApiError::from)
}

/// Toggle a reaction on a post via `POST /posts/{post_id}/reaction/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body is not a reaction reply.
#[cfg(feature = "browser")]
pub async fn toggle_post_reaction(
    post_id: &str,
    kind: &str,
    header: &str,
    token: &str,
) -> Result<ReactionResponse, ApiError> {
    log::debug!("POST {} reaction={kind}", post_reaction_endpoint(post_id));
    let resp = gloo_net::http::Request::post(&post_reaction_endpoint(post_id))
        .header(header, token)
        .header("Content-Type", FORM_URLENCODED)
        .body(reaction_body(kind))?
        .send()
        .await?;
    check_status(&resp)?;
    read_json(resp).await
}

/// Toggle the like on a comment via `POST /posts/comment/{comment_id}/reaction/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body is not a reaction reply.
#[cfg(feature = "browser")]
pub async fn toggle_comment_reaction(comment_id: &str, header: &str, token: &str) -> Result<ReactionResponse, ApiError> {
    log::debug!("POST {} reaction=like", comment_reaction_endpoint(comment_id));
    let resp = gloo_net::http::Request::post(&comment_reaction_endpoint(comment_id))
        .header(header, token)
        .header("Content-Type", FORM_URLENCODED)
        .body(reaction_body(crate::state::reaction::DEFAULT_REACTION))?
        .send()
        .await?;
    check_status(&resp)?;
    read_json(resp).await
}

/// Delete a comment via `POST /posts/comment/{comment_id}/delete/`.
///
/// The body is parsed whatever the status: the endpoint reports refusals as
/// `{"status": "error", "error": "..."}` with a 4xx code.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not JSON.
#[cfg(feature = "browser")]
pub async fn delete_comment(comment_id: &str, header: &str, token: &str) -> Result<DeleteCommentResponse, ApiError> {
    log::debug!("POST {}", comment_delete_endpoint(comment_id));
    let resp = gloo_net::http::Request::post(&comment_delete_endpoint(comment_id))
        .header(header, token)
        .send()
        .await?;
    read_json(resp).await
}

/// Create a comment via `POST /posts/{post_id}/comment/` with a multipart body.
///
/// No `Content-Type` is set so the browser derives the multipart boundary.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body is not JSON.
#[cfg(feature = "browser")]
pub async fn create_comment(
    post_id: &str,
    form: web_sys::FormData,
    header: &str,
    token: &str,
) -> Result<serde_json::Value, ApiError> {
    log::debug!("POST {}", comment_create_endpoint(post_id));
    let resp = gloo_net::http::Request::post(&comment_create_endpoint(post_id))
        .header(header, token)
        .body(form)?
        .send()
        .await?;
    check_status(&resp)?;
    read_json(resp).await
}
