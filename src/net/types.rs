//! Wire types for the posts endpoints.
//!
//! Replies are parsed leniently: every field is optional because the handlers
//! only look at the few keys they need and treat anything unexpected as the
//! inactive or failed case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Reply from the post and comment reaction endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReactionResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Server-side reaction total; a number in practice, shown verbatim.
    #[serde(default)]
    pub total_count: Option<serde_json::Value>,
}

impl ReactionResponse {
    /// Counter text to display, if the server sent a total.
    pub fn total_count_text(&self) -> Option<String> {
        match self.total_count.as_ref()? {
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Reply from the comment delete endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteCommentResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DeleteCommentResponse {
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }

    /// Server-supplied error text, ignoring blank messages.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }
}

/// A hidden-field form submitted as a full page navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPost {
    pub action: String,
    pub fields: Vec<(String, String)>,
}
