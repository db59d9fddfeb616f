//! Comment drafts and what gets submitted for them.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

/// Contents of a comment form at the moment the user hits send.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentDraft {
    /// Comment being replied to; `None` for a top-level comment.
    pub parent_id: Option<String>,
    pub text: String,
    /// Files selected in the attachment control, `None` when the page has no such control.
    pub file_count: Option<u32>,
}

/// Payload for the comment create endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentSubmission {
    pub content: String,
    pub parent_id: Option<String>,
    /// Attach the selected files under `images`. Replies never carry files.
    pub include_files: bool,
}

impl CommentDraft {
    pub fn content(&self) -> &str {
        self.text.trim()
    }

    fn has_files(&self) -> bool {
        self.file_count.unwrap_or(0) > 0
    }

    /// Blank text with nothing attached.
    pub fn is_empty(&self) -> bool {
        self.content().is_empty() && !self.has_files()
    }

    /// Turn the draft into a submission, or `None` if there is nothing to send.
    pub fn into_submission(self) -> Option<CommentSubmission> {
        if self.is_empty() {
            return None;
        }
        let include_files = self.parent_id.is_none() && self.has_files();
        Some(CommentSubmission {
            content: self.content().to_owned(),
            parent_id: self.parent_id,
            include_files,
        })
    }
}

impl CommentSubmission {
    /// Text fields of the multipart body, in send order.
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("content", self.content.as_str())];
        if let Some(parent_id) = self.parent_id.as_deref() {
            fields.push(("parent_id", parent_id));
        }
        fields
    }
}
