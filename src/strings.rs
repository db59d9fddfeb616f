//! User-facing copy shown in alerts, prompts, and reaction labels.

/// Alert shown when a post reaction request fails.
pub const REACTION_FAILED: &str = "Có lỗi xảy ra. Vui lòng thử lại.";
/// Fallback alert when comment deletion fails without a server message.
pub const GENERIC_ERROR: &str = "Có lỗi xảy ra";

pub const CONFIRM_DELETE_POST: &str = "Bạn có chắc muốn xóa bài viết này?";
pub const CONFIRM_DELETE_COMMENT: &str = "Bạn có chắc muốn xóa bình luận này?";
pub const SHARE_CAPTION_PROMPT: &str = "Viết lời nhắn khi chia sẻ (tùy chọn):";

pub const LABEL_LIKE: &str = "Thích";
pub const LABEL_LOVE: &str = "Yêu thích";
pub const LABEL_HAHA: &str = "Haha";
pub const LABEL_SAD: &str = "Buồn";
pub const LABEL_ANGRY: &str = "Phẫn nộ";
