use super::*;
use crate::config::PageConfig;
use crate::dom::fake::{FakeElement, FakePage};

fn controller() -> Controller {
    let config = PageConfig {
        post_id: Some("10".to_owned()),
        ..PageConfig::default()
    };
    Controller::new(config, "csrftoken=tok")
}

fn input(value: &str) -> FakeElement {
    FakeElement {
        value: value.to_owned(),
        ..FakeElement::default()
    }
}

fn files(count: u32) -> FakeElement {
    FakeElement {
        files: Some(count),
        ..FakeElement::default()
    }
}

fn value(page: &FakePage, id: &str) -> String {
    page.get(id).map(|el| el.value).unwrap_or_default()
}

// =============================================================
// prepare_comment
// =============================================================

#[test]
fn missing_input_sends_nothing() {
    let page = FakePage::new();
    assert_eq!(prepare_comment(&controller(), &page, None), None);
    assert_eq!(prepare_comment(&controller(), &page, Some("4")), None);
}

#[test]
fn blank_text_without_file_control_sends_nothing() {
    let page = FakePage::new();
    page.insert("main-comment-input", input("   "));
    assert_eq!(prepare_comment(&controller(), &page, None), None);
}

#[test]
fn blank_text_with_empty_file_control_sends_nothing() {
    let page = FakePage::new();
    page.insert("main-comment-input", input(""));
    page.insert("comment-files", files(0));
    assert_eq!(prepare_comment(&controller(), &page, None), None);
}

#[test]
fn blank_text_with_files_sends_top_level_with_files() {
    let page = FakePage::new();
    page.insert("main-comment-input", input(""));
    page.insert("comment-files", files(2));
    let prepared = prepare_comment(&controller(), &page, None).unwrap();
    assert_eq!(prepared.post_id, "10");
    assert_eq!(prepared.submission.content, "");
    assert!(prepared.submission.include_files);
}

#[test]
fn top_level_comment_is_trimmed() {
    let page = FakePage::new();
    page.insert("main-comment-input", input("  great post \n"));
    let prepared = prepare_comment(&controller(), &page, None).unwrap();
    assert_eq!(prepared.submission.content, "great post");
    assert_eq!(prepared.submission.parent_id, None);
    assert!(!prepared.submission.include_files);
}

#[test]
fn reply_reads_its_own_input_and_never_attaches_files() {
    let page = FakePage::new();
    page.insert("main-comment-input", input("ignored"));
    page.insert("reply-input-4", input("agreed"));
    page.insert("comment-files", files(3));
    let prepared = prepare_comment(&controller(), &page, Some("4")).unwrap();
    assert_eq!(prepared.submission.content, "agreed");
    assert_eq!(prepared.submission.parent_id.as_deref(), Some("4"));
    assert!(!prepared.submission.include_files);
}

#[test]
fn page_without_post_id_sends_nothing() {
    let ctrl = Controller::new(PageConfig::default(), "csrftoken=tok");
    let page = FakePage::new();
    page.insert("main-comment-input", input("hello"));
    assert_eq!(prepare_comment(&ctrl, &page, None), None);
}

// =============================================================
// finish_comment
// =============================================================

#[test]
fn top_level_success_clears_text_files_and_preview() {
    let page = FakePage::new();
    page.insert("main-comment-input", input("hello"));
    page.insert("comment-files", files(2));
    page.insert(
        "main-preview",
        FakeElement {
            children: 2,
            ..FakeElement::default()
        },
    );
    let prepared = prepare_comment(&controller(), &page, None).unwrap();
    finish_comment(&page, &prepared, Ok(serde_json::json!({"id": 1})));

    assert_eq!(value(&page, "main-comment-input"), "");
    assert_eq!(page.get("comment-files").and_then(|el| el.files), Some(0));
    assert_eq!(page.get("main-preview").map(|el| el.children), Some(0));
}

#[test]
fn reply_success_clears_text_and_hides_reply_form() {
    let page = FakePage::new();
    page.insert("reply-input-4", input("agreed"));
    page.insert("comment-files", files(1));
    page.insert_with_classes("reply-form-4", &["mt-2"]);
    let prepared = prepare_comment(&controller(), &page, Some("4")).unwrap();
    finish_comment(&page, &prepared, Ok(serde_json::json!({})));

    assert_eq!(value(&page, "reply-input-4"), "");
    assert!(page.has_class("reply-form-4", "d-none"));
    assert_eq!(page.get("comment-files").and_then(|el| el.files), Some(1));
}

#[test]
fn failure_keeps_draft_and_is_silent() {
    let page = FakePage::new();
    page.insert("main-comment-input", input("hello"));
    let prepared = prepare_comment(&controller(), &page, None).unwrap();
    finish_comment(&page, &prepared, Err(ApiError::Status(400)));

    assert_eq!(value(&page, "main-comment-input"), "hello");
    assert!(page.alerts.borrow().is_empty());
}

// =============================================================
// Comment delete
// =============================================================

#[test]
fn delete_asks_for_confirmation() {
    let page = FakePage::answering_confirm(false);
    assert!(!confirm_comment_delete(&page));
    assert_eq!(page.confirms.borrow().as_slice(), ["Bạn có chắc muốn xóa bình luận này?"]);
}

#[test]
fn delete_refusal_alerts_server_message() {
    let page = FakePage::new();
    let resp = DeleteCommentResponse {
        status: Some("error".to_owned()),
        error: Some("Not allowed".to_owned()),
    };
    finish_comment_delete(&page, "3", Ok(resp));
    assert_eq!(page.alerts.borrow().as_slice(), ["Not allowed"]);
}

#[test]
fn delete_refusal_without_message_alerts_fallback() {
    let page = FakePage::new();
    let resp = DeleteCommentResponse {
        status: Some("error".to_owned()),
        error: None,
    };
    finish_comment_delete(&page, "3", Ok(resp));
    assert_eq!(page.alerts.borrow().as_slice(), ["Có lỗi xảy ra"]);
}

#[test]
fn delete_success_does_not_alert_or_remove_markup() {
    let page = FakePage::new();
    page.insert_with_classes("comment-3", &["comment"]);
    let resp = DeleteCommentResponse {
        status: Some("ok".to_owned()),
        error: None,
    };
    finish_comment_delete(&page, "3", Ok(resp));
    assert!(page.alerts.borrow().is_empty());
    assert!(page.get("comment-3").is_some());
}

#[test]
fn delete_transport_failure_is_silent() {
    let page = FakePage::new();
    finish_comment_delete(&page, "3", Err(ApiError::Network("offline".to_owned())));
    assert!(page.alerts.borrow().is_empty());
}

// =============================================================
// Reply box
// =============================================================

#[test]
fn show_reply_reveals_and_focuses() {
    let page = FakePage::new();
    page.insert(
        "reply-box-3",
        FakeElement {
            classes: ["d-none".to_owned()].into_iter().collect(),
            has_input: true,
            ..FakeElement::default()
        },
    );
    show_reply(&page, "3");
    assert!(!page.has_class("reply-box-3", "d-none"));
    assert_eq!(page.focused.borrow().as_slice(), ["reply-box-3"]);
}

#[test]
fn show_reply_again_hides_without_focus() {
    let page = FakePage::new();
    page.insert(
        "reply-box-3",
        FakeElement {
            has_input: true,
            ..FakeElement::default()
        },
    );
    show_reply(&page, "3");
    assert!(page.has_class("reply-box-3", "d-none"));
    assert!(page.focused.borrow().is_empty());
}

#[test]
fn show_reply_for_missing_box_is_noop() {
    let page = FakePage::new();
    show_reply(&page, "404");
    assert!(page.focused.borrow().is_empty());
}
