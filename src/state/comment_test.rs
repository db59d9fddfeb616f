use super::*;

fn draft(parent_id: Option<&str>, text: &str, file_count: Option<u32>) -> CommentDraft {
    CommentDraft {
        parent_id: parent_id.map(str::to_owned),
        text: text.to_owned(),
        file_count,
    }
}

#[test]
fn blank_text_without_file_control_is_empty() {
    assert!(draft(None, "   \n", None).is_empty());
    assert!(draft(None, "   ", None).into_submission().is_none());
}

#[test]
fn blank_text_with_zero_files_is_empty() {
    assert!(draft(None, "", Some(0)).into_submission().is_none());
}

#[test]
fn blank_text_with_files_submits_top_level() {
    let submission = draft(None, "", Some(2)).into_submission().unwrap();
    assert_eq!(submission.content, "");
    assert!(submission.include_files);
}

#[test]
fn text_is_trimmed() {
    let submission = draft(None, "  hello  ", None).into_submission().unwrap();
    assert_eq!(submission.content, "hello");
    assert!(!submission.include_files);
}

#[test]
fn reply_never_includes_files() {
    let submission = draft(Some("5"), "thanks", Some(3)).into_submission().unwrap();
    assert_eq!(submission.parent_id.as_deref(), Some("5"));
    assert!(!submission.include_files);
}

#[test]
fn reply_text_fields_carry_parent_id() {
    let submission = draft(Some("5"), "thanks", None).into_submission().unwrap();
    assert_eq!(submission.text_fields(), vec![("content", "thanks"), ("parent_id", "5")]);
}

#[test]
fn top_level_text_fields_omit_parent_id() {
    let submission = draft(None, "hi", None).into_submission().unwrap();
    assert_eq!(submission.text_fields(), vec![("content", "hi")]);
}
