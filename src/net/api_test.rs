use super::*;

#[test]
fn post_endpoints_format_expected_paths() {
    assert_eq!(post_reaction_endpoint("12"), "/posts/12/reaction/");
    assert_eq!(post_share_endpoint("12"), "/posts/12/share/");
    assert_eq!(post_delete_endpoint("12"), "/posts/12/delete/");
    assert_eq!(comment_create_endpoint("12"), "/posts/12/comment/");
}

#[test]
fn comment_endpoints_format_expected_paths() {
    assert_eq!(comment_reaction_endpoint("9"), "/posts/comment/9/reaction/");
    assert_eq!(comment_delete_endpoint("9"), "/posts/comment/9/delete/");
}

#[test]
fn reaction_body_carries_kind_as_sole_field() {
    assert_eq!(reaction_body("love"), "reaction=love");
}

#[test]
fn reaction_body_encodes_unexpected_characters() {
    assert_eq!(reaction_body("a&b=c"), "reaction=a%26b%3Dc");
}

#[test]
fn share_form_carries_token_and_caption() {
    let form = share_form("4", "csrfmiddlewaretoken", "tok", "nice one");
    assert_eq!(form.action, "/posts/4/share/");
    assert_eq!(
        form.fields,
        vec![
            ("csrfmiddlewaretoken".to_owned(), "tok".to_owned()),
            ("caption".to_owned(), "nice one".to_owned()),
        ]
    );
}

#[test]
fn delete_form_carries_only_token() {
    let form = delete_form("4", "csrfmiddlewaretoken", "tok");
    assert_eq!(form.action, "/posts/4/delete/");
    assert_eq!(form.fields, vec![("csrfmiddlewaretoken".to_owned(), "tok".to_owned())]);
}
