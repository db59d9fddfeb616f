//! HTML text escaping for snippets page scripts build by hand.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

/// Escape `text` so it renders literally when inserted as HTML element content.
///
/// Quotes are left alone, matching what the browser serializes for a text
/// node, so the result is not safe inside attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
