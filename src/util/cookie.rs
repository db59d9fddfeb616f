//! Cookie-string lookup for the anti-forgery token.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use percent_encoding::percent_decode_str;

/// Find `name` in a `document.cookie` style string and return its decoded value.
///
/// Entries are split on `;` and trimmed; the first entry whose name matches
/// exactly wins. A value that does not decode to UTF-8 is returned raw.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
        .map(decode_value)
}

fn decode_value(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_owned(),
    }
}
