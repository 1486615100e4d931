//! Text and URL helpers shared by the extraction strategies.

use scraper::ElementRef;
use url::Url;

/// Visible text of an element with every text node trimmed.
///
/// Empty nodes are dropped and the rest are concatenated without a separator,
/// so `<a> Hello <b>world</b> </a>` yields `"Helloworld"`.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether `title` is strictly longer than `min_chars` characters.
pub fn longer_than(title: &str, min_chars: usize) -> bool {
    title.chars().count() > min_chars
}

/// Resolve an href against the page URL.
///
/// The result is a normalized absolute URL: non-ASCII path characters and
/// spaces come back percent-encoded. Hrefs the URL parser rejects (such as
/// `http://[bad`) yield `None`.
pub fn resolve_href(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(String::from)
}

/// Truncate a string for logging purposes.
///
/// Counts characters, not bytes, so Cyrillic headlines never split inside a
/// code point.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}
