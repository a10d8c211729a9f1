use std::sync::LazyLock;

use regex::Regex;

/// Inline formatting markers: emphasis, heading, quote, code and rule
/// characters.
static MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_~#>`-]").expect("marker pattern is valid"));

/// Markdown links, `[text](url)`.
static LINKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("link pattern is valid"));

/// Reduces a line of markdown to plain text.
///
/// Strips all inline formatting markers and replaces every `[text](url)`
/// link with just `text`. Total over arbitrary input; a line without any
/// markers is returned character-for-character.
///
/// ## Example
///
/// ```
/// use inline_suggest::normalize_markdown;
///
/// assert_eq!(normalize_markdown("some **bold** text"), "some bold text");
/// assert_eq!(normalize_markdown("a [link](https://example.com)"), "a link");
/// ```
#[must_use]
pub fn normalize_markdown(line: &str) -> String {
    let without_markers = MARKERS.replace_all(line, "");
    LINKS.replace_all(&without_markers, "$1").into_owned()
}
