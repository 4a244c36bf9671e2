//! Extraction of HTML documents from raw model output.

use std::sync::LazyLock;

use regex::Regex;

/// First fenced block explicitly tagged as HTML.
static HTML_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```html\n(.*?)\n```").expect("static pattern is valid"));

/// First fenced block without a language tag.
static BARE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\n(.*?)\n```").expect("static pattern is valid"));

/// Recovers the intended HTML document from raw model output.
///
/// Models asked for "only the HTML" still frequently wrap it in a markdown
/// code fence. Resolution order, first match wins:
///
/// 1. the first ```` ```html ```` fenced block's inner content,
/// 2. the first untagged ```` ``` ```` fenced block's inner content,
/// 3. the raw text unchanged.
///
/// Only the final return value is trimmed. An empty input yields an empty
/// string; callers treat that as a generation failure.
pub fn extract_html(raw: &str) -> String {
    let document = if let Some(captures) = HTML_FENCE.captures(raw) {
        captures[1].to_owned()
    } else if let Some(captures) = BARE_FENCE.captures(raw) {
        captures[1].to_owned()
    } else {
        raw.to_owned()
    };

    document.trim().to_owned()
}
