//! Code extraction from model output
//!
//! Models are asked to answer with a single fenced markdown block, but they
//! frequently wrap it in prose ("Here is your component: ..."). `extract`
//! pulls the first fenced block out, falling back to the whole text.

use regex::Regex;
use std::sync::LazyLock;

/// First fenced block: opening fence, optional language tag, optional newline,
/// then everything up to the nearest closing fence.
static FENCED_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:\w+)?\n?([\s\S]*?)```").expect("Fenced block regex pattern is valid")
});

/// Best-guess source code from raw model text
///
/// Returns the trimmed content of the first fenced block when one exists,
/// otherwise the trimmed input. Never fails.
///
/// # Examples
/// ```
/// use genui_core::extract::extract;
///
/// assert_eq!(extract("Here:\n```html\n<div>x</div>\n```"), "<div>x</div>");
/// assert_eq!(extract("  plain text  "), "plain text");
/// assert_eq!(extract(""), "");
/// ```
pub fn extract(raw_text: &str) -> String {
    if raw_text.is_empty() {
        return String::new();
    }

    match FENCED_BLOCK_PATTERN.captures(raw_text) {
        Some(caps) => caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
        None => raw_text.trim().to_string(),
    }
}

/// Same as [`extract`], treating an absent response as empty
pub fn extract_opt(raw_text: Option<&str>) -> String {
    raw_text.map(extract).unwrap_or_default()
}

/// True if the text contains at least one complete fenced block
pub fn has_fenced_block(raw_text: &str) -> bool {
    FENCED_BLOCK_PATTERN.is_match(raw_text)
}
