//! Sandboxed preview rendering
//!
//! Generated documents are untrusted. The preview never executes anything:
//! active content (`<script>`, `<style>`, `<noscript>`, `<template>`, the
//! whole `<head>`) is stripped and the remaining markup is converted to
//! markdown-flavoured text that the TUI can lay out line by line.

use regex::Regex;
use std::sync::LazyLock;

use crate::prelude::*;

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("Title regex pattern is valid")
});

/// Elements whose content must never reach the preview.
static INERT_ELEMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?isx)
        <script\b[^>]*>.*?</script\s*>
        | <style\b[^>]*>.*?</style\s*>
        | <noscript\b[^>]*>.*?</noscript\s*>
        | <template\b[^>]*>.*?</template\s*>
        | <head\b[^>]*>.*?</head\s*>
        | <!--.*?-->
        ",
    )
    .expect("Inert element regex pattern is valid")
});

/// Text rendering of the current code
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewDocument {
    /// Contents of `<title>`, if any
    pub title: Option<String>,
    /// Rendered lines, ready for display
    pub lines: Vec<String>,
    /// Preview epoch this document was built for
    pub epoch: u64,
}

impl PreviewDocument {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Build the preview for `code` at the given epoch
pub fn render_document(code: &str, epoch: u64) -> PreviewDocument {
    let title = extract_title(code);
    let sanitized = strip_inert_elements(code);

    let options = htmd::options::Options {
        heading_style: htmd::options::HeadingStyle::Atx,
        code_block_style: htmd::options::CodeBlockStyle::Fenced,
        link_style: htmd::options::LinkStyle::Inlined,
        ..Default::default()
    };
    let converter = htmd::HtmlToMarkdown::builder().options(options).build();

    let text = match converter.convert(&sanitized) {
        Ok(markdown) => markdown,
        Err(e) => {
            warn!("Preview conversion failed, showing sanitized source: {}", e);
            sanitized
        }
    };

    debug!(
        "Rendered preview epoch {} ({} bytes of source)",
        epoch,
        code.len()
    );

    PreviewDocument {
        title,
        lines: normalize_lines(&text),
        epoch,
    }
}

/// Remove every element that could execute or carries no visible content
pub fn strip_inert_elements(html: &str) -> String {
    INERT_ELEMENT_PATTERN.replace_all(html, "").into_owned()
}

fn extract_title(html: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
}

/// Trim trailing whitespace, collapse runs of blank lines, drop blank edges
fn normalize_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = true;

    for line in text.lines() {
        let line = line.trim_end();
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { String::new() } else { line.to_string() });
        previous_blank = blank;
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Pricing   Card</title>
  <style>.card { color: red; }</style>
</head>
<body>
  <h1>Pro plan</h1>
  <p>Everything you need.</p>
  <script>alert("pwned")</script>
  <button onclick="buy()">Buy now</button>
</body>
</html>"#;

    #[test]
    fn test_title_is_extracted_and_collapsed() {
        let doc = render_document(SAMPLE, 0);
        assert_eq!(doc.title.as_deref(), Some("Pricing Card"));
    }

    #[test]
    fn test_scripts_and_styles_never_reach_preview() {
        let doc = render_document(SAMPLE, 0);
        let text = doc.lines.join("\n");
        assert!(!text.contains("alert"));
        assert!(!text.contains("color: red"));
        assert!(text.contains("Pro plan"));
        assert!(text.contains("Everything you need."));
        assert!(text.contains("Buy now"));
    }

    #[test]
    fn test_epoch_is_carried() {
        let doc = render_document("<p>x</p>", 7);
        assert_eq!(doc.epoch, 7);
    }

    #[test]
    fn test_empty_code_yields_empty_document() {
        let doc = render_document("", 1);
        assert!(doc.is_empty());
        assert!(doc.title.is_none());
    }

    #[test]
    fn test_strip_inert_elements_is_case_insensitive() {
        let html = "<SCRIPT type=\"module\">x()</SCRIPT><p>keep</p><!-- note -->";
        assert_eq!(strip_inert_elements(html), "<p>keep</p>");
    }

    #[test]
    fn test_normalize_lines_collapses_blank_runs() {
        let lines = normalize_lines("\n\nfirst  \n\n\n\nsecond\n\n");
        assert_eq!(lines, vec!["first", "", "second"]);
    }
}
