//! Core domain types for GenUI Studio

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Framework
// ─────────────────────────────────────────────────────────────────────────────

/// Target stack the generated component should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    #[default]
    HtmlCss,
    HtmlTailwind,
    HtmlBootstrap,
    HtmlCssJs,
    HtmlTailwindBootstrap,
}

impl Framework {
    /// Every framework, in selector order
    pub const ALL: [Framework; 5] = [
        Framework::HtmlCss,
        Framework::HtmlTailwind,
        Framework::HtmlBootstrap,
        Framework::HtmlCssJs,
        Framework::HtmlTailwindBootstrap,
    ];

    /// Wire value embedded in the prompt (e.g. `html-tailwind`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::HtmlCss => "html-css",
            Framework::HtmlTailwind => "html-tailwind",
            Framework::HtmlBootstrap => "html-bootstrap",
            Framework::HtmlCssJs => "html-css-js",
            Framework::HtmlTailwindBootstrap => "html-tailwind-bootstrap",
        }
    }

    /// Human-readable label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            Framework::HtmlCss => "HTML + CSS",
            Framework::HtmlTailwind => "HTML + Tailwind CSS",
            Framework::HtmlBootstrap => "HTML + Bootstrap",
            Framework::HtmlCssJs => "HTML + CSS + JS",
            Framework::HtmlTailwindBootstrap => "HTML + Tailwind + Bootstrap",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Next framework, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous framework, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::config(format!(
                    "unknown framework '{}' (expected one of: {})",
                    s,
                    Self::ALL
                        .iter()
                        .map(|f| f.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generation request / result
// ─────────────────────────────────────────────────────────────────────────────

/// A user's request to generate a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt_text: String,
    pub framework: Framework,
}

impl GenerationRequest {
    pub fn new(prompt_text: impl Into<String>, framework: Framework) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            framework,
        }
    }

    /// True when the prompt is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.prompt_text.trim().is_empty()
    }

    /// Reject requests that must never reach the network
    pub fn validate(&self) -> Result<()> {
        if self.is_blank() {
            return Err(Error::Validation);
        }
        Ok(())
    }
}

/// Outcome of a single generation attempt
///
/// Replaces the previous result entirely; no history is retained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationResult {
    pub source_code: String,
    pub succeeded: bool,
    pub error_message: Option<String>,
}

impl GenerationResult {
    pub fn success(source_code: impl Into<String>) -> Self {
        Self {
            source_code: source_code.into(),
            succeeded: true,
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            source_code: String::new(),
            succeeded: false,
            error_message: Some(message.into()),
        }
    }
}

impl From<Result<String>> for GenerationResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(code) => GenerationResult::success(code),
            Err(e) => GenerationResult::failure(e.to_string()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Light/dark presentation preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        Self::from_is_dark(!self.is_dark())
    }

    /// Persisted slot value: `"dark"` or `"light"`
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Read a persisted slot value; anything but `"dark"` is light
    pub fn from_persisted(value: &str) -> Self {
        Self::from_is_dark(value.trim().eq_ignore_ascii_case("dark"))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_wire_values() {
        let values: Vec<&str> = Framework::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "html-css",
                "html-tailwind",
                "html-bootstrap",
                "html-css-js",
                "html-tailwind-bootstrap"
            ]
        );
    }

    #[test]
    fn test_framework_serde_matches_wire_value() {
        for fw in Framework::ALL {
            let json = serde_json::to_string(&fw).unwrap();
            assert_eq!(json, format!("\"{}\"", fw.as_str()));
        }
    }

    #[test]
    fn test_framework_from_str() {
        assert_eq!(
            "html-tailwind".parse::<Framework>().unwrap(),
            Framework::HtmlTailwind
        );
        assert_eq!(
            " HTML-CSS-JS ".parse::<Framework>().unwrap(),
            Framework::HtmlCssJs
        );
        let err = "react".parse::<Framework>().unwrap_err();
        assert!(err.to_string().contains("html-css"));
    }

    #[test]
    fn test_framework_cycle_wraps() {
        assert_eq!(Framework::HtmlCss.next(), Framework::HtmlTailwind);
        assert_eq!(
            Framework::HtmlTailwindBootstrap.next(),
            Framework::HtmlCss
        );
        assert_eq!(Framework::HtmlCss.prev(), Framework::HtmlTailwindBootstrap);
    }

    #[test]
    fn test_framework_default_and_labels() {
        assert_eq!(Framework::default(), Framework::HtmlCss);
        assert_eq!(Framework::HtmlTailwind.label(), "HTML + Tailwind CSS");
        assert_eq!(Framework::from_index(4), Some(Framework::HtmlTailwindBootstrap));
        assert_eq!(Framework::from_index(5), None);
    }

    #[test]
    fn test_request_validation_rejects_blank() {
        assert!(GenerationRequest::new("", Framework::HtmlCss)
            .validate()
            .is_err());
        assert!(GenerationRequest::new("  \n\t ", Framework::HtmlCss)
            .validate()
            .is_err());
        assert!(GenerationRequest::new("a pricing card", Framework::HtmlCss)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_generation_result_from_result() {
        let ok: GenerationResult = Ok::<_, Error>("<div/>".to_string()).into();
        assert!(ok.succeeded);
        assert_eq!(ok.source_code, "<div/>");
        assert!(ok.error_message.is_none());

        let failed: GenerationResult = Err::<String, _>(Error::transport("timed out")).into();
        assert!(!failed.succeeded);
        assert!(failed.source_code.is_empty());
        assert!(failed.error_message.unwrap().contains("timed out"));
    }

    #[test]
    fn test_theme_mode_persisted_values() {
        assert_eq!(ThemeMode::from_persisted("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_persisted("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted("solarized"), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert!(!ThemeMode::default().is_dark());
    }
}
