//! Gemini `generateContent` wire types
//!
//! Responses are decoded with an ordered fallback: a top-level `text`
//! field, then the first candidate's `content`, then the whole response
//! serialized back to JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

/// Request body: `{"contents":[{"parts":[{"text": ...}]}]}`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: text.into() }],
            }],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

/// Accepted response shapes, tried in declaration order
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenerateContentResponse {
    Text { text: String },
    Candidates { candidates: Vec<Candidate> },
    Other(Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// A candidate's `content`: a plain string or the REST `parts` shape
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CandidateContent {
    Text(String),
    Parts { parts: Vec<ContentPart> },
    Other(Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

impl CandidateContent {
    /// Text carried by this content; `None` when nothing usable is present
    fn text(&self) -> Option<String> {
        match self {
            CandidateContent::Text(text) => non_blank(text.clone()),
            CandidateContent::Parts { parts } => {
                non_blank(parts.iter().filter_map(|p| p.text.as_deref()).collect())
            }
            CandidateContent::Other(Value::Null) => None,
            CandidateContent::Other(value) => Some(value.to_string()),
        }
    }
}

/// Blank text counts as missing so the fallback chain moves on
fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Pull raw model text out of a decoded response body
pub fn raw_text(value: &Value) -> String {
    let decoded = match GenerateContentResponse::deserialize(value) {
        Ok(decoded) => decoded,
        Err(_) => return value.to_string(),
    };

    let text = match decoded {
        GenerateContentResponse::Text { text } if !text.trim().is_empty() => return text,
        // Blank `text` falls through to the candidates
        GenerateContentResponse::Text { .. } => value
            .get("candidates")
            .and_then(|c| Vec::<Candidate>::deserialize(c).ok())
            .and_then(|candidates| first_candidate_text(&candidates)),
        GenerateContentResponse::Candidates { candidates } => first_candidate_text(&candidates),
        GenerateContentResponse::Other(other) => return other.to_string(),
    };
    text.unwrap_or_else(|| value.to_string())
}

fn first_candidate_text(candidates: &[Candidate]) -> Option<String> {
    candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(CandidateContent::text)
}

/// Server-provided message from an error body, if it has one
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|env| env.error.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}
