//! # genui-core - Core Domain Types
//!
//! Foundation crate for GenUI Studio. Provides domain types, error handling,
//! logging setup, code extraction from model output and the sandboxed
//! preview renderer.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing, htmd).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Framework`] - Target stack for the generated component (`html-css`, `html-tailwind`, ...)
//! - [`GenerationRequest`] - Prompt text plus framework, with validation
//! - [`GenerationResult`] - Outcome of one generation attempt
//! - [`ThemeMode`] - Light/dark presentation preference
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Extraction (`extract`)
//! - [`extract()`] - First fenced code block of a model response, or the trimmed text
//! - [`extract_opt()`] - Same, treating an absent response as empty
//!
//! ### Preview (`preview`)
//! - [`PreviewDocument`] - Text rendering of an HTML document
//! - [`render_document()`] - Strip active content and render to lines
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use genui_core::prelude::*;
//! ```

pub mod error;
pub mod extract;
pub mod logging;
pub mod prelude;
pub mod preview;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use extract::{extract, extract_opt, has_fenced_block};
pub use preview::{render_document, strip_inert_elements, PreviewDocument};
pub use types::{Framework, GenerationRequest, GenerationResult, ThemeMode};

/// File name used when saving generated code
pub const DOWNLOAD_FILE_NAME: &str = "GenUI-Code.html";
