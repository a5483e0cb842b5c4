//! Class Token Rewriter: replace the `hide` CSS class with `hidden`
//!
//! Reads an HTML document, rewrites every standalone `hide` token found
//! inside a double-quoted `class="..."` attribute to `hidden`, and writes the
//! document back to the same path.
//!
//! # Architecture
//!
//! Every replacement compiles down to a single primitive: [`TokenEdit`], a
//! verified byte-span replacement. [`ClassTokenRewriter`] decides where the
//! spans are; [`document`] reads and persists the file.
//!
//! - Pure core: [`rewrite_class_tokens`] takes a buffer and returns one
//! - Strict UTF-8 decoding, bytes preserved outside replaced tokens
//! - Optional atomic writes (tempfile + fsync + rename)
//! - A second run over rewritten well-formed markup changes nothing
//!
//! # Example
//!
//! ```no_run
//! use class_token_rewriter::{rewrite_file, RewriteConfig};
//!
//! match rewrite_file(&RewriteConfig::default()) {
//!     Ok(report) => println!("{} replacement(s)", report.replacements()),
//!     Err(e) => eprintln!("Rewrite failed: {}", e),
//! }
//! ```

pub mod config;
pub mod document;
pub mod edit;
pub mod error;
pub mod rewrite;

// Re-exports
pub use config::{
    RewriteConfig, ValidationError, ValidationIssue, WriteMode, DEFAULT_REPLACEMENT,
    DEFAULT_TARGET, DEFAULT_TOKEN,
};
pub use document::{
    preview_file, read_document, rewrite_file, write_document, RewriteOutcome, RewriteReport,
};
pub use edit::{EditError, TokenEdit};
pub use error::{FileAction, RewriteError};
pub use rewrite::{rewrite_class_tokens, ClassTokenRewriter, Rewrite};
