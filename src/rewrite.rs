//! The class-token substitution rule.
//!
//! A document is scanned for double-quoted `class="..."` attribute values.
//! Inside each value every standalone occurrence of the token (bounded by
//! `\b` on both sides) is planned as one [`TokenEdit`]. Text outside class
//! values is never touched, and the characters around a token inside the
//! value are kept verbatim.
//!
//! A `class="` whose value holds no standalone token is not consumed: the
//! scan resumes one character later, so a real attribute that follows a
//! value ending in `class=` is still found. A value that does hold the token
//! is consumed up to its closing quote.

use crate::config::{RewriteConfig, DEFAULT_REPLACEMENT, DEFAULT_TOKEN};
use crate::edit::{EditError, TokenEdit};
use crate::error::RewriteError;
use once_cell::sync::Lazy;
use regex::Regex;

/// `class="` followed by the attribute value up to the closing quote.
const CLASS_ATTRIBUTE: &str = r#"class="([^"]*)""#;

static DEFAULT_REWRITER: Lazy<ClassTokenRewriter> = Lazy::new(ClassTokenRewriter::default);

/// Rewrite every standalone `hide` class token to `hidden`.
///
/// Buffer in, buffer out. Persisting the result is up to the caller.
///
/// ```
/// use class_token_rewriter::rewrite_class_tokens;
///
/// # fn main() -> Result<(), class_token_rewriter::EditError> {
/// assert_eq!(
///     rewrite_class_tokens(r#"<div class="row hide active"></div>"#)?,
///     r#"<div class="row hidden active"></div>"#,
/// );
/// # Ok(())
/// # }
/// ```
pub fn rewrite_class_tokens(text: &str) -> Result<String, EditError> {
    Ok(DEFAULT_REWRITER.rewrite(text)?.text)
}

#[derive(Debug, Clone)]
pub struct ClassTokenRewriter {
    attribute: Regex,
    token: Regex,
    replacement: String,
}

/// Result of rewriting one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten text
    pub text: String,
    /// Edits that produced `text`, ordered by position in the original
    pub edits: Vec<TokenEdit>,
}

impl Rewrite {
    pub fn replacements(&self) -> usize {
        self.edits.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.edits.is_empty()
    }
}

impl Default for ClassTokenRewriter {
    fn default() -> Self {
        Self {
            attribute: Regex::new(CLASS_ATTRIBUTE).expect("class attribute pattern is valid"),
            token: Regex::new(&token_pattern(DEFAULT_TOKEN)).expect("default token is a word"),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

fn token_pattern(token: &str) -> String {
    format!(r"\b{}\b", regex::escape(token))
}

impl ClassTokenRewriter {
    /// Build a rewriter for a custom token/replacement pair.
    pub fn new(token: &str, replacement: &str) -> Result<Self, RewriteError> {
        Self::from_config(&RewriteConfig::default().with_rule(token, replacement))
    }

    /// Build the rewriter described by `config`, validating it first.
    pub fn from_config(config: &RewriteConfig) -> Result<Self, RewriteError> {
        config.validate()?;
        Ok(Self {
            attribute: Regex::new(CLASS_ATTRIBUTE)?,
            token: Regex::new(&token_pattern(&config.token))?,
            replacement: config.replacement.clone(),
        })
    }

    /// Locate every token to replace, without changing anything.
    ///
    /// Offsets refer to `text`; the returned edits are sorted and disjoint.
    pub fn plan(&self, text: &str) -> Vec<TokenEdit> {
        let mut edits = Vec::new();
        let mut pos = 0;

        while let Some(caps) = self.attribute.captures_at(text, pos) {
            let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
                break;
            };

            // The value sits between two quotes, so `\b` at its edges behaves
            // the same on the slice as it would on the whole text.
            let before = edits.len();
            for token in self.token.find_iter(value.as_str()) {
                edits.push(TokenEdit::new(
                    value.start() + token.start(),
                    value.start() + token.end(),
                    self.replacement.as_str(),
                    token.as_str(),
                ));
            }

            // `class="` is ASCII, so one byte past its start is a char boundary
            pos = if edits.len() == before {
                whole.start() + 1
            } else {
                whole.end()
            };
        }

        edits
    }

    /// Apply the rule to `text`.
    pub fn rewrite(&self, text: &str) -> Result<Rewrite, EditError> {
        let edits = self.plan(text);
        let text = TokenEdit::apply_all(text, &edits)?;
        Ok(Rewrite { text, edits })
    }
}
