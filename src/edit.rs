use std::ops::Range;
use thiserror::Error;

/// The fundamental edit primitive: byte-span replacement with verification.
///
/// Every token rewrite compiles down to one of these. Edits work on an
/// in-memory buffer; persisting the result is left to [`crate::document`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "TokenEdit does nothing until applied"]
pub struct TokenEdit {
    /// Starting byte offset (inclusive)
    pub byte_start: usize,
    /// Ending byte offset (exclusive)
    pub byte_end: usize,
    /// New text to insert at [byte_start, byte_end)
    pub new_text: String,
    /// Text that must currently occupy the span
    pub expected_before: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    #[error("Before-text verification failed at byte {byte_start}: expected {expected:?}, found {found:?}")]
    BeforeTextMismatch {
        byte_start: usize,
        byte_end: usize,
        expected: String,
        found: String,
    },

    #[error("Invalid byte range: [{byte_start}, {byte_end}) in text of length {text_len}")]
    InvalidByteRange {
        byte_start: usize,
        byte_end: usize,
        text_len: usize,
    },

    #[error("Overlapping edits: [{first_start}, {first_end}) and [{second_start}, {second_end})")]
    Overlap {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },
}

impl TokenEdit {
    pub fn new(
        byte_start: usize,
        byte_end: usize,
        new_text: impl Into<String>,
        expected_before: impl Into<String>,
    ) -> Self {
        Self {
            byte_start,
            byte_end,
            new_text: new_text.into(),
            expected_before: expected_before.into(),
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.byte_start..self.byte_end
    }

    /// Validate the edit against the current text.
    ///
    /// Returns the text at [byte_start, byte_end) if validation succeeds.
    fn validate<'a>(&self, text: &'a str) -> Result<&'a str, EditError> {
        if self.byte_start > self.byte_end || self.byte_end > text.len() {
            return Err(EditError::InvalidByteRange {
                byte_start: self.byte_start,
                byte_end: self.byte_end,
                text_len: text.len(),
            });
        }

        // Spans must fall on char boundaries
        let current = text.get(self.span()).ok_or(EditError::InvalidByteRange {
            byte_start: self.byte_start,
            byte_end: self.byte_end,
            text_len: text.len(),
        })?;

        if current != self.expected_before {
            return Err(EditError::BeforeTextMismatch {
                byte_start: self.byte_start,
                byte_end: self.byte_end,
                expected: self.expected_before.clone(),
                found: current.to_string(),
            });
        }

        Ok(current)
    }

    /// Apply a single edit, returning the new text.
    pub fn apply(&self, text: &str) -> Result<String, EditError> {
        Self::apply_all(text, std::slice::from_ref(self))
    }

    /// Apply many edits to the same text in one pass.
    ///
    /// Every edit is validated against the original text before anything is
    /// spliced. Edits are then applied bottom-to-top so earlier offsets stay
    /// valid.
    pub fn apply_all(text: &str, edits: &[TokenEdit]) -> Result<String, EditError> {
        if edits.is_empty() {
            return Ok(text.to_string());
        }

        for edit in edits {
            edit.validate(text)?;
        }

        let mut ordered: Vec<&TokenEdit> = edits.iter().collect();
        ordered.sort_by(|a, b| b.byte_start.cmp(&a.byte_start));

        // Sorted descending: the earlier edit must end at or before the later one starts
        for window in ordered.windows(2) {
            let (later, earlier) = (window[0], window[1]);
            if earlier.byte_end > later.byte_start {
                return Err(EditError::Overlap {
                    first_start: earlier.byte_start,
                    first_end: earlier.byte_end,
                    second_start: later.byte_start,
                    second_end: later.byte_end,
                });
            }
        }

        let delta: isize = edits
            .iter()
            .map(|e| e.new_text.len() as isize - (e.byte_end - e.byte_start) as isize)
            .sum();
        let mut out = String::with_capacity(text.len().saturating_add_signed(delta));
        out.push_str(text);

        for edit in ordered {
            out.replace_range(edit.span(), &edit.new_text);
        }

        Ok(out)
    }
}
