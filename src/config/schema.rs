use std::fmt;
use std::path::{Path, PathBuf};

/// File rewritten when no other target is given.
pub const DEFAULT_TARGET: &str = "index.html";
/// Class token that gets replaced.
pub const DEFAULT_TOKEN: &str = "hide";
/// Text written in place of [`DEFAULT_TOKEN`].
pub const DEFAULT_REPLACEMENT: &str = "hidden";

/// How the rewritten document is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and rewrite the target through a single file handle.
    #[default]
    InPlace,
    /// Write a sibling tempfile, fsync it, then rename it over the target.
    Atomic,
}

/// Everything a single rewrite run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    pub target: PathBuf,
    pub token: String,
    pub replacement: String,
    pub write_mode: WriteMode,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            token: DEFAULT_TOKEN.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
            write_mode: WriteMode::default(),
        }
    }
}

impl RewriteConfig {
    /// Default rule applied to `target` instead of `index.html`.
    pub fn for_target(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn with_rule(mut self, token: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.token = token.into();
        self.replacement = replacement.into();
        self
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if self.target.as_os_str().is_empty() {
            issues.push(ValidationIssue::MissingField { field: "target" });
        }

        if self.token.is_empty() {
            issues.push(ValidationIssue::MissingField { field: "token" });
        } else if !is_word(&self.token) {
            issues.push(ValidationIssue::NonWordToken {
                token: self.token.clone(),
            });
        }

        if self.replacement.contains('"') {
            issues.push(ValidationIssue::QuoteInReplacement {
                replacement: self.replacement.clone(),
            });
        }

        // A replacement that still holds the token as a whole word would be
        // matched again on the next run.
        if !self.token.is_empty()
            && self
                .replacement
                .split(|c: char| !is_word_char(c))
                .any(|word| word == self.token)
        {
            issues.push(ValidationIssue::ReplacementKeepsToken {
                token: self.token.clone(),
                replacement: self.replacement.clone(),
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

/// Close to the regex engine's `\w`; combining marks are not counted.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word(s: &str) -> bool {
    s.chars().all(is_word_char)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.issues {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingField { field: &'static str },
    NonWordToken { token: String },
    QuoteInReplacement { replacement: String },
    ReplacementKeepsToken { token: String, replacement: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingField { field } => {
                write!(f, "rewrite config missing required field '{field}'")
            }
            ValidationIssue::NonWordToken { token } => {
                write!(f, "token '{token}' must consist of word characters only")
            }
            ValidationIssue::QuoteInReplacement { replacement } => {
                write!(
                    f,
                    "replacement '{replacement}' would close the class attribute"
                )
            }
            ValidationIssue::ReplacementKeepsToken { token, replacement } => write!(
                f,
                "replacement '{replacement}' still contains the token '{token}' as a whole word"
            ),
        }
    }
}
