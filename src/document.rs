//! Reading and persisting the target document.
//!
//! A run is Read → Transform → Write with no intermediate state. Reading
//! decodes strictly as UTF-8 and keeps the bytes as they are (no newline
//! translation). Writing is either in place or atomic, see [`WriteMode`].

use crate::config::{RewriteConfig, WriteMode};
use crate::error::{FileAction, RewriteError};
use crate::rewrite::ClassTokenRewriter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a run did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "RewriteOutcome should be checked for rewritten/unchanged"]
pub enum RewriteOutcome {
    /// Tokens were replaced (or would be, for a preview)
    Rewritten { replacements: usize },
    /// No standalone token was found; the content was written back as read
    Unchanged,
}

/// Full record of a run, kept around for diff output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub original: String,
    pub rewritten: String,
    pub outcome: RewriteOutcome,
}

impl RewriteReport {
    pub fn is_changed(&self) -> bool {
        matches!(self.outcome, RewriteOutcome::Rewritten { .. })
    }

    pub fn replacements(&self) -> usize {
        match self.outcome {
            RewriteOutcome::Rewritten { replacements } => replacements,
            RewriteOutcome::Unchanged => 0,
        }
    }
}

/// Read the whole file as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String, RewriteError> {
    let bytes = fs::read(path).map_err(|e| RewriteError::from_io(path, FileAction::Reading, e))?;
    String::from_utf8(bytes).map_err(|source| RewriteError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite `path` with `text`.
pub fn write_document(path: &Path, text: &str, mode: WriteMode) -> Result<(), RewriteError> {
    let result = match mode {
        WriteMode::InPlace => write_in_place(path, text.as_bytes()),
        WriteMode::Atomic => atomic_write(path, text.as_bytes()),
    };
    result.map_err(|e| RewriteError::from_io(path, FileAction::Writing, e))
}

/// Rewrite the configured file and persist the result.
///
/// The document is always written back, even when nothing changed, so an
/// unwritable target fails the run.
pub fn rewrite_file(config: &RewriteConfig) -> Result<RewriteReport, RewriteError> {
    let report = preview_file(config)?;
    write_document(&report.path, &report.rewritten, config.write_mode)?;
    Ok(report)
}

/// Compute the rewrite of the configured file without writing anything.
pub fn preview_file(config: &RewriteConfig) -> Result<RewriteReport, RewriteError> {
    let rewriter = ClassTokenRewriter::from_config(config)?;
    let path = config.target().to_path_buf();
    let original = read_document(&path)?;

    let rewrite = rewriter.rewrite(&original)?;
    let outcome = if rewrite.is_unchanged() {
        RewriteOutcome::Unchanged
    } else {
        RewriteOutcome::Rewritten {
            replacements: rewrite.replacements(),
        }
    };

    Ok(RewriteReport {
        path,
        original,
        rewritten: rewrite.text,
        outcome,
    })
}

/// Truncate and rewrite through one handle; the handle closes on every path.
fn write_in_place(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()?;
    Ok(())
}

/// Atomic file write: tempfile + fsync + rename.
///
/// Either the full write lands or the original stays as it was. The target's
/// permissions carry over to the new file.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    // Fail like an in-place write would when the target is not writable
    drop(fs::OpenOptions::new().write(true).open(path)?);
    let permissions = fs::metadata(path)?.permissions();

    // Create tempfile in same directory to ensure same filesystem
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().set_permissions(permissions)?;
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
