// ── Error taxonomy ────────────────────────────────────────────────────────────
//
// Every failure in this crate is a typed value; nothing retries, nothing
// auto-repairs. Callers decide whether to fall back to a freshly generated
// configuration (see `session`).

use std::path::PathBuf;

/// Coordinate config file I/O outcomes.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The canonical config file is absent. Recoverable — callers typically
    /// generate a template instead.
    #[error("coordinate config not found at {0}")]
    NotFound(PathBuf),

    /// The file exists but is not valid JSON. The wrapped error carries the
    /// offending line/column.
    #[error("coordinate config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A save to the canonical name would overwrite a user's existing file.
    #[error("refusing to overwrite existing config at {0}")]
    WouldClobber(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A structurally parseable config that is semantically invalid.
///
/// `field` names the offending JSON path (e.g. `config.space_size`,
/// `spaces.17`) so the user gets an actionable message instead of a generic
/// parse failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid coordinate config: {field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { field: field.into(), reason: reason.into() }
    }
}

/// Template generation failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The requested track cannot be placed inside the window without either
    /// leaving the window bounds or breaking the exact-spacing contract.
    #[error("track of {track_length} spaces does not fit the {cols}x{rows} grid available inside the window")]
    TrackDoesNotFit { track_length: u32, cols: u32, rows: u32 },
}

/// Aggregate for the startup/reload path.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

// ── Tests ─────────────────────────────────────────────────────────────────────
