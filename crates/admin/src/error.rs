//! Unified error handling for the admin editor.

use swift_menu_core::{ShapeError, ValidationError};
use thiserror::Error;

/// Errors returned by [`AdminEditor`](crate::AdminEditor) operations.
///
/// None of these are fatal: the editor stays usable and the user may
/// correct the input and retry.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The editor is locked; unlock it first.
    #[error("admin editor is locked")]
    Locked,

    /// The passcode did not match.
    #[error("invalid passcode")]
    InvalidPasscode,

    /// A destructive action was requested without confirmation.
    #[error("{0} requires confirmation")]
    NotConfirmed(&'static str),

    /// A menu item index is past the end of the draft.
    #[error("no dish at position {index} (menu has {len})")]
    IndexOutOfRange {
        /// Requested zero-based index.
        index: usize,
        /// Number of items in the draft.
        len: usize,
    },

    /// The draft or a new item failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An imported document was rejected.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The draft could not be serialized.
    #[error("failed to export JSON: {0}")]
    Export(#[source] serde_json::Error),
}

/// Result type alias for `EditorError`.
pub type Result<T> = std::result::Result<T, EditorError>;
