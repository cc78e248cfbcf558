//! Swift Menu Admin - passcode-gated editor for the shop document.
//!
//! The [`AdminEditor`] copies the store's document into a draft on unlock,
//! applies edits to the draft, and commits it back with a single `replace`
//! after validation. The unlock flag lives in session storage so that new
//! editor instances in the same session start unlocked.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod editor;
pub mod error;
pub mod session;

pub use config::{AdminConfig, ConfigError};
pub use editor::{AdminEditor, Confirmation, EXPORT_FILE_NAME};
pub use error::{EditorError, Result};
pub use session::AdminSession;
