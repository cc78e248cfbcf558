//! The admin editor: the only component that mutates the shop document.
//!
//! # States
//!
//! ```text
//! Locked --unlock(correct passcode)--> Unlocked { draft }
//! Unlocked --lock()--> Locked
//! ```
//!
//! While unlocked the editor holds a draft copied from the store. Patches,
//! additions and removals touch only the draft. `save()` validates the draft
//! and commits it to the store in one replace; `reset()`, `clear_local_edits()`
//! and `import()` commit and then re-copy the draft.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use swift_menu_core::{
    FileStorage, KeyValueStorage, MenuItem, MenuItemPatch, ShopData, ShopDataStore,
    ShopInfoPatch, parse_document, validate_menu_items, validate_new_item,
};

use crate::config::{AdminConfig, passcode_matches};
use crate::error::{EditorError, Result};
use crate::session::AdminSession;

/// File name used for exports.
pub const EXPORT_FILE_NAME: &str = "shopData-export.json";

/// User confirmation for destructive actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Passcode-gated editor over a [`ShopDataStore`].
pub struct AdminEditor {
    store: Arc<ShopDataStore>,
    session: AdminSession,
    passcode: SecretString,
    draft: Option<ShopData>,
}

impl std::fmt::Debug for AdminEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminEditor")
            .field("passcode", &"[REDACTED]")
            .field("unlocked", &self.is_unlocked())
            .finish_non_exhaustive()
    }
}

impl AdminEditor {
    /// Create an editor. It starts unlocked if the session flag is already set.
    pub fn new(store: Arc<ShopDataStore>, session: AdminSession, passcode: SecretString) -> Self {
        let draft = session.is_authorized().then(|| store.get());
        Self {
            store,
            session,
            passcode,
            draft,
        }
    }

    /// Create an editor whose session flag lives in `config.session_dir`.
    pub fn from_config(store: Arc<ShopDataStore>, config: &AdminConfig) -> Self {
        let session_storage: Arc<dyn KeyValueStorage> =
            Arc::new(FileStorage::new(&config.session_dir));
        Self::new(
            store,
            AdminSession::new(session_storage),
            config.passcode.clone(),
        )
    }

    /// Whether the editor is unlocked.
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.draft.is_some()
    }

    /// Try to unlock with `attempt`.
    ///
    /// On success the session flag is set and a fresh draft is copied from
    /// the store. Unlocking an unlocked editor keeps the existing draft.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidPasscode`] if the passcode does not match;
    /// the editor stays locked and the store is untouched.
    pub fn unlock(&mut self, attempt: &SecretString) -> Result<()> {
        if !passcode_matches(&self.passcode, attempt.expose_secret()) {
            tracing::warn!("Rejected admin unlock attempt");
            return Err(EditorError::InvalidPasscode);
        }

        self.session.authorize();
        if self.draft.is_none() {
            self.draft = Some(self.store.get());
        }
        tracing::info!("Admin editor unlocked");
        Ok(())
    }

    /// Lock the editor, discarding the draft and clearing the session flag.
    pub fn lock(&mut self) {
        if self.has_unsaved_changes() {
            tracing::warn!("Discarding unsaved admin edits");
        }
        self.session.revoke();
        self.draft = None;
        tracing::info!("Admin editor locked");
    }

    /// The current draft.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`] while locked.
    pub fn draft(&self) -> Result<&ShopData> {
        self.draft.as_ref().ok_or(EditorError::Locked)
    }

    fn draft_mut(&mut self) -> Result<&mut ShopData> {
        self.draft.as_mut().ok_or(EditorError::Locked)
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut MenuItem> {
        let draft = self.draft_mut()?;
        let len = draft.menu_items.len();
        draft
            .menu_items
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })
    }

    /// Whether the draft differs from the store's document.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.draft
            .as_ref()
            .is_some_and(|draft| *draft != self.store.get())
    }

    /// Apply a partial update to the draft's shop information.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`] while locked.
    pub fn patch_shop_info(&mut self, patch: ShopInfoPatch) -> Result<()> {
        self.draft_mut()?.shop_info.apply(patch);
        Ok(())
    }

    /// Apply a partial update to the draft item at `index`.
    ///
    /// No validation happens until [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`] or [`EditorError::IndexOutOfRange`].
    pub fn patch_item(&mut self, index: usize, patch: MenuItemPatch) -> Result<()> {
        self.item_mut(index)?.apply(patch);
        Ok(())
    }

    /// Append a new item to the draft.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`], or a validation error if `id` or
    /// `name` is empty; the draft is left unchanged.
    pub fn add_item(&mut self, item: MenuItem) -> Result<()> {
        let draft = self.draft_mut()?;
        validate_new_item(&item)?;
        tracing::debug!(id = %item.id, "Added dish to draft");
        draft.menu_items.push(item);
        Ok(())
    }

    /// Remove and return the draft item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`] or [`EditorError::IndexOutOfRange`].
    pub fn remove_item(&mut self, index: usize) -> Result<MenuItem> {
        let draft = self.draft_mut()?;
        let len = draft.menu_items.len();
        if index >= len {
            return Err(EditorError::IndexOutOfRange { index, len });
        }
        Ok(draft.menu_items.remove(index))
    }

    /// Validate the draft and commit it to the store.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`], or the first empty or duplicated id;
    /// nothing is committed in that case.
    pub fn save(&mut self) -> Result<()> {
        let draft = self.draft()?;
        validate_menu_items(&draft.menu_items)?;

        self.store.replace(draft.clone());
        tracing::info!(items = draft.menu_items.len(), "Saved shop data");
        Ok(())
    }

    /// Throw away uncommitted draft changes and re-copy from the store.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`] while locked.
    pub fn discard_changes(&mut self) -> Result<()> {
        let fresh = self.store.get();
        *self.draft_mut()? = fresh;
        Ok(())
    }

    /// Reset the store to the bundled default and re-copy the draft.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`], or [`EditorError::NotConfirmed`] if
    /// `confirmation` is declined.
    pub fn reset(&mut self, confirmation: Confirmation) -> Result<()> {
        self.draft()?;
        if confirmation != Confirmation::Confirmed {
            return Err(EditorError::NotConfirmed("reset"));
        }

        self.store.reset_to_default();
        self.discard_changes()?;
        tracing::info!("Reset shop data to default");
        Ok(())
    }

    /// Remove the persisted copy so the bundled default is used again.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`], or [`EditorError::NotConfirmed`] if
    /// `confirmation` is declined.
    pub fn clear_local_edits(&mut self, confirmation: Confirmation) -> Result<()> {
        self.draft()?;
        if confirmation != Confirmation::Confirmed {
            return Err(EditorError::NotConfirmed("clearing local edits"));
        }

        self.store.clear_persisted();
        self.discard_changes()?;
        tracing::info!("Cleared local edits");
        Ok(())
    }

    /// Serialize the draft as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`] or [`EditorError::Export`].
    pub fn export(&self) -> Result<String> {
        serde_json::to_string_pretty(self.draft()?).map_err(EditorError::Export)
    }

    /// Import a whole document and commit it to the store.
    ///
    /// The text must parse, pass the shape check, and satisfy the same id
    /// rules as [`save`](Self::save). On success the draft is replaced by the
    /// imported document.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Locked`], [`EditorError::Shape`] or
    /// [`EditorError::Validation`]; the store and draft are untouched.
    pub fn import(&mut self, raw: &str) -> Result<()> {
        self.draft()?;
        let data = parse_document(raw)?;
        validate_menu_items(&data.menu_items)?;

        self.store.replace(data.clone());
        self.draft = Some(data);
        tracing::info!("Imported shop data");
        Ok(())
    }
}
