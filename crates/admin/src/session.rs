//! Session-scoped admin unlock flag.
//!
//! The flag survives new editor instances over the same session storage and
//! is gone once the session storage is cleared.

use std::sync::Arc;

use swift_menu_core::KeyValueStorage;

/// Session storage key of the unlock flag.
pub const AUTHORIZED_KEY: &str = "adminAuthorized";

const AUTHORIZED_VALUE: &str = "true";

/// Reads and writes the unlock flag in session storage.
#[derive(Clone)]
pub struct AdminSession {
    storage: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSession").finish_non_exhaustive()
    }
}

impl AdminSession {
    /// Wrap a session storage adapter.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Whether this session has been unlocked. Unreadable storage counts as locked.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        match self.storage.get_item(AUTHORIZED_KEY) {
            Ok(value) => value.as_deref() == Some(AUTHORIZED_VALUE),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read admin session flag");
                false
            }
        }
    }

    /// Mark the session as unlocked (best effort).
    pub fn authorize(&self) {
        if let Err(e) = self.storage.set_item(AUTHORIZED_KEY, AUTHORIZED_VALUE) {
            tracing::warn!(error = %e, "Could not persist admin session flag");
        }
    }

    /// End the session (best effort).
    pub fn revoke(&self) {
        if let Err(e) = self.storage.remove_item(AUTHORIZED_KEY) {
            tracing::warn!(error = %e, "Could not clear admin session flag");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use swift_menu_core::MemoryStorage;

    use super::*;

    #[test]
    fn test_flag_lifecycle() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let session = AdminSession::new(Arc::clone(&storage));
        assert!(!session.is_authorized());

        session.authorize();
        assert!(session.is_authorized());
        assert_eq!(
            storage.get_item(AUTHORIZED_KEY).unwrap().as_deref(),
            Some("true")
        );

        // A second handle over the same storage sees the flag.
        assert!(AdminSession::new(Arc::clone(&storage)).is_authorized());

        session.revoke();
        assert!(!session.is_authorized());
    }

    #[test]
    fn test_other_values_are_not_authorized() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        storage.set_item(AUTHORIZED_KEY, "yes").unwrap();
        assert!(!AdminSession::new(storage).is_authorized());
    }
}
