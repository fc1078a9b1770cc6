//! The process-wide record of who is logged in and with what credentials.

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use storynest_core::AppResult;
use storynest_core::traits::KeyValueStore;
use storynest_entity::admin::{AdminIdentity, AdminRole};

use crate::permissions::PermissionChecker;

use super::keys;

/// A read-only snapshot of the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// The signed-in admin, if any.
    pub identity: Option<AdminIdentity>,
    /// Opaque bearer token for API requests.
    pub access_token: Option<String>,
    /// Opaque refresh token.
    pub refresh_token: Option<String>,
}

impl Session {
    /// True iff identity and access token are both present.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() && self.access_token.is_some()
    }
}

/// The single authoritative owner of session state.
///
/// All mutation goes through exactly three operations: [`set_auth`],
/// [`logout`], and [`initialize_from_storage`]. Every mutation that changes
/// the in-memory state also writes or clears the three persisted keys, so
/// storage and memory never diverge from a reader's point of view.
///
/// [`set_auth`]: SessionStore::set_auth
/// [`logout`]: SessionStore::logout
/// [`initialize_from_storage`]: SessionStore::initialize_from_storage
#[derive(Debug)]
pub struct SessionStore {
    /// Durable backing storage.
    storage: Arc<dyn KeyValueStore>,
    /// In-memory session state.
    state: RwLock<Session>,
}

impl SessionStore {
    /// Create a store over the given backend, starting unauthenticated.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            state: RwLock::new(Session::default()),
        }
    }

    /// Record a successful login.
    ///
    /// Persists all three values, then updates memory. If a storage write
    /// fails the error is surfaced and memory is left untouched, so a
    /// session is never authenticated in memory without being durable.
    pub fn set_auth(
        &self,
        identity: AdminIdentity,
        access_token: &str,
        refresh_token: &str,
    ) -> AppResult<()> {
        let serialized = serde_json::to_string(&identity)?;
        self.storage.set(keys::ACCESS_TOKEN, access_token)?;
        self.storage.set(keys::REFRESH_TOKEN, refresh_token)?;
        self.storage.set(keys::IDENTITY, &serialized)?;

        let mut state = self.state.write().expect("session lock poisoned");
        *state = Session {
            identity: Some(identity),
            access_token: Some(access_token.to_string()),
            refresh_token: Some(refresh_token.to_string()),
        };
        debug!("Session established");
        Ok(())
    }

    /// Clear the session. Calling this while already unauthenticated is a
    /// no-op.
    pub fn logout(&self) -> AppResult<()> {
        self.clear_persisted()?;
        let mut state = self.state.write().expect("session lock poisoned");
        *state = Session::default();
        debug!("Session cleared");
        Ok(())
    }

    /// Restore a session persisted by a previous process.
    ///
    /// All three keys must be present; otherwise the state is left
    /// unauthenticated without touching storage. A persisted identity that
    /// fails to parse is treated as corruption: all three keys are cleared
    /// so the next start does not trip over the same bad data, and no error
    /// is surfaced.
    pub fn initialize_from_storage(&self) -> AppResult<()> {
        let access_token = self.storage.get(keys::ACCESS_TOKEN)?;
        let refresh_token = self.storage.get(keys::REFRESH_TOKEN)?;
        let identity_json = self.storage.get(keys::IDENTITY)?;

        let (Some(access_token), Some(refresh_token), Some(identity_json)) =
            (access_token, refresh_token, identity_json)
        else {
            return Ok(());
        };

        match serde_json::from_str::<AdminIdentity>(&identity_json) {
            Ok(identity) => {
                let mut state = self.state.write().expect("session lock poisoned");
                *state = Session {
                    identity: Some(identity),
                    access_token: Some(access_token),
                    refresh_token: Some(refresh_token),
                };
                debug!("Session restored from storage");
            }
            Err(e) => {
                warn!(error = %e, "Persisted session identity is corrupt, clearing");
                self.clear_persisted()?;
            }
        }
        Ok(())
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.state.read().expect("session lock poisoned").clone()
    }

    /// Whether a session is established.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_authenticated()
    }

    /// The current access token, for the API client to attach.
    pub fn access_token(&self) -> Option<String> {
        self.state
            .read()
            .expect("session lock poisoned")
            .access_token
            .clone()
    }

    /// The current identity.
    pub fn identity(&self) -> Option<AdminIdentity> {
        self.state
            .read()
            .expect("session lock poisoned")
            .identity
            .clone()
    }

    /// The effective role of the current session, `support` when signed out.
    pub fn effective_role(&self) -> AdminRole {
        PermissionChecker::new().effective_role(self.identity().as_ref())
    }

    fn clear_persisted(&self) -> AppResult<()> {
        self.storage.remove(keys::ACCESS_TOKEN)?;
        self.storage.remove(keys::REFRESH_TOKEN)?;
        self.storage.remove(keys::IDENTITY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storynest_store::MemoryStore;

    fn identity() -> AdminIdentity {
        AdminIdentity {
            id: "u-42".to_string(),
            email: "casey@storynest.test".to_string(),
            first_name: "Casey".to_string(),
            last_name: "Reed".to_string(),
            is_admin: true,
        }
    }

    #[test]
    fn test_starts_unauthenticated() {
        let store = SessionStore::new(Arc::new(MemoryStore::new()));
        assert!(!store.is_authenticated());
        assert_eq!(store.access_token(), None);
        assert_eq!(store.effective_role(), AdminRole::Support);
    }

    #[test]
    fn test_set_auth_persists_and_authenticates() {
        let backend = Arc::new(MemoryStore::new());
        let store = SessionStore::new(backend.clone());

        store.set_auth(identity(), "access-1", "refresh-1").unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.access_token(), Some("access-1".to_string()));
        assert_eq!(store.effective_role(), AdminRole::Admin);
        assert_eq!(
            backend.get(keys::ACCESS_TOKEN).unwrap(),
            Some("access-1".to_string())
        );
        assert_eq!(
            backend.get(keys::REFRESH_TOKEN).unwrap(),
            Some("refresh-1".to_string())
        );
        assert!(backend.get(keys::IDENTITY).unwrap().is_some());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let backend = Arc::new(MemoryStore::new());
        let store = SessionStore::new(backend.clone());
        store.set_auth(identity(), "access-1", "refresh-1").unwrap();

        store.logout().unwrap();
        let after_once = store.current();
        assert!(!after_once.is_authenticated());
        assert!(backend.is_empty());

        store.logout().unwrap();
        assert_eq!(store.current(), after_once);
    }

    #[test]
    fn test_restore_round_trip() {
        let backend = Arc::new(MemoryStore::new());
        {
            let store = SessionStore::new(backend.clone());
            store.set_auth(identity(), "access-1", "refresh-1").unwrap();
        }

        // Fresh store over the same backend simulates a process restart.
        let restored = SessionStore::new(backend);
        restored.initialize_from_storage().unwrap();

        let session = restored.current();
        assert!(session.is_authenticated());
        assert_eq!(session.identity, Some(identity()));
        assert_eq!(session.access_token, Some("access-1".to_string()));
        assert_eq!(session.refresh_token, Some("refresh-1".to_string()));
    }

    #[test]
    fn test_partial_keys_do_not_authenticate() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(keys::ACCESS_TOKEN, "access-1").unwrap();
        backend.set(keys::REFRESH_TOKEN, "refresh-1").unwrap();
        // No identity key.

        let store = SessionStore::new(backend.clone());
        store.initialize_from_storage().unwrap();

        assert!(!store.is_authenticated());
        // The present keys are left alone; absence of one is not corruption.
        assert!(backend.get(keys::ACCESS_TOKEN).unwrap().is_some());
    }

    #[test]
    fn test_corrupt_identity_self_heals() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(keys::ACCESS_TOKEN, "access-1").unwrap();
        backend.set(keys::REFRESH_TOKEN, "refresh-1").unwrap();
        backend.set(keys::IDENTITY, "{definitely not json").unwrap();

        let store = SessionStore::new(backend.clone());
        store.initialize_from_storage().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(backend.get(keys::ACCESS_TOKEN).unwrap(), None);
        assert_eq!(backend.get(keys::REFRESH_TOKEN).unwrap(), None);
        assert_eq!(backend.get(keys::IDENTITY).unwrap(), None);
    }
}
