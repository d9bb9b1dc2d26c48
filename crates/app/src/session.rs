//! The session store: owner of the single active [`Session`].
//!
//! Storage is a durable mirror. It is read once by [`SessionStore::hydrate`]
//! and afterwards only written, on every mutation.

use crate::storage::KeyValueStore;
use shared_types::{AppError, LoginRequest, ProfileUpdate, Session};
use std::rc::Rc;
use tracing::{info, warn};

pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    key: String,
    current: Option<Session>,
}

impl SessionStore {
    /// Load the persisted session, if any.
    ///
    /// An unreadable or malformed record is discarded and the store starts
    /// signed out.
    pub fn hydrate(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match read_record(storage.as_ref(), &key) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Discarding stored session");
                if let Err(e) = storage.remove(&key) {
                    warn!(error = %e, "Failed to clear stored session");
                }
                None
            }
        };
        if let Some(session) = &current {
            info!(role = %session.role, "Restored session");
        }
        Self {
            storage,
            key,
            current,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Sign in with any non-empty email/password pair.
    ///
    /// On failure the previous session, if any, is left untouched.
    pub fn login(&mut self, request: &LoginRequest) -> Result<&Session, AppError> {
        request.check()?;
        let session = Session::fabricate(&request.email, request.role);
        info!(role = %session.role, "Signed in");
        Ok(self.replace(session))
    }

    /// Same contract as [`SessionStore::login`]. No uniqueness check exists;
    /// the form has already confirmed the password.
    pub fn register(&mut self, request: &LoginRequest) -> Result<&Session, AppError> {
        request.check()?;
        let session = Session::fabricate(&request.email, request.role);
        info!(role = %session.role, "Registered account");
        Ok(self.replace(session))
    }

    /// Clear the session from memory and storage. Memory is always cleared;
    /// a storage failure is returned for logging.
    pub fn logout(&mut self) -> Result<(), AppError> {
        if self.current.take().is_some() {
            info!("Signed out");
        }
        self.storage.remove(&self.key)
    }

    /// Merge a partial update into the active session and persist it.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&Session, AppError> {
        let Some(current) = self.current.as_ref() else {
            return Err(AppError::unauthorized("Sign in to update your profile"));
        };
        let mut merged = current.clone();
        merged.apply(update)?;
        info!("Profile updated");
        Ok(self.replace(merged))
    }

    fn replace(&mut self, session: Session) -> &Session {
        self.persist(&session);
        self.current.insert(session)
    }

    fn persist(&self, session: &Session) {
        let written = serde_json::to_string(session)
            .map_err(|e| AppError::internal(e.to_string()))
            .and_then(|json| self.storage.set(&self.key, &json));
        if let Err(e) = written {
            warn!(error = %e, "Session kept in memory only");
        }
    }
}

fn read_record(storage: &dyn KeyValueStore, key: &str) -> Result<Option<Session>, AppError> {
    match storage.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use shared_types::{AppErrorKind, Role};

    const KEY: &str = "workdeck.session";

    fn store_with(memory: &MemoryStore) -> SessionStore {
        SessionStore::hydrate(Rc::new(memory.clone()), KEY)
    }

    fn stored(memory: &MemoryStore) -> Option<Session> {
        memory
            .get(KEY)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    /// A storage backend whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::storage("read-only"))
        }
        fn remove(&self, _key: &str) -> Result<(), AppError> {
            Err(AppError::storage("read-only"))
        }
    }

    #[test]
    fn starts_signed_out_with_empty_storage() {
        let memory = MemoryStore::new();
        assert!(store_with(&memory).current().is_none());
    }

    #[test]
    fn login_sets_role_and_persists_identical_record() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        let session = store
            .login(&LoginRequest::new("jane@acme.io", "secret", Role::Business))
            .unwrap()
            .clone();
        assert_eq!(session.role, Role::Business);
        assert_eq!(store.current(), Some(&session));
        assert_eq!(stored(&memory), Some(session));
    }

    #[test]
    fn login_with_empty_email_or_password_keeps_prior_session() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        let prior = store
            .login(&LoginRequest::new("a@b.com", "pw", Role::Employee))
            .unwrap()
            .clone();

        let err = store
            .login(&LoginRequest::new("", "x", Role::Admin))
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(store
            .login(&LoginRequest::new("x", "", Role::Admin))
            .is_err());

        assert_eq!(store.current(), Some(&prior));
        assert_eq!(stored(&memory), Some(prior));
    }

    #[test]
    fn failed_login_without_prior_session_stays_signed_out() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        assert!(store.login(&LoginRequest::new("", "", Role::Admin)).is_err());
        assert!(store.current().is_none());
        assert!(memory.is_empty());
    }

    #[test]
    fn register_behaves_like_login() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        let session = store
            .register(&LoginRequest::new("a@b.com", "pw123456", Role::Freelancer))
            .unwrap()
            .clone();
        assert_eq!(session.name, "A");
        assert_eq!(stored(&memory), Some(session));
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        store
            .login(&LoginRequest::new("a@b.com", "pw", Role::Admin))
            .unwrap();
        store.logout().unwrap();
        assert!(store.current().is_none());
        assert!(memory.is_empty());
    }

    #[test]
    fn logout_without_session_is_harmless() {
        let memory = MemoryStore::new();
        memory.set("other", "kept").unwrap();
        let mut store = store_with(&memory);
        store.logout().unwrap();
        store.logout().unwrap();
        assert!(store.current().is_none());
        assert_eq!(memory.get(KEY).unwrap(), None);
        assert_eq!(memory.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn logout_clears_memory_even_when_storage_fails() {
        let mut store = SessionStore::hydrate(Rc::new(ReadOnlyStore), KEY);
        store
            .login(&LoginRequest::new("a@b.com", "pw", Role::Admin))
            .unwrap();
        assert!(store.logout().is_err());
        assert!(store.current().is_none());
    }

    #[test]
    fn login_survives_storage_write_failure() {
        let mut store = SessionStore::hydrate(Rc::new(ReadOnlyStore), KEY);
        let session = store
            .login(&LoginRequest::new("a@b.com", "pw", Role::Employee))
            .unwrap();
        assert_eq!(session.role, Role::Employee);
    }

    #[test]
    fn update_profile_merges_and_persists() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        let before = store
            .login(&LoginRequest::new("a@b.com", "pw", Role::Freelancer))
            .unwrap()
            .clone();

        let after = store.update_profile(ProfileUpdate::name("X")).unwrap().clone();
        assert_eq!(
            after,
            Session {
                name: "X".into(),
                ..before
            }
        );
        assert_eq!(stored(&memory), Some(after));
    }

    #[test]
    fn update_profile_without_session_is_unauthorized() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        let err = store.update_profile(ProfileUpdate::name("X")).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert!(store.current().is_none());
        assert!(memory.is_empty());
    }

    #[test]
    fn update_profile_rejects_role_change_and_persists_nothing() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        let before = store
            .login(&LoginRequest::new("a@b.com", "pw", Role::Employee))
            .unwrap()
            .clone();
        let update = ProfileUpdate {
            name: Some("Boss".into()),
            role: Some(Role::Admin),
            ..Default::default()
        };
        assert!(store.update_profile(update).is_err());
        assert_eq!(store.current(), Some(&before));
        assert_eq!(stored(&memory), Some(before));
    }

    #[test]
    fn update_profile_with_blank_name_fails_and_persists_nothing() {
        let memory = MemoryStore::new();
        let mut store = store_with(&memory);
        let before = store
            .login(&LoginRequest::new("a@b.com", "pw", Role::Business))
            .unwrap()
            .clone();

        let err = store.update_profile(ProfileUpdate::name("   ")).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(store.current(), Some(&before));
        assert_eq!(stored(&memory), Some(before));
    }

    #[test]
    fn hydrate_restores_persisted_session() {
        let memory = MemoryStore::new();
        let session = store_with(&memory)
            .login(&LoginRequest::new("a@b.com", "pw", Role::Business))
            .unwrap()
            .clone();

        let restored = store_with(&memory);
        assert_eq!(restored.current(), Some(&session));
    }

    #[test]
    fn hydrate_discards_malformed_record() {
        let memory = MemoryStore::new();
        memory.set(KEY, "{\"id\":1,\"role\":\"owner\"}").unwrap();
        let store = store_with(&memory);
        assert!(store.current().is_none());
        assert_eq!(memory.get(KEY).unwrap(), None);
    }

    #[test]
    fn storage_is_not_reread_after_hydration() {
        let memory = MemoryStore::new();
        let store = store_with(&memory);
        let outside = Session::fabricate("intruder@x.io", Role::Admin);
        memory
            .set(KEY, &serde_json::to_string(&outside).unwrap())
            .unwrap();
        assert!(store.current().is_none());
    }
}
