use crate::notify;
use crate::routes::Route;
use crate::session::SessionStore;
use crate::storage::KeyValueStore;
use crate::timer;
use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest, ProfileUpdate, Session};
use shared_ui::Toasts;
use std::rc::Rc;

/// Session service provided as context at the app root.
///
/// Wraps the [`SessionStore`] in a signal so every reader re-renders on
/// mutation, and layers navigation and toasts over the store operations.
#[derive(Clone, Copy)]
pub struct SessionService {
    store: Signal<SessionStore>,
    loading: Signal<bool>,
    toasts: Toasts,
    login_delay_ms: u64,
}

impl SessionService {
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        storage_key: &str,
        toasts: Toasts,
        login_delay_ms: u64,
    ) -> Self {
        Self {
            store: Signal::new(SessionStore::hydrate(storage, storage_key)),
            loading: Signal::new(true),
            toasts,
            login_delay_ms,
        }
    }

    /// Routed children stay behind a loader while this is true.
    pub fn loading(&self) -> Signal<bool> {
        self.loading
    }

    pub fn current(&self) -> Option<Session> {
        self.store.read().current().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read().current().is_some()
    }

    /// Sign in and go to the role's dashboard. Returns false, with an error
    /// toast, when the request is incomplete.
    pub async fn login(self, request: LoginRequest) -> bool {
        timer::sleep(self.login_delay_ms).await;
        let mut store = self.store;
        let result = store.write().login(&request).cloned();
        self.finish_sign_in(result, "Welcome back")
    }

    /// Create an account and go to the role's dashboard.
    pub async fn register(self, request: LoginRequest) -> bool {
        timer::sleep(self.login_delay_ms).await;
        let mut store = self.store;
        let result = store.write().register(&request).cloned();
        self.finish_sign_in(result, "Account created")
    }

    fn finish_sign_in(&self, result: Result<Session, AppError>, greeting: &str) -> bool {
        match result {
            Ok(session) => {
                notify::success(&self.toasts, format!("{greeting}, {}!", session.name));
                navigator().replace(Route::RoleHome { role: session.role });
                true
            }
            Err(e) => {
                notify::error(&self.toasts, &e);
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.store.write().logout() {
            tracing::warn!(error = %e, "Stored session could not be cleared");
        }
        notify::success(&self.toasts, "Signed out successfully");
        navigator().replace(Route::Login {});
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<Session, AppError> {
        let result = self.store.write().update_profile(update).cloned();
        match &result {
            Ok(_) => notify::success(&self.toasts, "Profile updated"),
            Err(e) => notify::error(&self.toasts, e),
        }
        result
    }
}

/// Hook to access the session service.
pub fn use_session() -> SessionService {
    use_context::<SessionService>()
}
