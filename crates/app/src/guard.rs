//! Render-or-redirect decisions for the two layout variants.
//!
//! These only steer the UI. Nothing here is an access-control boundary.

use shared_types::{Role, Session};

/// Where a guarded layout sends the user instead of rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home(Role),
}

impl Redirect {
    pub fn path(&self) -> String {
        match self {
            Redirect::Login => "/login".to_string(),
            Redirect::Home(role) => role.home_path(),
        }
    }
}

/// Per-instance guard state. Every change to the session or to the
/// required role re-evaluates from `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unknown,
    Redirecting(Redirect),
    Authorized,
}

impl GuardState {
    /// Guard for a dashboard area that requires `required`.
    ///
    /// A session in a different area is sent to its own home; the requested
    /// path is dropped.
    pub fn for_dashboard(session: Option<&Session>, required: Role) -> Self {
        match session {
            None => GuardState::Redirecting(Redirect::Login),
            Some(s) if s.role != required => GuardState::Redirecting(Redirect::Home(s.role)),
            Some(_) => GuardState::Authorized,
        }
    }

    /// Guard for the sign-in and registration screens.
    pub fn for_auth_screens(session: Option<&Session>) -> Self {
        match session {
            Some(s) => GuardState::Redirecting(Redirect::Home(s.role)),
            None => GuardState::Authorized,
        }
    }

    /// Target for the site root: the user's home, or the sign-in screen.
    pub fn landing(session: Option<&Session>) -> Redirect {
        session.map_or(Redirect::Login, |s| Redirect::Home(s.role))
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, GuardState::Authorized)
    }
}
