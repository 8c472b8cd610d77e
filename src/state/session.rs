//! Session slice: the authenticated user and bearer token.
//!
//! DESIGN
//! ======
//! The slice is a plain struct mutated only through [`reduce`], a total
//! function over `(SessionState, SessionEvent)`. Network lifecycles
//! (login, register, current-user) each contribute a pending/fulfilled/
//! rejected event triple; `Logout` and `ClearError` are synchronous.
//! Persistence deliberately lives outside the reducer: the action layer
//! writes the reduced state through [`super::persist`] so there is exactly
//! one durable write path for the token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication state for the whole client.
///
/// Invariant: `is_authenticated` is true only when both `user` and
/// `token` are present. Every arm of [`reduce`] preserves this.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Rebuild a session from a persisted envelope. `is_authenticated` is
    /// derived, never trusted from storage, so a corrupt envelope cannot
    /// fabricate an authenticated session.
    pub fn from_persisted(user: Option<User>, token: Option<String>) -> Self {
        let is_authenticated = user.is_some() && token.is_some();
        Self {
            user,
            token,
            is_authenticated,
            is_loading: false,
            error: None,
        }
    }
}

/// Every transition the session slice can make.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    LoginPending,
    LoginFulfilled { user: User, token: String },
    LoginRejected(String),
    RegisterPending,
    RegisterFulfilled,
    RegisterRejected(String),
    CurrentUserPending,
    CurrentUserFulfilled(User),
    CurrentUserRejected(String),
    Logout,
    ClearError,
}

/// Total reducer over the session slice.
#[must_use]
pub fn reduce(state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::LoginPending
        | SessionEvent::RegisterPending
        | SessionEvent::CurrentUserPending => SessionState {
            is_loading: true,
            error: None,
            ..state
        },

        SessionEvent::LoginFulfilled { user, token } => SessionState {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
            is_loading: false,
            error: None,
        },

        // Registration never logs the user in: the product flow redirects
        // to the login page instead. Any stale identity is cleared.
        SessionEvent::RegisterFulfilled => SessionState {
            user: None,
            token: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        },

        // The user record is replaced wholesale. Authentication still
        // requires a token; a fulfilled fetch without one cannot
        // authenticate.
        SessionEvent::CurrentUserFulfilled(user) => SessionState {
            is_authenticated: state.token.is_some(),
            user: Some(user),
            is_loading: false,
            error: None,
            ..state
        },

        SessionEvent::LoginRejected(msg) | SessionEvent::RegisterRejected(msg) => SessionState {
            is_loading: false,
            error: Some(msg),
            ..state
        },

        // Failing to confirm identity is treated as being logged out.
        SessionEvent::CurrentUserRejected(msg) => SessionState {
            user: None,
            token: None,
            is_authenticated: false,
            is_loading: false,
            error: Some(msg),
        },

        SessionEvent::Logout => SessionState::default(),

        SessionEvent::ClearError => SessionState {
            error: None,
            ..state
        },
    }
}
