use super::*;
use crate::net::types::Role;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        role: Role::User,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
        profile: None,
    }
}

fn logged_in() -> SessionState {
    reduce(
        SessionState::default(),
        SessionEvent::LoginFulfilled {
            user: user("u1"),
            token: "tok-1".to_owned(),
        },
    )
}

fn invariant_holds(state: &SessionState) -> bool {
    !state.is_authenticated || (state.user.is_some() && state.token.is_some())
}

// =============================================================
// Login lifecycle
// =============================================================

#[test]
fn login_pending_sets_loading_and_clears_error() {
    let start = SessionState {
        error: Some("old".to_owned()),
        ..SessionState::default()
    };
    let state = reduce(start, SessionEvent::LoginPending);
    assert!(state.is_loading);
    assert_eq!(state.error, None);
}

#[test]
fn login_fulfilled_authenticates() {
    let state = logged_in();
    assert!(state.is_authenticated);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert!(!state.is_loading);
}

#[test]
fn login_rejected_keeps_unauthenticated_and_stores_error() {
    let pending = reduce(SessionState::default(), SessionEvent::LoginPending);
    let state = reduce(pending, SessionEvent::LoginRejected("bad credentials".to_owned()));
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("bad credentials"));
}

// =============================================================
// Registration never authenticates
// =============================================================

#[test]
fn register_fulfilled_does_not_authenticate() {
    let pending = reduce(SessionState::default(), SessionEvent::RegisterPending);
    let state = reduce(pending, SessionEvent::RegisterFulfilled);
    assert!(!state.is_authenticated);
    assert_eq!(state.user, None);
    assert_eq!(state.token, None);
    assert_eq!(state.error, None);
}

#[test]
fn register_fulfilled_clears_stale_identity() {
    let state = reduce(logged_in(), SessionEvent::RegisterFulfilled);
    assert!(!state.is_authenticated);
    assert_eq!(state.user, None);
    assert_eq!(state.token, None);
}

// =============================================================
// Current-user lifecycle
// =============================================================

#[test]
fn current_user_fulfilled_replaces_user_wholesale() {
    let state = reduce(logged_in(), SessionEvent::CurrentUserFulfilled(user("u2")));
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u2"));
    assert_eq!(state.token.as_deref(), Some("tok-1"));
}

#[test]
fn current_user_fulfilled_without_token_cannot_authenticate() {
    let state = reduce(
        SessionState::default(),
        SessionEvent::CurrentUserFulfilled(user("u1")),
    );
    assert!(!state.is_authenticated);
    assert!(invariant_holds(&state));
}

#[test]
fn current_user_rejected_clears_everything() {
    let state = reduce(
        logged_in(),
        SessionEvent::CurrentUserRejected("token expired".to_owned()),
    );
    assert!(!state.is_authenticated);
    assert_eq!(state.user, None);
    assert_eq!(state.token, None);
    assert_eq!(state.error.as_deref(), Some("token expired"));
}

// =============================================================
// Synchronous events
// =============================================================

#[test]
fn logout_resets_to_default() {
    let state = reduce(logged_in(), SessionEvent::Logout);
    assert_eq!(state, SessionState::default());
}

#[test]
fn clear_error_touches_only_error() {
    let mut with_error = logged_in();
    with_error.error = Some("stale".to_owned());
    let state = reduce(with_error.clone(), SessionEvent::ClearError);
    assert_eq!(state.error, None);
    assert_eq!(state.user, with_error.user);
    assert_eq!(state.token, with_error.token);
    assert_eq!(state.is_authenticated, with_error.is_authenticated);
}

// =============================================================
// Invariant and race behavior
// =============================================================

#[test]
fn invariant_holds_over_arbitrary_sequences() {
    let events = [
        SessionEvent::LoginPending,
        SessionEvent::LoginRejected("nope".to_owned()),
        SessionEvent::LoginPending,
        SessionEvent::LoginFulfilled {
            user: user("u1"),
            token: "tok-1".to_owned(),
        },
        SessionEvent::RegisterPending,
        SessionEvent::RegisterFulfilled,
        SessionEvent::CurrentUserPending,
        SessionEvent::CurrentUserFulfilled(user("u2")),
        SessionEvent::CurrentUserRejected("expired".to_owned()),
        SessionEvent::ClearError,
        SessionEvent::Logout,
    ];

    let mut state = SessionState::default();
    for event in events {
        state = reduce(state, event);
        assert!(invariant_holds(&state), "invariant broken after {state:?}");
    }
}

#[test]
fn overlapping_fetches_are_last_write_wins() {
    // Two concurrent current-user fetches: whichever completion is
    // reduced last owns the final state, regardless of issue order.
    let mut state = reduce(logged_in(), SessionEvent::CurrentUserPending);
    state = reduce(state, SessionEvent::CurrentUserPending);
    state = reduce(state, SessionEvent::CurrentUserFulfilled(user("first-issued")));
    state = reduce(state, SessionEvent::CurrentUserFulfilled(user("second-issued")));
    assert_eq!(
        state.user.as_ref().map(|u| u.id.as_str()),
        Some("second-issued")
    );
}

// =============================================================
// Rehydration constructor
// =============================================================

#[test]
fn from_persisted_derives_authentication() {
    let full = SessionState::from_persisted(Some(user("u1")), Some("tok".to_owned()));
    assert!(full.is_authenticated);

    let token_only = SessionState::from_persisted(None, Some("tok".to_owned()));
    assert!(!token_only.is_authenticated);

    let user_only = SessionState::from_persisted(Some(user("u1")), None);
    assert!(!user_only.is_authenticated);
}
