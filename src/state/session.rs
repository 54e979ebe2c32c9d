//! In-memory session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is created at the app root and provided
//! through context; route guards and the layout read it, and the
//! operations here are the only writers. Durable storage and the signal
//! are always updated together so a reload lands in the same state the
//! user left.
//!
//! The store starts in `loading` until [`initialize`] has read durable
//! storage. Guards treat that phase as neither signed in nor signed out
//! so the first paint never redirects on stale information.

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage::{self, TOKEN_KEY, USER_KEY};

/// Reactive session snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Profile of the signed-in user. `Some` exactly when
    /// `is_authenticated`; a missing or corrupt stored profile becomes
    /// an empty one rather than an error.
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// True until durable storage has been consulted.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: true,
        }
    }
}

/// Restore the session from durable storage. Runs once at mount.
pub fn initialize(session: RwSignal<SessionState>) {
    let token = storage::read(TOKEN_KEY);
    let stored_user = storage::read(USER_KEY);
    session.set(restored_state(token, stored_user));
}

/// Record a successful sign-in: persist the token and profile, then
/// flip the signal.
pub fn login(session: RwSignal<SessionState>, token: &str, user: &User) {
    storage::write(TOKEN_KEY, token);
    storage::save_json(USER_KEY, user);
    session.set(logged_in_state(user.clone()));
}

/// Drop the persisted session and sign the store out. Safe to call when
/// already signed out.
pub fn logout(session: RwSignal<SessionState>) {
    storage::clear_session();
    session.set(logged_out_state());
}

/// Sign the store out without touching storage. Used by the expiry
/// listener, which runs after the transport has already cleared the
/// persisted session.
pub fn expire(session: RwSignal<SessionState>) {
    session.set(logged_out_state());
}

/// State implied by what durable storage held. A non-empty token counts
/// as signed in; the profile is best-effort.
fn restored_state(token: Option<String>, stored_user: Option<String>) -> SessionState {
    let authenticated = token.is_some_and(|token| !token.is_empty());
    if !authenticated {
        return logged_out_state();
    }
    let user = stored_user
        .and_then(|raw| serde_json::from_str::<User>(&raw).ok())
        .unwrap_or_default();
    SessionState {
        user: Some(user),
        is_authenticated: true,
        loading: false,
    }
}

fn logged_in_state(user: User) -> SessionState {
    SessionState {
        user: Some(user),
        is_authenticated: true,
        loading: false,
    }
}

fn logged_out_state() -> SessionState {
    SessionState {
        user: None,
        is_authenticated: false,
        loading: false,
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
