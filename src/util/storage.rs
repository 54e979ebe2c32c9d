//! LocalStorage access for the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signed-in session survives page reloads through two localStorage
//! keys: the raw bearer token and the serialized user profile. This
//! module is the only place that touches localStorage for session data;
//! everything else goes through `state::session` or the request layer.
//!
//! Outside the browser (native unit tests) every accessor degrades to a
//! no-op so callers never need their own cfg blocks.

use serde::Serialize;

/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Key holding the signed-in user's profile as JSON.
pub const USER_KEY: &str = "user";

/// Read a raw string value, `None` when absent or storage is unavailable.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string value. Failures (quota, disabled storage) are ignored.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove a stored value, if present.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    write(key, &raw);
}

/// Drop both session keys. Called on logout and whenever the server
/// rejects the stored token.
pub fn clear_session() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
