#![cfg(not(feature = "csr"))]

use super::*;

// ====== key constants ======
//
// These keys are shared with the backend's expectations of the browser
// session. Renaming either one silently signs every user out.

#[test]
fn token_key_is_stable() {
    assert_eq!(TOKEN_KEY, "token");
}

#[test]
fn user_key_is_stable() {
    assert_eq!(USER_KEY, "user");
}

// ====== native fallbacks ======

#[test]
fn read_returns_none_outside_browser() {
    assert_eq!(read(TOKEN_KEY), None);
}

#[test]
fn write_then_read_is_noop_outside_browser() {
    write(TOKEN_KEY, "abc123");
    assert_eq!(read(TOKEN_KEY), None);
}

#[test]
fn remove_is_noop_outside_browser() {
    remove(USER_KEY);
    assert_eq!(read(USER_KEY), None);
}

#[test]
fn save_json_is_noop_outside_browser() {
    save_json(USER_KEY, &serde_json::json!({"id": 1}));
    assert_eq!(read(USER_KEY), None);
}

#[test]
fn clear_session_touches_both_keys() {
    clear_session();
    assert_eq!(read(TOKEN_KEY), None);
    assert_eq!(read(USER_KEY), None);
}
