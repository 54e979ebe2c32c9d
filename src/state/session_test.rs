use super::*;

// The operations taking signals are thin wrappers over these state
// builders plus storage writes, so the builders carry the tests.

// ====== initial state ======

#[test]
fn default_state_is_loading() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated);
    assert_eq!(state.user, None);
}

// ====== restoration ======

#[test]
fn no_token_restores_signed_out() {
    let state = restored_state(None, None);
    assert!(!state.loading);
    assert!(!state.is_authenticated);
    assert_eq!(state.user, None);
}

#[test]
fn empty_token_restores_signed_out() {
    let state = restored_state(Some(String::new()), Some("{}".to_owned()));
    assert!(!state.is_authenticated);
}

#[test]
fn token_with_profile_restores_signed_in() {
    let state = restored_state(
        Some("abc123".to_owned()),
        Some(r#"{"id":4,"name":"Dana","email":"dana@example.com"}"#.to_owned()),
    );
    assert!(!state.loading);
    assert!(state.is_authenticated);
    let user = state.user.unwrap();
    assert_eq!(user.name, "Dana");
    assert_eq!(user.id, 4);
}

#[test]
fn token_without_profile_gets_empty_profile() {
    let state = restored_state(Some("abc123".to_owned()), None);
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(User::default()));
}

#[test]
fn corrupt_profile_degrades_to_empty_profile() {
    let state = restored_state(Some("abc123".to_owned()), Some("{not json".to_owned()));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(User::default()));
}

#[test]
fn whitespace_token_still_counts_as_present() {
    // Mirrors the sign-in check being on presence, not validity; the
    // first authenticated request will bounce and expire the session.
    let state = restored_state(Some("   ".to_owned()), None);
    assert!(state.is_authenticated);
}

// ====== transitions ======

#[test]
fn logged_in_state_carries_profile() {
    let user = User {
        id: 9,
        name: "Sam".to_owned(),
        email: "sam@example.com".to_owned(),
    };
    let state = logged_in_state(user.clone());
    assert!(state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(state.user, Some(user));
}

#[test]
fn logged_out_state_is_fully_cleared() {
    let state = logged_out_state();
    assert!(!state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(state.user, None);
}
