use super::*;

#[test]
fn accepts_complete_signup() {
    assert_eq!(
        validate_register_input("Dana", "dana@example.com", "hunter22"),
        Ok(())
    );
}

#[test]
fn rejects_missing_name() {
    assert_eq!(
        validate_register_input("", "dana@example.com", "hunter22"),
        Err("Name is required")
    );
}

#[test]
fn rejects_missing_or_invalid_email() {
    assert_eq!(
        validate_register_input("Dana", "", "hunter22"),
        Err("Email is required")
    );
    assert_eq!(
        validate_register_input("Dana", "dana-at-example", "hunter22"),
        Err("Enter a valid email address")
    );
}

#[test]
fn rejects_short_password() {
    assert_eq!(
        validate_register_input("Dana", "dana@example.com", "abc12"),
        Err("Password must be at least 6 characters")
    );
    assert_eq!(
        validate_register_input("Dana", "dana@example.com", "abc123"),
        Ok(())
    );
}
