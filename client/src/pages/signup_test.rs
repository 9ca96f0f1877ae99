use super::*;

fn form(username: &str, email: &str, password: &str, confirm: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn valid_form_has_no_errors() {
    let errors = validate(&form("ada", "ada@example.com", "Secret#123", "Secret#123"));
    assert!(errors.is_empty());
}

#[test]
fn empty_form_reports_required_fields() {
    let errors = validate(&form("", "", "", ""));
    assert_eq!(errors.username, Some("Username is required"));
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
    assert_eq!(errors.confirm_password, None);
}

#[test]
fn malformed_email_is_rejected() {
    let errors = validate(&form("ada", "ada.example.com", "Secret#123", "Secret#123"));
    assert_eq!(errors.email, Some("Invalid email address"));
    assert_eq!(errors.get(SignUpField::Email), Some("Invalid email address"));
}

#[test]
fn weak_password_is_rejected() {
    let errors = validate(&form("ada", "ada@example.com", "secret123", "secret123"));
    assert_eq!(errors.password, Some("Password does not meet requirements"));
    assert_eq!(errors.confirm_password, None);
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let errors = validate(&form("ada", "ada@example.com", "Secret#123", "Secret#124"));
    assert_eq!(errors.confirm_password, Some("Passwords do not match"));
    assert_eq!(errors.password, None);
}

// =============================================================
// SignUpErrors
// =============================================================

#[test]
fn clear_only_touches_one_field() {
    let mut errors = validate(&form("", "", "", "x"));
    errors.clear(SignUpField::Email);
    assert_eq!(errors.email, None);
    assert_eq!(errors.username, Some("Username is required"));
    assert_eq!(errors.get(SignUpField::ConfirmPassword), Some("Passwords do not match"));
    assert!(!errors.is_empty());
}

// =============================================================
// Messages
// =============================================================

#[test]
fn success_message_greets_user() {
    let user = AuthUser { username: "ada".into(), email: "ada@example.com".into() };
    assert_eq!(success_message(&user), "Sign up successful!\nWelcome ada");
}

#[test]
fn failure_message_prefers_server_text() {
    let err = ApiError::Status { status: 409, message: Some("Email already taken".into()) };
    assert_eq!(failure_message(&err), "Sign up failed. Please try again!\nEmail already taken");
}

#[test]
fn failure_message_falls_back_to_error_text() {
    let err = ApiError::Timeout(10_000);
    assert_eq!(
        failure_message(&err),
        "Sign up failed. Please try again!\nrequest timed out after 10000 ms"
    );
}

#[test]
fn toast_defaults_are_top_center_five_seconds() {
    let defaults = toast_defaults();
    assert_eq!(defaults.position, Some(ToastPosition::TopCenter));
    assert_eq!(defaults.duration_ms, Some(5000));
}
