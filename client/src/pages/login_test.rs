use super::*;

fn form(full_name: &str, email: &str, password: &str, confirm: &str) -> AuthForm {
    AuthForm {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// Sign in
// =============================================================

#[test]
fn sign_in_builds_login_request_with_trimmed_email() {
    let payload = validate_auth_form(AuthMode::SignIn, &form("", "  ada@b.com ", "pw", "")).unwrap();
    assert_eq!(
        payload,
        AuthPayload::Login(LoginRequest { email_id: "ada@b.com".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn sign_in_ignores_confirmation_field() {
    assert!(validate_auth_form(AuthMode::SignIn, &form("", "ada@b.com", "pw", "different")).is_ok());
}

#[test]
fn sign_in_requires_email_and_password() {
    assert_eq!(validate_auth_form(AuthMode::SignIn, &form("", "", "pw", "")), Err("Enter a valid email address"));
    assert_eq!(
        validate_auth_form(AuthMode::SignIn, &form("", "not-an-email", "pw", "")),
        Err("Enter a valid email address")
    );
    assert_eq!(validate_auth_form(AuthMode::SignIn, &form("", "ada@b.com", "", "")), Err("Enter your password"));
}

// =============================================================
// Sign up
// =============================================================

#[test]
fn sign_up_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_auth_form(AuthMode::SignUp, &form("Ada", "ada@b.com", "pw1", "pw2")),
        Err("Passwords do not match")
    );
}

#[test]
fn sign_up_requires_full_name() {
    assert_eq!(
        validate_auth_form(AuthMode::SignUp, &form("  ", "ada@b.com", "pw", "pw")),
        Err("Enter your full name")
    );
}

#[test]
fn sign_up_builds_signup_request() {
    let payload = validate_auth_form(AuthMode::SignUp, &form(" Ada Lovelace ", "ada@b.com", "pw", "pw")).unwrap();
    assert_eq!(
        payload,
        AuthPayload::Signup(SignupRequest {
            full_name: "Ada Lovelace".to_owned(),
            email_id: "ada@b.com".to_owned(),
            password: "pw".to_owned(),
        })
    );
}

// =============================================================
// AuthMode
// =============================================================

#[test]
fn auth_mode_toggles_and_labels() {
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
    assert_eq!(AuthMode::SignIn.submit_label(), "Sign In");
    assert_eq!(AuthMode::SignUp.success_message(), "Sign Up Successful!");
}
