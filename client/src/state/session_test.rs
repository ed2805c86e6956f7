use super::*;
use crate::util::cookie::MemoryTokenStore;

fn owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.token(), None);
}

#[test]
fn session_state_blank_token_is_anonymous() {
    assert!(!SessionState::from_token(Some(String::new())).is_authenticated());
    assert!(!SessionState::from_token(Some("   ".to_owned())).is_authenticated());
}

#[test]
fn session_state_any_non_empty_token_is_authenticated() {
    let state = SessionState::from_token(Some("not-a-real-jwt".to_owned()));
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("not-a-real-jwt"));
}

// =============================================================
// Gate decisions
// =============================================================

#[test]
fn gate_redirects_anonymous_to_login_with_next() {
    let state = SessionState::anonymous();
    assert_eq!(state.gate("/test"), GateDecision::Redirect("/login?next=%2Ftest".to_owned()));
}

#[test]
fn gate_admits_authenticated() {
    let state = SessionState::from_token(Some("abc123".to_owned()));
    assert_eq!(state.gate("/test"), GateDecision::Admit);
}

#[test]
fn gate_follows_token_set_then_removed() {
    let store = MemoryTokenStore::new(None);

    let before = SessionState::from_token(store.load());
    assert!(matches!(before.gate("/jobMatcher"), GateDecision::Redirect(_)));

    store.save("abc123");
    let during = SessionState::from_token(store.load());
    assert_eq!(during.gate("/jobMatcher"), GateDecision::Admit);

    store.clear();
    let after = SessionState::from_token(store.load());
    assert!(matches!(after.gate("/jobMatcher"), GateDecision::Redirect(_)));
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn login_redirect_path_drops_unsafe_targets() {
    assert_eq!(login_redirect_path("//evil.example"), "/login");
    assert_eq!(login_redirect_path("https://evil.example"), "/login");
    assert_eq!(login_redirect_path("/login"), "/login");
}

#[test]
fn login_redirect_path_encodes_query() {
    assert_eq!(login_redirect_path("/test?x=1"), "/login?next=%2Ftest%3Fx%3D1");
}

#[test]
fn sanitize_next_accepts_local_paths_only() {
    assert_eq!(sanitize_next(Some("/profile")), Some("/profile"));
    assert_eq!(sanitize_next(Some("/\\evil")), None);
    assert_eq!(sanitize_next(Some("profile")), None);
    assert_eq!(sanitize_next(Some("/signup")), None);
    assert_eq!(sanitize_next(None), None);
}

#[test]
fn sanitize_next_rejects_auth_routes_in_any_form() {
    for target in ["/login", "/login/", "/login?next=%2Ftest", "/login#top", "/signup", "/signup/", "/signup?x=1", "/signup//"] {
        assert_eq!(sanitize_next(Some(target)), None, "{target} should be rejected");
    }
}

#[test]
fn sanitize_next_keeps_query_and_lookalike_paths() {
    assert_eq!(sanitize_next(Some("/test?count=5")), Some("/test?count=5"));
    assert_eq!(sanitize_next(Some("/login-help")), Some("/login-help"));
    assert_eq!(sanitize_next(Some("/")), Some("/"));
}

#[test]
fn post_login_target_defaults_to_analyse() {
    assert_eq!(post_login_target(None), "/analyse");
    assert_eq!(post_login_target(Some("//x")), "/analyse");
    assert_eq!(post_login_target(Some("/test")), "/test");
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn context_loads_initial_state_from_store() {
    let _owner = owner();
    let ctx = SessionContext::with_store(Arc::new(MemoryTokenStore::new(Some("abc123"))));
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.token(), Some("abc123".to_owned()));
}

#[test]
fn context_sign_in_persists_and_publishes() {
    let _owner = owner();
    let store = Arc::new(MemoryTokenStore::new(None));
    let ctx = SessionContext::with_store(store.clone());
    assert!(!ctx.is_authenticated());

    ctx.sign_in("abc123");
    assert!(ctx.is_authenticated());
    assert_eq!(store.load(), Some("abc123".to_owned()));
}

#[test]
fn context_sign_in_with_blank_token_stays_anonymous() {
    let _owner = owner();
    let store = Arc::new(MemoryTokenStore::new(None));
    let ctx = SessionContext::with_store(store.clone());
    ctx.sign_in("  ");
    assert!(!ctx.is_authenticated());
    assert_eq!(store.load(), None);
}

#[test]
fn context_sign_out_clears_store_and_state() {
    let _owner = owner();
    let store = Arc::new(MemoryTokenStore::new(Some("abc123")));
    let ctx = SessionContext::with_store(store.clone());

    ctx.sign_out();
    assert!(!ctx.is_authenticated());
    assert_eq!(store.load(), None);
    assert!(matches!(ctx.get().gate("/analyse"), GateDecision::Redirect(_)));
}

#[test]
fn context_refresh_observes_external_removal() {
    let _owner = owner();
    let store = Arc::new(MemoryTokenStore::new(Some("abc123")));
    let ctx = SessionContext::with_store(store.clone());
    assert!(ctx.is_authenticated());

    store.clear();
    assert!(ctx.is_authenticated());
    ctx.refresh();
    assert!(!ctx.is_authenticated());
}
