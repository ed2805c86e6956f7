//! Session state and the reactive session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token is the only credential the browser holds. `SessionState`
//! is the pure model (token present or not); `SessionContext` wraps it in a
//! signal provided at the app root so the route gate, navbar and pages observe
//! sign-in/sign-out as soon as it happens instead of re-reading the cookie.
//!
//! TRADE-OFFS
//! ==========
//! Token presence is treated as authentication. Expired or revoked tokens are
//! only discovered when the backend rejects a request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::util::cookie::{CookieTokenStore, TokenStore};

/// Gate outcome for a protected route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the protected view.
    Admit,
    /// Send the user to the login view with this location.
    Redirect(String),
}

/// Client-side session model. Holds the opaque token, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Build state from a raw store value. Blank tokens count as absent.
    pub fn from_token(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Decide whether `requested_path` may render.
    pub fn gate(&self, requested_path: &str) -> GateDecision {
        if self.is_authenticated() {
            GateDecision::Admit
        } else {
            GateDecision::Redirect(login_redirect_path(requested_path))
        }
    }
}

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_AFTER_LOGIN: &str = "/analyse";

/// Login location that returns the user to `requested_path` afterwards.
pub fn login_redirect_path(requested_path: &str) -> String {
    match sanitize_next(Some(requested_path)) {
        Some(next) => format!("{LOGIN_PATH}?next={}", urlencoding::encode(next)),
        None => LOGIN_PATH.to_owned(),
    }
}

/// Accept only local absolute paths as post-login targets.
///
/// Rejects protocol-relative (`//host`) and backslash variants, and the auth
/// routes with any query, fragment or trailing slash.
pub fn sanitize_next(next: Option<&str>) -> Option<&str> {
    let next = next?.trim();
    if !next.starts_with('/') || next.starts_with("//") || next.starts_with("/\\") {
        return None;
    }
    if AUTH_PATHS.contains(&route_path(next)) {
        return None;
    }
    Some(next)
}

const AUTH_PATHS: [&str; 2] = [LOGIN_PATH, "/signup"];

/// Path component of `target` without query, fragment or trailing slashes.
fn route_path(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    let path = target[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}

/// Where to go after a successful login given an optional `next` parameter.
pub fn post_login_target(next: Option<&str>) -> String {
    sanitize_next(next).unwrap_or(DEFAULT_AFTER_LOGIN).to_owned()
}

/// Shared session handle provided through Leptos context.
///
/// All session transitions go through this type so every subscriber sees the
/// same state.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    store: StoredValue<Arc<dyn TokenStore>>,
}

impl SessionContext {
    /// Context backed by the `token` cookie.
    pub fn from_cookie() -> Self {
        Self::with_store(Arc::new(CookieTokenStore))
    }

    /// Context backed by an arbitrary token store, loading its current value.
    pub fn with_store(store: Arc<dyn TokenStore>) -> Self {
        let initial = SessionState::from_token(store.load());
        Self { state: RwSignal::new(initial), store: StoredValue::new(store) }
    }

    /// Reactive read of the current state.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Reactive authentication check. Synchronous; never hits the network.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Current token without subscribing.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Persist `token` and publish `Authenticated`.
    pub fn sign_in(&self, token: &str) {
        let next = SessionState::from_token(Some(token.to_owned()));
        if next.is_authenticated() {
            self.store.with_value(|store| store.save(token));
        }
        self.publish(next);
    }

    /// Remove the token and publish `Anonymous`.
    pub fn sign_out(&self) {
        self.store.with_value(|store| store.clear());
        self.publish(SessionState::anonymous());
    }

    /// Re-read the store, publishing only when the state changed.
    pub fn refresh(&self) {
        let current = self.store.with_value(|store| SessionState::from_token(store.load()));
        self.publish(current);
    }

    fn publish(&self, next: SessionState) {
        if self.state.with_untracked(|s| *s != next) {
            self.state.set(next);
        }
    }
}
