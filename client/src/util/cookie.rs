//! Session-token cookie access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in the `token` cookie. In the browser it is read and written
//! through `document.cookie`; during SSR it is read from the request's
//! `Cookie` header so the server renders the same gate decision the client
//! will hydrate with. Writes are browser-only.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::sync::Mutex;

/// Cookie name carrying the opaque session token.
pub const TOKEN_COOKIE: &str = "token";

/// Persistent storage for the session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by the `token` cookie.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieTokenStore;

impl TokenStore for CookieTokenStore {
    fn load(&self) -> Option<String> {
        let header = read_cookie_header()?;
        cookie_value(&header, TOKEN_COOKIE)
    }

    fn save(&self, token: &str) {
        write_cookie(&set_cookie_string(TOKEN_COOKIE, token));
    }

    fn clear(&self) {
        write_cookie(&clear_cookie_string(TOKEN_COOKIE));
    }
}

/// In-memory token store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: Option<&str>) -> Self {
        Self { token: Mutex::new(token.map(str::to_owned)) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Find `name` in a `Cookie`-header style string (`a=1; b=2`).
///
/// Empty values are treated as missing. Values are percent-decoded when valid.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() != name {
            return None;
        }
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let decoded = urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned());
        Some(decoded)
    })
}

/// `document.cookie` assignment that stores `value` for the whole site.
pub fn set_cookie_string(name: &str, value: &str) -> String {
    format!("{name}={}; path=/; SameSite=Lax", urlencoding::encode(value))
}

/// `document.cookie` assignment that expires `name` immediately.
pub fn clear_cookie_string(name: &str) -> String {
    format!("{name}=; path=/; max-age=0; SameSite=Lax")
}

fn read_cookie_header() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        html.cookie().ok()
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        let parts = leptos::prelude::use_context::<http::request::Parts>()?;
        let header = parts.headers.get(http::header::COOKIE)?;
        header.to_str().ok().map(str::to_owned)
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        None
    }
}

fn write_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        if html.set_cookie(assignment).is_err() {
            log::warn!("failed to write session cookie");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}
