use super::*;

// =============================================================
// cookie_value
// =============================================================

#[test]
fn cookie_value_finds_token_among_other_cookies() {
    let header = "theme=dark; token=abc123; lang=en";
    assert_eq!(cookie_value(header, "token"), Some("abc123".to_owned()));
}

#[test]
fn cookie_value_ignores_prefix_matches() {
    let header = "csrf_token=zzz; token_hint=yyy";
    assert_eq!(cookie_value(header, "token"), None);
}

#[test]
fn cookie_value_treats_empty_value_as_missing() {
    assert_eq!(cookie_value("token=; other=1", "token"), None);
    assert_eq!(cookie_value("", "token"), None);
}

#[test]
fn cookie_value_decodes_percent_escapes() {
    assert_eq!(cookie_value("token=a%2Eb%3Dc", "token"), Some("a.b=c".to_owned()));
}

#[test]
fn cookie_value_keeps_equals_inside_value() {
    assert_eq!(cookie_value("token=eyJ.x==", "token"), Some("eyJ.x==".to_owned()));
}

// =============================================================
// Cookie assignments
// =============================================================

#[test]
fn set_cookie_string_scopes_to_site_root() {
    assert_eq!(set_cookie_string("token", "abc123"), "token=abc123; path=/; SameSite=Lax");
}

#[test]
fn set_cookie_string_escapes_separators() {
    assert_eq!(set_cookie_string("token", "a;b"), "token=a%3Bb; path=/; SameSite=Lax");
}

#[test]
fn clear_cookie_string_expires_immediately() {
    assert_eq!(clear_cookie_string("token"), "token=; path=/; max-age=0; SameSite=Lax");
}

// =============================================================
// Stores
// =============================================================

#[test]
fn memory_store_round_trips_and_clears() {
    let store = MemoryTokenStore::new(None);
    assert_eq!(store.load(), None);
    store.save("abc123");
    assert_eq!(store.load(), Some("abc123".to_owned()));
    store.clear();
    assert_eq!(store.load(), None);
}

#[cfg(not(any(feature = "hydrate", feature = "ssr")))]
#[test]
fn cookie_store_is_empty_outside_browser_and_server() {
    let store = CookieTokenStore;
    store.save("ignored");
    assert_eq!(store.load(), None);
}
