//! Route gate for views that need a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a protected page. The decision is made from the session context only
//! (token present or not), synchronously, so the protected subtree is never
//! built for an anonymous visitor. Both SSR and the hydrated client make the
//! same decision because the context is seeded from the same cookie.

#[cfg(test)]
#[path = "require_session_test.rs"]
mod require_session_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::{GateDecision, SessionContext};

/// Render `children` only while a session token is present; otherwise
/// redirect to `/login?next=<requested path>`.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;

    // Each navigation into a protected route re-samples the token store.
    session.refresh();

    let decision = gate_decision(session, pathname, search);

    view! {
        <Show
            when=move || decision.get() == GateDecision::Admit
            fallback=move || match decision.get() {
                GateDecision::Redirect(target) => {
                    view! {
                        <Redirect path=target options=NavigateOptions { replace: true, ..NavigateOptions::default() }/>
                    }
                        .into_any()
                }
                GateDecision::Admit => ().into_any(),
            }
        >
            {children()}
        </Show>
    }
}

/// Gate decision that follows both the session and the current location.
pub(crate) fn gate_decision(session: SessionContext, pathname: Memo<String>, search: Memo<String>) -> Memo<GateDecision> {
    Memo::new(move |_| session.get().gate(&requested_path(&pathname.get(), &search.get())))
}

/// Path plus query string of the location being requested.
pub(crate) fn requested_path(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}
