//! Shared start/finish plumbing for page actions that call the backend.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use leptos::prelude::*;

use crate::net::api::require_token;
use crate::net::error::ApiError;
use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::state::request::{RequestTicket, RequestTracker};
use crate::state::session::SessionContext;

/// Begin an authenticated action.
///
/// Returns the token and ticket to use, or `None` when the request must not be
/// sent: no token (the user is told to log in) or the action is already in
/// flight.
pub(crate) fn start_authenticated(
    session: SessionContext,
    notices: RwSignal<NoticeState>,
    tracker: RwSignal<RequestTracker>,
) -> Option<(String, RequestTicket)> {
    let token = match require_token(session.token()) {
        Ok(token) => token,
        Err(err) => {
            notify(notices, NoticeKind::Error, err.user_message());
            return None;
        }
    };
    start(tracker).map(|ticket| (token, ticket))
}

/// Begin an unauthenticated action. `None` while one is already in flight.
pub(crate) fn start(tracker: RwSignal<RequestTracker>) -> Option<RequestTicket> {
    let mut ticket = None;
    tracker.update(|t| ticket = t.begin());
    ticket
}

/// Close out `ticket`. Returns `true` when its response should be applied.
pub(crate) fn finish(tracker: RwSignal<RequestTracker>, ticket: RequestTicket) -> bool {
    let mut current = false;
    tracker.update(|t| current = t.finish(ticket));
    current
}

/// Toast for a failed call.
pub(crate) fn report_failure(notices: RwSignal<NoticeState>, fallback: &str, err: &ApiError) {
    let message = match err {
        ApiError::Unauthenticated | ApiError::Status { .. } => err.user_message(),
        _ => fallback.to_owned(),
    };
    notify(notices, NoticeKind::Error, message);
}
