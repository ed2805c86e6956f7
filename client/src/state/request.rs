//! Per-action in-flight request tracking.
//!
//! DESIGN
//! ======
//! Each user action (submit, analyze, fetch) owns one tracker. `begin` refuses
//! while a request is pending so double clicks do not stack requests, and every
//! accepted request gets a ticket so a late response from a superseded request
//! can be recognized and dropped.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Identifies one accepted request for an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    seq: u64,
    pending: bool,
}

impl RequestTracker {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start a request. Returns `None` while another one is pending.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.pending {
            return None;
        }
        self.seq += 1;
        self.pending = true;
        Some(RequestTicket(self.seq))
    }

    /// Finish the request for `ticket`.
    ///
    /// Returns `true` when the response belongs to the latest request and
    /// should be applied.
    pub fn finish(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        self.pending = false;
        true
    }

    /// Abandon whatever is pending; its response will be ignored.
    pub fn reset(&mut self) {
        if self.pending {
            self.seq += 1;
            self.pending = false;
        }
    }
}

/// Load state for data a page fetches once on mount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Fetch<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Fetch<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}
