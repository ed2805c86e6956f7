//! API error taxonomy shared by every backend call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when a call fails with nothing more specific to say.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No session token; the request was not sent.
    #[error("User not authenticated, Please log in")]
    Unauthenticated,

    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser (SSR or native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for an inline error or toast.
    ///
    /// Status errors surface the backend's body when it has one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthenticated => self.to_string(),
            Self::Status { body, .. } => {
                let body = body.trim();
                if body.is_empty() { GENERIC_FAILURE.to_owned() } else { body.to_owned() }
            }
            Self::Transport(_) | Self::Decode(_) | Self::Unavailable => GENERIC_FAILURE.to_owned(),
        }
    }
}
