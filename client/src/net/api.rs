//! REST calls to the resume backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api` prefix, which the host forwards to the backend.
//! Server-side (SSR) and native tests: every call returns
//! `ApiError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` and decide locally how to surface the
//! failure. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AnalyzeResponse, AnswerSheet, AuthResponse, Evaluation, JobMatchResponse, LoginRequest, ProfileResponse,
    QuizPreferences, QuizResponse, ResumeStats, SignupRequest,
};
use crate::util::upload::ResumeFile;

/// Same-origin prefix the host forwards to the backend.
pub const API_PREFIX: &str = "/api";

pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const SIGNUP_PATH: &str = "/signup";
pub(crate) const ANALYZE_PATH: &str = "/resume/analyze";
pub(crate) const JOB_MATCH_PATH: &str = "/resume/jobMatcher";
pub(crate) const TAKE_TEST_PATH: &str = "/resume/taketest";
pub(crate) const SUBMIT_ANSWERS_PATH: &str = "/resume/submit-answers";
pub(crate) const PROFILE_PATH: &str = "/user/profile";
pub(crate) const STATS_PATH: &str = "/resume/stats";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Token to attach to an authenticated call.
///
/// # Errors
///
/// Returns `ApiError::Unauthenticated` when there is no usable token; the
/// request must not be sent.
pub fn require_token(token: Option<String>) -> Result<String, ApiError> {
    token.filter(|t| !t.trim().is_empty()).ok_or(ApiError::Unauthenticated)
}

/// Multipart text fields for `POST /resume/analyze`.
pub(crate) fn analyze_fields(job_description: Option<&str>) -> Vec<(&'static str, String)> {
    job_description
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| vec![("jobDescription", text.to_owned())])
        .unwrap_or_default()
}

/// Multipart text fields for `POST /resume/jobMatcher`.
pub(crate) fn job_match_fields(job_description: &str) -> Vec<(&'static str, String)> {
    vec![("jobDescription", job_description.trim().to_owned())]
}

/// `POST /login`.
///
/// # Errors
///
/// Transport, status and decode failures.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(LOGIN_PATH, None, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// `POST /signup`.
///
/// # Errors
///
/// Transport, status and decode failures.
pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(SIGNUP_PATH, None, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Upload a resume for scoring via `POST /resume/analyze`.
///
/// # Errors
///
/// Transport, status and decode failures.
pub async fn analyze_resume(
    token: &str,
    file: &ResumeFile,
    job_description: Option<&str>,
) -> Result<AnalyzeResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = resume_form(file, &analyze_fields(job_description))?;
        post_multipart(ANALYZE_PATH, token, form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, file, job_description);
        Err(ApiError::Unavailable)
    }
}

/// Match a resume against a job description via `POST /resume/jobMatcher`.
///
/// # Errors
///
/// Transport, status and decode failures.
pub async fn match_jobs(token: &str, file: &ResumeFile, job_description: &str) -> Result<JobMatchResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = resume_form(file, &job_match_fields(job_description))?;
        post_multipart(JOB_MATCH_PATH, token, form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, file, job_description);
        Err(ApiError::Unavailable)
    }
}

/// Generate interview questions via `POST /resume/taketest`.
///
/// # Errors
///
/// Transport, status and decode failures.
pub async fn generate_quiz(
    token: &str,
    file: &ResumeFile,
    preferences: QuizPreferences,
) -> Result<QuizResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = resume_form(file, &preferences.form_fields())?;
        post_multipart(TAKE_TEST_PATH, token, form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, file, preferences);
        Err(ApiError::Unavailable)
    }
}

/// Submit quiz answers for evaluation via `POST /resume/submit-answers`.
///
/// # Errors
///
/// Transport, status and decode failures.
pub async fn submit_answers(token: &str, sheet: &AnswerSheet) -> Result<Evaluation, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(SUBMIT_ANSWERS_PATH, Some(token), sheet).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, sheet);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user's profile via `GET /user/profile`.
///
/// # Errors
///
/// Transport, status and decode failures.
pub async fn fetch_profile(token: &str) -> Result<ProfileResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(PROFILE_PATH))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch aggregate statistics via `GET /resume/stats`. No credentials.
///
/// # Errors
///
/// Transport, status and decode failures.
pub async fn fetch_stats() -> Result<ResumeStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(STATS_PATH)).send().await.map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// BROWSER TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("{} failed with status {status}", resp.url());
        return Err(ApiError::Status { status, body });
    }
    resp.json::<T>().await.map_err(|e| {
        log::warn!("{} returned an unexpected body: {e}", resp.url());
        ApiError::Decode(e.to_string())
    })
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(path: &str, token: Option<&str>, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let mut builder = gloo_net::http::Request::post(&endpoint(path));
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer(token));
    }
    let resp = builder.json(body).map_err(transport)?.send().await.map_err(|e| {
        log::warn!("{path} unreachable: {e}");
        transport(e)
    })?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_multipart<T>(path: &str, token: &str, form: web_sys::FormData) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    // No explicit Content-Type: the browser adds the multipart boundary.
    let resp = gloo_net::http::Request::post(&endpoint(path))
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(|e| {
            log::warn!("{path} unreachable: {e}");
            transport(e)
        })?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
fn resume_form(file: &ResumeFile, fields: &[(&'static str, String)]) -> Result<web_sys::FormData, ApiError> {
    let form_error = |_| ApiError::Transport("could not build upload form".to_owned());
    let form = web_sys::FormData::new().map_err(form_error)?;
    form.append_with_blob_and_filename("resume", &file.handle, &file.name)
        .map_err(form_error)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(form_error)?;
    }
    Ok(form)
}
