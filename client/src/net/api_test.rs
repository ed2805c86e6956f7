use super::*;

#[test]
fn endpoint_prefixes_api() {
    assert_eq!(endpoint(LOGIN_PATH), "/api/login");
    assert_eq!(endpoint(JOB_MATCH_PATH), "/api/resume/jobMatcher");
    assert_eq!(endpoint(SUBMIT_ANSWERS_PATH), "/api/resume/submit-answers");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn require_token_rejects_missing_and_blank() {
    assert_eq!(require_token(None), Err(ApiError::Unauthenticated));
    assert_eq!(require_token(Some("  ".to_owned())), Err(ApiError::Unauthenticated));
    assert_eq!(require_token(Some("abc123".to_owned())), Ok("abc123".to_owned()));
}

#[test]
fn analyze_fields_skip_blank_description() {
    assert!(analyze_fields(None).is_empty());
    assert!(analyze_fields(Some("   ")).is_empty());
    assert_eq!(analyze_fields(Some(" Backend engineer ")), vec![("jobDescription", "Backend engineer".to_owned())]);
}

#[test]
fn job_match_fields_always_send_description() {
    assert_eq!(job_match_fields(" SRE "), vec![("jobDescription", "SRE".to_owned())]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let request = LoginRequest { email_id: "a@b.com".to_owned(), password: "pw".to_owned() };
    let result = block_on_ready(login(&request));
    assert_eq!(result, Err(ApiError::Unavailable));
    assert_eq!(block_on_ready(fetch_stats()), Err(ApiError::Unavailable));
}

/// Drive a future that never awaits a pending resource.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
