//! Job matcher page: resume + job description in, skill gaps and job
//! suggestions out.

#[cfg(test)]
#[path = "job_matcher_test.rs"]
mod job_matcher_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::resume_drop::{ResumeDrop, ResumeSignal};
use crate::net::types::JobMatch;
use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::state::request::RequestTracker;
use crate::state::session::SessionContext;
use crate::util::upload::MISSING_FILE;

pub const MISSING_DESCRIPTION: &str = "Please enter your preferred job";

/// Both inputs are required before anything is sent.
///
/// # Errors
///
/// Returns the toast message for the first missing input.
pub fn validate_job_match(has_file: bool, job_description: &str) -> Result<(), &'static str> {
    if !has_file {
        return Err(MISSING_FILE);
    }
    if job_description.trim().is_empty() {
        return Err(MISSING_DESCRIPTION);
    }
    Ok(())
}

#[component]
pub fn JobMatcherPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let file: ResumeSignal = RwSignal::new_local(None);
    let job_description = RwSignal::new(String::new());
    let result = RwSignal::new(None::<JobMatch>);
    let tracker = RwSignal::new(RequestTracker::default());

    let on_match = move |_| {
        let selected = file.get_untracked();
        let description = job_description.get_untracked();
        if let Err(message) = validate_job_match(selected.is_some(), &description) {
            notify(notices, NoticeKind::Error, message);
            return;
        }
        let Some(selected) = selected else {
            return;
        };
        let Some((token, ticket)) = super::action::start_authenticated(session, notices, tracker) else {
            return;
        };
        result.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let response = crate::net::api::match_jobs(&token, &selected, &description).await;
            if !super::action::finish(tracker, ticket) {
                return;
            }
            match response {
                Ok(resp) => {
                    result.set(Some(resp.analysis.unwrap_or_default()));
                    notify(notices, NoticeKind::Success, "Job Matched successfully!");
                }
                Err(e) => super::action::report_failure(notices, "Failed to match jobs.", &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (selected, token, ticket);
    };

    view! {
        <div class="page job-matcher-page">
            <h1>"AI-Powered Job Matcher"</h1>
            <p class="page__lead">"Upload your resume and let AI give you some jobs related to your profile."</p>

            <ResumeDrop file=file/>

            <textarea
                class="page__textarea"
                placeholder="Paste the job description here"
                prop:value=move || job_description.get()
                on:input=move |ev| job_description.set(event_target_value(&ev))
            ></textarea>

            <Show when=move || file.with(Option::is_some)>
                <button class="btn page__action" on:click=on_match disabled=move || tracker.get().is_pending()>
                    {move || if tracker.get().is_pending() { "Analyzing..." } else { "Match Jobs" }}
                </button>
            </Show>

            {move || result.get().map(|m| view! { <JobMatchResult result=m/> })}
        </div>
    }
}

#[component]
fn JobMatchResult(result: JobMatch) -> impl IntoView {
    let missing = result.missing_skills;
    let suggested = result.suggested_jobs;
    let description = result.detailed_description.unwrap_or_default();

    view! {
        <section class="card job-match">
            <div class="job-match__section">
                <h3>"Missing Skills For The Given Job Role"</h3>
                <div class="job-match__chips">
                    {if missing.is_empty() {
                        view! { <span class="muted">"No missing keywords found."</span> }.into_any()
                    } else {
                        missing.into_iter().map(|k| view! { <span class="chip chip--warn">{k}</span> }).collect_view().into_any()
                    }}
                </div>
            </div>
            <div class="job-match__section">
                <h3>"Suggested Jobs For The Resume"</h3>
                <ul>
                    {if suggested.is_empty() {
                        view! { <li class="muted">"No suggested jobs available."</li> }.into_any()
                    } else {
                        suggested.into_iter().map(|job| view! { <li>{job}</li> }).collect_view().into_any()
                    }}
                </ul>
            </div>
            <div class="job-match__section">
                <h3>"Detailed Description of Matching"</h3>
                <p class="job-match__description">{description}</p>
            </div>
        </section>
    }
}
