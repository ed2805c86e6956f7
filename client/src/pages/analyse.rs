//! Resume analysis page: upload a resume, show its score card.

use leptos::prelude::*;

use crate::components::report_card::ReportCard;
use crate::components::resume_drop::{ResumeDrop, ResumeSignal};
use crate::net::types::ResumeReport;
use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::state::request::RequestTracker;
use crate::state::session::SessionContext;
use crate::util::upload::MISSING_FILE;

#[component]
pub fn AnalysePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let file: ResumeSignal = RwSignal::new_local(None);
    let job_description = RwSignal::new(String::new());
    let report = RwSignal::new(None::<ResumeReport>);
    let tracker = RwSignal::new(RequestTracker::default());

    let on_analyze = move |_| {
        let Some(selected) = file.get_untracked() else {
            notify(notices, NoticeKind::Error, MISSING_FILE);
            return;
        };
        let Some((token, ticket)) = super::action::start_authenticated(session, notices, tracker) else {
            return;
        };
        report.set(None);
        let description = job_description.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::analyze_resume(&token, &selected, Some(description.as_str())).await;
            if !super::action::finish(tracker, ticket) {
                return;
            }
            match result {
                Ok(resp) => {
                    report.set(Some(resp.analysis.unwrap_or_default()));
                    notify(notices, NoticeKind::Success, "Resume analyzed successfully!");
                }
                Err(e) => super::action::report_failure(notices, "Failed to analyze resume.", &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (selected, token, ticket, description);
    };

    view! {
        <div class="page analyse-page">
            <h1>"AI-Powered Resume Analyzer"</h1>
            <p class="page__lead">
                "Upload your resume and let AI analyze its strengths and weaknesses, providing insights to enhance your career growth."
            </p>

            <ResumeDrop file=file/>

            <textarea
                class="page__textarea"
                placeholder="Optional: paste a job description to score against"
                prop:value=move || job_description.get()
                on:input=move |ev| job_description.set(event_target_value(&ev))
            ></textarea>

            <Show when=move || file.with(Option::is_some)>
                <button class="btn page__action" on:click=on_analyze disabled=move || tracker.get().is_pending()>
                    {move || if tracker.get().is_pending() { "Analyzing..." } else { "Analyze Resume" }}
                </button>
            </Show>

            {move || report.get().map(|r| view! { <ReportCard title="Analysis Result" report=r/> })}
        </div>
    }
}
