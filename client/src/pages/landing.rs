//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str, &str); 3] = [
    ("/analyse", "Resume Analysis", "Score your resume, check ATS friendliness and find missing keywords."),
    ("/jobMatcher", "Job Matcher", "Compare your resume with a job description and discover matching roles."),
    ("/test", "Skill Test", "Take a quiz generated from your resume and get mentor feedback."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page landing-page">
            <section class="landing-hero">
                <h1>"Level up your resume with AI"</h1>
                <p class="page__lead">
                    "Upload your resume, see how it reads to recruiters and applicant tracking systems, and practice for the interview."
                </p>
                <A href="/analyse" attr:class="btn landing-hero__cta">"Get Started"</A>
            </section>
            <section class="landing-features">
                {FEATURES
                    .iter()
                    .map(|&(href, title, blurb)| {
                        view! {
                            <A href=href attr:class="card landing-feature">
                                <h3>{title}</h3>
                                <p>{blurb}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
