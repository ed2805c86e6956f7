//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::require_session::RequireSession;
use crate::components::toast_stack::ToastStack;
use crate::pages::{
    analyse::AnalysePage, job_matcher::JobMatcherPage, landing::LandingPage, login::LoginPage, login::SignupPage,
    profile::ProfilePage, quiz::QuizPage, stats::StatsPage,
};
use crate::state::notice::NoticeState;
use crate::state::session::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Seeds the session from the `token` cookie (request header on the server,
/// `document.cookie` in the browser) and provides it with the toast stack.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionContext::from_cookie());
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/resume-analyzer.css"/>
        <Title text="Resume Analyzer"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("stats") view=StatsPage/>
                    <Route
                        path=StaticSegment("analyse")
                        view=|| view! { <RequireSession><AnalysePage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("jobMatcher")
                        view=|| view! { <RequireSession><JobMatcherPage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("test")
                        view=|| view! { <RequireSession><QuizPage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireSession><ProfilePage/></RequireSession> }
                    />
                </Routes>
            </main>
            <Footer/>
            <ToastStack/>
        </Router>
    }
}
