//! Profile page: account details and the last analyzed resume.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::report_card::ReportCard;
use crate::net::types::{ProfileResponse, ProfileUser};
use crate::state::request::Fetch;
use crate::state::session::SessionContext;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let profile = RwSignal::new(Fetch::<ProfileResponse>::Loading);

    #[cfg(feature = "hydrate")]
    {
        let token = crate::net::api::require_token(session.token());
        leptos::task::spawn_local(async move {
            let result = match token {
                Ok(token) => crate::net::api::fetch_profile(&token).await,
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                log::warn!("profile fetch failed: {e}");
            }
            profile.set(Fetch::from_result(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <div class="page profile-page">
            <h1>"Your Profile"</h1>
            {move || match profile.get() {
                Fetch::Loading => view! { <p class="muted">"Loading profile..."</p> }.into_any(),
                Fetch::Failed(_) => view! { <p class="page__error">"Profile unavailable."</p> }.into_any(),
                Fetch::Loaded(resp) => {
                    let user = resp.user.unwrap_or_default();
                    view! {
                        <UserDetails user=user/>
                        {match resp.last_resume {
                            Some(report) => view! { <ReportCard title="Last Resume Stats" report=report/> }.into_any(),
                            None => view! { <p class="muted">"No resume uploaded yet"</p> }.into_any(),
                        }}
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn UserDetails(user: ProfileUser) -> impl IntoView {
    let field = |value: Option<String>| value.unwrap_or_else(|| "—".to_owned());
    view! {
        <section class="card profile-card">
            <p><strong>"First Name: "</strong>{field(user.first_name)}</p>
            <p><strong>"Last Name: "</strong>{field(user.last_name)}</p>
            <p><strong>"Email: "</strong>{field(user.email_id)}</p>
        </section>
    }
}
