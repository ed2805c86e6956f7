//! Top navigation bar with session-aware login/logout control.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::state::session::SessionContext;

/// Primary navigation links, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/analyse", "Analyze"),
    ("/jobMatcher", "Job Matcher"),
    ("/test", "Take Test"),
    ("/stats", "Stats"),
    ("/profile", "Profile"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        session.sign_out();
        menu_open.set(false);
        notify(notices, NoticeKind::Success, "Logged out");
    };

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <A href=*href attr:class="navbar__link" on:click=move |_| menu_open.set(false)>
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                "Resume Analyzer"
            </A>
            <button class="navbar__menu-toggle" on:click=move |_| menu_open.update(|open| *open = !*open)>
                "☰"
            </button>
            <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {links}
            </div>
            <div class="navbar__session">
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="btn navbar__login">
                                "Sign In"
                            </A>
                        }
                    }
                >
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
