//! Sign in / sign up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place a session token is created. On success the token goes
//! through `SessionContext::sign_in`, which every gate and the navbar observe,
//! then the user is sent to the `next` location the gate recorded.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::net::types::{LoginRequest, SignupRequest};
use crate::state::notice::NoticeState;
use crate::state::request::RequestTracker;
use crate::state::session::SessionContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::SignIn => "Login Successful!",
            Self::SignUp => "Sign Up Successful!",
        }
    }
}

/// Raw form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validated request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthPayload {
    Login(LoginRequest),
    Signup(SignupRequest),
}

/// Validate `form` for `mode`.
///
/// # Errors
///
/// Returns the inline message for the first failing field.
pub fn validate_auth_form(mode: AuthMode, form: &AuthForm) -> Result<AuthPayload, &'static str> {
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address");
    }
    if form.password.is_empty() {
        return Err("Enter your password");
    }
    match mode {
        AuthMode::SignIn => {
            Ok(AuthPayload::Login(LoginRequest { email_id: email.to_owned(), password: form.password.clone() }))
        }
        AuthMode::SignUp => {
            let full_name = form.full_name.trim();
            if full_name.is_empty() {
                return Err("Enter your full name");
            }
            if form.password != form.confirm_password {
                return Err("Passwords do not match");
            }
            Ok(AuthPayload::Signup(SignupRequest {
                full_name: full_name.to_owned(),
                email_id: email.to_owned(),
                password: form.password.clone(),
            }))
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthPage mode=AuthMode::SignIn/> }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <AuthPage mode=AuthMode::SignUp/> }
}

#[component]
fn AuthPage(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let query = use_query_map();
    let navigate = leptos_router::hooks::use_navigate();

    let mode = RwSignal::new(mode);
    let form = RwSignal::new(AuthForm::default());
    let error = RwSignal::new(String::new());
    let tracker = RwSignal::new(RequestTracker::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        let current_mode = mode.get_untracked();
        let payload = match validate_auth_form(current_mode, &form.get_untracked()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let Some(ticket) = super::action::start(tracker) else {
            return;
        };
        let next = query.with_untracked(|q| q.get("next"));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match &payload {
                    AuthPayload::Login(req) => crate::net::api::login(req).await,
                    AuthPayload::Signup(req) => crate::net::api::signup(req).await,
                };
                if !super::action::finish(tracker, ticket) {
                    return;
                }
                match result {
                    Ok(resp) if !resp.token.trim().is_empty() => {
                        session.sign_in(&resp.token);
                        crate::state::notice::notify(
                            notices,
                            crate::state::notice::NoticeKind::Success,
                            current_mode.success_message(),
                        );
                        form.set(AuthForm::default());
                        let target = crate::state::session::post_login_target(next.as_deref());
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Ok(_) => error.set(crate::net::error::GENERIC_FAILURE.to_owned()),
                    Err(e) => {
                        log::warn!("{} failed: {e}", current_mode.submit_label());
                        error.set(e.user_message());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, ticket, next, session, notices, &navigate);
    };

    let field = move |update: fn(&mut AuthForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| update(f, value));
        }
    };

    let is_signup = move || mode.get() == AuthMode::SignUp;

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="auth-card__tabs">
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || !is_signup()
                        on:click=move |_| mode.set(AuthMode::SignIn)
                    >
                        "Sign In"
                    </button>
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=is_signup
                        on:click=move |_| mode.set(AuthMode::SignUp)
                    >
                        "Sign Up"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=is_signup>
                        <input
                            class="auth-input"
                            type="text"
                            name="fullName"
                            placeholder="Full Name"
                            prop:value=move || form.with(|f| f.full_name.clone())
                            on:input=field(|f, v| f.full_name = v)
                        />
                    </Show>
                    <input
                        class="auth-input"
                        type="email"
                        name="emailId"
                        placeholder="Email Address"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=field(|f, v| f.email = v)
                    />
                    <input
                        class="auth-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=field(|f, v| f.password = v)
                    />
                    <Show when=is_signup>
                        <input
                            class="auth-input"
                            type="password"
                            name="confirmPassword"
                            placeholder="Confirm Password"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=field(|f, v| f.confirm_password = v)
                        />
                    </Show>

                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>

                    <button class="btn auth-form__submit" type="submit" disabled=move || tracker.get().is_pending()>
                        {move || if tracker.get().is_pending() { "Processing..." } else { mode.get().submit_label() }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    {move || if is_signup() { "Already have an account? " } else { "Don't have an account? " }}
                    <span class="auth-card__switch-link" on:click=move |_| mode.update(|m| *m = m.toggled())>
                        {move || mode.get().toggled().submit_label()}
                    </span>
                </p>
                <p class="auth-card__home">
                    <A href="/">"Back to home"</A>
                </p>
            </div>
        </div>
    }
}
