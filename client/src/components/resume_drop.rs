//! Drag & drop / click-to-pick resume upload box.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the analysis, job matcher and quiz pages. Validation happens on
//! selection so an unsupported file never reaches a request.

#[cfg(test)]
#[path = "resume_drop_test.rs"]
mod resume_drop_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::util::upload::{ACCEPT_ATTR, ResumeFile, format_size, validate_resume_name};

/// Signal holding the selected resume. Local storage because the browser file
/// handle is not `Send`.
pub type ResumeSignal = RwSignal<Option<ResumeFile>, LocalStorage>;

#[component]
pub fn ResumeDrop(file: ResumeSignal) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let drag_active = RwSignal::new(false);
    #[cfg(not(feature = "hydrate"))]
    let _ = notices;

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        accept_file(file, notices, crate::util::upload::file_from_input_event(&ev));
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(true);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "hydrate")]
        accept_file(file, notices, crate::util::upload::file_from_drop_event(&ev));
    };

    view! {
        <label
            for="resume-upload"
            class="resume-drop"
            class:resume-drop--active=move || drag_active.get()
            on:dragover=on_drag_over
            on:dragenter=on_drag_over
            on:dragleave=move |_| drag_active.set(false)
            on:drop=on_drop
        >
            {move || match file.get() {
                Some(selected) => {
                    view! {
                        <span class="resume-drop__file">
                            {selected.name.clone()}
                            " ("
                            {format_size(selected.size)}
                            ")"
                        </span>
                    }
                        .into_any()
                }
                None => view! { <span class="resume-drop__prompt">{drop_prompt(drag_active.get())}</span> }.into_any(),
            }}
        </label>
        <input id="resume-upload" class="resume-drop__input" type="file" accept=ACCEPT_ATTR on:change=on_change/>
    }
}

/// Prompt text inside the empty drop box.
pub(crate) fn drop_prompt(drag_active: bool) -> &'static str {
    if drag_active { "Drop the file here" } else { "Drag & drop or click to upload your resume (PDF, DOCX)" }
}

/// Store `picked` when its type is accepted; otherwise show why not.
pub(crate) fn accept_file(file: ResumeSignal, notices: RwSignal<NoticeState>, picked: Option<ResumeFile>) {
    let Some(picked) = picked else {
        return;
    };
    match validate_resume_name(&picked.name) {
        Ok(()) => file.set(Some(picked)),
        Err(message) => notify(notices, NoticeKind::Error, message),
    }
}
