//! Bottom-corner toast stack rendering the shared `NoticeState`.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

#[component]
pub fn ToastStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=move || notices.get().items key=|notice| notice.id let:notice>
                <div class=toast_class(notice.kind) on:click=move |_| notices.update(|n| n.dismiss(notice.id))>
                    {notice.message.clone()}
                </div>
            </For>
        </div>
    }
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Error => "toast toast--error",
    }
}
