//! Toast notifications shown in the corner of every page.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a toast stays visible.
pub const NOTICE_TTL_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Visible toast stack, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Push a toast into the shared stack and schedule its removal.
pub fn notify(notices: leptos::prelude::RwSignal<NoticeState>, kind: NoticeKind, message: impl Into<String>) {
    use leptos::prelude::*;

    let message = message.into();
    let mut id = 0;
    notices.update(|n| id = n.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
