use super::*;

#[test]
fn notice_state_default_is_empty() {
    assert!(NoticeState::default().items.is_empty());
}

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "saved");
    let b = state.push(NoticeKind::Error, "failed");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "saved");
    assert_eq!(state.items[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one");
    let _b = state.push(NoticeKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "two");
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NoticeState::default();
    state.push(NoticeKind::Error, "x");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn notify_pushes_into_signal() {
    use leptos::prelude::*;

    let owner = Owner::new();
    owner.set();
    let notices = RwSignal::new(NoticeState::default());
    notify(notices, NoticeKind::Success, "Job Matched successfully!");
    let items = notices.get_untracked().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].message, "Job Matched successfully!");
}
