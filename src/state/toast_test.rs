use super::*;

#[test]
fn push_appends_in_order() {
    let mut state = ToastState::default();
    state.push(Toast::new(ToastKind::Success, "first", "a"));
    state.push(Toast::new(ToastKind::Error, "second", "b"));
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].title, "first");
    assert_eq!(state.toasts[1].title, "second");
}

#[test]
fn dismiss_removes_exactly_the_matching_toast() {
    let mut state = ToastState::default();
    let keep = Toast::new(ToastKind::Info, "keep", "");
    let drop = Toast::new(ToastKind::Info, "drop", "");
    let drop_id = drop.id.clone();
    state.push(keep);
    state.push(drop);

    assert!(state.dismiss(&drop_id));
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].title, "keep");
    assert!(!state.dismiss(&drop_id), "second dismissal finds nothing");
}

#[test]
fn toast_ids_are_unique() {
    let a = Toast::new(ToastKind::Success, "t", "");
    let b = Toast::new(ToastKind::Success, "t", "");
    assert_ne!(a.id, b.id);
}

#[test]
fn kind_maps_to_class_fragment() {
    assert_eq!(ToastKind::Success.as_str(), "success");
    assert_eq!(ToastKind::Error.as_str(), "error");
    assert_eq!(ToastKind::Info.as_str(), "info");
}
