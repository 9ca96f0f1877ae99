use super::*;

fn build(kind: ToastKind, defaults: &ToastOptions, options: &ToastOptions) -> Toast {
    Toast::build("t1".to_owned(), kind, "hello".to_owned(), defaults, options)
}

// =============================================================
// Option merging
// =============================================================

#[test]
fn base_duration_is_four_seconds() {
    let toast = build(ToastKind::Success, &ToastOptions::default(), &ToastOptions::default());
    assert_eq!(toast.duration_ms, Some(DEFAULT_DURATION_MS));
    assert_eq!(toast.position, ToastPosition::TopCenter);
}

#[test]
fn handle_defaults_override_base() {
    let defaults = ToastOptions::default().duration(5000).position(ToastPosition::BottomRight);
    let toast = build(ToastKind::Info, &defaults, &ToastOptions::default());
    assert_eq!(toast.duration_ms, Some(5000));
    assert_eq!(toast.position, ToastPosition::BottomRight);
}

#[test]
fn call_options_override_handle_defaults() {
    let defaults = ToastOptions::default().duration(5000).position(ToastPosition::TopCenter);
    let options = ToastOptions::default().duration(1000);
    let toast = build(ToastKind::Success, &defaults, &options);
    assert_eq!(toast.duration_ms, Some(1000));
    assert_eq!(toast.position, ToastPosition::TopCenter);
}

#[test]
fn merge_keeps_lower_layer_for_unset_fields() {
    let lower = ToastOptions::default().duration(3000).position(ToastPosition::TopLeft);
    let merged = lower.merge(&ToastOptions::default());
    assert_eq!(merged, lower);
}

// =============================================================
// Kind rules
// =============================================================

#[test]
fn error_defaults_to_five_seconds_over_handle_defaults() {
    let defaults = ToastOptions::default().duration(2000);
    let toast = build(ToastKind::Error, &defaults, &ToastOptions::default());
    assert_eq!(toast.duration_ms, Some(ERROR_DURATION_MS));
}

#[test]
fn error_respects_explicit_call_duration() {
    let toast = build(ToastKind::Error, &ToastOptions::default(), &ToastOptions::default().duration(8000));
    assert_eq!(toast.duration_ms, Some(8000));
}

#[test]
fn loading_never_auto_dismisses() {
    let toast = build(ToastKind::Loading, &ToastOptions::default(), &ToastOptions::default().duration(1000));
    assert_eq!(toast.duration_ms, None);
}

#[test]
fn kind_icons() {
    assert_eq!(ToastKind::Info.icon(), Some("ℹ️"));
    assert_eq!(ToastKind::Warning.icon(), Some("⚠️"));
    assert_eq!(ToastKind::Loading.icon(), None);
    assert_eq!(ToastKind::Custom.icon(), None);
}

#[test]
fn kind_styles() {
    let warning = ToastKind::Warning.base_style();
    assert_eq!(warning.background.as_deref(), Some("#f59e0b"));
    assert_eq!(warning.color.as_deref(), Some("#000"));
    assert_eq!(ToastKind::Success.base_style().background.as_deref(), Some("#10b981"));
    assert_eq!(ToastKind::Error.base_style().background.as_deref(), Some("#ef4444"));
    assert_eq!(ToastKind::Info.base_style().background.as_deref(), Some("#3b82f6"));
    assert_eq!(ToastKind::Loading.base_style().background.as_deref(), Some("#6b7280"));
    assert_eq!(ToastKind::Custom.base_style(), ToastStyle::default());
}

#[test]
fn caller_style_wins_over_kind_style() {
    let options = ToastOptions::default().style(ToastStyle { background: Some("#000".to_owned()), ..ToastStyle::default() });
    let toast = build(ToastKind::Success, &ToastOptions::default(), &options);
    assert_eq!(toast.style.background.as_deref(), Some("#000"));
    assert_eq!(toast.style.color.as_deref(), Some("#fff"));
    assert_eq!(toast.style.border_radius.as_deref(), Some("8px"));
}

#[test]
fn style_to_css_skips_unset_fields() {
    let style = ToastStyle { background: Some("#fff".to_owned()), font_weight: Some("500".to_owned()), ..ToastStyle::default() };
    assert_eq!(style.to_css(), "background: #fff; font-weight: 500;");
    assert_eq!(ToastStyle::default().to_css(), "");
}

// =============================================================
// ToastState
// =============================================================

#[test]
fn push_returns_unique_ids_and_durations() {
    let mut state = ToastState::default();
    let (a, da) = state.push(ToastKind::Success, "a", &ToastOptions::default(), &ToastOptions::default());
    let (b, db) = state.push(ToastKind::Loading, "b", &ToastOptions::default(), &ToastOptions::default());
    assert_ne!(a, b);
    assert_eq!(da, Some(DEFAULT_DURATION_MS));
    assert_eq!(db, None);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = ToastState::default();
    let (a, _) = state.push(ToastKind::Info, "a", &ToastOptions::default(), &ToastOptions::default());
    let (b, _) = state.push(ToastKind::Info, "b", &ToastOptions::default(), &ToastOptions::default());
    state.dismiss(&a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn dismiss_all_clears() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a", &ToastOptions::default(), &ToastOptions::default());
    state.push(ToastKind::Error, "b", &ToastOptions::default(), &ToastOptions::default());
    state.dismiss_all();
    assert!(state.toasts.is_empty());
}

#[test]
fn resolve_replaces_loading_in_place() {
    let mut state = ToastState::default();
    let opts = ToastOptions::default().position(ToastPosition::BottomLeft);
    let (id, _) = state.push(ToastKind::Loading, "Saving...", &ToastOptions::default(), &opts);
    let duration = state.resolve(&id, ToastKind::Success, "Saved", &ToastOptions::default());
    assert_eq!(duration, Some(DEFAULT_DURATION_MS));
    let toast = &state.toasts[0];
    assert_eq!(toast.id, id);
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Saved");
    assert_eq!(toast.position, ToastPosition::BottomLeft);
}

#[test]
fn resolve_missing_toast_is_none() {
    let mut state = ToastState::default();
    assert_eq!(state.resolve("nope", ToastKind::Success, "x", &ToastOptions::default()), None);
}

#[test]
fn at_groups_by_position() {
    let mut state = ToastState::default();
    let top = ToastOptions::default().position(ToastPosition::TopRight);
    state.push(ToastKind::Info, "a", &ToastOptions::default(), &top);
    state.push(ToastKind::Info, "b", &ToastOptions::default(), &ToastOptions::default());
    assert_eq!(state.at(ToastPosition::TopRight).len(), 1);
    assert_eq!(state.at(ToastPosition::TopCenter).len(), 1);
    assert!(state.at(ToastPosition::BottomCenter).is_empty());
}

// =============================================================
// Toasts handle
// =============================================================

#[test]
fn handle_applies_its_defaults() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(ToastState::default());
        let toasts = Toasts::new(state, ToastOptions::default().position(ToastPosition::TopCenter).duration(5000));
        let id = toasts.success("Welcome", ToastOptions::default());
        let toast = state.get_untracked().toasts[0].clone();
        assert_eq!(toast.id, id);
        assert_eq!(toast.duration_ms, Some(5000));
        assert_eq!(toast.kind, ToastKind::Success);

        toasts.dismiss(&id);
        assert!(state.get_untracked().toasts.is_empty());
    });
}

#[test]
fn handle_dismiss_all() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(ToastState::default());
        let toasts = Toasts::new(state, ToastOptions::default());
        toasts.info("a", ToastOptions::default());
        toasts.warning("b", ToastOptions::default());
        toasts.custom("c", ToastOptions::default());
        assert_eq!(state.get_untracked().toasts.len(), 3);
        toasts.dismiss_all();
        assert!(state.get_untracked().toasts.is_empty());
    });
}

#[test]
fn promise_resolves_loading_into_outcome() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(ToastState::default());
        let toasts = Toasts::new(state, ToastOptions::default());

        let ok: Result<u32, String> = futures::executor::block_on(toasts.promise(
            async { Ok(3) },
            "Loading...",
            |n: &u32| format!("got {n}"),
            |e: &String| e.clone(),
        ));
        assert_eq!(ok, Ok(3));

        let err: Result<u32, String> = futures::executor::block_on(toasts.promise(
            async { Err("boom".to_owned()) },
            "Loading...",
            |n: &u32| format!("got {n}"),
            |e: &String| format!("failed: {e}"),
        ));
        assert_eq!(err, Err("boom".to_owned()));

        let list = state.get_untracked().toasts;
        assert_eq!(list.len(), 2);
        assert_eq!((list[0].kind, list[0].message.as_str()), (ToastKind::Success, "got 3"));
        assert_eq!((list[1].kind, list[1].message.as_str()), (ToastKind::Error, "failed: boom"));
        assert_eq!(list[1].duration_ms, Some(ERROR_DURATION_MS));
    });
}
