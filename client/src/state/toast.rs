//! Toast notifications: option merging, per-kind styling, and the live list.
//!
//! DESIGN
//! ======
//! `ToastState` is plain data held in an `RwSignal` context and rendered by
//! `components::toaster::Toaster`. Pages talk to it through the `Toasts`
//! handle returned by `use_toast`, which carries the page's default options.
//!
//! Options merge in three layers, later layers winning:
//! base (`4000 ms`) <- handle defaults <- per-call options.
//! Error toasts default to 5000 ms unless the call names a duration, and
//! loading toasts stay until dismissed or resolved.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::future::Future;

use leptos::prelude::*;

pub const DEFAULT_DURATION_MS: u32 = 4000;
pub const ERROR_DURATION_MS: u32 = 5000;

/// Screen anchor for a toast stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [Self; 6] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
    Loading,
    Custom,
}

impl ToastKind {
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("✓"),
            Self::Error => Some("✕"),
            Self::Info => Some("ℹ️"),
            Self::Warning => Some("⚠️"),
            Self::Loading | Self::Custom => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Loading => "loading",
            Self::Custom => "custom",
        }
    }

    /// Built-in look for this kind; `Custom` is unstyled.
    pub fn base_style(self) -> ToastStyle {
        let (background, color) = match self {
            Self::Success => ("#10b981", "#fff"),
            Self::Error => ("#ef4444", "#fff"),
            Self::Info => ("#3b82f6", "#fff"),
            Self::Warning => ("#f59e0b", "#000"),
            Self::Loading => ("#6b7280", "#fff"),
            Self::Custom => return ToastStyle::default(),
        };
        ToastStyle {
            background: Some(background.to_owned()),
            color: Some(color.to_owned()),
            font_weight: Some("500".to_owned()),
            border_radius: Some("8px".to_owned()),
        }
    }
}

/// Inline style overrides. `None` fields keep the underlying value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStyle {
    pub background: Option<String>,
    pub color: Option<String>,
    pub font_weight: Option<String>,
    pub border_radius: Option<String>,
}

impl ToastStyle {
    /// Layer `over` on top of `self`.
    #[must_use]
    pub fn overlay(&self, over: &ToastStyle) -> ToastStyle {
        ToastStyle {
            background: over.background.clone().or_else(|| self.background.clone()),
            color: over.color.clone().or_else(|| self.color.clone()),
            font_weight: over.font_weight.clone().or_else(|| self.font_weight.clone()),
            border_radius: over.border_radius.clone().or_else(|| self.border_radius.clone()),
        }
    }

    /// Render as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        [
            ("background", &self.background),
            ("color", &self.color),
            ("font-weight", &self.font_weight),
            ("border-radius", &self.border_radius),
        ]
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}: {v};")))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Caller-facing options. Unset fields defer to the next layer down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub duration_ms: Option<u32>,
    pub position: Option<ToastPosition>,
    pub style: ToastStyle,
}

impl ToastOptions {
    #[must_use]
    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn style(mut self, style: ToastStyle) -> Self {
        self.style = style;
        self
    }

    /// Layer `over` on top of `self`.
    #[must_use]
    pub fn merge(&self, over: &ToastOptions) -> ToastOptions {
        ToastOptions {
            duration_ms: over.duration_ms.or(self.duration_ms),
            position: over.position.or(self.position),
            style: self.style.overlay(&over.style),
        }
    }
}

/// A toast as rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
    pub position: ToastPosition,
    /// Auto-dismiss delay; `None` keeps the toast until dismissed.
    pub duration_ms: Option<u32>,
    pub style: ToastStyle,
}

impl Toast {
    /// Resolve a toast from the layered options.
    ///
    /// Error toasts ignore the base and handle defaults and last
    /// `ERROR_DURATION_MS`, but an explicit per-call duration still wins.
    /// This deliberately relaxes the always-5000 ms rule so a caller can keep
    /// an error on screen longer.
    pub fn build(id: String, kind: ToastKind, message: String, defaults: &ToastOptions, options: &ToastOptions) -> Self {
        let base = ToastOptions { duration_ms: Some(DEFAULT_DURATION_MS), ..ToastOptions::default() };
        let merged = base.merge(defaults).merge(options);
        let duration_ms = match kind {
            ToastKind::Loading => None,
            ToastKind::Error => Some(options.duration_ms.unwrap_or(ERROR_DURATION_MS)),
            _ => merged.duration_ms,
        };
        Self {
            id,
            kind,
            message,
            position: merged.position.unwrap_or_default(),
            duration_ms,
            style: kind.base_style().overlay(&merged.style),
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        self.kind.icon()
    }
}

/// Live toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Add a toast and return its id and auto-dismiss delay.
    pub fn push(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        defaults: &ToastOptions,
        options: &ToastOptions,
    ) -> (String, Option<u32>) {
        let id = uuid::Uuid::new_v4().to_string();
        let toast = Toast::build(id.clone(), kind, message.into(), defaults, options);
        let duration = toast.duration_ms;
        self.toasts.push(toast);
        (id, duration)
    }

    /// Turn an existing toast into another kind in place (used to resolve loading toasts).
    /// Returns the new auto-dismiss delay, or `None` if the toast is gone or sticky.
    pub fn resolve(&mut self, id: &str, kind: ToastKind, message: impl Into<String>, defaults: &ToastOptions) -> Option<u32> {
        let slot = self.toasts.iter_mut().find(|t| t.id == id)?;
        let keep_position = ToastOptions { position: Some(slot.position), ..ToastOptions::default() };
        *slot = Toast::build(id.to_owned(), kind, message.into(), defaults, &keep_position);
        slot.duration_ms
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    pub fn at(&self, position: ToastPosition) -> Vec<Toast> {
        self.toasts.iter().filter(|t| t.position == position).cloned().collect()
    }
}

/// Page-scoped handle over the shared toast list.
#[derive(Clone, Copy)]
pub struct Toasts {
    state: RwSignal<ToastState>,
    defaults: StoredValue<ToastOptions>,
}

/// Toast handle bound to the app-wide `ToastState` context.
pub fn use_toast(defaults: ToastOptions) -> Toasts {
    Toasts::new(expect_context::<RwSignal<ToastState>>(), defaults)
}

impl Toasts {
    pub fn new(state: RwSignal<ToastState>, defaults: ToastOptions) -> Self {
        Self { state, defaults: StoredValue::new(defaults) }
    }

    pub fn success(&self, message: impl Into<String>, options: ToastOptions) -> String {
        self.show(ToastKind::Success, message.into(), &options)
    }

    pub fn error(&self, message: impl Into<String>, options: ToastOptions) -> String {
        self.show(ToastKind::Error, message.into(), &options)
    }

    pub fn info(&self, message: impl Into<String>, options: ToastOptions) -> String {
        self.show(ToastKind::Info, message.into(), &options)
    }

    pub fn warning(&self, message: impl Into<String>, options: ToastOptions) -> String {
        self.show(ToastKind::Warning, message.into(), &options)
    }

    pub fn loading(&self, message: impl Into<String>, options: ToastOptions) -> String {
        self.show(ToastKind::Loading, message.into(), &options)
    }

    /// Unstyled toast; callers supply their own style through `options`.
    pub fn custom(&self, message: impl Into<String>, options: ToastOptions) -> String {
        self.show(ToastKind::Custom, message.into(), &options)
    }

    pub fn dismiss(&self, id: &str) {
        self.state.update(|s| s.dismiss(id));
    }

    pub fn dismiss_all(&self) {
        self.state.update(ToastState::dismiss_all);
    }

    /// Show a loading toast while `future` runs, then replace it with a
    /// success or error toast built from the outcome.
    ///
    /// # Errors
    ///
    /// Passes through the future's error unchanged.
    pub async fn promise<T, E, Fut, S, F>(&self, future: Fut, loading: &str, success: S, error: F) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
        S: FnOnce(&T) -> String,
        F: FnOnce(&E) -> String,
    {
        let id = self.loading(loading, ToastOptions::default());
        let result = future.await;
        let (kind, message) = match &result {
            Ok(value) => (ToastKind::Success, success(value)),
            Err(err) => (ToastKind::Error, error(err)),
        };
        let defaults = self.defaults.get_value();
        let duration = self.state.try_update(|s| s.resolve(&id, kind, message, &defaults)).flatten();
        schedule_dismiss(self.state, id, duration);
        result
    }

    fn show(&self, kind: ToastKind, message: String, options: &ToastOptions) -> String {
        let defaults = self.defaults.get_value();
        let pushed = self.state.try_update(|s| s.push(kind, message, &defaults, options));
        let Some((id, duration)) = pushed else {
            return String::new();
        };
        schedule_dismiss(self.state, id.clone(), duration);
        id
    }
}

fn schedule_dismiss(state: RwSignal<ToastState>, id: String, duration_ms: Option<u32>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(ms) = duration_ms {
            gloo_timers::callback::Timeout::new(ms, move || {
                let _ = state.try_update(|s| s.dismiss(&id));
            })
            .forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, id, duration_ms);
    }
}
