//! Transient notification stack.
//!
//! [`ToastProvider`] owns the queue and renders the stacked toasts above the
//! page. Components push entries through the api returned by [`use_toast`];
//! entries dismiss themselves after a few seconds or on the close button.

use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

#[cfg(target_arch = "wasm32")]
const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(5);

/// Visual flavor of a toast entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A single queued notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub description: Option<String>,
}

/// Extra presentation options for a pushed toast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastOptions {
    description: Option<String>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Secondary line shown under the toast message.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }
}

/// Ordered queue of visible toasts. Ids are handed out once and never
/// reused, so a late auto-dismiss can only remove the entry it was
/// scheduled for.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toasts {
    next_id: u64,
    pub entries: Vec<Toast>,
}

impl Toasts {
    /// Appends an entry and returns its id.
    pub fn push(&mut self, level: ToastLevel, message: String, description: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message,
            description,
        });
        id
    }

    /// Removes the entry with `id`, if still visible.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

/// Handle for pushing notifications, obtained from [`use_toast`].
#[derive(Clone, Copy)]
pub struct ToastApi {
    toasts: Signal<Toasts>,
}

impl ToastApi {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.show(ToastLevel::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.show(ToastLevel::Error, message, options);
    }

    fn show(&self, level: ToastLevel, message: String, options: ToastOptions) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(level, message, options.description);
        schedule_dismiss(toasts, id);
    }
}

/// Get the toast api for the nearest [`ToastProvider`].
pub fn use_toast() -> ToastApi {
    ToastApi {
        toasts: use_context::<Signal<Toasts>>(),
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(mut toasts: Signal<Toasts>, id: u64) {
    spawn(async move {
        gloo_timers::future::sleep(TOAST_DURATION).await;
        toasts.write().dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_toasts: Signal<Toasts>, _id: u64) {}

/// Provider component that owns the toast queue.
/// Wrap the app with this component to enable notifications.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let toasts = use_context::<Signal<Toasts>>();
    let entries = toasts().entries;

    rsx! {
        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    div {
                        class: "toast-copy",
                        span { class: "toast-title", "{toast.message}" }
                        if let Some(ref description) = toast.description {
                            span { class: "toast-description", "{description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        onclick: {
                            let mut toasts = toasts;
                            move |_| toasts.write().dismiss(toast.id)
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastLevel::Success, "Saved".to_string(), None);
        let second = toasts.push(ToastLevel::Error, "Failed".to_string(), None);
        assert!(second > first);
        assert_eq!(toasts.entries.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastLevel::Success, "One".to_string(), None);
        let second = toasts.push(ToastLevel::Success, "Two".to_string(), None);

        toasts.dismiss(first);

        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].id, second);
    }

    #[test]
    fn test_dismiss_of_unknown_id_is_a_noop() {
        let mut toasts = Toasts::default();
        toasts.push(ToastLevel::Success, "One".to_string(), None);
        toasts.dismiss(99);
        assert_eq!(toasts.entries.len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastLevel::Success, "One".to_string(), None);
        toasts.dismiss(first);
        let second = toasts.push(ToastLevel::Success, "Two".to_string(), None);
        assert_ne!(first, second);
    }

    #[test]
    fn test_options_carry_description() {
        let options = ToastOptions::new().description("Details");
        assert_eq!(options.description.as_deref(), Some("Details"));
    }
}
