//! Short-lived notices shown over the current view.

use dioxus::prelude::*;

/// Matches the platform's short toast length.
pub const SHORT_TOAST_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq)]
pub struct ToastController {
    current: Signal<Option<Toast>>,
    next_id: Signal<u64>,
}

impl ToastController {
    pub fn new(current: Signal<Option<Toast>>, next_id: Signal<u64>) -> Self {
        Self { current, next_id }
    }

    pub fn current(&self) -> Option<Toast> {
        (self.current)()
    }

    /// Replaces any visible notice. The previous notice's timer leaves the
    /// new one alone.
    pub fn show_short(&self, message: impl Into<String>) {
        let mut next_id = self.next_id;
        let id = next_id() + 1;
        next_id.set(id);

        let mut current = self.current;
        current.set(Some(Toast {
            id,
            message: message.into(),
        }));

        spawn(async move {
            sleep_ms(SHORT_TOAST_MS).await;
            if current().is_some_and(|toast| toast.id == id) {
                current.set(None);
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[component]
pub fn ToastOverlay() -> Element {
    let toasts = use_context::<ToastController>();

    rsx! {
        if let Some(toast) = toasts.current() {
            div { class: "toast", role: "status", "{toast.message}" }
        }
    }
}
