//! Detects the user coming back to the app after a system settings screen
//! was opened on top of it.

use dioxus::document::Eval;
use dioxus::prelude::*;

const WINDOW_ACTIVITY_JS: &str = r#"
    const report = (event) => dioxus.send(event);
    const onVisibility = () => report(document.hidden ? "hidden" : "visible");
    const onBlur = () => report("blur");
    const onFocus = () => report("focus");

    document.addEventListener("visibilitychange", onVisibility);
    window.addEventListener("blur", onBlur);
    window.addEventListener("focus", onFocus);

    if (document.hidden) {
        report("hidden");
    } else if (!document.hasFocus()) {
        report("blur");
    }

    await dioxus.recv();
    document.removeEventListener("visibilitychange", onVisibility);
    window.removeEventListener("blur", onBlur);
    window.removeEventListener("focus", onFocus);
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowActivity {
    Hidden,
    Visible,
    Blur,
    Focus,
}

impl WindowActivity {
    fn parse(event: &str) -> Option<Self> {
        match event {
            "hidden" => Some(Self::Hidden),
            "visible" => Some(Self::Visible),
            "blur" => Some(Self::Blur),
            "focus" => Some(Self::Focus),
            _ => None,
        }
    }
}

/// Completes once the window came back after having left.
#[derive(Debug, Default)]
pub struct ReturnTracker {
    left: bool,
}

impl ReturnTracker {
    /// Returns true when `activity` is the return.
    pub fn observe(&mut self, activity: WindowActivity) -> bool {
        match activity {
            WindowActivity::Hidden | WindowActivity::Blur => {
                self.left = true;
                false
            }
            WindowActivity::Visible | WindowActivity::Focus => self.left,
        }
    }
}

/// Window listeners installed before a settings screen is launched, so the
/// departure is not missed.
pub struct ReturnWatch {
    eval: Eval,
}

impl ReturnWatch {
    pub fn install() -> Self {
        Self {
            eval: document::eval(WINDOW_ACTIVITY_JS),
        }
    }

    /// Resolves when the user is back. Resolves right away if the window
    /// events cannot be read.
    pub async fn wait(mut self) {
        let mut tracker = ReturnTracker::default();
        loop {
            match self.eval.recv::<String>().await {
                Ok(event) => {
                    let Some(activity) = WindowActivity::parse(&event) else {
                        tracing::debug!("Unknown window event {event}");
                        continue;
                    };
                    if tracker.observe(activity) {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!("Lost window events, refreshing now: {err}");
                    break;
                }
            }
        }
        self.cancel();
    }

    /// Removes the listeners.
    pub fn cancel(self) {
        let _ = self.eval.send("done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_before_leaving_is_not_a_return() {
        let mut tracker = ReturnTracker::default();
        assert!(!tracker.observe(WindowActivity::Focus));
        assert!(!tracker.observe(WindowActivity::Visible));
    }

    #[test]
    fn blur_then_focus_is_a_return() {
        let mut tracker = ReturnTracker::default();
        assert!(!tracker.observe(WindowActivity::Blur));
        assert!(tracker.observe(WindowActivity::Focus));
    }

    #[test]
    fn hidden_then_visible_is_a_return() {
        let mut tracker = ReturnTracker::default();
        assert!(!tracker.observe(WindowActivity::Hidden));
        assert!(!tracker.observe(WindowActivity::Blur));
        assert!(tracker.observe(WindowActivity::Visible));
    }

    #[test]
    fn unknown_events_are_skipped() {
        assert_eq!(WindowActivity::parse("visible"), Some(WindowActivity::Visible));
        assert_eq!(WindowActivity::parse("pagehide"), None);
    }
}
