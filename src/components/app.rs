use crate::components::views::{OtherSettingsView, SettingsView};
use crate::components::{AppView, Navigation, Toast, ToastController, ToastOverlay};
use crate::config::AppConfig;
use crate::db::Preferences;
use crate::platform::{self, SystemSettingsHandle};
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let config = use_hook(AppConfig::from_env);
    let preferences = use_hook({
        let config = config.clone();
        move || Preferences::open(&config)
    });
    let system_settings: SystemSettingsHandle = use_hook({
        let config = config.clone();
        move || platform::detect(&config)
    });

    let current_view = use_signal(|| AppView::Settings);
    let navigation_stack = use_signal(Vec::<AppView>::new);
    let navigation = Navigation::new(current_view, navigation_stack);
    let toast = use_signal(|| None::<Toast>);
    let toast_ids = use_signal(|| 0u64);
    let toasts = ToastController::new(toast, toast_ids);

    // Provide state via context
    use_context_provider(|| config);
    use_context_provider(|| preferences);
    use_context_provider(|| system_settings);
    use_context_provider(|| navigation);
    use_context_provider(|| toasts);

    rsx! {
        main { class: "app-shell",
            match navigation.current() {
                AppView::Settings => rsx! {
                    SettingsView {}
                },
                AppView::OtherSettings => rsx! {
                    OtherSettingsView {}
                },
            }
            ToastOverlay {}
        }
    }
}
