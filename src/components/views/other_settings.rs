use dioxus::prelude::*;

use crate::components::{
    view_label, AppView, ReturnWatch, SettingsEntry, SettingsEntryGroupText, SwitchSettingEntry,
    TextCard, TextCardText, TextCardTitle, ToastController, TopAppBar,
};
use crate::config::AppConfig;
use crate::db::Preferences;
use crate::platform::SystemSettingsHandle;
use crate::service_lifetime::{ActivationStep, ServiceLifetimeSettings};

const SERVICE_LIFETIME_INFO: &str = "Some device manufacturers may have an aggressive policy against stopped foreground services - the media notification can disappear suddenly when paused.\nThe gentle approach consists in disabling battery optimizations - this is enough for some devices and ROMs.\nHowever, if it's not, you can make the service \"invincible\" - which should keep the service alive.";

const INVINCIBLE_SERVICE_INFO: &str = "Since Android 12, this option works ONLY if battery optimizations are disabled for this application.";

#[component]
pub fn OtherSettingsView() -> Element {
    let config = use_context::<AppConfig>();
    let preferences = use_context::<Preferences>();
    let platform = use_context::<SystemSettingsHandle>();
    let toasts = use_context::<ToastController>();

    let mut model = use_signal({
        let package = config.package_name.clone();
        let platform = platform.clone();
        let preferences = preferences.clone();
        move || ServiceLifetimeSettings::load(&package, &*platform, &preferences)
    });

    let on_battery_click = {
        let platform = platform.clone();
        let app_name = config.app_name.clone();
        move |_: MouseEvent| {
            let watch = ReturnWatch::install();
            match model.with_mut(|m| m.activate(&*platform, &app_name)) {
                ActivationStep::AwaitReturn => {
                    let platform = platform.clone();
                    spawn(async move {
                        watch.wait().await;
                        model.with_mut(|m| m.complete_external_result(&*platform));
                    });
                }
                ActivationStep::Notice(notice) => {
                    watch.cancel();
                    toasts.show_short(notice);
                }
                ActivationStep::Nothing => watch.cancel(),
            }
        }
    };

    let on_invincibility_change = move |enabled: bool| {
        model.with_mut(|m| m.set_invincibility_enabled(&preferences, enabled));
    };

    let state = model();
    let battery_row = state.battery_row();
    let show_android_12_note = state.capabilities().invincibility_requires_exemption;

    rsx! {
        div { class: "settings-page",
            TopAppBar { title: view_label(&AppView::OtherSettings).to_string() }

            SettingsEntryGroupText { title: "SERVICE LIFETIME".to_string() }

            SettingsEntry {
                title: "Ignore battery optimizations".to_string(),
                text: battery_row.text.to_string(),
                is_enabled: battery_row.enabled,
                onclick: on_battery_click,
            }

            SwitchSettingEntry {
                title: "Invincible service".to_string(),
                text: "When turning off battery optimizations is not enough".to_string(),
                is_checked: state.is_invincibility_enabled(),
                on_checked_change: on_invincibility_change,
            }

            TextCard { icon: "alert-circle".to_string(),
                TextCardTitle { text: "Service lifetime".to_string() }
                TextCardText { text: SERVICE_LIFETIME_INFO.to_string() }

                if show_android_12_note {
                    div { class: "text-card-spacer" }
                    TextCardTitle { text: "Invincible service".to_string() }
                    TextCardText { text: INVINCIBLE_SERVICE_INFO.to_string() }
                }
            }
        }
    }
}
