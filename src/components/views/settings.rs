use crate::components::{view_label, AppView, Icon, Navigation};
use dioxus::prelude::*;

#[component]
pub fn SettingsView() -> Element {
    let navigation = use_context::<Navigation>();

    rsx! {
        div { class: "settings-page",
            header { class: "page-header",
                h1 { class: "page-title", {view_label(&AppView::Settings)} }
                p { class: "page-subtitle", "Manage how playback behaves on this device" }
            }

            button {
                class: "settings-section-link",
                onclick: move |_| navigation.navigate_to(AppView::OtherSettings),
                Icon { name: "battery".to_string(), class: "w-5 h-5".to_string() }
                div { class: "settings-entry-body",
                    p { class: "settings-entry-title", {view_label(&AppView::OtherSettings)} }
                    p { class: "settings-entry-text", "Service lifetime and battery optimizations" }
                }
                Icon { name: "chevron-right".to_string(), class: "w-5 h-5".to_string() }
            }
        }
    }
}
