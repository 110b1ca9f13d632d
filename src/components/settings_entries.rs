//! Building blocks shared by the settings pages.

use dioxus::prelude::*;

use crate::components::{Icon, Navigation};

#[component]
pub fn TopAppBar(title: String) -> Element {
    let navigation = use_context::<Navigation>();
    let can_go_back = navigation.can_go_back();

    rsx! {
        header { class: "top-app-bar",
            button {
                class: "top-app-bar-action",
                disabled: !can_go_back,
                aria_label: "Back",
                onclick: move |_| {
                    navigation.go_back();
                },
                Icon { name: "chevron-back".to_string(), class: "w-6 h-6".to_string() }
            }
            h1 { class: "top-app-bar-title", "{title}" }
            // Keeps the title centred against the back button.
            div { class: "top-app-bar-action" }
        }
    }
}

#[component]
pub fn SettingsEntryGroupText(title: String) -> Element {
    rsx! {
        p { class: "settings-group-title", "{title}" }
    }
}

#[component]
pub fn SettingsEntry(
    title: String,
    text: String,
    #[props(default = true)] is_enabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: if is_enabled { "settings-entry" } else { "settings-entry settings-entry-disabled" },
            disabled: !is_enabled,
            onclick: move |evt| {
                if is_enabled {
                    onclick.call(evt);
                }
            },
            div { class: "settings-entry-body",
                p { class: "settings-entry-title", "{title}" }
                p { class: "settings-entry-text", "{text}" }
            }
        }
    }
}

#[component]
pub fn SwitchSettingEntry(
    title: String,
    text: String,
    is_checked: bool,
    on_checked_change: EventHandler<bool>,
) -> Element {
    rsx! {
        button {
            class: "settings-entry",
            r#type: "button",
            role: "switch",
            aria_checked: if is_checked { "true" } else { "false" },
            onclick: move |_| on_checked_change.call(!is_checked),
            div { class: "settings-entry-body",
                p { class: "settings-entry-title", "{title}" }
                p { class: "settings-entry-text", "{text}" }
            }
            div { class: if is_checked { "switch switch-on" } else { "switch" },
                div { class: "switch-thumb" }
            }
        }
    }
}

#[component]
pub fn TextCard(icon: String, children: Element) -> Element {
    rsx! {
        section { class: "text-card",
            Icon { name: icon, class: "text-card-icon".to_string() }
            div { class: "text-card-body", {children} }
        }
    }
}

#[component]
pub fn TextCardTitle(text: String) -> Element {
    rsx! {
        h2 { class: "text-card-title", "{text}" }
    }
}

#[component]
pub fn TextCardText(text: String) -> Element {
    rsx! {
        for line in text.lines().map(str::to_string) {
            p { class: "text-card-text", "{line}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn switch_entry_is_a_focusable_switch() {
        fn app() -> Element {
            rsx! {
                SwitchSettingEntry {
                    title: "Invincible service".to_string(),
                    text: "Keeps the service alive".to_string(),
                    is_checked: true,
                    on_checked_change: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.starts_with("<button"), "{html}");
        assert!(html.contains(r#"role="switch""#), "{html}");
        assert!(html.contains(r#"aria-checked="true""#), "{html}");
        assert!(html.contains("switch switch-on"), "{html}");
    }

    #[test]
    fn unchecked_switch_reports_false() {
        fn app() -> Element {
            rsx! {
                SwitchSettingEntry {
                    title: "Invincible service".to_string(),
                    text: "Keeps the service alive".to_string(),
                    is_checked: false,
                    on_checked_change: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains(r#"aria-checked="false""#), "{html}");
    }
}
