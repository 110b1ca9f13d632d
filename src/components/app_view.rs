//! Defines the shared application view state.

#[derive(Clone, Debug, PartialEq)]
pub enum AppView {
    Settings,
    OtherSettings,
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Settings => "Settings",
        AppView::OtherSettings => "Other",
    }
}
