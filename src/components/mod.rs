//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
mod navigation;
mod return_watch;
mod settings_entries;
mod toast;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use navigation::*;
pub use return_watch::*;
pub use settings_entries::*;
pub use toast::*;
