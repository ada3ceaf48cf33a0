//! The light/dark theme preference.

mod domain;
mod store;
mod toggle_endpoint;

pub use domain::Theme;
pub use store::ThemeStore;
pub use toggle_endpoint::{ThemeState, theme_toggle_view, toggle_theme_endpoint};
