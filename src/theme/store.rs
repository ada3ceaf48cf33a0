//! The store that owns the active theme.

use crate::{
    storage::{KeyValueStorage, THEME_KEY},
    theme::{Theme, domain::UnknownTheme},
};

/// Owns the active theme and mirrors it to storage.
#[derive(Debug)]
pub struct ThemeStore {
    theme: Theme,
    storage: Box<dyn KeyValueStorage>,
}

impl ThemeStore {
    /// Load the persisted theme, falling back to [Theme::Dark] when nothing
    /// usable has been stored.
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let theme = match storage.get_item(THEME_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|UnknownTheme(value)| {
                tracing::warn!("Ignoring unknown theme {value:?}, using the default theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(error) => {
                tracing::warn!("Could not read the theme from storage, using the default theme: {error}");
                Theme::default()
            }
        };

        Self { theme, storage }
    }

    /// The active theme.
    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Switch to the other theme and persist it. Returns the new theme.
    ///
    /// A failed write is logged and otherwise ignored: the new theme stays
    /// active for the life of the process.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();

        if let Err(error) = self.storage.set_item(THEME_KEY, self.theme.as_str()) {
            tracing::error!("Could not save theme {}: {error}", self.theme);
        }

        self.theme
    }
}
