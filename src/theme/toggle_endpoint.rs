//! The theme toggle control and the endpoint it posts to.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    theme::{Theme, ThemeStore},
};

/// The state needed to read or toggle the theme.
#[derive(Debug, Clone)]
pub struct ThemeState {
    pub theme_store: Arc<Mutex<ThemeStore>>,
}

impl FromRef<AppState> for ThemeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            theme_store: state.theme_store.clone(),
        }
    }
}

impl ThemeState {
    /// The active theme, or [Theme::default] if the store lock is poisoned.
    ///
    /// Only for pages that must render even when the stores are unusable,
    /// such as the error pages.
    pub fn current_or_default(&self) -> Theme {
        match self.theme_store.lock() {
            Ok(theme_store) => theme_store.current(),
            Err(error) => {
                tracing::error!("could not acquire theme store lock: {error}");
                Theme::default()
            }
        }
    }
}

/// Switch between the dark and light themes.
///
/// The theme is applied to the whole page, so the response asks HTMX to
/// reload the page rather than swapping a fragment.
pub async fn toggle_theme_endpoint(State(state): State<ThemeState>) -> Response {
    let mut theme_store = match state.theme_store.lock() {
        Ok(theme_store) => theme_store,
        Err(error) => {
            tracing::error!("could not acquire theme store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let theme = theme_store.toggle();
    tracing::debug!("Switched to the {theme} theme");

    (HxRefresh(true), StatusCode::OK).into_response()
}

/// The button that toggles the theme. Shows a sun in dark mode and a moon in light mode.
pub fn theme_toggle_view(theme: Theme) -> Markup {
    let (icon, label) = match theme {
        Theme::Dark => ("☀️", "Switch to the light theme"),
        Theme::Light => ("🌙", "Switch to the dark theme"),
    };

    html! {
        button
            type="button"
            id="theme-toggle"
            hx-post=(endpoints::THEME_API)
            hx-target-error="#alert-container"
            title=(label)
            aria-label=(label)
            class="text-2xl bg-transparent border-none cursor-pointer"
        {
            (icon)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use axum_htmx::HX_REFRESH;
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        storage::{KeyValueStorage, MemoryStorage, THEME_KEY},
        theme::{Theme, ThemeState, ThemeStore, theme_toggle_view, toggle_theme_endpoint},
    };

    fn get_theme_state(storage: &MemoryStorage) -> ThemeState {
        ThemeState {
            theme_store: Arc::new(Mutex::new(ThemeStore::load(Box::new(storage.clone())))),
        }
    }

    #[tokio::test]
    async fn toggle_switches_theme_and_refreshes_page() {
        let storage = MemoryStorage::new();
        let state = get_theme_state(&storage);

        let response = toggle_theme_endpoint(State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(HX_REFRESH).map(|value| value.as_bytes()),
            Some("true".as_bytes())
        );
        assert_eq!(state.theme_store.lock().unwrap().current(), Theme::Light);
        assert_eq!(storage.get_item(THEME_KEY), Ok(Some("light".to_owned())));
    }

    #[tokio::test]
    async fn toggle_twice_returns_to_dark() {
        let storage = MemoryStorage::new();
        let state = get_theme_state(&storage);

        toggle_theme_endpoint(State(state.clone())).await;
        toggle_theme_endpoint(State(state.clone())).await;

        assert_eq!(state.theme_store.lock().unwrap().current(), Theme::Dark);
        assert_eq!(storage.get_item(THEME_KEY), Ok(Some("dark".to_owned())));
    }

    #[test]
    fn current_or_default_reads_the_store() {
        let storage = MemoryStorage::new();
        storage.set_item(THEME_KEY, "light").unwrap();
        let state = get_theme_state(&storage);

        assert_eq!(state.current_or_default(), Theme::Light);
    }

    #[test]
    fn current_or_default_falls_back_when_lock_is_poisoned() {
        let storage = MemoryStorage::new();
        storage.set_item(THEME_KEY, "light").unwrap();
        let state = get_theme_state(&storage);
        let poisoner = state.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.theme_store.lock().unwrap();
            panic!("poison the theme store lock");
        })
        .join();

        assert_eq!(state.current_or_default(), Theme::Dark);
    }

    #[test]
    fn toggle_button_posts_to_theme_endpoint() {
        let html = Html::parse_fragment(&theme_toggle_view(Theme::Dark).into_string());

        let button = html
            .select(&Selector::parse("button#theme-toggle").unwrap())
            .next()
            .expect("no theme toggle button");
        assert_eq!(button.value().attr("hx-post"), Some(endpoints::THEME_API));
        assert_eq!(button.text().collect::<String>().trim(), "☀️");
    }

    #[test]
    fn light_theme_shows_moon() {
        let html = Html::parse_fragment(&theme_toggle_view(Theme::Light).into_string());

        let button = html
            .select(&Selector::parse("button#theme-toggle").unwrap())
            .next()
            .expect("no theme toggle button");
        assert_eq!(button.text().collect::<String>().trim(), "🌙");
    }
}
