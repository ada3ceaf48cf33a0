//! The page shown for routes that do not exist.
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    html::error_view,
    theme::{Theme, ThemeState},
};

/// Renders the 404 page in the given theme.
pub struct NotFoundError {
    pub theme: Theme,
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        let page = error_view(
            "Not Found",
            "404",
            "Something's missing.",
            "Sorry, we can't find that page. You'll find lots to explore on the home page.",
            self.theme,
        );

        (StatusCode::NOT_FOUND, Html(page.into_string())).into_response()
    }
}

pub async fn get_404_not_found(State(state): State<ThemeState>) -> Response {
    NotFoundError {
        theme: state.current_or_default(),
    }
    .into_response()
}
