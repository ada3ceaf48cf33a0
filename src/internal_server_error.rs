//! The page shown when a request fails for reasons the user cannot fix.
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    html::error_view,
    theme::{Theme, ThemeState},
};

/// A 500 error page with a short description of what failed and how to recover.
///
/// Errors raised inside handlers cannot see the theme store, so they render
/// with [Theme::default].
pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
    pub theme: Theme,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
            theme: Theme::default(),
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        let page = error_view(
            "Internal Server Error",
            "500",
            self.description,
            self.fix,
            self.theme,
        );

        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
    }
}

pub async fn get_internal_server_error_page(State(state): State<ThemeState>) -> Response {
    InternalServerError {
        theme: state.current_or_default(),
        ..Default::default()
    }
    .into_response()
}
