//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_expenses_page,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    theme::toggle_theme_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_expenses_page))
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(
            endpoints::EXPENSE,
            put(edit_expense_endpoint).delete(delete_expense_endpoint),
        )
        .route(endpoints::THEME_API, post(toggle_theme_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
