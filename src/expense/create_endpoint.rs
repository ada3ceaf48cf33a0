//! Expense creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use time::OffsetDateTime;

use crate::{
    AppState, Error, endpoints,
    expense::{ExpenseForm, ExpenseStore, expense_form_view},
    timezone::get_local_offset,
};

/// The state needed for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    pub expense_store: Arc<Mutex<ExpenseStore>>,
    /// The canonical timezone used for the date of new expenses.
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Handle add expense form submission.
///
/// Invalid input re-renders the form with the submitted values and an error
/// message. On success the client is redirected to the expenses page, which
/// also clears the form.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let new_expense = match form.validate() {
        Ok(new_expense) => new_expense,
        Err(error) => {
            return expense_form_view(&form, &format!("Error: {error}")).into_response();
        }
    };

    let Some(local_offset) = get_local_offset(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
    };

    let mut expense_store = match state.expense_store.lock() {
        Ok(expense_store) => expense_store,
        Err(error) => {
            tracing::error!("could not acquire expense store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let created_at = OffsetDateTime::now_utc().to_offset(local_offset);
    let expense = expense_store.add(new_expense, created_at);
    tracing::debug!("Created expense {}", expense.id);

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
