//! Expense editing endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    expense::{ExpenseForm, ExpenseId, ExpenseStore},
};

/// The state needed for updating an expense.
#[derive(Debug, Clone)]
pub struct EditExpenseState {
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for EditExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// Handle the inline edit form submission.
///
/// An expense that no longer exists is left alone and the client is still
/// redirected, which leaves edit mode.
pub async fn edit_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<EditExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let new_expense = match form.validate() {
        Ok(new_expense) => new_expense,
        Err(error) => return error.into_alert_response(),
    };

    let mut expense_store = match state.expense_store.lock() {
        Ok(expense_store) => expense_store,
        Err(error) => {
            tracing::error!("could not acquire expense store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    if expense_store.edit(expense_id, new_expense) {
        tracing::debug!("Updated expense {expense_id}");
    } else {
        tracing::debug!("Ignoring edit of missing expense {expense_id}");
    }

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
