//! Expense deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    expense::{ExpenseId, ExpenseStore},
};

/// The state needed for deleting an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// Handle expense deletion. Deleting a missing expense is not an error.
pub async fn delete_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<DeleteExpenseState>,
) -> Response {
    let mut expense_store = match state.expense_store.lock() {
        Ok(expense_store) => expense_store,
        Err(error) => {
            tracing::error!("could not acquire expense store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    if expense_store.delete(expense_id) {
        tracing::debug!("Deleted expense {expense_id}");
    } else {
        tracing::debug!("Ignoring deletion of missing expense {expense_id}");
    }

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
