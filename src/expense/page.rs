//! The main page: the add expense form followed by the list of expenses.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Deserializer};

use crate::{
    AppState, Error,
    expense::{
        Expense, ExpenseForm, ExpenseId, ExpenseStore, expense_form_view, expense_list_view,
    },
    html::{FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    theme::{Theme, ThemeStore, theme_toggle_view},
};

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    pub expense_store: Arc<Mutex<ExpenseStore>>,
    pub theme_store: Arc<Mutex<ThemeStore>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            theme_store: state.theme_store.clone(),
        }
    }
}

/// Query parameters for the expenses page.
#[derive(Debug, Default, Deserialize)]
pub struct ExpensesPageQuery {
    /// The id of the expense to show in edit mode.
    ///
    /// A value that is not an id is treated as if no row were being edited.
    #[serde(default, deserialize_with = "deserialize_edit_id")]
    pub edit: Option<ExpenseId>,
}

fn deserialize_edit_id<'de, D>(deserializer: D) -> Result<Option<ExpenseId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.and_then(|value| value.trim().parse().ok()))
}

/// Render the expenses page.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
    Query(query): Query<ExpensesPageQuery>,
) -> Result<Response, Error> {
    let theme = state
        .theme_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire theme store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .current();

    let expense_store = state
        .expense_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    Ok(expenses_view(theme, expense_store.expenses(), query.edit).into_response())
}

fn expenses_view(theme: Theme, expenses: &[Expense], editing: Option<ExpenseId>) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="flex items-center justify-between w-full max-w-md"
            {
                h1 class="text-3xl font-bold" { "Expense Tracker" }
                (theme_toggle_view(theme))
            }

            div class=(FORM_CONTAINER_STYLE)
            {
                (expense_form_view(&ExpenseForm::default(), ""))
            }

            (expense_list_view(expenses, editing))
        }
    };

    base("Expenses", theme, &[dollar_input_styles()], &content)
}
