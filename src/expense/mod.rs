//! Expenses: the records, the store that persists them and the page for managing them.

mod create_endpoint;
mod delete_endpoint;
mod domain;
mod edit_endpoint;
mod form;
mod list;
mod page;
mod store;

pub use create_endpoint::{CreateExpenseState, create_expense_endpoint};
pub use delete_endpoint::{DeleteExpenseState, delete_expense_endpoint};
pub use domain::{Amount, Expense, ExpenseId, NewExpense};
pub use edit_endpoint::{EditExpenseState, edit_expense_endpoint};
pub use form::{ExpenseForm, expense_form_view};
pub use list::expense_list_view;
pub use page::{ExpensesPageQuery, ExpensesPageState, get_expenses_page};
pub use store::ExpenseStore;
