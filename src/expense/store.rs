//! The store that owns the list of expenses.

use time::OffsetDateTime;

use crate::{
    expense::{Expense, ExpenseId, NewExpense, domain::format_expense_date},
    storage::{EXPENSES_KEY, KeyValueStorage},
};

/// Owns the ordered list of expenses and mirrors it to storage after every change.
///
/// Expenses are kept in insertion order. Edits and deletes never reorder the list.
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    storage: Box<dyn KeyValueStorage>,
    last_id: ExpenseId,
}

impl ExpenseStore {
    /// Load the expenses persisted in `storage`.
    ///
    /// A missing, unreadable or malformed entry yields an empty list. Within a
    /// well-formed list, individual malformed records are skipped.
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let expenses = match storage.get_item(EXPENSES_KEY) {
            Ok(Some(json)) => parse_expenses(&json),
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!("Could not read expenses from storage: {error}");
                Vec::new()
            }
        };

        let last_id = expenses
            .iter()
            .map(|expense: &Expense| expense.id)
            .max()
            .unwrap_or(0);

        tracing::debug!("Loaded {} expenses from storage", expenses.len());

        Self {
            expenses,
            storage,
            last_id,
        }
    }

    /// All expenses in the order they were added.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The sum of all expense amounts.
    pub fn total(&self) -> f64 {
        total(&self.expenses)
    }

    /// Append a new expense created at `created_at` and return it.
    ///
    /// `created_at` should already be in the local timezone since it is
    /// formatted for display as the expense date.
    pub fn add(&mut self, new_expense: NewExpense, created_at: OffsetDateTime) -> Expense {
        let expense = Expense {
            id: self.next_id(created_at),
            description: new_expense.description().to_owned(),
            amount: new_expense.amount().value(),
            category: new_expense.category().to_owned(),
            date: format_expense_date(created_at),
        };

        self.expenses.push(expense.clone());
        self.persist();

        expense
    }

    /// Replace the description, amount and category of the expense with `id`.
    ///
    /// The id and date are kept. Returns `false` and leaves the list untouched
    /// if no expense has the id.
    pub fn edit(&mut self, id: ExpenseId, new_expense: NewExpense) -> bool {
        let Some(expense) = self.expenses.iter_mut().find(|expense| expense.id == id) else {
            return false;
        };

        expense.description = new_expense.description().to_owned();
        expense.amount = new_expense.amount().value();
        expense.category = new_expense.category().to_owned();
        self.persist();

        true
    }

    /// Remove the expense with `id`.
    ///
    /// Returns `false` and leaves the list untouched if no expense has the id.
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        let Some(index) = self.expenses.iter().position(|expense| expense.id == id) else {
            return false;
        };

        self.expenses.remove(index);
        self.persist();

        true
    }

    /// Ids are the creation time in milliseconds, bumped when needed so that
    /// they are strictly increasing even when two expenses are added within
    /// the same millisecond.
    fn next_id(&mut self, created_at: OffsetDateTime) -> ExpenseId {
        let timestamp_ms = (created_at.unix_timestamp_nanos() / 1_000_000) as ExpenseId;
        self.last_id = timestamp_ms.max(self.last_id + 1);

        self.last_id
    }

    /// Write the full list to storage. Failures are logged, not returned.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.expenses) {
            Ok(json) => json,
            Err(error) => {
                tracing::error!("Could not serialize expenses: {error}");
                return;
            }
        };

        if let Err(error) = self.storage.set_item(EXPENSES_KEY, &json) {
            tracing::error!("Could not save expenses: {error}");
        }
    }
}

fn parse_expenses(json: &str) -> Vec<Expense> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(json) {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!("Ignoring malformed expenses in storage: {error}");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .filter_map(|record| {
            serde_json::from_value(record)
                .inspect_err(|error| tracing::warn!("Skipping malformed expense record: {error}"))
                .ok()
        })
        .collect()
}

/// The sum of the amounts of `expenses`.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}
