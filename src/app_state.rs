//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    expense::ExpenseStore,
    storage::{KeyValueStorage, SqliteStorage, create_storage_table},
    theme::ThemeStore,
    timezone::get_local_offset,
};

/// The state of the REST server.
///
/// Handlers take the parts they need through sub-states that implement
/// `FromRef<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The list of expenses.
    pub expense_store: Arc<Mutex<ExpenseStore>>,

    /// The dark/light theme preference.
    pub theme_store: Arc<Mutex<ThemeStore>>,
}

impl AppState {
    /// Create a new [AppState] backed by a SQLite database connection.
    ///
    /// This function will create the key-value storage table if it does not
    /// exist and load the expenses and theme saved by a previous run.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if the timezone is invalid or the storage table cannot be created.
    pub fn new(db_connection: Connection, local_timezone: &str) -> Result<Self, Error> {
        create_storage_table(&db_connection)?;

        let storage = SqliteStorage::new(Arc::new(Mutex::new(db_connection)));

        Self::with_storage(storage, local_timezone)
    }

    /// Create a new [AppState] that keeps its state in `storage`.
    ///
    /// # Errors
    /// Returns an error if the timezone is invalid.
    pub fn with_storage<S>(storage: S, local_timezone: &str) -> Result<Self, Error>
    where
        S: KeyValueStorage + Clone + 'static,
    {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        let theme_store = ThemeStore::load(Box::new(storage.clone()));
        let expense_store = ExpenseStore::load(Box::new(storage));

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            expense_store: Arc::new(Mutex::new(expense_store)),
            theme_store: Arc::new(Mutex::new(theme_store)),
        })
    }
}
