//! Persistent key-value storage for application state.
//!
//! Values are plain strings stored under fixed keys. Stores decide how to
//! encode their state and treat storage failures as best-effort.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::{SqliteStorage, create_storage_table};

use crate::Error;

/// The key holding the JSON encoded list of expenses.
pub const EXPENSES_KEY: &str = "ExpensesArray";

/// The key holding the theme preference, either "dark" or "light".
pub const THEME_KEY: &str = "expense-tracker-theme";

/// String-valued storage that survives server restarts.
pub trait KeyValueStorage: Send + std::fmt::Debug {
    /// Get the value stored under `key`, or `None` if nothing has been stored.
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), Error>;
}
