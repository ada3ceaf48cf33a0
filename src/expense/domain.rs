//! Core expense domain types.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// Identifies an expense. Derived from the creation time in milliseconds.
pub type ExpenseId = i64;

/// A single expense record.
///
/// The field names match the JSON written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Assigned on creation and never changed.
    pub id: ExpenseId,
    pub description: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub category: String,
    /// When the expense was created, formatted for display.
    pub date: String,
}

/// Older records may hold the amount as a numeric string rather than a number.
///
/// Either way the amount must be a valid [Amount].
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    let amount = match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(amount) => amount,
        RawAmount::Text(text) => text.trim().parse().map_err(serde::de::Error::custom)?,
    };

    Amount::new(amount)
        .map(|amount| amount.value())
        .map_err(serde::de::Error::custom)
}

/// A finite, non-negative amount of money.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `amount` is NaN or infinite, or
    /// [Error::NegativeAmount] if it is less than zero.
    pub fn new(amount: f64) -> Result<Self, Error> {
        if !amount.is_finite() {
            Err(Error::InvalidAmount(amount.to_string()))
        } else if amount < 0.0 {
            Err(Error::NegativeAmount)
        } else {
            // Normalises -0.0 to 0.0.
            Ok(Self(amount + 0.0))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    /// Parse user input such as "12.50".
    ///
    /// Text that is not a number (e.g., "", "-" or "abc") is rejected rather
    /// than being read as zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let amount: f64 = text
            .parse()
            .map_err(|_| Error::InvalidAmount(text.to_owned()))?;

        if !amount.is_finite() {
            return Err(Error::InvalidAmount(text.to_owned()));
        }

        Amount::new(amount)
    }
}

/// Validated fields for creating or editing an expense.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    description: String,
    amount: Amount,
    category: String,
}

impl NewExpense {
    /// Create validated expense fields. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyDescription] or [Error::EmptyCategory] if either
    /// string is empty after trimming.
    pub fn new(description: &str, amount: Amount, category: &str) -> Result<Self, Error> {
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(Error::EmptyCategory);
        }

        Ok(Self {
            description: description.to_owned(),
            amount,
            category: category.to_owned(),
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[day padding:zero]/[month repr:numerical padding:zero]/[year], [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Format a creation time for display, e.g. "17/10/2026, 09:30:00".
pub fn format_expense_date(date_time: OffsetDateTime) -> String {
    date_time
        .format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date_time.to_string())
}




#[cfg(test)]
mod format_expense_date_tests {
    use time::macros::datetime;

    use super::format_expense_date;

    #[test]
    fn formats_day_month_year_and_time() {
        let date_time = datetime!(2026-10-17 09:05:03 +13:00);

        assert_eq!(format_expense_date(date_time), "17/10/2026, 09:05:03");
    }
}
