//! The form for adding expenses and the parsing of its submitted values.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error, endpoints,
    expense::{Amount, NewExpense},
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The raw values submitted by the add and edit expense forms.
///
/// The amount is kept as text so that invalid input can be shown back to the
/// user instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl ExpenseForm {
    /// Parse the submitted values into a validated expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the description or category is blank, or if the
    /// amount is not a non-negative number.
    pub fn validate(&self) -> Result<NewExpense, Error> {
        let amount: Amount = self.amount.parse()?;

        NewExpense::new(&self.description, amount, &self.category)
    }
}

/// Render the add expense form.
///
/// `draft` is written back into the inputs so that a rejected submission does
/// not lose what the user typed.
pub fn expense_form_view(draft: &ExpenseForm, error_message: &str) -> Markup {
    html! {
        form
            id="expense-form"
            hx-post=(endpoints::EXPENSES_API)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Description"
                    value=(draft.description)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper"
                {
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        placeholder="0.00"
                        min="0"
                        step="0.01"
                        value=(draft.amount)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder="Category"
                    value=(draft.category)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}

#[cfg(test)]
mod validate_tests {
    use crate::{Error, expense::ExpenseForm};

    fn form(description: &str, amount: &str, category: &str) -> ExpenseForm {
        ExpenseForm {
            description: description.to_owned(),
            amount: amount.to_owned(),
            category: category.to_owned(),
        }
    }

    #[test]
    fn accepts_valid_form() {
        let new_expense = form(" Coffee ", "3.50", " Food ").validate().unwrap();

        assert_eq!(new_expense.description(), "Coffee");
        assert_eq!(new_expense.amount().value(), 3.5);
        assert_eq!(new_expense.category(), "Food");
    }

    #[test]
    fn rejects_blank_description() {
        assert_eq!(
            form("   ", "3.50", "Food").validate(),
            Err(Error::EmptyDescription)
        );
    }

    #[test]
    fn rejects_blank_category() {
        assert_eq!(
            form("Coffee", "3.50", "").validate(),
            Err(Error::EmptyCategory)
        );
    }

    #[test]
    fn rejects_missing_amount() {
        assert_eq!(
            form("Coffee", "", "Food").validate(),
            Err(Error::InvalidAmount("".to_owned()))
        );
    }

    #[test]
    fn rejects_non_numeric_amount() {
        assert_eq!(
            form("Coffee", "abc", "Food").validate(),
            Err(Error::InvalidAmount("abc".to_owned()))
        );
    }

    #[test]
    fn rejects_negative_amount() {
        assert_eq!(
            form("Coffee", "-2", "Food").validate(),
            Err(Error::NegativeAmount)
        );
    }
}

#[cfg(test)]
mod expense_form_view_tests {
    use scraper::Html;

    use crate::{
        endpoints,
        expense::{ExpenseForm, expense_form_view},
        test_utils::{
            assert_form_error_message, assert_form_input, assert_form_input_with_value,
            assert_form_submit_button_with_text, assert_hx_endpoint, assert_valid_html,
            must_get_form,
        },
    };

    #[test]
    fn renders_empty_form() {
        let html = Html::parse_fragment(
            &expense_form_view(&ExpenseForm::default(), "").into_string(),
        );

        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::EXPENSES_API, "hx-post");
        assert_form_input(&form, "description", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "category", "text");
        assert_form_submit_button_with_text(&form, "Add Expense");
    }

    #[test]
    fn amount_input_accepts_cents_but_not_negatives() {
        let html = Html::parse_fragment(
            &expense_form_view(&ExpenseForm::default(), "").into_string(),
        );

        let amount = html
            .select(&scraper::Selector::parse("input[name=amount]").unwrap())
            .next()
            .expect("no amount input");
        assert_eq!(amount.value().attr("min"), Some("0"));
        assert_eq!(amount.value().attr("step"), Some("0.01"));
    }

    #[test]
    fn keeps_drafts_and_shows_error() {
        let draft = ExpenseForm {
            description: "Coffee".to_owned(),
            amount: "abc".to_owned(),
            category: "Food".to_owned(),
        };

        let html = Html::parse_fragment(
            &expense_form_view(&draft, "Error: \"abc\" is not a valid amount").into_string(),
        );

        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "description", "text", "Coffee");
        assert_form_input_with_value(&form, "amount", "number", "abc");
        assert_form_input_with_value(&form, "category", "text", "Food");
        assert_form_error_message(&form, "Error: \"abc\" is not a valid amount");
    }
}
