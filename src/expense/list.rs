//! Renders the list of expenses, the inline edit form and the total.

use maud::{Markup, html};

use crate::{
    endpoints,
    expense::{Expense, ExpenseId, store::total},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, format_currency,
    },
};

/// Shown instead of the list when there are no expenses.
pub const EMPTY_LIST_MESSAGE: &str = "No expenses added yet. Add your first expense above!";

const ROW_STYLE: &str = "flex items-start justify-between gap-4 p-4 bg-white rounded-lg \
    shadow dark:bg-gray-800 dark:border dark:border-gray-700";

/// Render every expense in order followed by the total.
///
/// The expense whose id is `editing`, if any, is rendered as an edit form.
pub fn expense_list_view(expenses: &[Expense], editing: Option<ExpenseId>) -> Markup {
    let total = total(expenses);

    html! {
        section id="expense-list" class="w-full max-w-md space-y-4"
        {
            h2 class="text-xl font-semibold" { "Expenses" }

            @if expenses.is_empty() {
                p class="text-gray-500 dark:text-gray-400" { (EMPTY_LIST_MESSAGE) }
            } @else {
                ul class="space-y-3"
                {
                    @for expense in expenses {
                        @if editing == Some(expense.id) {
                            (edit_row_view(expense))
                        } @else {
                            (display_row_view(expense))
                        }
                    }
                }
            }

            @if total > 0.0 {
                p id="expense-total" class="text-lg font-bold text-right"
                {
                    "Total: " (format_currency(total))
                }
            }
        }
    }
}

fn display_row_view(expense: &Expense) -> Markup {
    let edit_url = endpoints::edit_expense_view_url(expense.id);
    let delete_url = endpoints::format_endpoint(endpoints::EXPENSE, expense.id);
    let confirm_message = format!("Delete the expense \"{}\"?", expense.description);

    html! {
        li id=(format!("expense-{}", expense.id)) class=(ROW_STYLE)
        {
            div class="space-y-1"
            {
                p class="font-medium" { (expense.description) }
                p { "Amount: " (format_currency(expense.amount)) }
                p { "Category: " (expense.category) }
                p class="text-sm text-gray-500 dark:text-gray-400" { (expense.date) }
            }

            div class="flex gap-3 shrink-0"
            {
                a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm=(confirm_message)
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

fn edit_row_view(expense: &Expense) -> Markup {
    let update_url = endpoints::format_endpoint(endpoints::EXPENSE, expense.id);
    let input_id = |name: &str| format!("edit-{name}-{}", expense.id);

    html! {
        li id=(format!("expense-{}", expense.id)) class=(ROW_STYLE)
        {
            form
                hx-put=(update_url)
                hx-target-error="#alert-container"
                class="w-full space-y-3"
            {
                div
                {
                    label for=(input_id("description")) class=(FORM_LABEL_STYLE) { "Description" }

                    input
                        id=(input_id("description"))
                        type="text"
                        name="description"
                        value=(expense.description)
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for=(input_id("amount")) class=(FORM_LABEL_STYLE) { "Amount" }

                    div class="input-wrapper"
                    {
                        input
                            id=(input_id("amount"))
                            type="number"
                            name="amount"
                            min="0"
                            step="0.01"
                            value=(expense.amount.to_string())
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label for=(input_id("category")) class=(FORM_LABEL_STYLE) { "Category" }

                    input
                        id=(input_id("category"))
                        type="text"
                        name="category"
                        value=(expense.category)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="flex items-center gap-4"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
                    a href=(endpoints::ROOT) class=(LINK_STYLE) { "Cancel" }
                }
            }
        }
    }
}
