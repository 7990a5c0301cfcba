//! Transaction display formatting
//!
//! Register views over a page of transactions.

use std::collections::HashMap;

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::models::{CategoryId, Transaction, UNCATEGORIZED};
use crate::services::Page;

use super::report::truncate;

fn category_label<'a>(txn: &Transaction, category_names: &'a HashMap<CategoryId, String>) -> &'a str {
    txn.category_id
        .and_then(|id| category_names.get(&id))
        .map(String::as_str)
        .unwrap_or(UNCATEGORIZED)
}

/// Format a page of transactions as a register
pub fn format_transaction_register(
    page: &Page<Transaction>,
    category_names: &HashMap<CategoryId, String>,
    currency_symbol: &str,
) -> String {
    if page.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Date", "Category", "Description", "Amount"]);

    for txn in &page.items {
        builder.push_record([
            txn.id.to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            category_label(txn, category_names).to_string(),
            truncate(&txn.description, 40),
            txn.amount.format_with_symbol(currency_symbol),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .modify(Columns::single(4), Alignment::right());

    format!(
        "{}\nPage {} of {} ({} transactions)\n",
        table,
        page.page,
        page.total_pages(),
        page.total
    )
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category_names: &HashMap<CategoryId, String>,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M")));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", category_label(txn, category_names)));
    output.push_str(&format!(
        "Type:        {}\n",
        if txn.is_debit { "Debit" } else { "Credit" }
    ));

    output
}
