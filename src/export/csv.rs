//! CSV export of transactions

use std::collections::HashMap;
use std::io::Write;

use chrono::NaiveDateTime;

use crate::error::{TallyError, TallyResult};
use crate::models::{CategoryId, Transaction, UserId, UNCATEGORIZED};
use crate::storage::Storage;

pub const TRANSACTION_CSV_HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// Write transactions as CSV.
///
/// `None` entries are skipped. Categories missing from `category_names`
/// (including transactions with no category) are written as `Uncategorized`.
pub fn export_transactions_csv<'a, W, I>(
    writer: W,
    transactions: I,
    category_names: &HashMap<CategoryId, String>,
    date_format: &str,
) -> TallyResult<usize>
where
    W: Write,
    I: IntoIterator<Item = Option<&'a Transaction>>,
{
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(TRANSACTION_CSV_HEADER)?;

    let mut written = 0;
    for txn in transactions.into_iter().flatten() {
        let category = txn
            .category_id
            .and_then(|id| category_names.get(&id))
            .map(String::as_str)
            .unwrap_or(UNCATEGORIZED);

        csv_writer.write_record([
            format_date(&txn.date, date_format)?.as_str(),
            category,
            txn.description.as_str(),
            txn.amount.to_decimal_string().as_str(),
        ])?;
        written += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(written)
}

/// Render a date, failing on an invalid strftime specifier
fn format_date(date: &NaiveDateTime, date_format: &str) -> TallyResult<String> {
    use std::fmt::Write as _;

    let mut rendered = String::new();
    write!(rendered, "{}", date.format(date_format))
        .map_err(|_| TallyError::Export(format!("Invalid date format: {}", date_format)))?;
    Ok(rendered)
}

/// Export a user's transactions.
///
/// With an empty `ids` every transaction of the user is written, newest
/// first. Otherwise each ID is resolved in order; IDs that are unknown or
/// belong to another user are skipped.
pub fn export_user_transactions_csv<W: Write>(
    storage: &Storage,
    user_id: UserId,
    ids: &[String],
    date_format: &str,
    writer: W,
) -> TallyResult<usize> {
    let category_names = storage.categories.names()?;

    let selected: Vec<Option<Transaction>> = if ids.is_empty() {
        storage
            .transactions
            .get_by_user(user_id)?
            .into_iter()
            .map(Some)
            .collect()
    } else {
        ids.iter()
            .map(|id| {
                storage
                    .transactions
                    .find(id)
                    .map(|found| found.filter(|t| t.user_id == user_id))
            })
            .collect::<TallyResult<_>>()?
    };

    export_transactions_csv(
        writer,
        selected.iter().map(Option::as_ref),
        &category_names,
        date_format,
    )
}
