//! Report formatting for terminal output

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::reports::ReportTable;

/// Render a report as a titled table with a totals row
pub fn format_report_table(report: &ReportTable, currency_symbol: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(report.kind.headers());

    for row in &report.rows {
        builder.push_record([
            row.label.clone(),
            row.values[0].format_with_symbol(currency_symbol),
            row.values[1].format_with_symbol(currency_symbol),
        ]);
    }

    let [first, second] = report.totals();
    builder.push_record([
        "Total".to_string(),
        first.format_with_symbol(currency_symbol),
        second.format_with_symbol(currency_symbol),
    ]);

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .modify(Columns::new(1..), Alignment::right());

    let title = format!(
        "{} ({}, as of {})",
        report.kind.title(),
        report.range,
        report.as_of.format("%Y-%m-%d")
    );

    format!("{}\n{}\n", title, table)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
