//! End-to-end report scenarios over a real on-disk store

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use tally::config::paths::TallyPaths;
use tally::models::{Money, User};
use tally::reports::{calculate_income_expenses, calculate_profit_loss, RangeMode, ReportTable};
use tally::services::{CreateTransactionInput, TransactionService, UserService};
use tally::storage::Storage;

fn create_test_storage() -> (TempDir, Storage) {
    let temp_dir = TempDir::new().unwrap();
    let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
    let mut storage = Storage::new(paths).unwrap();
    storage.load_all().unwrap();
    (temp_dir, storage)
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn record(storage: &Storage, user: &User, dollars: i64, is_debit: bool, date: NaiveDateTime) {
    TransactionService::new(storage)
        .create(CreateTransactionInput {
            user_id: user.id,
            description: if is_debit { "expense" } else { "income" }.to_string(),
            amount: Money::from_dollars(dollars),
            is_debit,
            date: Some(date),
            category_id: None,
        })
        .unwrap();
}

fn rows(table: &ReportTable) -> Vec<(String, i64, i64)> {
    table
        .rows
        .iter()
        .map(|row| (row.label.clone(), row.values[0].dollars(), row.values[1].dollars()))
        .collect()
}

fn two_year_history(storage: &Storage, user: &User) {
    record(storage, user, 20, true, at(2010, 1, 15));
    record(storage, user, 40, true, at(2010, 2, 23));
    record(storage, user, 100, true, at(2011, 3, 13));
    record(storage, user, 80, false, at(2010, 1, 20));
    record(storage, user, 75, false, at(2011, 2, 12));
}

fn single_year_history(storage: &Storage, user: &User) {
    record(storage, user, 20, true, at(2010, 1, 15));
    record(storage, user, 40, true, at(2010, 2, 23));
    record(storage, user, 100, true, at(2010, 3, 13));
    record(storage, user, 50, true, at(2010, 3, 14));
    record(storage, user, 80, false, at(2010, 1, 20));
    record(storage, user, 75, false, at(2010, 2, 12));
    record(storage, user, 200, false, at(2010, 2, 15));
}

#[test]
fn no_transactions_reports_only_the_current_year() {
    let (_temp_dir, storage) = create_test_storage();
    let user = UserService::new(&storage).create("ann@example.com").unwrap();
    let today = Local::now().date_naive();

    let table = calculate_profit_loss(&storage.transactions, RangeMode::All, user.id, today).unwrap();

    assert_eq!(rows(&table), vec![(today.year().to_string(), 0, 0)]);
}

#[test]
fn profit_loss_by_year_runs_through_the_current_year() {
    let (_temp_dir, storage) = create_test_storage();
    let user = UserService::new(&storage).create("ann@example.com").unwrap();
    two_year_history(&storage, &user);
    let today = Local::now().date_naive();

    let table = calculate_profit_loss(&storage.transactions, RangeMode::All, user.id, today).unwrap();
    let rows = rows(&table);

    assert_eq!(rows[0], ("2010".to_string(), 20, 0));
    assert_eq!(rows[1], ("2011".to_string(), 0, -25));
    assert_eq!(rows.len() as i32, today.year() - 2010 + 1);
    for (offset, row) in rows.iter().enumerate().skip(2) {
        assert_eq!(*row, ((2010 + offset as i32).to_string(), 0, 0));
    }
}

#[test]
fn income_expenses_by_month_for_a_past_year() {
    let (_temp_dir, storage) = create_test_storage();
    let user = UserService::new(&storage).create("ann@example.com").unwrap();
    single_year_history(&storage, &user);
    let as_of = NaiveDate::from_ymd_opt(2010, 12, 1).unwrap();

    let table =
        calculate_income_expenses(&storage.transactions, RangeMode::Year, user.id, as_of).unwrap();
    let rows = rows(&table);

    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0], ("Jan".to_string(), 80, 20));
    assert_eq!(rows[1], ("Feb".to_string(), 275, 40));
    assert_eq!(rows[2], ("Mar".to_string(), 0, 150));
    assert!(rows[3..].iter().all(|(_, income, expense)| *income == 0 && *expense == 0));
    assert_eq!(rows[11].0, "Dec");
}

#[test]
fn profit_loss_by_month_for_a_past_year() {
    let (_temp_dir, storage) = create_test_storage();
    let user = UserService::new(&storage).create("ann@example.com").unwrap();
    single_year_history(&storage, &user);
    let as_of = NaiveDate::from_ymd_opt(2010, 12, 1).unwrap();

    let table = calculate_profit_loss(&storage.transactions, RangeMode::Year, user.id, as_of).unwrap();
    let rows = rows(&table);

    assert_eq!(rows[0], ("Jan".to_string(), 60, 0));
    assert_eq!(rows[1], ("Feb".to_string(), 235, 0));
    assert_eq!(rows[2], ("Mar".to_string(), 0, -150));
    assert!(rows[3..].iter().all(|(_, profit, loss)| *profit == 0 && *loss == 0));
}

#[test]
fn year_mode_ignores_other_years_and_other_users() {
    let (_temp_dir, storage) = create_test_storage();
    let users = UserService::new(&storage);
    let ann = users.create("ann@example.com").unwrap();
    let bob = users.create("bob@example.com").unwrap();
    two_year_history(&storage, &ann);
    record(&storage, &bob, 1000, false, at(2010, 1, 2));
    let as_of = NaiveDate::from_ymd_opt(2010, 3, 31).unwrap();

    let table =
        calculate_income_expenses(&storage.transactions, RangeMode::Year, ann.id, as_of).unwrap();

    assert_eq!(
        rows(&table),
        vec![
            ("Jan".to_string(), 80, 20),
            ("Feb".to_string(), 0, 40),
            ("Mar".to_string(), 0, 0),
        ]
    );
}

#[test]
fn reports_survive_a_reload_and_are_repeatable() {
    let (temp_dir, storage) = create_test_storage();
    let user = UserService::new(&storage).create("ann@example.com").unwrap();
    two_year_history(&storage, &user);
    let as_of = NaiveDate::from_ymd_opt(2011, 12, 31).unwrap();

    let before = calculate_profit_loss(&storage.transactions, RangeMode::All, user.id, as_of).unwrap();

    let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
    let mut reloaded = Storage::new(paths).unwrap();
    reloaded.load_all().unwrap();
    let first = calculate_profit_loss(&reloaded.transactions, RangeMode::All, user.id, as_of).unwrap();
    let second = calculate_profit_loss(&reloaded.transactions, RangeMode::All, user.id, as_of).unwrap();

    assert_eq!(before, first);
    assert_eq!(first, second);
    assert_eq!(first.totals(), [Money::from_dollars(20), Money::from_dollars(-25)]);
}
