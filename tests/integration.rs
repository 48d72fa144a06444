//! Integration tests for the vacation ledger.
//!
//! This test suite covers the full flow through the public API:
//! - Date parsing across layouts
//! - Batch validation messages
//! - Import of pasted spreadsheet text, all or nothing
//! - Calendar grid and yearly statistics
//! - Persistence through the file-backed blob store
//! - Configuration-driven setup

use std::fs;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use vacation_ledger::calculation::{month_grid, year_stats};
use vacation_ledger::config::{ConfigLoader, LedgerConfig, StorageConfig};
use vacation_ledger::dates::{YearMonth, parse_date};
use vacation_ledger::error::LedgerError;
use vacation_ledger::ledger::{ImportOutcome, VacationLedger};
use vacation_ledger::models::{Employee, Vacation, VacationBalance, VacationType};
use vacation_ledger::storage::{
    BlobStore, EMPLOYEES_BLOB, FileBlobStore, MemoryBlobStore, VACATIONS_BLOB, load, save,
};
use vacation_ledger::validation::validate_vacations;

// =============================================================================
// Test Helpers
// =============================================================================

const HEADER: &str = "type,employeeId,employeeName,startDate,endDate,department";

fn vacation(employee_id: &str, start: &str, end: &str) -> Vacation {
    Vacation::new(VacationType::Regular, employee_id, "Test Employee", start, end)
}

fn table(rows: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

fn month(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn file_ledger(temp_dir: &TempDir) -> VacationLedger<FileBlobStore> {
    let config = LedgerConfig {
        storage: StorageConfig {
            data_dir: temp_dir.path().join("data"),
        },
        ..LedgerConfig::default()
    };
    VacationLedger::from_config(&config).expect("Failed to open ledger")
}

// =============================================================================
// SECTION 1: Date Parsing
// =============================================================================

#[test]
fn test_every_layout_parses_to_same_date() {
    let expected = NaiveDate::from_ymd_opt(2024, 2, 29);
    assert_eq!(parse_date("29/2/2024"), expected);
    assert_eq!(parse_date("29-02-2024"), expected);
    assert_eq!(parse_date("2024-02-29"), expected);
}

#[test]
fn test_invalid_february_day_rejected() {
    assert_eq!(parse_date("31/2/2023"), None);
}

// =============================================================================
// SECTION 2: Validation
// =============================================================================

#[test]
fn test_overlap_with_accepted_yields_one_error() {
    let accepted = vec![vacation("E1", "2024-01-10", "2024-01-15")];
    let candidates = vec![vacation("E1", "2024-01-14", "2024-01-20")];

    let report = validate_vacations(&candidates, &accepted);
    assert_eq!(report.messages(), vec!["Row 1: Overlapping vacation dates"]);
}

#[test]
fn test_inverted_interval_yields_one_error() {
    let candidates = vec![vacation("E1", "2024-02-10", "2024-02-05")];

    let report = validate_vacations(&candidates, &[]);
    assert_eq!(
        report.messages(),
        vec!["Row 1: Start date must be before end date"]
    );
}

#[test]
fn test_validation_runs_over_every_row() {
    let accepted = vec![vacation("E1", "2024-01-10", "2024-01-15")];
    let candidates = vec![
        vacation("E1", "2024-01-01", "2024-01-02"),
        vacation("E1", "not-a-date", "2024-01-02"),
        vacation("E1", "2024-01-12", "2024-01-11"),
        vacation("E2", "2024-01-12", "2024-01-13"),
    ];

    let report = validate_vacations(&candidates, &accepted);
    assert_eq!(
        report.messages(),
        vec![
            "Row 2: Invalid date format",
            "Row 3: Start date must be before end date",
            "Row 3: Overlapping vacation dates",
        ]
    );
}

// =============================================================================
// SECTION 3: Import
// =============================================================================

#[test]
fn test_import_spreadsheet_paste() {
    let mut ledger = VacationLedger::open(MemoryBlobStore::new()).unwrap();
    let text = "Type\tEmployee ID\tEmployee Name\tStart Date\tEnd Date\tDepartment\n\
                Regular\tE1\tAna\t1/7/2024\t05-07-2024\tFinance\n\
                \n\
                Sick\tE2\tBea\t2024-07-03\t2024-07-03\t\n";

    let outcome = ledger.import(text).unwrap();
    assert_eq!(outcome, ImportOutcome::Committed { count: 2 });

    let vacations = ledger.vacations();
    assert_eq!(vacations[0].department.as_deref(), Some("Finance"));
    assert_eq!(vacations[1].vacation_type, VacationType::Sick);
    assert_eq!(vacations[1].department, None);
}

#[test]
fn test_import_is_all_or_nothing() {
    let mut ledger = VacationLedger::open(MemoryBlobStore::new()).unwrap();
    let text = table(&[
        "Regular,E1,Ana,2024-01-01,2024-01-05,",
        "Regular,E2,Bea,31/2/2024,2024-03-05,",
        "Regular,E3,Caio,2024-01-01,2024-01-05,",
    ]);

    let outcome = ledger.import(&text).unwrap();
    assert_eq!(outcome.errors(), ["Row 2: Invalid date format".to_string()]);
    assert!(ledger.vacations().is_empty());
}

#[test]
fn test_same_batch_overlaps_pass_by_default() {
    let mut ledger = VacationLedger::open(MemoryBlobStore::new()).unwrap();
    let text = table(&[
        "Regular,E1,Ana,2024-01-01,2024-01-05,",
        "Sick,E1,Ana,2024-01-03,2024-01-04,",
    ]);

    assert!(ledger.import(&text).unwrap().is_committed());
    assert_eq!(ledger.vacations().len(), 2);
}

#[test]
fn test_second_import_is_checked_against_first() {
    let mut ledger = VacationLedger::open(MemoryBlobStore::new()).unwrap();
    ledger
        .import(&table(&["Regular,E1,Ana,2024-01-10,2024-01-15,"]))
        .unwrap();

    let outcome = ledger
        .import(&table(&[
            "Regular,E2,Bea,2024-01-10,2024-01-15,",
            "Regular,E1,Ana,15-01-2024,20-01-2024,",
        ]))
        .unwrap();

    assert_eq!(
        outcome.errors(),
        ["Row 2: Overlapping vacation dates".to_string()]
    );
    assert_eq!(ledger.vacations().len(), 1);
}

#[test]
fn test_preview_lists_import_problems() {
    let ledger = VacationLedger::open(MemoryBlobStore::new()).unwrap();
    let text = "type,employeeId,employeeName,startDate\nHoliday,E1,Ana,2024-01-01\n";

    let preview = ledger.preview_import(text).unwrap();
    assert!(!preview.can_import());
    assert_eq!(
        preview.errors(),
        vec![
            "Row 1: Missing required column 'endDate'",
            "Row 1: Unknown vacation type 'Holiday'",
        ]
    );
}

// =============================================================================
// SECTION 4: Calendar Grid and Yearly Statistics
// =============================================================================

#[test]
fn test_month_grid_splits_vacation_at_month_boundary() {
    let vacations = vec![vacation("E2", "2024-03-30", "2024-04-02")];

    let march = month_grid(&vacations, month(2024, 3));
    let march_days: Vec<u32> = march.get("E2").unwrap().days.iter().copied().collect();
    assert_eq!(march_days, vec![30, 31]);

    let april = month_grid(&vacations, month(2024, 4));
    let april_days: Vec<u32> = april.get("E2").unwrap().days.iter().copied().collect();
    assert_eq!(april_days, vec![1, 2]);
}

#[test]
fn test_month_navigation_walks_grid_across_year() {
    let vacations = vec![vacation("E1", "2023-12-30", "2024-01-02")];
    let january = month(2024, 1);

    assert_eq!(month_grid(&vacations, january).get("E1").unwrap().total(), 2);
    assert_eq!(
        month_grid(&vacations, january.previous()).get("E1").unwrap().total(),
        2
    );
    assert!(month_grid(&vacations, january.next()).is_empty());
}

#[test]
fn test_year_stats_counts_start_month_only() {
    let vacations = vec![vacation("E1", "2024-03-05", "2024-04-10")];
    let stats = year_stats(&vacations, 2024);

    assert_eq!(stats.total, 1);
    assert_eq!(stats.by_month[2], 1);
    assert_eq!(stats.by_month[3], 0);
    assert_eq!(stats.count_for_type(VacationType::Regular), 1);
    assert_eq!(stats.count_for_employee("E1"), 1);
}

#[test]
fn test_year_stats_from_imported_data() {
    let mut ledger = VacationLedger::open(MemoryBlobStore::new()).unwrap();
    ledger
        .import(&table(&[
            "Regular,E1,Ana,2024-01-10,2024-01-15,",
            "Sick,E1,Ana,2024-02-01,2024-02-02,",
            "Companion,E2,Bea,2024-02-10,2024-02-11,",
            "Compensatory,E3,Caio,2023-12-28,2024-01-03,",
        ]))
        .unwrap();

    let stats = ledger.year_stats(2024);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.by_month[0], 1);
    assert_eq!(stats.by_month[1], 2);
    assert_eq!(stats.count_for_type(VacationType::Compensatory), 0);
    assert_eq!(stats.monthly_average(), Decimal::new(3, 1));
}

// =============================================================================
// SECTION 5: Persistence
// =============================================================================

#[test]
fn test_load_after_save_is_deeply_equal() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileBlobStore::open(temp_dir.path()).unwrap();

    let mut employee = Employee::new("E1", "Ana");
    employee.department = Some("Finance".to_string());
    employee.vacation_balance = Some(VacationBalance {
        regular: Decimal::new(125, 1),
        sick: Decimal::new(5, 0),
        compensatory: Decimal::ZERO,
    });
    let employees = vec![employee];

    save(&mut store, EMPLOYEES_BLOB, &employees).unwrap();
    let loaded: Vec<Employee> = load(&store, EMPLOYEES_BLOB).unwrap();
    assert_eq!(loaded, employees);
}

#[test]
fn test_ledger_state_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut ledger = file_ledger(&temp_dir);
        ledger
            .import(&table(&["Regular,E1,Ana,2024-01-10,2024-01-15,Finance"]))
            .unwrap();
        ledger.add_employee(Employee::new("E1", "Ana")).unwrap();
    }

    let ledger = file_ledger(&temp_dir);
    assert_eq!(ledger.vacations().len(), 1);
    assert_eq!(ledger.vacations()[0].department.as_deref(), Some("Finance"));
    assert_eq!(ledger.employees(), [Employee::new("E1", "Ana")]);
}

#[test]
fn test_orphaned_employee_id_is_tolerated() {
    let mut ledger = VacationLedger::open(MemoryBlobStore::new()).unwrap();
    ledger.add_employee(Employee::new("E1", "Ana")).unwrap();

    let outcome = ledger
        .add_vacations(vec![vacation("E404", "2024-01-10", "2024-01-15")])
        .unwrap();
    assert!(outcome.is_committed());
}

#[test]
fn test_corrupt_blob_restarts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("vacations.json"), "[{\"broken\":").unwrap();

    let ledger = file_ledger(&temp_dir);
    assert!(ledger.vacations().is_empty());
}

#[test]
fn test_stored_blob_format() {
    let mut ledger = VacationLedger::open(MemoryBlobStore::new()).unwrap();
    ledger
        .add_vacations(vec![vacation("E1", "2024-01-10", "2024-01-15")])
        .unwrap();

    let json = ledger.store().get(VACATIONS_BLOB).unwrap().unwrap();
    assert_eq!(
        json,
        r#"[{"type":"Regular","employeeId":"E1","employeeName":"Test Employee","startDate":"2024-01-10","endDate":"2024-01-15"}]"#
    );
}

// =============================================================================
// SECTION 6: Configuration
// =============================================================================

#[test]
fn test_sample_config_loads() {
    let loader = ConfigLoader::load("./config/ledger.yaml").expect("Failed to load config");
    assert!(!loader.config().validation.check_within_batch);
}

#[test]
fn test_config_enables_within_batch_check() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ledger.yaml");
    fs::write(
        &config_path,
        format!(
            "storage:\n  data_dir: {}\nvalidation:\n  check_within_batch: true\n",
            temp_dir.path().join("data").display()
        ),
    )
    .unwrap();

    let config = ConfigLoader::load(&config_path).unwrap().into_config();
    let mut ledger = VacationLedger::from_config(&config).unwrap();

    let outcome = ledger
        .import(&table(&[
            "Regular,E1,Ana,2024-01-01,2024-01-05,",
            "Sick,E1,Ana,2024-01-03,2024-01-04,",
        ]))
        .unwrap();
    assert_eq!(
        outcome.errors(),
        ["Row 2: Overlapping vacation dates".to_string()]
    );
}

#[test]
fn test_invalid_month_rejected() {
    assert!(matches!(
        YearMonth::new(2024, 13),
        Err(LedgerError::InvalidMonth { .. })
    ));
}
