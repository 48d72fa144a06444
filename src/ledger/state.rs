//! The ledger state holder.
//!
//! [`VacationLedger`] owns the in-memory vacation and employee lists and the
//! [`BlobStore`] they are mirrored to. Reads go straight to the aggregators;
//! every mutation is written to the store before it is applied in memory, so
//! a failed write leaves the ledger as it was.

use tracing::{info, warn};

use crate::calculation::{MonthGrid, YearStats, month_grid, year_stats};
use crate::config::LedgerConfig;
use crate::dates::YearMonth;
use crate::error::LedgerResult;
use crate::import::{ImportOptions, parse_vacation_table};
use crate::models::{Employee, Vacation};
use crate::storage::{BlobStore, EMPLOYEES_BLOB, FileBlobStore, VACATIONS_BLOB, load, save};
use crate::validation::{ValidationOptions, ValidationReport, validate_vacations_with};

use super::outcome::{ImportOutcome, ImportPreview};

/// Vacation and employee lists backed by a blob store.
///
/// # Example
///
/// ```
/// use vacation_ledger::dates::YearMonth;
/// use vacation_ledger::ledger::VacationLedger;
/// use vacation_ledger::storage::MemoryBlobStore;
///
/// let mut ledger = VacationLedger::open(MemoryBlobStore::new())?;
/// let outcome = ledger.import(
///     "type,employeeId,employeeName,startDate,endDate\n\
///      Regular,E1,Ana,2024-03-30,2024-04-02\n",
/// )?;
/// assert!(outcome.is_committed());
///
/// let grid = ledger.month_grid(YearMonth::new(2024, 3)?);
/// assert_eq!(grid.get("E1").unwrap().total(), 2);
/// # Ok::<(), vacation_ledger::error::LedgerError>(())
/// ```
#[derive(Debug)]
pub struct VacationLedger<S: BlobStore> {
    store: S,
    vacations: Vec<Vacation>,
    employees: Vec<Employee>,
    validation: ValidationOptions,
    import: ImportOptions,
}

impl VacationLedger<FileBlobStore> {
    /// Opens the ledger described by `config`, restoring any saved state.
    pub fn from_config(config: &LedgerConfig) -> LedgerResult<Self> {
        let store = FileBlobStore::open(&config.storage.data_dir)?;
        Ok(Self::open(store)?.with_options(config.validation, config.import))
    }
}

impl<S: BlobStore> VacationLedger<S> {
    /// Opens a ledger on `store`, loading both lists.
    ///
    /// Missing or corrupt blobs start as empty lists; a store that cannot be
    /// read is an error.
    pub fn open(store: S) -> LedgerResult<Self> {
        let vacations: Vec<Vacation> = load(&store, VACATIONS_BLOB)?;
        let employees: Vec<Employee> = load(&store, EMPLOYEES_BLOB)?;

        info!(
            vacations = vacations.len(),
            employees = employees.len(),
            "Restored ledger state"
        );

        Ok(Self {
            store,
            vacations,
            employees,
            validation: ValidationOptions::default(),
            import: ImportOptions::default(),
        })
    }

    /// Replaces the validation and import options.
    pub fn with_options(mut self, validation: ValidationOptions, import: ImportOptions) -> Self {
        self.validation = validation;
        self.import = import;
        self
    }

    /// The accepted vacations, in acceptance order.
    pub fn vacations(&self) -> &[Vacation] {
        &self.vacations
    }

    /// The known employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the ledger, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validates `candidates` against the accepted vacations without adding them.
    pub fn validate(&self, candidates: &[Vacation]) -> ValidationReport {
        validate_vacations_with(candidates, &self.vacations, &self.validation)
    }

    /// Parses and validates pasted text without changing anything.
    pub fn preview_import(&self, text: &str) -> LedgerResult<ImportPreview> {
        let batch = parse_vacation_table(text, &self.import)?;
        let validation = if batch.is_clean() {
            self.validate(&batch.vacations)
        } else {
            ValidationReport::new()
        };

        Ok(ImportPreview { batch, validation })
    }

    /// Imports pasted text, all rows or none.
    ///
    /// Returns `Rejected` with every message when any row has a problem.
    /// Otherwise the new vacation list is saved and then applied in memory.
    /// Text with no data rows commits nothing.
    ///
    /// # Errors
    ///
    /// `Import` when the text cannot be read as a table, `Storage` or
    /// `Serialization` when the new list cannot be saved; the ledger is
    /// unchanged in both cases.
    pub fn import(&mut self, text: &str) -> LedgerResult<ImportOutcome> {
        let preview = self.preview_import(text)?;
        if !preview.batch.is_clean() || !preview.validation.is_valid() {
            return Ok(self.reject(preview.errors()));
        }
        self.commit_vacations(preview.batch.vacations)
    }

    /// Adds already-typed vacations, all or none, with the same checks as
    /// [`import`](Self::import).
    pub fn add_vacations(&mut self, candidates: Vec<Vacation>) -> LedgerResult<ImportOutcome> {
        let report = self.validate(&candidates);
        if !report.is_valid() {
            return Ok(self.reject(report.messages()));
        }
        self.commit_vacations(candidates)
    }

    /// Adds an employee, replacing any existing employee with the same id.
    pub fn add_employee(&mut self, employee: Employee) -> LedgerResult<()> {
        let mut employees = self.employees.clone();
        match employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => *existing = employee,
            None => employees.push(employee),
        }
        self.replace_employees(employees)
    }

    /// Replaces the whole employee list.
    pub fn replace_employees(&mut self, employees: Vec<Employee>) -> LedgerResult<()> {
        save(&mut self.store, EMPLOYEES_BLOB, &employees)?;
        info!(employees = employees.len(), "Saved employee list");
        self.employees = employees;
        Ok(())
    }

    /// Writes both lists to the store.
    ///
    /// Mutations save the list they change; this re-saves everything, e.g.
    /// after the store recovers from an earlier failure.
    pub fn persist(&mut self) -> LedgerResult<()> {
        save(&mut self.store, VACATIONS_BLOB, &self.vacations)?;
        save(&mut self.store, EMPLOYEES_BLOB, &self.employees)
    }

    /// The calendar grid for `month`.
    pub fn month_grid(&self, month: YearMonth) -> MonthGrid {
        month_grid(&self.vacations, month)
    }

    /// The statistics for `year`.
    pub fn year_stats(&self, year: i32) -> YearStats {
        year_stats(&self.vacations, year)
    }

    fn reject(&self, errors: Vec<String>) -> ImportOutcome {
        warn!(errors = errors.len(), "Rejected vacation batch");
        ImportOutcome::Rejected { errors }
    }

    fn commit_vacations(&mut self, batch: Vec<Vacation>) -> LedgerResult<ImportOutcome> {
        let count = batch.len();
        if count == 0 {
            return Ok(ImportOutcome::Committed { count });
        }

        let mut vacations = Vec::with_capacity(self.vacations.len() + count);
        vacations.extend_from_slice(&self.vacations);
        vacations.extend(batch);

        save(&mut self.store, VACATIONS_BLOB, &vacations)?;
        self.vacations = vacations;

        info!(
            added = count,
            total = self.vacations.len(),
            "Committed vacation batch"
        );
        Ok(ImportOutcome::Committed { count })
    }
}
