//! Recognized import columns and header matching.

/// A column of the import table that maps to a [`Vacation`](crate::models::Vacation) field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// The vacation type.
    Type,
    /// The employee identifier.
    EmployeeId,
    /// The employee display name.
    EmployeeName,
    /// The first vacation day.
    StartDate,
    /// The last vacation day.
    EndDate,
    /// The optional department.
    Department,
}

impl Column {
    /// All columns, required ones first.
    pub const ALL: [Column; 6] = [
        Column::Type,
        Column::EmployeeId,
        Column::EmployeeName,
        Column::StartDate,
        Column::EndDate,
        Column::Department,
    ];

    /// The canonical header name.
    pub fn header_name(self) -> &'static str {
        match self {
            Column::Type => "type",
            Column::EmployeeId => "employeeId",
            Column::EmployeeName => "employeeName",
            Column::StartDate => "startDate",
            Column::EndDate => "endDate",
            Column::Department => "department",
        }
    }

    /// Returns true if a row must have a non-empty value in this column.
    pub fn is_required(self) -> bool {
        self != Column::Department
    }

    /// Matches a header cell to a column.
    ///
    /// Matching ignores case, spaces, underscores and dashes, so
    /// `employeeId`, `Employee ID` and `employee_id` all match.
    ///
    /// ```
    /// use vacation_ledger::import::Column;
    ///
    /// assert_eq!(Column::from_header("Start Date"), Some(Column::StartDate));
    /// assert_eq!(Column::from_header("notes"), None);
    /// ```
    pub fn from_header(header: &str) -> Option<Column> {
        let normalized = normalize(header);
        Column::ALL
            .into_iter()
            .find(|column| normalize(column.header_name()) == normalized)
    }
}

fn normalize(header: &str) -> String {
    header
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
