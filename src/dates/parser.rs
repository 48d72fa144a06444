//! Textual date parsing.
//!
//! Vacation dates arrive as text pasted from spreadsheets, so three layouts
//! are accepted and tried in a fixed priority order.

use chrono::NaiveDate;

/// A textual date layout accepted by [`parse_date`].
///
/// # Example
///
/// ```
/// use vacation_ledger::dates::DateLayout;
/// use chrono::NaiveDate;
///
/// let date = DateLayout::DayMonthDash.parse("05-03-2024");
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5));
/// assert_eq!(DateLayout::IsoDash.parse("05-03-2024"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLayout {
    /// `d/M/yyyy`: one or two digit day and month, four digit year.
    DayMonthSlash,
    /// `dd-MM-yyyy`: zero-padded day and month, four digit year.
    DayMonthDash,
    /// `yyyy-MM-dd`: four digit year, zero-padded month and day.
    IsoDash,
}

impl DateLayout {
    /// All layouts in the order [`parse_date`] tries them.
    pub const ALL: [DateLayout; 3] = [
        DateLayout::DayMonthSlash,
        DateLayout::DayMonthDash,
        DateLayout::IsoDash,
    ];

    /// Returns the layout pattern in day/month/year notation.
    pub fn pattern(self) -> &'static str {
        match self {
            DateLayout::DayMonthSlash => "d/M/yyyy",
            DateLayout::DayMonthDash => "dd-MM-yyyy",
            DateLayout::IsoDash => "yyyy-MM-dd",
        }
    }

    /// Parses `text` with this layout only.
    ///
    /// Returns `None` when the text does not have the layout's shape or the
    /// numbers do not form a real calendar date.
    pub fn parse(self, text: &str) -> Option<NaiveDate> {
        let (separator, widths) = match self {
            DateLayout::DayMonthSlash => ('/', [(1, 2), (1, 2), (4, 4)]),
            DateLayout::DayMonthDash => ('-', [(2, 2), (2, 2), (4, 4)]),
            DateLayout::IsoDash => ('-', [(4, 4), (2, 2), (2, 2)]),
        };

        let mut parts = text.split(separator);
        let mut fields = [0u32; 3];
        for (field, (min, max)) in fields.iter_mut().zip(widths) {
            *field = parse_component(parts.next()?, min, max)?;
        }
        if parts.next().is_some() {
            return None;
        }

        let (year, month, day) = match self {
            DateLayout::DayMonthSlash | DateLayout::DayMonthDash => {
                (fields[2], fields[1], fields[0])
            }
            DateLayout::IsoDash => (fields[0], fields[1], fields[2]),
        };

        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
    }
}

/// Parses an ASCII-digit component whose length lies within `min..=max`.
fn parse_component(part: &str, min: usize, max: usize) -> Option<u32> {
    if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parses a textual date in any accepted layout.
///
/// Tries `d/M/yyyy`, then `dd-MM-yyyy`, then `yyyy-MM-dd`, returning the
/// first layout that yields a valid calendar date. The result depends only
/// on the input text.
///
/// # Example
///
/// ```
/// use vacation_ledger::dates::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
/// assert_eq!(parse_date("5/3/2024"), expected);
/// assert_eq!(parse_date("05-03-2024"), expected);
/// assert_eq!(parse_date("2024-03-05"), expected);
/// assert_eq!(parse_date("31/2/2023"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    DateLayout::ALL
        .iter()
        .find_map(|layout| layout.parse(text))
}
