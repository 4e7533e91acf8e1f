// src/schema/column.rs

use std::fmt;

/// Number of columns in the output schema.
pub const COLUMN_COUNT: usize = 19;

/// One column of the flattened output, in CSV order.
///
/// The review columns (`Assessment Change`, `DocTitleReview`, ...) are never
/// filled by the flattener; they exist so reviewers have somewhere to type in
/// the spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    ScreenerType,
    Assessment,
    AssessmentChange,
    Severity,
    SeverityChange,
    NotesChanges,
    DocumentTitle,
    DocTitleReview,
    DocumentType,
    DocTypeReview,
    BorrowerItemType,
    Names,
    DateOrPeriod,
    AccountType,
    IssueType,
    IssueTypeReview,
    Description,
    Recommendation,
    Title,
}

impl Column {
    /// Every column, in output order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::ScreenerType,
        Column::Assessment,
        Column::AssessmentChange,
        Column::Severity,
        Column::SeverityChange,
        Column::NotesChanges,
        Column::DocumentTitle,
        Column::DocTitleReview,
        Column::DocumentType,
        Column::DocTypeReview,
        Column::BorrowerItemType,
        Column::Names,
        Column::DateOrPeriod,
        Column::AccountType,
        Column::IssueType,
        Column::IssueTypeReview,
        Column::Description,
        Column::Recommendation,
        Column::Title,
    ];

    /// Header text as it appears in the CSV.
    pub const fn name(self) -> &'static str {
        match self {
            Column::ScreenerType => "ScreenerType",
            Column::Assessment => "Assessment",
            Column::AssessmentChange => "Assessment Change",
            Column::Severity => "Severity",
            Column::SeverityChange => "Severity Change",
            Column::NotesChanges => "Notes-Changes",
            Column::DocumentTitle => "DocumentTitle",
            Column::DocTitleReview => "DocTitleReview",
            Column::DocumentType => "DocumentType",
            Column::DocTypeReview => "DocTypeReview",
            Column::BorrowerItemType => "BorrowerItemType",
            Column::Names => "Names",
            Column::DateOrPeriod => "DateOrPeriod",
            Column::AccountType => "AccountType",
            Column::IssueType => "IssueType",
            Column::IssueTypeReview => "IssueTypeReview",
            Column::Description => "Description",
            Column::Recommendation => "Recommendation",
            Column::Title => "Title",
        }
    }

    /// Position of this column within a row.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The header row.
    pub fn header() -> [&'static str; COLUMN_COUNT] {
        Column::ALL.map(Column::name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a row came from; written into `ScreenerType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screener {
    Reports,
    Summary,
}

impl Screener {
    pub const fn as_str(self) -> &'static str {
        match self {
            Screener::Reports => "Reports",
            Screener::Summary => "Summary",
        }
    }
}
