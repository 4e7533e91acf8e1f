// src/flatten.rs

use tracing::{debug, info};

use crate::{
    model::{Document, Issue, ReportsRoot, SummaryRoot},
    schema::{Column, Record, Screener},
};

/// Separator used when collapsing a document's `Names` into one cell.
pub const NAMES_SEPARATOR: &str = "; ";

/// Output of the flattener: the free-text summary line plus the detail rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Flattened {
    /// `Report.Summary` with surrounding whitespace stripped.
    pub summary_text: String,
    /// Reports rows first, then Summary rows, each in input order.
    pub records: Vec<Record>,
}

/// Merge both documents into the ordered row set.
#[tracing::instrument(level = "info", skip_all)]
pub fn flatten(reports: &ReportsRoot, summary: &SummaryRoot) -> Flattened {
    let mut records = expand_reports(reports);
    let from_reports = records.len();
    records.extend(expand_summary(summary));

    info!(
        reports_rows = from_reports,
        summary_rows = records.len() - from_reports,
        "flattened"
    );

    Flattened {
        summary_text: summary_text(summary),
        records,
    }
}

/// One row per issue of every extracted document, in report/document/issue
/// order. Documents without issues contribute nothing.
pub fn expand_reports(root: &ReportsRoot) -> Vec<Record> {
    let mut out = Vec::new();
    for (r_idx, report) in root.reports.iter().enumerate() {
        for (d_idx, doc) in report.extracted_documents.iter().enumerate() {
            debug!(
                report = r_idx,
                document = d_idx,
                issues = doc.issues.len(),
                title = %doc.title(),
                "expanding document"
            );
            let base = document_base(doc);
            out.extend(doc.issues.iter().map(|issue| document_issue(&base, issue)));
        }
    }
    out
}

/// One row per top-level issue of the summary document.
pub fn expand_summary(root: &SummaryRoot) -> Vec<Record> {
    let report = &root.report;
    debug!(issues = report.issues.len(), "expanding summary");
    report
        .issues
        .iter()
        .map(|issue| {
            Record::new(Screener::Summary)
                .with(Column::Assessment, report.assessment.as_str())
                .with(Column::Severity, issue.severity.as_str())
                .with(Column::IssueType, issue.issue_type.as_str())
                .with(Column::Description, issue.description.as_str())
                .with(Column::Recommendation, issue.recommendation.as_str())
                .with(Column::Title, issue.title.as_str())
        })
        .collect()
}

pub fn summary_text(root: &SummaryRoot) -> String {
    root.report.summary.trim().to_string()
}

/// Document-level columns shared by every issue row of `doc`.
fn document_base(doc: &Document) -> Record {
    Record::new(Screener::Reports)
        .with(Column::Assessment, doc.assessment.as_str())
        .with(Column::DocumentTitle, doc.title())
        .with(Column::DocumentType, doc.document_type.as_str())
        .with(Column::BorrowerItemType, doc.borrower_item_type.as_str())
        .with(Column::Names, doc.names.join(NAMES_SEPARATOR))
        .with(Column::DateOrPeriod, doc.date_or_period.as_str())
        .with(Column::AccountType, doc.account_type())
}

// Title stays empty on report rows; only summary issues carry one.
fn document_issue(base: &Record, issue: &Issue) -> Record {
    base.clone()
        .with(Column::Severity, issue.severity.as_str())
        .with(Column::IssueType, issue.issue_type.as_str())
        .with(Column::Description, issue.description.as_str())
        .with(Column::Recommendation, issue.recommendation.as_str())
}
