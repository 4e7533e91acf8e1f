// src/model.rs

//! Input models for the two review documents.
//!
//! Every field is optional. Absent keys and explicit `null`s fall back to an
//! empty string, list or object, and scalar values of the wrong JSON type are
//! rendered as text instead of being rejected. Only a structurally impossible
//! shape (for example `Issues` given as a number) fails to deserialize.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Root of the reports document: `{ "Reports": [ ... ] }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportsRoot {
    #[serde(rename = "Reports", deserialize_with = "null_as_default")]
    pub reports: Vec<Report>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Report {
    #[serde(rename = "ExtractedDocuments", deserialize_with = "null_as_default")]
    pub extracted_documents: Vec<Document>,
}

/// A borrower document pulled out of a report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(rename = "Assessment", deserialize_with = "text")]
    pub assessment: String,
    #[serde(rename = "DocumentTitle", deserialize_with = "text")]
    pub document_title: String,
    /// Lowercase-`t` spelling seen in some upstream exports.
    #[serde(rename = "Documenttitle", deserialize_with = "text")]
    pub document_title_alt: String,
    #[serde(rename = "DocumentType", deserialize_with = "text")]
    pub document_type: String,
    #[serde(rename = "BorrowerItemType", deserialize_with = "text")]
    pub borrower_item_type: String,
    #[serde(rename = "Names", deserialize_with = "text_list")]
    pub names: Vec<String>,
    #[serde(rename = "DateOrPeriod", deserialize_with = "text")]
    pub date_or_period: String,
    #[serde(rename = "ExtraInfo")]
    pub extra_info: Option<ExtraInfo>,
    #[serde(rename = "Issues", deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
}

impl Document {
    /// `DocumentTitle`, falling back to `Documenttitle` when the former is
    /// absent or empty.
    pub fn title(&self) -> &str {
        if self.document_title.is_empty() {
            &self.document_title_alt
        } else {
            &self.document_title
        }
    }

    /// `ExtraInfo.AccountType`, empty when either level is missing.
    pub fn account_type(&self) -> &str {
        self.extra_info
            .as_ref()
            .map(|extra| extra.account_type.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExtraInfo {
    #[serde(rename = "AccountType", deserialize_with = "text")]
    pub account_type: String,
}

/// A single finding. `title` is only meaningful in the summary document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Issue {
    #[serde(rename = "Severity", deserialize_with = "text")]
    pub severity: String,
    #[serde(rename = "IssueType", deserialize_with = "text")]
    pub issue_type: String,
    #[serde(rename = "Description", deserialize_with = "text")]
    pub description: String,
    #[serde(rename = "Recommendation", deserialize_with = "text")]
    pub recommendation: String,
    #[serde(rename = "Title", deserialize_with = "text")]
    pub title: String,
}

/// Root of the summary document: `{ "Report": { ... } }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummaryRoot {
    #[serde(rename = "Report", deserialize_with = "null_as_default")]
    pub report: SummaryReport,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummaryReport {
    #[serde(rename = "Summary", deserialize_with = "text")]
    pub summary: String,
    #[serde(rename = "Assessment", deserialize_with = "text")]
    pub assessment: String,
    #[serde(rename = "Issues", deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
}

/// Render any JSON value as a cell.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        // compact JSON for nested structures
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| value_text(&v))
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(value_text).collect(),
        scalar => vec![value_text(&scalar)],
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_yields_defaults() {
        let root: ReportsRoot = serde_json::from_value(json!({})).unwrap();
        assert!(root.reports.is_empty());

        let summary: SummaryRoot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(summary.report.summary, "");
        assert!(summary.report.issues.is_empty());
    }

    #[test]
    fn nulls_are_treated_as_absent() {
        let root: ReportsRoot = serde_json::from_value(json!({
            "Reports": [
                { "ExtractedDocuments": null },
                { "ExtractedDocuments": [
                    { "Names": null, "ExtraInfo": null, "Issues": null, "Assessment": null }
                ]}
            ]
        }))
        .unwrap();

        assert!(root.reports[0].extracted_documents.is_empty());
        let doc = &root.reports[1].extracted_documents[0];
        assert!(doc.names.is_empty());
        assert!(doc.issues.is_empty());
        assert_eq!(doc.assessment, "");
        assert_eq!(doc.account_type(), "");

        let summary: SummaryRoot = serde_json::from_value(json!({ "Report": null })).unwrap();
        assert!(summary.report.issues.is_empty());
    }

    #[test]
    fn account_type_is_nested_lookup() {
        let doc: Document =
            serde_json::from_value(json!({ "ExtraInfo": { "AccountType": "Checking" } })).unwrap();
        assert_eq!(doc.account_type(), "Checking");

        let doc: Document = serde_json::from_value(json!({ "ExtraInfo": {} })).unwrap();
        assert_eq!(doc.account_type(), "");
    }

    #[test]
    fn non_string_scalars_are_rendered() {
        let issue: Issue = serde_json::from_value(json!({
            "Severity": 3,
            "IssueType": true,
            "Description": { "a": 1 },
            "Recommendation": [1, "x"]
        }))
        .unwrap();

        assert_eq!(issue.severity, "3");
        assert_eq!(issue.issue_type, "True");
        assert_eq!(issue.description, r#"{"a":1}"#);
        assert_eq!(issue.recommendation, r#"[1,"x"]"#);
        assert_eq!(issue.title, "");
    }

    #[test]
    fn names_accept_scalar_and_mixed_lists() {
        let doc: Document = serde_json::from_value(json!({ "Names": "Alice" })).unwrap();
        assert_eq!(doc.names, vec!["Alice"]);

        let doc: Document = serde_json::from_value(json!({ "Names": ["Alice", 7] })).unwrap();
        assert_eq!(doc.names, vec!["Alice", "7"]);
    }

    #[test]
    fn lowercase_title_spelling_is_accepted() {
        let doc: Document =
            serde_json::from_value(json!({ "Documenttitle": "Bank Statement" })).unwrap();
        assert_eq!(doc.title(), "Bank Statement");
    }

    #[test]
    fn both_title_spellings_prefer_canonical() {
        let doc: Document = serde_json::from_value(json!({
            "DocumentTitle": "Statement",
            "Documenttitle": "statement"
        }))
        .unwrap();
        assert_eq!(doc.title(), "Statement");

        let doc: Document = serde_json::from_value(json!({
            "DocumentTitle": "",
            "Documenttitle": "statement"
        }))
        .unwrap();
        assert_eq!(doc.title(), "statement");
    }

    #[test]
    fn false_renders_capitalized() {
        let issue: Issue = serde_json::from_value(json!({ "Severity": false })).unwrap();
        assert_eq!(issue.severity, "False");
    }

    #[test]
    fn repeated_key_is_rejected() {
        let err = serde_json::from_str::<Issue>(r#"{"Severity":"High","Severity":"Low"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate field"));
    }

    #[test]
    fn wrong_container_shape_is_rejected() {
        let err = serde_json::from_value::<Document>(json!({ "Issues": "none" }));
        assert!(err.is_err());
    }
}
