//! Headless check of a vector resource against a dataset.

use super::binder::{BindStatus, MapBinder};
use super::document::SvgDocument;
use super::error::MapError;
use super::interaction::NoopSink;
use crate::domain::a001_region::Region;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Ready,
    Partial,
    NoRegionsMatched,
    Unreadable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub status: CoverageStatus,
    pub matched: usize,
    pub missing: Vec<String>,
    pub message: Option<String>,
}

impl CoverageReport {
    pub fn unreadable(error: &MapError) -> Self {
        Self {
            status: CoverageStatus::Unreadable,
            matched: 0,
            missing: Vec::new(),
            message: Some(error.to_string()),
        }
    }
}

/// Parse `markup` and bind `dataset` against it without any interaction.
pub fn check_coverage(markup: &str, dataset: &[Region]) -> CoverageReport {
    let document = match SvgDocument::parse(markup) {
        Ok(document) => document,
        Err(e) => return CoverageReport::unreadable(&e),
    };

    let mut binder = MapBinder::new(document);
    match binder.bind(dataset, NoopSink) {
        Ok(status @ BindStatus::Partial { .. }) => CoverageReport {
            status: CoverageStatus::Partial,
            matched: binder.bindings().len(),
            missing: status.missing().iter().map(|id| id.to_string()).collect(),
            message: status.warning().map(str::to_string),
        },
        Ok(_) => CoverageReport {
            status: CoverageStatus::Ready,
            matched: binder.bindings().len(),
            missing: Vec::new(),
            message: None,
        },
        Err(e) => CoverageReport {
            status: CoverageStatus::NoRegionsMatched,
            matched: 0,
            missing: dataset.iter().map(|r| r.id.to_string()).collect(),
            message: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_region::dataset::bare_region;

    const DATASET: [Region; 2] = [bare_region("BA", "Bali"), bare_region("JK", "Jakarta")];

    #[test]
    fn test_partial_coverage() {
        let report = check_coverage(
            r#"<svg><path id="BA"/><path id="XX"/></svg>"#,
            &DATASET,
        );
        assert_eq!(report.status, CoverageStatus::Partial);
        assert_eq!(report.matched, 1);
        assert_eq!(report.missing, vec!["JK".to_string()]);
        assert!(report.message.is_some());
    }

    #[test]
    fn test_full_and_empty_coverage() {
        let full = check_coverage(r#"<svg><path id="BA"/><path id="JK"/></svg>"#, &DATASET);
        assert_eq!(full.status, CoverageStatus::Ready);
        assert_eq!(full.matched, 2);

        let none = check_coverage(r#"<svg><path id="XX"/></svg>"#, &DATASET);
        assert_eq!(none.status, CoverageStatus::NoRegionsMatched);
        assert_eq!(none.missing.len(), 2);
    }

    #[test]
    fn test_unreadable_resource() {
        let report = check_coverage("not a document", &DATASET);
        assert_eq!(report.status, CoverageStatus::Unreadable);
        assert!(report.message.is_some());
    }

    #[test]
    fn test_report_serializes() {
        let report = check_coverage(r#"<svg><path id="BA"/></svg>"#, &DATASET);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "partial");
        assert_eq!(json["missing"][0], "JK");
    }
}
