//! Vector map resource on disk and its coverage against the region dataset.

use contracts::domain::a001_region::dataset;
use contracts::shared::region_map::coverage::{check_coverage, CoverageReport, CoverageStatus};
use contracts::shared::region_map::MapError;
use std::path::Path;

pub fn read_markup(path: &Path) -> Result<String, MapError> {
    std::fs::read_to_string(path)
        .map_err(|e| MapError::fetch(format!("{}: {}", path.display(), e)))
}

/// Bind the full dataset against the resource at `path`.
pub fn coverage_of(path: &Path) -> CoverageReport {
    match read_markup(path) {
        Ok(markup) => check_coverage(&markup, dataset::all()),
        Err(e) => CoverageReport::unreadable(&e),
    }
}

pub fn log_coverage(report: &CoverageReport) {
    match report.status {
        CoverageStatus::Ready => {
            tracing::info!("Map coverage: all {} regions bound", report.matched)
        }
        CoverageStatus::Partial => tracing::warn!(
            "Map coverage: {} regions bound, missing {:?}",
            report.matched,
            report.missing
        ),
        CoverageStatus::NoRegionsMatched | CoverageStatus::Unreadable => tracing::error!(
            "Map coverage: {}",
            report.message.as_deref().unwrap_or("unknown error")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "region-map-{}-{}.svg",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_coverage_of_partial_resource() {
        let path = write_temp(
            "partial",
            r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="IDBA"/><path id="IDJK"/></svg>"#,
        );
        let report = coverage_of(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(report.status, CoverageStatus::Partial);
        assert_eq!(report.matched, 2);
        assert_eq!(report.missing.len(), dataset::all().len() - 2);
        assert!(!report.missing.contains(&"IDBA".to_string()));
    }

    #[test]
    fn test_coverage_of_full_resource() {
        let paths: String = dataset::all()
            .iter()
            .map(|r| format!(r#"<path id="{}"/>"#, r.id))
            .collect();
        let path = write_temp("full", &format!("<svg>{}</svg>", paths));
        let report = coverage_of(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(report.status, CoverageStatus::Ready);
        assert_eq!(report.matched, dataset::all().len());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let report = coverage_of(Path::new("/definitely/not/here/indonesia.svg"));
        assert_eq!(report.status, CoverageStatus::Unreadable);
        assert!(report.message.unwrap().contains("indonesia.svg"));
    }
}
