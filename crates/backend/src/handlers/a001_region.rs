use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_region::{dataset, Region, RegionSummary};
use contracts::shared::region_map::coverage::CoverageReport;
use contracts::shared::region_map::MapError;

use crate::shared::map_resource;
use crate::AppState;

/// GET /api/regions
pub async fn list_all() -> Json<Vec<RegionSummary>> {
    Json(dataset::all().iter().map(Region::summary).collect())
}

/// GET /api/regions/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Region>, StatusCode> {
    match dataset::find(&id) {
        Some(region) => Ok(Json(*region)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// GET /api/map/coverage
///
/// Re-reads the resource so replacing the file is picked up without a restart.
pub async fn coverage(State(state): State<AppState>) -> Json<CoverageReport> {
    let path = state.config.map.svg_file();
    let report = tokio::task::spawn_blocking(move || map_resource::coverage_of(&path))
        .await
        .unwrap_or_else(|e| CoverageReport::unreadable(&MapError::fetch(e.to_string())));
    Json(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_and_lookup() {
        let Json(list) = list_all().await;
        assert_eq!(list.len(), dataset::all().len());
        assert!(list.iter().any(|r| r.id == "IDBA" && r.name == "Bali"));

        let Json(bali) = get_by_id(Path("IDBA".to_string())).await.unwrap();
        assert_eq!(bali.name, "Bali");

        let missing = get_by_id(Path("XX".to_string())).await;
        assert_eq!(missing.err(), Some(StatusCode::NOT_FOUND));
    }
}
