use crate::shared::api_utils::api_url;
use contracts::shared::region_map::loader::MAP_RESOURCE_PATH;
use contracts::shared::region_map::MapError;
use gloo_net::http::Request;

/// Fetch the map markup once. Non-success statuses and empty bodies are errors.
pub async fn load_map_document() -> Result<String, MapError> {
    let url = api_url(MAP_RESOURCE_PATH);
    log::debug!("Fetching map from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| MapError::fetch(e.to_string()))?;

    if !response.ok() {
        return Err(MapError::from_status(
            response.status(),
            &response.status_text(),
        ));
    }

    let text = response
        .text()
        .await
        .map_err(|e| MapError::fetch(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(MapError::DocumentParse("Map resource is empty.".to_string()));
    }

    Ok(text)
}
