//! Garden export/import JSON and share-link encoding.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::error::{GardenError, Result};
use crate::models::garden::{
    is_valid_grid_size, Garden, PestIssue, PlacedPlant, RotationHistory, DEFAULT_GRID_SIZE,
};

pub const EXPORT_VERSION: &str = "1.0";
/// Query parameter carrying a shared garden.
pub const SHARE_PARAM: &str = "garden";

fn default_name() -> String {
    "Imported Garden".to_string()
}

fn default_size() -> u32 {
    DEFAULT_GRID_SIZE
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenExport {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_size")]
    pub size: u32,
    pub plants: Vec<PlacedPlant>,
    #[serde(default)]
    pub pest_issues: Vec<PestIssue>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub rotation_history: RotationHistory,
    pub exported_at: Option<DateTime<Utc>>,
    pub version: Option<String>,
}

impl GardenExport {
    pub fn from_garden(garden: &Garden) -> Self {
        Self {
            name: garden.name.clone(),
            size: garden.size,
            plants: garden.plants.clone(),
            pest_issues: garden.pest_issues.clone(),
            rotation_history: garden.rotation_history.clone(),
            exported_at: Some(Utc::now()),
            version: Some(EXPORT_VERSION.to_string()),
        }
    }

    /// Plants that fit inside the exported grid, one per cell. The first plant listed
    /// for a cell wins.
    pub fn placeable_plants(&self) -> Vec<PlacedPlant> {
        let mut plants: Vec<PlacedPlant> = Vec::with_capacity(self.plants.len());
        for plant in &self.plants {
            if plant.x >= self.size || plant.y >= self.size {
                continue;
            }
            if plants.iter().any(|p| p.x == plant.x && p.y == plant.y) {
                continue;
            }
            plants.push(plant.clone());
        }
        plants
    }
}

/// Parses an exported garden. `None` when the payload is not JSON, has no `plants`
/// array, or carries an unsupported grid size.
pub fn parse_export(json: &str) -> Option<GardenExport> {
    let value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Rejected garden import: invalid JSON ({e})");
            return None;
        }
    };
    if !value.get("plants").is_some_and(Value::is_array) {
        log::warn!("Rejected garden import: missing 'plants' array");
        return None;
    }
    let export: GardenExport = match serde_json::from_value(value) {
        Ok(export) => export,
        Err(e) => {
            log::warn!("Rejected garden import: {e}");
            return None;
        }
    };
    if !is_valid_grid_size(export.size) {
        log::warn!("Rejected garden import: grid size {}", export.size);
        return None;
    }
    Some(export)
}

/// base64(uri-encode(json))
pub fn encode_share_payload(export: &GardenExport) -> Result<String> {
    let json = serde_json::to_string(export)?;
    let uri_encoded = urlencoding::encode(&json);
    Ok(general_purpose::STANDARD.encode(uri_encoded.as_bytes()))
}

/// Reverses [`encode_share_payload`]. Accepts the payload as it appears in a link,
/// percent-escaped or not.
pub fn decode_share_payload(payload: &str) -> Result<String> {
    let unescaped = urlencoding::decode(payload.trim())
        .map_err(|e| GardenError::InvalidShareLink(e.to_string()))?;
    let bytes = general_purpose::STANDARD
        .decode(unescaped.as_bytes())
        .map_err(|e| GardenError::InvalidShareLink(e.to_string()))?;
    let uri_encoded =
        String::from_utf8(bytes).map_err(|e| GardenError::InvalidShareLink(e.to_string()))?;
    let json = urlencoding::decode(&uri_encoded)
        .map_err(|e| GardenError::InvalidShareLink(e.to_string()))?;
    Ok(json.into_owned())
}

pub fn share_link(base_url: &str, export: &GardenExport) -> Result<String> {
    let payload = encode_share_payload(export)?;
    let separator = if base_url.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{base_url}{separator}{SHARE_PARAM}={}",
        urlencoding::encode(&payload)
    ))
}

/// Pulls the share payload out of a full link; anything else is returned as-is.
pub fn extract_share_payload(link_or_payload: &str) -> &str {
    let Some((_, query)) = link_or_payload.split_once('?') else {
        return link_or_payload;
    };
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(SHARE_PARAM)?.strip_prefix('='))
        .unwrap_or(link_or_payload)
}
