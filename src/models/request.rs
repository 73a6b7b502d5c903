use std::collections::HashMap;

use actix_web::http::Method;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::logic::{
    calendar::{CalendarEvent, Sowing},
    care::CareSummary,
    placement::CellSuggestion,
    relationships::HarmonyReport,
    rotation::{RotationSuggestion, RotationWarning},
};
use crate::models::{
    garden::{Garden, JournalEntry, PestIssue, PlacedPlant, Severity, Stage},
    plant::{Plant, SoilType},
    reminder::{Notification, NotificationKind, Reminder},
};
use crate::store::transfer::GardenExport;

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Collects `(relation, link)` pairs into a [`Links`] map.
pub fn links<I>(entries: I) -> Links
where
    I: IntoIterator<Item = (&'static str, Link)>,
{
    entries
        .into_iter()
        .map(|(rel, link)| (rel.to_string(), link))
        .collect()
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    PlantApiResponse = ApiResponse<Plant>,
    PlantListResponse = ApiResponse<Vec<Plant>>,
    CompanionsApiResponse = ApiResponse<CompanionsResponse>,
    SuccessionApiResponse = ApiResponse<Vec<Sowing>>,
    GardenApiResponse = ApiResponse<Garden>,
    GardenListResponse = ApiResponse<Vec<Garden>>,
    PlacedPlantApiResponse = ApiResponse<PlacedPlant>,
    StageApiResponse = ApiResponse<StageResponse>,
    HistoryApiResponse = ApiResponse<HistoryStatus>,
    HarmonyApiResponse = ApiResponse<HarmonyReport>,
    CalendarApiResponse = ApiResponse<Vec<CalendarEvent>>,
    CareApiResponse = ApiResponse<CareSummary>,
    SuggestionsApiResponse = ApiResponse<Vec<CellSuggestion>>,
    RotationApiResponse = ApiResponse<RotationReport>,
    ExportApiResponse = ApiResponse<GardenExport>,
    ShareLinkApiResponse = ApiResponse<ShareLinkResponse>,
    JournalApiResponse = ApiResponse<JournalEntry>,
    PestApiResponse = ApiResponse<PestIssue>,
    ReminderApiResponse = ApiResponse<Reminder>,
    ReminderListResponse = ApiResponse<Vec<Reminder>>,
    NotificationApiResponse = ApiResponse<Notification>,
    NotificationListResponse = ApiResponse<Vec<Notification>>,
    PreferencesApiResponse = ApiResponse<Preferences>
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Plants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionInfo {
    pub id: String,
    pub name: String,
    pub emoji: String,
}

impl From<&Plant> for CompanionInfo {
    fn from(plant: &Plant) -> Self {
        Self {
            id: plant.id.clone(),
            name: plant.name.clone(),
            emoji: plant.emoji.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionsResponse {
    pub id: String,
    pub name: String,
    pub good: Vec<CompanionInfo>,
    pub bad: Vec<CompanionInfo>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SuccessionQuery {
    /// Weeks between sowings (default 2).
    pub interval_weeks: Option<u32>,
    /// Number of sowings (default 4, at most 52).
    pub rounds: Option<u32>,
    /// Season year (default: current year).
    pub year: Option<i32>,
}

// ---------------------------------------------------------------------------
// Garden
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRequest {
    pub plant_id: String,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GridSizeRequest {
    /// 4, 8 or 12.
    pub size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StageResponse {
    pub x: u32,
    pub y: u32,
    pub stage: Stage,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStatus {
    /// Whether the undo or redo moved the layout.
    pub changed: bool,
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGardenRequest {
    pub name: String,
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RenameGardenRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct YearQuery {
    /// Defaults to the current year.
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Maximum number of cells returned (default 5).
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// Rotation and transfer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotationReport {
    pub year: i32,
    pub warnings: Vec<RotationWarning>,
    pub suggestions: Vec<RotationSuggestion>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShareLinkResponse {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportSharedRequest {
    /// Full share link or bare payload.
    pub link: String,
}

// ---------------------------------------------------------------------------
// Journal, pests, reminders, notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalRequest {
    pub date: Option<NaiveDate>,
    pub text: String,
    pub plant_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PestRequest {
    pub plant_id: String,
    pub pest: String,
    #[serde(default)]
    pub severity: Severity,
    pub notes: Option<String>,
    pub reported_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub title: String,
    pub due_date: NaiveDate,
    pub plant_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SnoozeRequest {
    pub until: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DueQuery {
    /// Only return reminders due on or before this date.
    pub due: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NotificationRequest {
    pub message: String,
    #[serde(default)]
    pub kind: NotificationKind,
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub zone: u8,
    pub soil_type: SoilType,
    pub has_visited: bool,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesRequest {
    pub zone: Option<u8>,
    pub soil_type: Option<SoilType>,
    pub has_visited: Option<bool>,
}
