use actix_web::{get, http::Method, put, web, HttpResponse, Responder};

use crate::{
    api::{lock, SharedStore},
    data::zones::is_supported_zone,
    error::{GardenError, Result},
    models::request::{
        link, links, ApiResponse, ErrorResponse, Links, Preferences, PreferencesApiResponse,
        PreferencesRequest,
    },
    store::GardenStore,
};

fn preferences(store: &GardenStore) -> Preferences {
    Preferences {
        zone: store.zone(),
        soil_type: store.soil_type(),
        has_visited: store.has_visited(),
    }
}

fn preference_links() -> Links {
    links([
        ("self", link("/api/preferences", Method::GET)),
        ("update", link("/api/preferences", Method::PUT)),
        ("calendar", link("/api/garden/calendar", Method::GET)),
    ])
}

/// GET /api/preferences
#[utoipa::path(
    get,
    path = "/api/preferences",
    tag = "preferences",
    responses((status = 200, description = "Current preferences", body = PreferencesApiResponse))
)]
#[get("/preferences")]
pub async fn get_preferences(store: SharedStore) -> impl Responder {
    let prefs = preferences(&lock(&store));
    HttpResponse::Ok().json(ApiResponse::new(prefs, preference_links()))
}

/// PUT /api/preferences
/// Updates the provided fields only. Nothing changes when the zone is rejected.
#[utoipa::path(
    put,
    path = "/api/preferences",
    tag = "preferences",
    request_body = PreferencesRequest,
    responses(
        (status = 200, description = "Updated preferences", body = PreferencesApiResponse),
        (status = 400, description = "Unsupported zone", body = ErrorResponse),
    )
)]
#[put("/preferences")]
pub async fn update_preferences(
    store: SharedStore,
    body: web::Json<PreferencesRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    if let Some(zone) = request.zone.filter(|z| !is_supported_zone(*z)) {
        return Err(GardenError::InvalidZone(zone));
    }

    let mut store = lock(&store);
    if let Some(zone) = request.zone {
        store.set_zone(zone)?;
    }
    if let Some(soil_type) = request.soil_type {
        store.set_soil_type(soil_type);
    }
    if request.has_visited == Some(true) {
        store.mark_visited();
    }
    Ok(HttpResponse::Ok().json(ApiResponse::new(preferences(&store), preference_links())))
}
