use actix_web::{delete, get, http::Method, post, web, HttpResponse, Responder};

use crate::{
    api::{error::not_found, handlers::current_year, lock, SharedStore},
    models::request::{
        link, links, ApiResponse, CalendarApiResponse, CareApiResponse, ErrorResponse,
        HarmonyApiResponse, LimitQuery, Links, RotationApiResponse, RotationReport,
        SuggestionsApiResponse, YearQuery,
    },
    store::GardenStore,
};

const DEFAULT_SUGGESTION_LIMIT: usize = 5;

fn garden_link() -> Links {
    links([("garden", link("/api/garden", Method::GET))])
}

fn rotation_report(store: &GardenStore, year: i32) -> RotationReport {
    RotationReport {
        year,
        warnings: store.rotation_warnings(year),
        suggestions: store.rotation_suggestions(),
    }
}

fn rotation_links() -> Links {
    links([
        ("self", link("/api/garden/rotation", Method::GET)),
        ("save", link("/api/garden/rotation", Method::POST)),
        ("clear", link("/api/garden/rotation", Method::DELETE)),
        ("garden", link("/api/garden", Method::GET)),
    ])
}

/// GET /api/garden/relationships
/// Adjacent companion and antagonist pairs with the garden harmony score.
#[utoipa::path(
    get,
    path = "/api/garden/relationships",
    tag = "insights",
    responses((status = 200, description = "Harmony report", body = HarmonyApiResponse))
)]
#[get("/garden/relationships")]
pub async fn get_relationships(store: SharedStore) -> impl Responder {
    let report = lock(&store).relationships();
    HttpResponse::Ok().json(ApiResponse::new(report, garden_link()))
}

/// GET /api/garden/calendar
/// Date-sorted planting events for the configured zone.
#[utoipa::path(
    get,
    path = "/api/garden/calendar",
    tag = "insights",
    params(YearQuery),
    responses((status = 200, description = "Planting calendar", body = CalendarApiResponse))
)]
#[get("/garden/calendar")]
pub async fn get_calendar(store: SharedStore, query: web::Query<YearQuery>) -> impl Responder {
    let year = query.year.unwrap_or_else(current_year);
    let events = lock(&store).calendar(year);
    HttpResponse::Ok().json(ApiResponse::new(events, garden_link()))
}

/// GET /api/garden/care
#[utoipa::path(
    get,
    path = "/api/garden/care",
    tag = "insights",
    responses((status = 200, description = "Watering and yield summary", body = CareApiResponse))
)]
#[get("/garden/care")]
pub async fn get_care(store: SharedStore) -> impl Responder {
    let summary = lock(&store).care_summary();
    HttpResponse::Ok().json(ApiResponse::new(summary, garden_link()))
}

/// GET /api/garden/suggestions/{plantId}
/// Best empty cells for a plant, highest companion score first.
#[utoipa::path(
    get,
    path = "/api/garden/suggestions/{plantId}",
    tag = "insights",
    params(("plantId" = String, Path, description = "Plant id"), LimitQuery),
    responses(
        (status = 200, description = "Suggested cells", body = SuggestionsApiResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/garden/suggestions/{plant_id}")]
pub async fn get_suggestions(
    store: SharedStore,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> impl Responder {
    let plant_id = path.into_inner();
    let store = lock(&store);
    if !store.catalog().contains(&plant_id) {
        return not_found(format!("Plant '{plant_id}' not found."));
    }
    let suggestions =
        store.placement_suggestions(&plant_id, query.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT));
    HttpResponse::Ok().json(ApiResponse::new(
        suggestions,
        links([
            ("place", link("/api/garden/plants", Method::POST)),
            ("plant", link(format!("/api/plants/{plant_id}"), Method::GET)),
        ]),
    ))
}

/// GET /api/garden/rotation
/// Same-family warnings against recorded years, and what to plant next.
#[utoipa::path(
    get,
    path = "/api/garden/rotation",
    tag = "rotation",
    params(YearQuery),
    responses((status = 200, description = "Rotation report", body = RotationApiResponse))
)]
#[get("/garden/rotation")]
pub async fn get_rotation(store: SharedStore, query: web::Query<YearQuery>) -> impl Responder {
    let year = query.year.unwrap_or_else(current_year);
    let report = rotation_report(&lock(&store), year);
    HttpResponse::Ok().json(ApiResponse::new(report, rotation_links()))
}

/// POST /api/garden/rotation
/// Records the current layout under `year`, replacing any earlier record.
#[utoipa::path(
    post,
    path = "/api/garden/rotation",
    tag = "rotation",
    params(YearQuery),
    responses((status = 200, description = "Year recorded", body = RotationApiResponse))
)]
#[post("/garden/rotation")]
pub async fn save_rotation(store: SharedStore, query: web::Query<YearQuery>) -> impl Responder {
    let year = query.year.unwrap_or_else(current_year);
    let mut store = lock(&store);
    store.save_to_rotation_history(year);
    log::info!("Saved rotation history for {year}");
    HttpResponse::Ok().json(ApiResponse::new(rotation_report(&store, year), rotation_links()))
}

/// DELETE /api/garden/rotation
#[utoipa::path(
    delete,
    path = "/api/garden/rotation",
    tag = "rotation",
    responses((status = 204, description = "Rotation history cleared"))
)]
#[delete("/garden/rotation")]
pub async fn clear_rotation(store: SharedStore) -> impl Responder {
    lock(&store).clear_rotation_history();
    HttpResponse::NoContent().finish()
}
