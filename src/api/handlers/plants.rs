use actix_web::{get, http::Method, web, HttpResponse, Responder};

use crate::{
    api::{error::not_found, handlers::current_year, lock, SharedStore},
    logic::{
        calendar::succession_plan,
        filter::{filter_plants, PlantQuery},
    },
    models::{
        plant::Plant,
        request::{
            link, links, ApiResponse, CompanionInfo, CompanionsApiResponse, CompanionsResponse,
            ErrorResponse, Links, PlantApiResponse, PlantListResponse, SuccessionApiResponse,
            SuccessionQuery,
        },
    },
};

const DEFAULT_SUCCESSION_INTERVAL_WEEKS: u32 = 2;
const DEFAULT_SUCCESSION_ROUNDS: u32 = 4;

fn plant_links(id: &str) -> Links {
    links([
        ("self", link(format!("/api/plants/{id}"), Method::GET)),
        ("companions", link(format!("/api/plants/{id}/companions"), Method::GET)),
        ("succession", link(format!("/api/plants/{id}/succession"), Method::GET)),
        ("suggestions", link(format!("/api/garden/suggestions/{id}"), Method::GET)),
        ("collection", link("/api/plants", Method::GET)),
    ])
}

/// GET /api/plants
/// Lists catalog plants matching every provided filter, sorted by name.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    params(PlantQuery),
    responses(
        (status = 200, description = "Matching plants", body = PlantListResponse),
        (status = 400, description = "Malformed filter", body = ErrorResponse),
    )
)]
#[get("/plants")]
pub async fn list_plants(store: SharedStore, query: web::Query<PlantQuery>) -> impl Responder {
    let store = lock(&store);
    let plants: Vec<Plant> = filter_plants(store.catalog(), &query)
        .into_iter()
        .cloned()
        .collect();
    log::debug!("Plant query {:?} matched {} plant(s)", query.0, plants.len());
    HttpResponse::Ok().json(ApiResponse::new(
        plants,
        links([("self", link("/api/plants", Method::GET))]),
    ))
}

/// GET /api/plants/{id}
#[utoipa::path(
    get,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id, e.g. `tomato`")),
    responses(
        (status = 200, description = "Plant found", body = PlantApiResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{id}")]
pub async fn get_plant(store: SharedStore, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let store = lock(&store);
    match store.catalog().get(&id) {
        None => not_found(format!("Plant '{id}' not found.")),
        Some(plant) => HttpResponse::Ok().json(ApiResponse::new(plant.clone(), plant_links(&id))),
    }
}

/// GET /api/plants/{id}/companions
/// Returns good and bad companions for a given plant.
#[utoipa::path(
    get,
    path = "/api/plants/{id}/companions",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id")),
    responses(
        (status = 200, description = "Companion lists", body = CompanionsApiResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{id}/companions")]
pub async fn get_companions(store: SharedStore, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let store = lock(&store);
    let catalog = store.catalog();

    match catalog.get(&id) {
        None => not_found(format!("Plant '{id}' not found.")),
        Some(plant) => {
            let good = catalog
                .companions_of(plant)
                .into_iter()
                .map(CompanionInfo::from)
                .collect();
            let bad = catalog
                .antagonists_of(plant)
                .into_iter()
                .map(CompanionInfo::from)
                .collect();

            HttpResponse::Ok().json(ApiResponse::new(
                CompanionsResponse {
                    id: plant.id.clone(),
                    name: plant.name.clone(),
                    good,
                    bad,
                },
                links([
                    ("self", link(format!("/api/plants/{id}/companions"), Method::GET)),
                    ("plant", link(format!("/api/plants/{id}"), Method::GET)),
                ]),
            ))
        }
    }
}

/// GET /api/plants/{id}/succession
/// Staggered sowing dates for one crop in the configured zone.
#[utoipa::path(
    get,
    path = "/api/plants/{id}/succession",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id"), SuccessionQuery),
    responses(
        (status = 200, description = "Sowing rounds", body = SuccessionApiResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{id}/succession")]
pub async fn get_succession(
    store: SharedStore,
    path: web::Path<String>,
    query: web::Query<SuccessionQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let store = lock(&store);
    let Some(plant) = store.catalog().get(&id) else {
        return not_found(format!("Plant '{id}' not found."));
    };

    let plan = succession_plan(
        plant,
        store.zone(),
        query.year.unwrap_or_else(current_year),
        query.interval_weeks.unwrap_or(DEFAULT_SUCCESSION_INTERVAL_WEEKS),
        query.rounds.unwrap_or(DEFAULT_SUCCESSION_ROUNDS),
    );
    HttpResponse::Ok().json(ApiResponse::new(plan, plant_links(&id)))
}
