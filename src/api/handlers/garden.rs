use actix_web::{delete, get, http::Method, post, put, web, HttpResponse, Responder};

use crate::{
    api::{error::not_found, lock, SharedStore},
    error::Result,
    models::request::{
        link, links, ApiResponse, ErrorResponse, GardenApiResponse, GridSizeRequest,
        HistoryApiResponse, HistoryStatus, Links, PlaceRequest, PlacedPlantApiResponse,
        StageApiResponse, StageResponse,
    },
    store::GardenStore,
};

fn garden_links() -> Links {
    links([
        ("self", link("/api/garden", Method::GET)),
        ("place", link("/api/garden/plants", Method::POST)),
        ("clear", link("/api/garden/plants", Method::DELETE)),
        ("undo", link("/api/garden/undo", Method::POST)),
        ("redo", link("/api/garden/redo", Method::POST)),
        ("resize", link("/api/garden/size", Method::PUT)),
        ("relationships", link("/api/garden/relationships", Method::GET)),
        ("calendar", link("/api/garden/calendar", Method::GET)),
        ("care", link("/api/garden/care", Method::GET)),
        ("rotation", link("/api/garden/rotation", Method::GET)),
        ("export", link("/api/garden/export", Method::GET)),
    ])
}

fn history_status(store: &GardenStore, changed: bool) -> HistoryStatus {
    HistoryStatus {
        changed,
        can_undo: store.can_undo(),
        can_redo: store.can_redo(),
    }
}

/// GET /api/garden
/// Returns the active garden.
#[utoipa::path(
    get,
    path = "/api/garden",
    tag = "garden",
    responses((status = 200, description = "Active garden", body = GardenApiResponse))
)]
#[get("/garden")]
pub async fn get_garden(store: SharedStore) -> impl Responder {
    let store = lock(&store);
    HttpResponse::Ok().json(ApiResponse::new(store.active_garden().clone(), garden_links()))
}

/// POST /api/garden/plants
/// Places a plant, replacing whatever occupied the cell.
#[utoipa::path(
    post,
    path = "/api/garden/plants",
    tag = "garden",
    request_body = PlaceRequest,
    responses(
        (status = 201, description = "Plant placed", body = PlacedPlantApiResponse),
        (status = 400, description = "Cell outside the grid", body = ErrorResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[post("/garden/plants")]
pub async fn place_plant(store: SharedStore, body: web::Json<PlaceRequest>) -> Result<HttpResponse> {
    let request = body.into_inner();
    let mut store = lock(&store);
    let placed = store.place_plant(&request.plant_id, request.x, request.y)?;
    let cell = format!("/api/garden/plants/{}/{}", placed.x, placed.y);
    Ok(HttpResponse::Created().json(ApiResponse::new(
        placed,
        links([
            ("remove", link(cell.clone(), Method::DELETE)),
            ("stage", link(format!("{cell}/stage"), Method::POST)),
            ("garden", link("/api/garden", Method::GET)),
        ]),
    )))
}

/// DELETE /api/garden/plants/{x}/{y}
#[utoipa::path(
    delete,
    path = "/api/garden/plants/{x}/{y}",
    tag = "garden",
    params(("x" = u32, Path, description = "Column"), ("y" = u32, Path, description = "Row")),
    responses(
        (status = 204, description = "Plant removed"),
        (status = 404, description = "Empty cell", body = ErrorResponse),
    )
)]
#[delete("/garden/plants/{x}/{y}")]
pub async fn remove_plant(store: SharedStore, path: web::Path<(u32, u32)>) -> impl Responder {
    let (x, y) = path.into_inner();
    if lock(&store).remove_plant(x, y) {
        HttpResponse::NoContent().finish()
    } else {
        not_found(format!("No plant at ({x}, {y})."))
    }
}

/// POST /api/garden/plants/{x}/{y}/stage
/// Advances the plant's growth stage: seedling → growing → ready → seedling.
#[utoipa::path(
    post,
    path = "/api/garden/plants/{x}/{y}/stage",
    tag = "garden",
    params(("x" = u32, Path, description = "Column"), ("y" = u32, Path, description = "Row")),
    responses(
        (status = 200, description = "New stage", body = StageApiResponse),
        (status = 404, description = "Empty cell", body = ErrorResponse),
    )
)]
#[post("/garden/plants/{x}/{y}/stage")]
pub async fn cycle_stage(store: SharedStore, path: web::Path<(u32, u32)>) -> impl Responder {
    let (x, y) = path.into_inner();
    match lock(&store).cycle_stage(x, y) {
        None => not_found(format!("No plant at ({x}, {y}).")),
        Some(stage) => HttpResponse::Ok().json(ApiResponse::new(
            StageResponse { x, y, stage },
            links([("garden", link("/api/garden", Method::GET))]),
        )),
    }
}

/// DELETE /api/garden/plants
/// Removes every plant from the active garden. Undoable.
#[utoipa::path(
    delete,
    path = "/api/garden/plants",
    tag = "garden",
    responses((status = 200, description = "Garden cleared", body = GardenApiResponse))
)]
#[delete("/garden/plants")]
pub async fn clear_garden(store: SharedStore) -> impl Responder {
    let mut store = lock(&store);
    store.clear_garden();
    HttpResponse::Ok().json(ApiResponse::new(store.active_garden().clone(), garden_links()))
}

/// POST /api/garden/undo
#[utoipa::path(
    post,
    path = "/api/garden/undo",
    tag = "garden",
    responses((status = 200, description = "Undo result", body = HistoryApiResponse))
)]
#[post("/garden/undo")]
pub async fn undo(store: SharedStore) -> impl Responder {
    let mut store = lock(&store);
    let changed = store.undo();
    HttpResponse::Ok().json(ApiResponse::new(history_status(&store, changed), garden_links()))
}

/// POST /api/garden/redo
#[utoipa::path(
    post,
    path = "/api/garden/redo",
    tag = "garden",
    responses((status = 200, description = "Redo result", body = HistoryApiResponse))
)]
#[post("/garden/redo")]
pub async fn redo(store: SharedStore) -> impl Responder {
    let mut store = lock(&store);
    let changed = store.redo();
    HttpResponse::Ok().json(ApiResponse::new(history_status(&store, changed), garden_links()))
}

/// PUT /api/garden/size
/// Resizes the grid; plants left outside it are dropped.
#[utoipa::path(
    put,
    path = "/api/garden/size",
    tag = "garden",
    request_body = GridSizeRequest,
    responses(
        (status = 200, description = "Garden resized", body = GardenApiResponse),
        (status = 400, description = "Unsupported size", body = ErrorResponse),
    )
)]
#[put("/garden/size")]
pub async fn set_grid_size(
    store: SharedStore,
    body: web::Json<GridSizeRequest>,
) -> Result<HttpResponse> {
    let mut store = lock(&store);
    store.set_grid_size(body.size)?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(store.active_garden().clone(), garden_links())))
}
