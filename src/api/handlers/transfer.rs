use actix_web::{get, http::Method, post, web, HttpResponse, Responder};

use crate::{
    api::{error::unprocessable, lock, SharedStore},
    error::Result,
    models::request::{
        link, links, ApiResponse, ErrorResponse, ExportApiResponse, GardenApiResponse,
        ImportSharedRequest, ShareLinkApiResponse, ShareLinkResponse, ShareRequest,
    },
    store::transfer::GardenExport,
};

/// GET /api/garden/export
/// The active garden in its portable JSON form.
#[utoipa::path(
    get,
    path = "/api/garden/export",
    tag = "transfer",
    responses((status = 200, description = "Exported garden", body = ExportApiResponse))
)]
#[get("/garden/export")]
pub async fn export_garden(store: SharedStore) -> impl Responder {
    let export = lock(&store).export_garden();
    HttpResponse::Ok().json(ApiResponse::new(
        export,
        links([
            ("self", link("/api/garden/export", Method::GET)),
            ("import", link("/api/garden/import", Method::POST)),
        ]),
    ))
}

/// POST /api/garden/import
/// Replaces the active garden with an exported one. The body is the raw export JSON;
/// a rejected payload leaves the garden untouched.
#[utoipa::path(
    post,
    path = "/api/garden/import",
    tag = "transfer",
    request_body(content = GardenExport, content_type = "application/json"),
    responses(
        (status = 200, description = "Garden imported", body = GardenApiResponse),
        (status = 422, description = "Payload rejected", body = ErrorResponse),
    )
)]
#[post("/garden/import")]
pub async fn import_garden(store: SharedStore, body: String) -> impl Responder {
    let mut store = lock(&store);
    if !store.import_garden(&body) {
        return unprocessable("Import rejected: expected an exported garden with a 'plants' array.");
    }
    HttpResponse::Ok().json(ApiResponse::new(
        store.active_garden().clone(),
        links([("garden", link("/api/garden", Method::GET))]),
    ))
}

/// POST /api/garden/share
/// Builds a link that carries the whole active garden.
#[utoipa::path(
    post,
    path = "/api/garden/share",
    tag = "transfer",
    request_body = ShareRequest,
    responses((status = 200, description = "Share link", body = ShareLinkApiResponse))
)]
#[post("/garden/share")]
pub async fn share_garden(store: SharedStore, body: web::Json<ShareRequest>) -> Result<HttpResponse> {
    let url = lock(&store).share_link(&body.base_url)?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(
        ShareLinkResponse { url },
        links([("import", link("/api/gardens/shared", Method::POST))]),
    )))
}

/// POST /api/gardens/shared
/// Adds the garden carried by a share link and makes it active.
#[utoipa::path(
    post,
    path = "/api/gardens/shared",
    tag = "transfer",
    request_body = ImportSharedRequest,
    responses(
        (status = 201, description = "Shared garden added", body = GardenApiResponse),
        (status = 422, description = "Link rejected", body = ErrorResponse),
    )
)]
#[post("/gardens/shared")]
pub async fn import_shared(
    store: SharedStore,
    body: web::Json<ImportSharedRequest>,
) -> impl Responder {
    let mut store = lock(&store);
    if !store.import_shared(&body.link) {
        return unprocessable("Share link rejected: it does not carry a valid garden.");
    }
    HttpResponse::Created().json(ApiResponse::new(
        store.active_garden().clone(),
        links([
            ("garden", link("/api/garden", Method::GET)),
            ("gardens", link("/api/gardens", Method::GET)),
        ]),
    ))
}
