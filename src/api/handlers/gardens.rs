use actix_web::{delete, get, http::Method, post, put, web, HttpResponse, Responder};

use crate::{
    api::{lock, SharedStore},
    error::Result,
    models::{
        garden::{Garden, DEFAULT_GRID_SIZE},
        request::{
            link, links, ApiResponse, CreateGardenRequest, ErrorResponse, GardenApiResponse,
            GardenListResponse, Links, RenameGardenRequest,
        },
    },
};

fn garden_links(garden: &Garden) -> Links {
    let href = format!("/api/gardens/{}", garden.id);
    links([
        ("activate", link(format!("{href}/activate"), Method::POST)),
        ("rename", link(href.clone(), Method::PUT)),
        ("delete", link(href, Method::DELETE)),
        ("active", link("/api/garden", Method::GET)),
        ("collection", link("/api/gardens", Method::GET)),
    ])
}

/// GET /api/gardens
#[utoipa::path(
    get,
    path = "/api/gardens",
    tag = "gardens",
    responses((status = 200, description = "All gardens", body = GardenListResponse))
)]
#[get("/gardens")]
pub async fn list_gardens(store: SharedStore) -> impl Responder {
    let store = lock(&store);
    HttpResponse::Ok().json(ApiResponse::new(
        store.gardens().to_vec(),
        links([
            ("self", link("/api/gardens", Method::GET)),
            ("create", link("/api/gardens", Method::POST)),
            ("active", link("/api/garden", Method::GET)),
        ]),
    ))
}

/// POST /api/gardens
/// Creates a garden and makes it active.
#[utoipa::path(
    post,
    path = "/api/gardens",
    tag = "gardens",
    request_body = CreateGardenRequest,
    responses(
        (status = 201, description = "Garden created", body = GardenApiResponse),
        (status = 400, description = "Unsupported grid size", body = ErrorResponse),
    )
)]
#[post("/gardens")]
pub async fn create_garden(
    store: SharedStore,
    body: web::Json<CreateGardenRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    let mut store = lock(&store);
    let garden = store
        .create_garden(&request.name, request.size.unwrap_or(DEFAULT_GRID_SIZE))?
        .clone();
    let links = garden_links(&garden);
    Ok(HttpResponse::Created().json(ApiResponse::new(garden, links)))
}

/// POST /api/gardens/{id}/activate
#[utoipa::path(
    post,
    path = "/api/gardens/{id}/activate",
    tag = "gardens",
    params(("id" = String, Path, description = "Garden id")),
    responses(
        (status = 200, description = "Garden activated", body = GardenApiResponse),
        (status = 404, description = "Unknown garden", body = ErrorResponse),
    )
)]
#[post("/gardens/{id}/activate")]
pub async fn switch_garden(store: SharedStore, path: web::Path<String>) -> Result<HttpResponse> {
    let mut store = lock(&store);
    store.switch_garden(&path)?;
    let garden = store.active_garden().clone();
    let links = garden_links(&garden);
    Ok(HttpResponse::Ok().json(ApiResponse::new(garden, links)))
}

/// PUT /api/gardens/{id}
#[utoipa::path(
    put,
    path = "/api/gardens/{id}",
    tag = "gardens",
    params(("id" = String, Path, description = "Garden id")),
    request_body = RenameGardenRequest,
    responses(
        (status = 200, description = "Garden renamed", body = GardenApiResponse),
        (status = 404, description = "Unknown garden", body = ErrorResponse),
    )
)]
#[put("/gardens/{id}")]
pub async fn rename_garden(
    store: SharedStore,
    path: web::Path<String>,
    body: web::Json<RenameGardenRequest>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let mut store = lock(&store);
    store.rename_garden(&id, &body.name)?;
    let garden = store
        .gardens()
        .iter()
        .find(|g| g.id == id)
        .cloned()
        .ok_or(crate::GardenError::UnknownGarden(id))?;
    let links = garden_links(&garden);
    Ok(HttpResponse::Ok().json(ApiResponse::new(garden, links)))
}

/// DELETE /api/gardens/{id}
/// The last remaining garden cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/gardens/{id}",
    tag = "gardens",
    params(("id" = String, Path, description = "Garden id")),
    responses(
        (status = 204, description = "Garden deleted"),
        (status = 400, description = "Last garden", body = ErrorResponse),
        (status = 404, description = "Unknown garden", body = ErrorResponse),
    )
)]
#[delete("/gardens/{id}")]
pub async fn delete_garden(store: SharedStore, path: web::Path<String>) -> Result<HttpResponse> {
    lock(&store).delete_garden(&path)?;
    Ok(HttpResponse::NoContent().finish())
}
