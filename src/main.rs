use std::sync::Arc;

use actix_web::{middleware, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use garden_planner::{
    api::{self, openapi::ApiDoc},
    config::Config,
    data::PlantCatalog,
    storage::FileStorage,
    store::GardenStore,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("{e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let storage = FileStorage::new(&config.data_dir).map_err(|e| {
        log::error!("Cannot open data directory {}: {e}", config.data_dir.display());
        std::io::Error::other(e.to_string())
    })?;
    let catalog = Arc::new(PlantCatalog::builtin().clone());
    log::info!("Loaded plant catalog with {} plants", catalog.len());

    let store = api::shared_store(GardenStore::load(
        Box::new(storage),
        config.storage_key.clone(),
        catalog,
    ));

    let bind_addr = config.bind_addr();
    log::info!("🌱 Garden planner started at http://{bind_addr}");
    log::info!("📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    log::info!("📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(api::json_config())
            .app_data(api::query_config())
            .configure(api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
