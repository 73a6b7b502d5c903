pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;

use std::sync::{Mutex, MutexGuard};

use actix_web::web;

use crate::models::request::ErrorResponse;
use crate::store::GardenStore;

/// The garden store shared by every worker. One writer at a time.
pub type SharedStore = web::Data<Mutex<GardenStore>>;

pub fn shared_store(store: GardenStore) -> SharedStore {
    web::Data::new(Mutex::new(store))
}

/// Locks the store, recovering the guard if a handler panicked while holding it.
pub fn lock(store: &SharedStore) -> MutexGuard<'_, GardenStore> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Turns malformed JSON bodies into a 400 with the usual error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        actix_web::error::InternalError::from_response(
            err,
            actix_web::HttpResponse::BadRequest().json(ErrorResponse { error: message }),
        )
        .into()
    })
}

/// Same as [`json_config`] for query strings.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid query string: {err}");
        actix_web::error::InternalError::from_response(
            err,
            actix_web::HttpResponse::BadRequest().json(ErrorResponse { error: message }),
        )
        .into()
    })
}
