use std::sync::Arc;

use actix_web::{test, web, App};
use garden_planner::api::{routes::configure, shared_store, SharedStore};
use garden_planner::data::PlantCatalog;
use garden_planner::storage::FileStorage;
use garden_planner::store::GardenStore;

fn catalog() -> Arc<PlantCatalog> {
    Arc::new(PlantCatalog::builtin().clone())
}

fn memory_store() -> SharedStore {
    shared_store(GardenStore::in_memory(catalog()))
}

fn build_app(store: SharedStore) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(store)
        .configure(configure)
        .app_data(
            web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("{err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }),
        )
}

fn place(plant_id: &str, x: u32, y: u32) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/garden/plants")
        .set_json(serde_json::json!({ "plantId": plant_id, "x": x, "y": y }))
}

fn placed_ids(body: &serde_json::Value) -> Vec<String> {
    let mut ids: Vec<String> = body["payload"]["plants"]
        .as_array()
        .unwrap_or(&vec![])
        .iter()
        .filter_map(|p| p["plantId"].as_str().map(String::from))
        .collect();
    ids.sort();
    ids
}

// ---------------------------------------------------------------------------
// Scenario 1: companions next to each other raise the harmony score
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_companion_bed() {
    let app = test::init_service(build_app(memory_store())).await;
    test::call_service(&app, place("tomato", 0, 0).to_request()).await;
    test::call_service(&app, place("basil", 1, 0).to_request()).await;

    let req = test::TestRequest::get().uri("/api/garden/relationships").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let report = &body["payload"];

    assert_eq!(report["score"], 90, "tomato and basil list each other");
    assert_eq!(report["companionCount"], 2);
    assert_eq!(report["antagonistCount"], 0);
    for rel in report["relationships"].as_array().unwrap() {
        assert_eq!(rel["type"], "companion");
    }

    // moving basil away removes the relationship
    let req = test::TestRequest::delete().uri("/api/garden/plants/1/0").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);
    test::call_service(&app, place("basil", 5, 5).to_request()).await;
    let req = test::TestRequest::get().uri("/api/garden/relationships").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["score"], 70);
}

// ---------------------------------------------------------------------------
// Scenario 2: undo and redo walk whole layouts
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_undo_redo() {
    let app = test::init_service(build_app(memory_store())).await;
    test::call_service(&app, place("carrot", 0, 0).to_request()).await;
    test::call_service(&app, place("onion", 0, 1).to_request()).await;

    let req = test::TestRequest::post().uri("/api/garden/undo").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["changed"], true);
    assert_eq!(body["payload"]["canRedo"], true);

    let req = test::TestRequest::get().uri("/api/garden").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(placed_ids(&body), vec!["carrot"]);

    let req = test::TestRequest::post().uri("/api/garden/redo").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::get().uri("/api/garden").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(placed_ids(&body), vec!["carrot", "onion"]);

    // clearing is undoable too
    let req = test::TestRequest::delete().uri("/api/garden/plants").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post().uri("/api/garden/undo").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::get().uri("/api/garden").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(placed_ids(&body), vec!["carrot", "onion"]);
}

// ---------------------------------------------------------------------------
// Scenario 3: planting the same family in the same cell two years running
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_rotation_warning() {
    let app = test::init_service(build_app(memory_store())).await;
    test::call_service(&app, place("tomato", 2, 2).to_request()).await;
    let req = test::TestRequest::post()
        .uri("/api/garden/rotation?year=2024")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::delete().uri("/api/garden/plants").to_request();
    test::call_service(&app, req).await;
    test::call_service(&app, place("eggplant", 2, 2).to_request()).await;

    let req = test::TestRequest::get()
        .uri("/api/garden/rotation?year=2025")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let warnings = body["payload"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["family"], "nightshade");
    assert_eq!(warnings[0]["years"], serde_json::json!([2024]));

    let suggestions = body["payload"]["suggestions"].as_array().unwrap();
    assert_eq!(suggestions[0]["goodFollowers"][0], "legume");

    // three seasons later the cell is clear
    let req = test::TestRequest::get()
        .uri("/api/garden/rotation?year=2027")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["payload"]["warnings"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Scenario 4: calendar follows the hardiness zone
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_zone_calendar() {
    let app = test::init_service(build_app(memory_store())).await;
    test::call_service(&app, place("tomato", 0, 0).to_request()).await;

    let req = test::TestRequest::get()
        .uri("/api/garden/calendar?year=2025")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let events = body["payload"].as_array().unwrap();
    assert_eq!(events[0]["kind"], "start-indoors");
    assert_eq!(events[0]["date"], "2025-02-18");
    assert_eq!(events[1]["kind"], "transplant");
    assert_eq!(events[1]["date"], "2025-04-15");

    let req = test::TestRequest::put()
        .uri("/api/preferences")
        .set_json(serde_json::json!({ "zone": 9 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/garden/calendar?year=2025")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"][0]["date"], "2025-01-04");
}

// ---------------------------------------------------------------------------
// Scenario 5: export from one planner, import into another
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_export_import() {
    let source = test::init_service(build_app(memory_store())).await;
    test::call_service(&source, place("bean", 0, 0).to_request()).await;
    test::call_service(&source, place("corn", 0, 1).to_request()).await;
    let req = test::TestRequest::get().uri("/api/garden/export").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&source, req).await;
    let export = body["payload"].clone();
    assert_eq!(export["version"], "1.0");

    let target = test::init_service(build_app(memory_store())).await;
    let req = test::TestRequest::post()
        .uri("/api/garden/import")
        .set_json(&export)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&target, req).await;
    assert_eq!(placed_ids(&body), vec!["bean", "corn"]);

    let req = test::TestRequest::post().uri("/api/garden/undo").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&target, req).await;
    assert_eq!(body["payload"]["changed"], false, "an import starts a fresh history");
}

// ---------------------------------------------------------------------------
// Scenario 6: a share link adds a second garden
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_share_link() {
    let app = test::init_service(build_app(memory_store())).await;
    test::call_service(&app, place("squash", 3, 3).to_request()).await;

    let req = test::TestRequest::post()
        .uri("/api/garden/share")
        .set_json(serde_json::json!({ "baseUrl": "https://garden.example/plan" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let url = body["payload"]["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("https://garden.example/plan?garden="));

    let req = test::TestRequest::post()
        .uri("/api/gardens/shared")
        .set_json(serde_json::json!({ "link": url }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::get().uri("/api/gardens").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Scenario 7: state survives a restart on disk
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_persistence_across_restart() {
    let dir = std::env::temp_dir().join(format!("garden-e2e-{}", uuid::Uuid::new_v4()));
    let open = || {
        let storage = FileStorage::new(&dir).unwrap();
        shared_store(GardenStore::load(Box::new(storage), "e2e", catalog()))
    };

    {
        let app = test::init_service(build_app(open())).await;
        test::call_service(&app, place("pepper", 1, 2).to_request()).await;
        let req = test::TestRequest::post()
            .uri("/api/reminders")
            .set_json(serde_json::json!({ "title": "Stake peppers", "dueDate": "2025-06-01" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }

    let app = test::init_service(build_app(open())).await;
    let req = test::TestRequest::get().uri("/api/garden").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(placed_ids(&body), vec!["pepper"]);

    let req = test::TestRequest::get()
        .uri("/api/reminders?due=2025-06-02")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"][0]["title"], "Stake peppers");

    std::fs::remove_dir_all(&dir).ok();
}
