use actix_web::{delete, get, http::Method, post, web, HttpResponse, Responder};

use crate::{
    api::{handlers::today, lock, SharedStore},
    error::Result,
    models::request::{
        link, links, ApiResponse, DueQuery, ErrorResponse, JournalApiResponse, JournalRequest,
        Links, NotificationApiResponse, NotificationListResponse, NotificationRequest,
        PestApiResponse, PestRequest, ReminderApiResponse, ReminderListResponse, ReminderRequest,
        SnoozeRequest,
    },
};

fn reminder_links(id: &str) -> Links {
    let href = format!("/api/reminders/{id}");
    links([
        ("complete", link(format!("{href}/complete"), Method::POST)),
        ("snooze", link(format!("{href}/snooze"), Method::POST)),
        ("delete", link(href, Method::DELETE)),
        ("collection", link("/api/reminders", Method::GET)),
    ])
}

// ---------------------------------------------------------------------------
// Journal
// ---------------------------------------------------------------------------

/// POST /api/garden/journal
#[utoipa::path(
    post,
    path = "/api/garden/journal",
    tag = "journal",
    request_body = JournalRequest,
    responses((status = 201, description = "Entry added", body = JournalApiResponse))
)]
#[post("/garden/journal")]
pub async fn add_journal_entry(
    store: SharedStore,
    body: web::Json<JournalRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let entry = lock(&store).add_journal_entry(
        request.date.unwrap_or_else(today),
        &request.text,
        request.plant_id,
    );
    let href = format!("/api/garden/journal/{}", entry.id);
    HttpResponse::Created().json(ApiResponse::new(
        entry,
        links([("delete", link(href, Method::DELETE))]),
    ))
}

/// DELETE /api/garden/journal/{id}
#[utoipa::path(
    delete,
    path = "/api/garden/journal/{id}",
    tag = "journal",
    params(("id" = String, Path, description = "Journal entry id")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Unknown entry", body = ErrorResponse),
    )
)]
#[delete("/garden/journal/{id}")]
pub async fn delete_journal_entry(
    store: SharedStore,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    lock(&store).delete_journal_entry(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

// ---------------------------------------------------------------------------
// Pests
// ---------------------------------------------------------------------------

/// POST /api/garden/pests
#[utoipa::path(
    post,
    path = "/api/garden/pests",
    tag = "pests",
    request_body = PestRequest,
    responses((status = 201, description = "Issue reported", body = PestApiResponse))
)]
#[post("/garden/pests")]
pub async fn add_pest_issue(store: SharedStore, body: web::Json<PestRequest>) -> impl Responder {
    let request = body.into_inner();
    let issue = lock(&store).add_pest_issue(
        &request.plant_id,
        &request.pest,
        request.severity,
        request.notes,
        request.reported_at.unwrap_or_else(today),
    );
    let href = format!("/api/garden/pests/{}", issue.id);
    HttpResponse::Created().json(ApiResponse::new(
        issue,
        links([
            ("resolve", link(format!("{href}/resolve"), Method::POST)),
            ("delete", link(href, Method::DELETE)),
        ]),
    ))
}

/// POST /api/garden/pests/{id}/resolve
#[utoipa::path(
    post,
    path = "/api/garden/pests/{id}/resolve",
    tag = "pests",
    params(("id" = String, Path, description = "Pest issue id")),
    responses(
        (status = 204, description = "Issue resolved"),
        (status = 404, description = "Unknown issue", body = ErrorResponse),
    )
)]
#[post("/garden/pests/{id}/resolve")]
pub async fn resolve_pest_issue(store: SharedStore, path: web::Path<String>) -> Result<HttpResponse> {
    lock(&store).resolve_pest_issue(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/garden/pests/{id}
#[utoipa::path(
    delete,
    path = "/api/garden/pests/{id}",
    tag = "pests",
    params(("id" = String, Path, description = "Pest issue id")),
    responses(
        (status = 204, description = "Issue deleted"),
        (status = 404, description = "Unknown issue", body = ErrorResponse),
    )
)]
#[delete("/garden/pests/{id}")]
pub async fn delete_pest_issue(store: SharedStore, path: web::Path<String>) -> Result<HttpResponse> {
    lock(&store).delete_pest_issue(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

// ---------------------------------------------------------------------------
// Reminders
// ---------------------------------------------------------------------------

/// GET /api/reminders
/// All reminders, or only those due by `due` when given.
#[utoipa::path(
    get,
    path = "/api/reminders",
    tag = "reminders",
    params(DueQuery),
    responses((status = 200, description = "Reminders", body = ReminderListResponse))
)]
#[get("/reminders")]
pub async fn list_reminders(store: SharedStore, query: web::Query<DueQuery>) -> impl Responder {
    let store = lock(&store);
    let reminders = match query.due {
        Some(due) => store.due_reminders(due).into_iter().cloned().collect(),
        None => store.reminders().to_vec(),
    };
    HttpResponse::Ok().json(ApiResponse::new(
        reminders,
        links([
            ("self", link("/api/reminders", Method::GET)),
            ("create", link("/api/reminders", Method::POST)),
        ]),
    ))
}

/// POST /api/reminders
#[utoipa::path(
    post,
    path = "/api/reminders",
    tag = "reminders",
    request_body = ReminderRequest,
    responses((status = 201, description = "Reminder added", body = ReminderApiResponse))
)]
#[post("/reminders")]
pub async fn add_reminder(store: SharedStore, body: web::Json<ReminderRequest>) -> impl Responder {
    let request = body.into_inner();
    let reminder = lock(&store).add_reminder(&request.title, request.due_date, request.plant_id);
    let links = reminder_links(&reminder.id);
    HttpResponse::Created().json(ApiResponse::new(reminder, links))
}

/// POST /api/reminders/{id}/complete
#[utoipa::path(
    post,
    path = "/api/reminders/{id}/complete",
    tag = "reminders",
    params(("id" = String, Path, description = "Reminder id")),
    responses(
        (status = 204, description = "Reminder completed"),
        (status = 404, description = "Unknown reminder", body = ErrorResponse),
    )
)]
#[post("/reminders/{id}/complete")]
pub async fn complete_reminder(store: SharedStore, path: web::Path<String>) -> Result<HttpResponse> {
    lock(&store).complete_reminder(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/reminders/{id}/snooze
#[utoipa::path(
    post,
    path = "/api/reminders/{id}/snooze",
    tag = "reminders",
    params(("id" = String, Path, description = "Reminder id")),
    request_body = SnoozeRequest,
    responses(
        (status = 204, description = "Reminder snoozed"),
        (status = 404, description = "Unknown reminder", body = ErrorResponse),
    )
)]
#[post("/reminders/{id}/snooze")]
pub async fn snooze_reminder(
    store: SharedStore,
    path: web::Path<String>,
    body: web::Json<SnoozeRequest>,
) -> Result<HttpResponse> {
    lock(&store).snooze_reminder(&path, body.until)?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/reminders/{id}
#[utoipa::path(
    delete,
    path = "/api/reminders/{id}",
    tag = "reminders",
    params(("id" = String, Path, description = "Reminder id")),
    responses(
        (status = 204, description = "Reminder deleted"),
        (status = 404, description = "Unknown reminder", body = ErrorResponse),
    )
)]
#[delete("/reminders/{id}")]
pub async fn delete_reminder(store: SharedStore, path: web::Path<String>) -> Result<HttpResponse> {
    lock(&store).delete_reminder(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// GET /api/notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "notifications",
    responses((status = 200, description = "Notifications", body = NotificationListResponse))
)]
#[get("/notifications")]
pub async fn list_notifications(store: SharedStore) -> impl Responder {
    let notifications = lock(&store).notifications().to_vec();
    HttpResponse::Ok().json(ApiResponse::new(
        notifications,
        links([
            ("self", link("/api/notifications", Method::GET)),
            ("clear", link("/api/notifications", Method::DELETE)),
        ]),
    ))
}

/// POST /api/notifications
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = "notifications",
    request_body = NotificationRequest,
    responses((status = 201, description = "Notification queued", body = NotificationApiResponse))
)]
#[post("/notifications")]
pub async fn push_notification(
    store: SharedStore,
    body: web::Json<NotificationRequest>,
) -> impl Responder {
    let notification = lock(&store).push_notification(&body.message, body.kind);
    let href = format!("/api/notifications/{}/read", notification.id);
    HttpResponse::Created().json(ApiResponse::new(
        notification,
        links([("read", link(href, Method::POST))]),
    ))
}

/// POST /api/notifications/{id}/read
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    tag = "notifications",
    params(("id" = String, Path, description = "Notification id")),
    responses(
        (status = 204, description = "Marked read"),
        (status = 404, description = "Unknown notification", body = ErrorResponse),
    )
)]
#[post("/notifications/{id}/read")]
pub async fn mark_notification_read(
    store: SharedStore,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    lock(&store).mark_notification_read(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/notifications
#[utoipa::path(
    delete,
    path = "/api/notifications",
    tag = "notifications",
    responses((status = 204, description = "Notifications cleared"))
)]
#[delete("/notifications")]
pub async fn clear_notifications(store: SharedStore) -> impl Responder {
    lock(&store).clear_notifications();
    HttpResponse::NoContent().finish()
}
