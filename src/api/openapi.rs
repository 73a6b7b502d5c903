use utoipa::OpenApi;

use crate::{
    logic::{
        calendar::{CalendarEvent, EventKind, Sowing},
        care::{CareSummary, PlantCare},
        filter::PlantQuery,
        placement::CellSuggestion,
        relationships::{HarmonyReport, Relationship, RelationshipKind},
        rotation::{RotationSuggestion, RotationWarning},
    },
    models::{
        garden::{Garden, JournalEntry, PestIssue, PlacedPlant, Severity, Stage},
        plant::{Category, Plant, PlantFamily, SoilType, SunNeeds, WaterNeeds},
        reminder::{Notification, NotificationKind, Reminder},
        request::{
            CalendarApiResponse, CareApiResponse, CompanionInfo, CompanionsApiResponse,
            CompanionsResponse, CreateGardenRequest, ErrorResponse, ExportApiResponse,
            GardenApiResponse, GardenListResponse, GridSizeRequest, HarmonyApiResponse,
            HistoryApiResponse, HistoryStatus, ImportSharedRequest, JournalApiResponse,
            JournalRequest, Link, NotificationApiResponse, NotificationListResponse,
            NotificationRequest, PestApiResponse, PestRequest, PlaceRequest,
            PlacedPlantApiResponse, PlantApiResponse, PlantListResponse, Preferences,
            PreferencesApiResponse, PreferencesRequest, ReminderApiResponse,
            ReminderListResponse, ReminderRequest, RenameGardenRequest, RotationApiResponse,
            RotationReport, ShareLinkApiResponse, ShareLinkResponse, ShareRequest, SnoozeRequest,
            StageApiResponse, StageResponse, SuccessionApiResponse, SuggestionsApiResponse,
        },
        Coordinate,
    },
    store::transfer::GardenExport,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Planner API",
        description = "Square-foot garden planner: lay plants out on a grid, score companion and antagonist neighbours, track crop rotation across seasons, and derive a planting calendar from the USDA hardiness zone.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::plants::get_companions,
        crate::api::handlers::plants::get_succession,
        crate::api::handlers::garden::get_garden,
        crate::api::handlers::garden::place_plant,
        crate::api::handlers::garden::remove_plant,
        crate::api::handlers::garden::cycle_stage,
        crate::api::handlers::garden::clear_garden,
        crate::api::handlers::garden::undo,
        crate::api::handlers::garden::redo,
        crate::api::handlers::garden::set_grid_size,
        crate::api::handlers::insights::get_relationships,
        crate::api::handlers::insights::get_calendar,
        crate::api::handlers::insights::get_care,
        crate::api::handlers::insights::get_suggestions,
        crate::api::handlers::insights::get_rotation,
        crate::api::handlers::insights::save_rotation,
        crate::api::handlers::insights::clear_rotation,
        crate::api::handlers::transfer::export_garden,
        crate::api::handlers::transfer::import_garden,
        crate::api::handlers::transfer::share_garden,
        crate::api::handlers::transfer::import_shared,
        crate::api::handlers::gardens::list_gardens,
        crate::api::handlers::gardens::create_garden,
        crate::api::handlers::gardens::switch_garden,
        crate::api::handlers::gardens::rename_garden,
        crate::api::handlers::gardens::delete_garden,
        crate::api::handlers::logs::add_journal_entry,
        crate::api::handlers::logs::delete_journal_entry,
        crate::api::handlers::logs::add_pest_issue,
        crate::api::handlers::logs::resolve_pest_issue,
        crate::api::handlers::logs::delete_pest_issue,
        crate::api::handlers::logs::list_reminders,
        crate::api::handlers::logs::add_reminder,
        crate::api::handlers::logs::complete_reminder,
        crate::api::handlers::logs::snooze_reminder,
        crate::api::handlers::logs::delete_reminder,
        crate::api::handlers::logs::list_notifications,
        crate::api::handlers::logs::push_notification,
        crate::api::handlers::logs::mark_notification_read,
        crate::api::handlers::logs::clear_notifications,
        crate::api::handlers::preferences::get_preferences,
        crate::api::handlers::preferences::update_preferences,
    ),
    components(
        schemas(
            // Enums
            Category, PlantFamily, SunNeeds, WaterNeeds, SoilType, Stage, Severity,
            NotificationKind, EventKind, RelationshipKind,
            // Catalog
            Plant, PlantQuery, CompanionInfo, CompanionsResponse, Sowing,
            // Garden
            Coordinate, PlacedPlant, Garden, JournalEntry, PestIssue, GardenExport,
            // Derived views
            Relationship, HarmonyReport, CalendarEvent, PlantCare, CareSummary, CellSuggestion,
            RotationWarning, RotationSuggestion, RotationReport,
            // Reminders
            Reminder, Notification,
            // Requests
            PlaceRequest, GridSizeRequest, CreateGardenRequest, RenameGardenRequest,
            ShareRequest, ImportSharedRequest, JournalRequest, PestRequest, ReminderRequest,
            SnoozeRequest, NotificationRequest, PreferencesRequest,
            // Responses
            StageResponse, HistoryStatus, ShareLinkResponse, Preferences,
            // Shared
            Link, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            PlantApiResponse, PlantListResponse, CompanionsApiResponse, SuccessionApiResponse,
            GardenApiResponse, GardenListResponse, PlacedPlantApiResponse, StageApiResponse,
            HistoryApiResponse, HarmonyApiResponse, CalendarApiResponse, CareApiResponse,
            SuggestionsApiResponse, RotationApiResponse, ExportApiResponse, ShareLinkApiResponse,
            JournalApiResponse, PestApiResponse, ReminderApiResponse, ReminderListResponse,
            NotificationApiResponse, NotificationListResponse, PreferencesApiResponse,
        )
    ),
    tags(
        (name = "plants",        description = "Plant catalog: list, detail, companions, succession sowing"),
        (name = "garden",        description = "Active garden layout with undo and redo"),
        (name = "gardens",       description = "Garden collection: create, activate, rename, delete"),
        (name = "insights",      description = "Companion harmony, planting calendar, care and placement suggestions"),
        (name = "rotation",      description = "Crop rotation history and warnings"),
        (name = "transfer",      description = "Export, import and share links"),
        (name = "journal",       description = "Garden journal"),
        (name = "pests",         description = "Pest issue log"),
        (name = "reminders",     description = "Dated reminders"),
        (name = "notifications", description = "In-app notifications"),
        (name = "preferences",   description = "Zone, soil and onboarding state"),
    )
)]
pub struct ApiDoc;
