use actix_web::web;

use crate::api::handlers::{garden, gardens, insights, logs, plants, preferences, transfer};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // plants
            .service(plants::list_plants)
            .service(plants::get_plant)
            .service(plants::get_companions)
            .service(plants::get_succession)
            // active garden
            .service(garden::get_garden)
            .service(garden::place_plant)
            .service(garden::remove_plant)
            .service(garden::cycle_stage)
            .service(garden::clear_garden)
            .service(garden::undo)
            .service(garden::redo)
            .service(garden::set_grid_size)
            // insights
            .service(insights::get_relationships)
            .service(insights::get_calendar)
            .service(insights::get_care)
            .service(insights::get_suggestions)
            .service(insights::get_rotation)
            .service(insights::save_rotation)
            .service(insights::clear_rotation)
            // transfer
            .service(transfer::export_garden)
            .service(transfer::import_garden)
            .service(transfer::share_garden)
            .service(transfer::import_shared)
            // gardens
            .service(gardens::list_gardens)
            .service(gardens::create_garden)
            .service(gardens::switch_garden)
            .service(gardens::rename_garden)
            .service(gardens::delete_garden)
            // logs
            .service(logs::add_journal_entry)
            .service(logs::delete_journal_entry)
            .service(logs::add_pest_issue)
            .service(logs::resolve_pest_issue)
            .service(logs::delete_pest_issue)
            .service(logs::list_reminders)
            .service(logs::add_reminder)
            .service(logs::complete_reminder)
            .service(logs::snooze_reminder)
            .service(logs::delete_reminder)
            .service(logs::list_notifications)
            .service(logs::push_notification)
            .service(logs::mark_notification_read)
            .service(logs::clear_notifications)
            // preferences
            .service(preferences::get_preferences)
            .service(preferences::update_preferences),
    );
}
