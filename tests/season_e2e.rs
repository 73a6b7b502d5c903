use std::sync::Arc;

use chrono::NaiveDate;
use garden_planner::data::PlantCatalog;
use garden_planner::logic::calendar::EventKind;
use garden_planner::models::plant::PlantFamily;
use garden_planner::store::GardenStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Plans a bed, grows it through one season, then lays out the next year.
#[test]
fn two_seasons_in_one_bed() {
    let mut store = GardenStore::in_memory(Arc::new(PlantCatalog::builtin().clone()));
    store.set_zone(5).unwrap();

    // --- 2025: tomatoes with basil, beans along the edge ---
    store.place_plant("tomato", 1, 1).unwrap();
    store.place_plant("basil", 2, 1).unwrap();
    store.place_plant("tomato", 1, 3).unwrap();
    store.place_plant("bean", 5, 0).unwrap();

    let report = store.relationships();
    assert!(report.score > 70, "companions must lift the score: {}", report.score);
    assert_eq!(report.antagonist_count, 0);

    let calendar = store.calendar(2025);
    let tomato_transplant = calendar
        .iter()
        .find(|e| e.plant_id == "tomato" && e.kind == EventKind::Transplant)
        .unwrap();
    // zone 5 last frost is Apr 15
    assert_eq!(tomato_transplant.date, date(2025, 4, 29));
    assert_eq!(
        calendar.iter().filter(|e| e.plant_id == "tomato").count(),
        3,
        "duplicate placements share one set of events"
    );
    assert!(calendar.windows(2).all(|w| w[0].date <= w[1].date));

    let care = store.care_summary();
    assert_eq!(care.total_plants, 4);
    let tomatoes = care.plants.iter().find(|p| p.plant_id == "tomato").unwrap();
    assert_eq!(tomatoes.count, 2);

    for _ in 0..2 {
        store.cycle_stage(1, 1);
    }
    store.add_journal_entry(date(2025, 8, 2), "First ripe tomato", Some("tomato".into()));
    store.save_to_rotation_history(2025);

    // --- 2026: same cells, new families ---
    store.clear_garden();
    store.place_plant("pepper", 1, 1).unwrap();
    store.place_plant("pea", 1, 3).unwrap();

    let warnings = store.rotation_warnings(2026);
    assert_eq!(warnings.len(), 1, "only the pepper repeats a family");
    assert_eq!(warnings[0].plant_id, "pepper");
    assert_eq!(warnings[0].family, PlantFamily::Nightshade);

    let suggestions = store.rotation_suggestions();
    assert!(suggestions.iter().any(|s| {
        s.family == PlantFamily::Nightshade && s.good_followers.contains(&PlantFamily::Legume)
    }));

    // the journal belongs to the garden, not the layout
    assert_eq!(store.active_garden().journal.len(), 1);

    // undo back to the 2025 layout: every plant now repeats its own cell
    store.undo();
    store.undo();
    store.undo();
    assert_eq!(store.placed_plants().len(), 4);
    assert_eq!(store.rotation_warnings(2026).len(), 4);
}
