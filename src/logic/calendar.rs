use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::zones::last_frost_date;
use crate::data::PlantCatalog;
use crate::models::garden::PlacedPlant;
use crate::models::plant::Plant;

/// Upper bound on sowings in one succession plan: a year of weekly rounds.
pub const MAX_SUCCESSION_ROUNDS: u32 = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    StartIndoors,
    Transplant,
    DirectSow,
    Harvest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub plant_id: String,
    pub plant_name: String,
    pub emoji: String,
    pub kind: EventKind,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sowing {
    /// 1-based.
    pub round: u32,
    pub sow_date: NaiveDate,
    pub harvest_date: NaiveDate,
}

fn weeks(n: u32) -> Days {
    Days::new(7 * u64::from(n))
}

/// Date the plant goes into the garden bed: transplant date, or the last frost when
/// direct-sown. `None` past the end of the representable calendar.
pub fn sow_date(plant: &Plant, last_frost: NaiveDate) -> Option<NaiveDate> {
    last_frost.checked_add_days(weeks(plant.transplant_weeks))
}

pub fn harvest_date(plant: &Plant, last_frost: NaiveDate) -> Option<NaiveDate> {
    sow_date(plant, last_frost)?.checked_add_days(Days::new(plant.days_to_maturity.into()))
}

/// Start-indoors, transplant or direct-sow, and harvest events for one plant.
/// Events that fall outside the representable calendar are left out.
pub fn plant_events(plant: &Plant, last_frost: NaiveDate) -> Vec<CalendarEvent> {
    let event = |kind: EventKind, date: NaiveDate| CalendarEvent {
        plant_id: plant.id.clone(),
        plant_name: plant.name.clone(),
        emoji: plant.emoji.clone(),
        kind,
        date,
    };

    let mut scheduled = Vec::with_capacity(3);
    if plant.start_indoors_weeks > 0 {
        scheduled.push((
            EventKind::StartIndoors,
            last_frost.checked_sub_days(weeks(plant.start_indoors_weeks)),
        ));
    }
    if plant.transplant_weeks > 0 {
        scheduled.push((EventKind::Transplant, sow_date(plant, last_frost)));
    }
    if plant.start_indoors_weeks == 0 && plant.transplant_weeks == 0 {
        scheduled.push((EventKind::DirectSow, Some(last_frost)));
    }
    scheduled.push((EventKind::Harvest, harvest_date(plant, last_frost)));

    scheduled
        .into_iter()
        .filter_map(|(kind, date)| match date {
            Some(date) => Some(event(kind, date)),
            None => {
                log::debug!("Dropping {kind:?} for '{}': date out of range", plant.id);
                None
            }
        })
        .collect()
}

/// Events for every distinct plant in the garden, sorted by date.
///
/// Empty for zones without a frost date; unknown plant ids are skipped.
pub fn planting_calendar(
    plants: &[PlacedPlant],
    catalog: &PlantCatalog,
    zone: u8,
    year: i32,
) -> Vec<CalendarEvent> {
    let Some(last_frost) = last_frost_date(zone, year) else {
        log::debug!("No frost date for zone {zone} in {year}");
        return Vec::new();
    };

    let mut seen: Vec<&str> = Vec::new();
    let mut events = Vec::new();
    for placed in plants {
        if seen.contains(&placed.plant_id.as_str()) {
            continue;
        }
        seen.push(&placed.plant_id);
        if let Some(plant) = catalog.get(&placed.plant_id) {
            events.extend(plant_events(plant, last_frost));
        }
    }
    events.sort_by_key(|e| e.date);
    events
}

/// Staggered sowings of one crop, `interval_weeks` apart, starting at its sow date.
///
/// At most [`MAX_SUCCESSION_ROUNDS`] sowings. The plan stops at the first round whose
/// dates fall outside the representable calendar.
pub fn succession_plan(
    plant: &Plant,
    zone: u8,
    year: i32,
    interval_weeks: u32,
    rounds: u32,
) -> Vec<Sowing> {
    let Some(last_frost) = last_frost_date(zone, year) else {
        return Vec::new();
    };
    let Some(first) = sow_date(plant, last_frost) else {
        return Vec::new();
    };
    let rounds = if interval_weeks == 0 {
        rounds.min(1)
    } else {
        rounds.min(MAX_SUCCESSION_ROUNDS)
    };
    let growing = Days::new(plant.days_to_maturity.into());

    (0..rounds)
        .map_while(|i| {
            let offset = 7 * u64::from(interval_weeks) * u64::from(i);
            let sow = first.checked_add_days(Days::new(offset))?;
            Some(Sowing {
                round: i + 1,
                sow_date: sow,
                harvest_date: sow.checked_add_days(growing)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use crate::data::plants::test_plant;
    use crate::models::plant::PlantFamily;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tomato() -> Plant {
        Plant {
            start_indoors_weeks: 6,
            transplant_weeks: 2,
            days_to_maturity: 80,
            ..test_plant("tomato", Some(PlantFamily::Nightshade), 18)
        }
    }

    fn radish() -> Plant {
        Plant {
            days_to_maturity: 25,
            ..test_plant("radish", Some(PlantFamily::Brassica), 3)
        }
    }

    #[test]
    fn test_zone_six_tomato_schedule() {
        let events = plant_events(&tomato(), date(2025, 4, 1));
        let kinds: Vec<(EventKind, NaiveDate)> = events.iter().map(|e| (e.kind, e.date)).collect();
        assert_eq!(
            kinds,
            vec![
                (EventKind::StartIndoors, date(2025, 2, 18)),
                (EventKind::Transplant, date(2025, 4, 15)),
                (EventKind::Harvest, date(2025, 7, 4)),
            ]
        );
    }

    #[test]
    fn test_direct_sow_on_last_frost() {
        let events = plant_events(&radish(), date(2025, 4, 1));
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::DirectSow);
        assert_eq!(events[0].date, date(2025, 4, 1));
        assert_eq!(events[1].date, date(2025, 4, 26));
    }

    #[test]
    fn test_start_indoors_without_transplant_harvests_from_frost() {
        let onion = Plant {
            start_indoors_weeks: 10,
            days_to_maturity: 100,
            ..test_plant("onion", Some(PlantFamily::Allium), 4)
        };
        let events = plant_events(&onion, date(2025, 4, 1));
        let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::StartIndoors, EventKind::Harvest]);
        assert_eq!(events[1].date, date(2025, 7, 10));
    }

    #[test]
    fn test_harvest_follows_transplant_by_days_to_maturity() {
        let plant = tomato();
        let events = plant_events(&plant, date(2025, 4, 1));
        let transplant = events.iter().find(|e| e.kind == EventKind::Transplant).unwrap();
        let harvest = events.iter().find(|e| e.kind == EventKind::Harvest).unwrap();
        assert_eq!(
            (harvest.date - transplant.date).num_days(),
            plant.days_to_maturity as i64
        );
    }

    #[test]
    fn test_calendar_dedupes_and_sorts() {
        let catalog = PlantCatalog::new(vec![tomato(), radish()]);
        let plants = vec![
            PlacedPlant::new("tomato", 0, 0),
            PlacedPlant::new("radish", 1, 0),
            PlacedPlant::new("tomato", 2, 0),
            PlacedPlant::new("mandrake", 3, 0),
        ];
        let events = planting_calendar(&plants, &catalog, 6, 2025);
        assert_eq!(events.len(), 5);
        assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(events[0].kind, EventKind::StartIndoors);
    }

    #[test]
    fn test_calendar_empty_for_unknown_zone() {
        let catalog = PlantCatalog::new(vec![tomato()]);
        let plants = vec![PlacedPlant::new("tomato", 0, 0)];
        assert!(planting_calendar(&plants, &catalog, 13, 2025).is_empty());
    }

    #[test]
    fn test_succession_plan_every_two_weeks() {
        let plan = succession_plan(&radish(), 6, 2025, 2, 3);
        let sow: Vec<NaiveDate> = plan.iter().map(|s| s.sow_date).collect();
        assert_eq!(sow, vec![date(2025, 4, 1), date(2025, 4, 15), date(2025, 4, 29)]);
        assert_eq!(plan[2].round, 3);
        assert_eq!(plan[2].harvest_date, date(2025, 5, 24));
    }

    #[test]
    fn test_succession_plan_edge_cases() {
        assert!(succession_plan(&radish(), 6, 2025, 2, 0).is_empty());
        assert_eq!(succession_plan(&radish(), 6, 2025, 0, 5).len(), 1);
        assert!(succession_plan(&radish(), 2, 2025, 2, 3).is_empty());
    }

    #[test]
    fn test_succession_plan_caps_rounds() {
        let plan = succession_plan(&radish(), 6, 2025, 1, u32::MAX);
        assert_eq!(plan.len(), MAX_SUCCESSION_ROUNDS as usize);
        assert_eq!(plan.last().unwrap().round, MAX_SUCCESSION_ROUNDS);
    }

    #[test]
    fn test_succession_plan_stops_at_calendar_end() {
        // ~19 million years per round: the second sowing is already out of range
        let plan = succession_plan(&radish(), 6, 2025, 1_000_000_000, 5);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].sow_date, date(2025, 4, 1));
    }

    #[test]
    fn test_events_near_calendar_limits_are_dropped() {
        let parsnip = Plant {
            days_to_maturity: 365,
            ..test_plant("parsnip", Some(PlantFamily::Umbellifer), 4)
        };
        let catalog = PlantCatalog::new(vec![tomato(), radish(), parsnip]);
        let plants = vec![
            PlacedPlant::new("tomato", 0, 0),
            PlacedPlant::new("radish", 1, 0),
            PlacedPlant::new("parsnip", 2, 0),
        ];

        let earliest = planting_calendar(&plants, &catalog, 11, NaiveDate::MIN.year());
        assert!(earliest.iter().all(|e| e.kind != EventKind::StartIndoors));
        assert_eq!(earliest.iter().filter(|e| e.kind == EventKind::Harvest).count(), 3);

        let latest = planting_calendar(&plants, &catalog, 3, NaiveDate::MAX.year());
        let parsnip_kinds: Vec<EventKind> = latest
            .iter()
            .filter(|e| e.plant_id == "parsnip")
            .map(|e| e.kind)
            .collect();
        assert_eq!(parsnip_kinds, vec![EventKind::DirectSow]);
        assert!(latest.iter().any(|e| e.plant_id == "tomato" && e.kind == EventKind::Harvest));
        assert!(latest.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
