use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::PlantCatalog;
use crate::models::garden::{PlacedPlant, RotationHistory};
use crate::models::plant::PlantFamily;

/// A family may come back to the same cell once this many years have passed.
pub const ROTATION_WINDOW_YEARS: i32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotationWarning {
    pub x: u32,
    pub y: u32,
    pub plant_id: String,
    pub family: PlantFamily,
    pub years: Vec<i32>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotationSuggestion {
    pub family: PlantFamily,
    pub good_followers: Vec<PlantFamily>,
    /// Catalog plants belonging to one of the follower families.
    pub suggested_plants: Vec<String>,
}

/// Families that do well in a cell after `family`.
pub fn good_followers(family: PlantFamily) -> &'static [PlantFamily] {
    use PlantFamily::*;
    match family {
        Nightshade => &[Legume, Cucurbit, Brassica],
        Legume => &[Brassica, Nightshade, Cucurbit],
        Brassica => &[Allium, Umbellifer, Legume],
        Allium => &[Legume, Nightshade, Cucurbit],
        Cucurbit => &[Legume, Allium, Brassica],
        Umbellifer => &[Legume, Nightshade, Cucurbit],
        Aster => &[Legume, Brassica],
        Mint | Herb | Fruit | Vegetable => &[],
    }
}

pub fn family_of(plant_id: &str, catalog: &PlantCatalog) -> Option<PlantFamily> {
    catalog.get(plant_id).and_then(|p| p.family)
}

fn entry(cell_key: &str, family: PlantFamily) -> String {
    format!("{cell_key}:{family}")
}

/// `"x-y:family"` entries for the current layout, one per occupied cell.
///
/// The first plant found for a cell wins; plants without a family are left out.
pub fn snapshot_entries(plants: &[PlacedPlant], catalog: &PlantCatalog) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();
    for placed in plants {
        let Some(family) = family_of(&placed.plant_id, catalog) else {
            continue;
        };
        let cell_key = placed.cell_key();
        if seen.insert(cell_key.clone()) {
            entries.push(entry(&cell_key, family));
        }
    }
    entries
}

/// Replaces the history entry for `year` with the current layout.
pub fn record_year(
    history: &mut RotationHistory,
    year: i32,
    plants: &[PlacedPlant],
    catalog: &PlantCatalog,
) {
    let entries = snapshot_entries(plants, catalog);
    log::debug!("Recording {} rotation entries for {year}", entries.len());
    history.insert(year.to_string(), entries);
}

/// One warning per (plant, recorded year) where the same family held the same cell
/// less than [`ROTATION_WINDOW_YEARS`] before `current_year`.
pub fn rotation_warnings(
    history: &RotationHistory,
    plants: &[PlacedPlant],
    catalog: &PlantCatalog,
    current_year: i32,
) -> Vec<RotationWarning> {
    let years: Vec<(i32, &Vec<String>)> = history
        .iter()
        .filter_map(|(key, entries)| match key.parse::<i32>() {
            Ok(year) => Some((year, entries)),
            Err(_) => {
                log::debug!("Skipping rotation history key '{key}'");
                None
            }
        })
        .collect();

    let mut warnings = Vec::new();
    for placed in plants {
        let Some(plant) = catalog.get(&placed.plant_id) else {
            continue;
        };
        let Some(family) = plant.family else {
            continue;
        };
        let wanted = entry(&placed.cell_key(), family);
        for &(year, entries) in &years {
            if i64::from(current_year) - i64::from(year) >= i64::from(ROTATION_WINDOW_YEARS) {
                continue;
            }
            if !entries.iter().any(|e| *e == wanted) {
                continue;
            }
            warnings.push(RotationWarning {
                x: placed.x,
                y: placed.y,
                plant_id: placed.plant_id.clone(),
                family,
                years: vec![year],
                message: format!(
                    "{} is a {family} and this cell already grew {family} in {year}. \
                     Wait {ROTATION_WINDOW_YEARS} years before planting the same family here.",
                    plant.name
                ),
            });
        }
    }
    warnings
}

/// One suggestion per distinct family in the garden, in order of first appearance.
pub fn rotation_suggestions(
    plants: &[PlacedPlant],
    catalog: &PlantCatalog,
) -> Vec<RotationSuggestion> {
    let mut families: Vec<PlantFamily> = Vec::new();
    for placed in plants {
        if let Some(family) = family_of(&placed.plant_id, catalog) {
            if !families.contains(&family) {
                families.push(family);
            }
        }
    }

    let mut by_family: HashMap<PlantFamily, Vec<String>> = HashMap::new();
    for plant in catalog.all() {
        if let Some(family) = plant.family {
            by_family.entry(family).or_default().push(plant.id.clone());
        }
    }

    families
        .into_iter()
        .map(|family| {
            let followers = good_followers(family);
            let suggested_plants = followers
                .iter()
                .flat_map(|f| by_family.get(f).cloned().unwrap_or_default())
                .collect();
            RotationSuggestion {
                family,
                good_followers: followers.to_vec(),
                suggested_plants,
            }
        })
        .collect()
}
