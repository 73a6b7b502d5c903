use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::PlantCatalog;
use crate::models::garden::PlacedPlant;
use crate::models::plant::WaterNeeds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantCare {
    pub plant_id: String,
    pub plant_name: String,
    pub count: u32,
    pub water_needs: WaterNeeds,
    pub inches_per_week: f32,
    pub water_every_days: u32,
    /// Pounds, for all placements of this plant.
    pub expected_yield: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareSummary {
    pub plants: Vec<PlantCare>,
    pub total_plants: u32,
    pub total_expected_yield: f32,
}

/// (inches per week, days between waterings)
pub fn watering(needs: WaterNeeds) -> (f32, u32) {
    match needs {
        WaterNeeds::Low => (0.5, 7),
        WaterNeeds::Moderate => (1.0, 4),
        WaterNeeds::High => (1.5, 2),
    }
}

/// Watering and yield per distinct plant, in order of first appearance.
pub fn care_summary(plants: &[PlacedPlant], catalog: &PlantCatalog) -> CareSummary {
    let mut rows: Vec<PlantCare> = Vec::new();
    for placed in plants {
        let Some(plant) = catalog.get(&placed.plant_id) else {
            continue;
        };
        if let Some(row) = rows.iter_mut().find(|r| r.plant_id == plant.id) {
            row.count += 1;
            row.expected_yield += plant.yield_per_plant;
            continue;
        }
        let (inches_per_week, water_every_days) = watering(plant.water_needs);
        rows.push(PlantCare {
            plant_id: plant.id.clone(),
            plant_name: plant.name.clone(),
            count: 1,
            water_needs: plant.water_needs,
            inches_per_week,
            water_every_days,
            expected_yield: plant.yield_per_plant,
        });
    }

    CareSummary {
        total_plants: rows.iter().map(|r| r.count).sum(),
        total_expected_yield: rows.iter().map(|r| r.expected_yield).sum(),
        plants: rows,
    }
}
