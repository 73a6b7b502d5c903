use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::PlantCatalog;
use crate::logic::companion::{companion_score, is_compatible};
use crate::models::garden::{GardenGrid, PlacedPlant};
use crate::models::plant::Plant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CellSuggestion {
    pub x: u32,
    pub y: u32,
    pub score: i32,
    pub reason: String,
}

/// Ranks the empty cells of the grid for `plant_id` by companion score against the
/// occupied 4-directional neighbours. Ties keep row-major order.
pub fn suggest_placements(
    plant_id: &str,
    plants: &[PlacedPlant],
    grid_size: u32,
    catalog: &PlantCatalog,
    limit: usize,
) -> Vec<CellSuggestion> {
    let Some(plant) = catalog.get(plant_id) else {
        return Vec::new();
    };
    let grid = GardenGrid::new(grid_size, plants);

    let mut suggestions: Vec<CellSuggestion> = grid
        .empty_cells()
        .into_iter()
        .map(|cell| {
            let neighbors = grid.get_neighbors(cell.x, cell.y);
            let neighbor_ids: Vec<&str> = neighbors.iter().map(|p| p.plant_id.as_str()).collect();
            let mut neighbor_names = Vec::with_capacity(neighbors.len());
            let mut conflicts = Vec::new();
            for placed in &neighbors {
                match catalog.get(&placed.plant_id) {
                    Some(neighbor) => {
                        if !is_compatible(plant, neighbor) {
                            conflicts.push(neighbor.name.clone());
                        }
                        neighbor_names.push(neighbor.name.clone());
                    }
                    None => neighbor_names.push(placed.plant_id.clone()),
                }
            }
            let score = companion_score(plant, &neighbor_ids);
            CellSuggestion {
                x: cell.x,
                y: cell.y,
                score,
                reason: build_reason(plant, &neighbor_names, &conflicts, score),
            }
        })
        .collect();

    // stable: equal scores stay in row-major order
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(limit);
    suggestions
}

fn build_reason(
    plant: &Plant,
    neighbor_names: &[String],
    conflicts: &[String],
    score: i32,
) -> String {
    if neighbor_names.is_empty() {
        return format!("Open cell with no neighbours ({})", plant.category_label());
    }
    // antagonism listed only by the neighbour does not move the score
    if !conflicts.is_empty() {
        return format!("{} conflicts with {}", plant.name, conflicts.join(", "));
    }
    let neighbors_str = neighbor_names.join(", ");
    let qualifier = if score > 0 {
        "good companion with"
    } else if score < 0 {
        "constrained placement near"
    } else {
        "neutral with"
    };
    format!("{} {} {}", plant.name, qualifier, neighbors_str)
}
