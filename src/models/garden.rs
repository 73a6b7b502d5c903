use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Coordinate, Matrix};

/// Supported square grid sizes.
pub const GRID_SIZES: [u32; 3] = [4, 8, 12];
pub const DEFAULT_GRID_SIZE: u32 = 8;

pub fn is_valid_grid_size(size: u32) -> bool {
    GRID_SIZES.contains(&size)
}

/// Year key ("2024") → list of `"x-y:family"` entries.
pub type RotationHistory = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Seedling,
    Growing,
    Ready,
}

impl Stage {
    pub fn next(self) -> Stage {
        match self {
            Stage::Seedling => Stage::Growing,
            Stage::Growing => Stage::Ready,
            Stage::Ready => Stage::Seedling,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPlant {
    pub id: String,
    pub plant_id: String,
    pub x: u32,
    pub y: u32,
    pub planted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stage: Stage,
}

impl PlacedPlant {
    pub fn new(plant_id: impl Into<String>, x: u32, y: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            plant_id: plant_id.into(),
            x,
            y,
            planted_at: Some(Utc::now()),
            stage: Stage::Seedling,
        }
    }

    pub fn is_at(&self, x: u32, y: u32) -> bool {
        self.x == x && self.y == y
    }

    pub fn cell_key(&self) -> String {
        format!("{}-{}", self.x, self.y)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub text: String,
    pub plant_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PestIssue {
    pub id: String,
    pub plant_id: String,
    pub pest: String,
    #[serde(default)]
    pub severity: Severity,
    pub notes: Option<String>,
    pub reported_at: NaiveDate,
    #[serde(default)]
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub id: String,
    pub name: String,
    pub size: u32,
    pub plants: Vec<PlacedPlant>,
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
    #[serde(default)]
    pub pest_issues: Vec<PestIssue>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub rotation_history: RotationHistory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Garden {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            size,
            plants: Vec::new(),
            journal: Vec::new(),
            pest_issues: Vec::new(),
            rotation_history: RotationHistory::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.size && y < self.size
    }

    pub fn plant_at(&self, x: u32, y: u32) -> Option<&PlacedPlant> {
        self.plants.iter().find(|p| p.is_at(x, y))
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Cell-indexed view over a placed-plant list.
///
/// The first plant found for a cell wins; plants outside the grid are ignored.
#[derive(Debug, Clone)]
pub struct GardenGrid<'a> {
    pub size: u32,
    cells: Matrix<Option<&'a PlacedPlant>>,
}

impl<'a> GardenGrid<'a> {
    pub fn new(size: u32, plants: &'a [PlacedPlant]) -> Self {
        let mut cells: Matrix<Option<&'a PlacedPlant>> =
            vec![vec![None; size as usize]; size as usize];
        for plant in plants {
            if plant.x >= size || plant.y >= size {
                continue;
            }
            let cell = &mut cells[plant.y as usize][plant.x as usize];
            if cell.is_none() {
                *cell = Some(plant);
            }
        }
        Self { size, cells }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&'a PlacedPlant> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[y as usize][x as usize]
    }

    pub fn get_neighbors(&self, x: u32, y: u32) -> Vec<&'a PlacedPlant> {
        let mut neighbors = Vec::new();
        let directions: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        for (dx, dy) in directions {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx >= 0 && ny >= 0 {
                if let Some(p) = self.get(nx as u32, ny as u32) {
                    neighbors.push(p);
                }
            }
        }
        neighbors
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        let mut empty = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.get(x, y).is_none() {
                    empty.push(Coordinate { x, y });
                }
            }
        }
        empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_cycles_back_to_seedling() {
        assert_eq!(Stage::Seedling.next(), Stage::Growing);
        assert_eq!(Stage::Growing.next(), Stage::Ready);
        assert_eq!(Stage::Ready.next(), Stage::Seedling);
    }

    #[test]
    fn test_grid_first_plant_per_cell_wins() {
        let plants = vec![
            PlacedPlant::new("tomato", 1, 1),
            PlacedPlant::new("basil", 1, 1),
        ];
        let grid = GardenGrid::new(4, &plants);
        assert_eq!(grid.get(1, 1).map(|p| p.plant_id.as_str()), Some("tomato"));
    }

    #[test]
    fn test_grid_neighbors_are_four_directional() {
        let plants = vec![
            PlacedPlant::new("tomato", 1, 1),
            PlacedPlant::new("basil", 2, 1),
            PlacedPlant::new("carrot", 1, 0),
            PlacedPlant::new("onion", 2, 2), // diagonal
        ];
        let grid = GardenGrid::new(4, &plants);
        let mut ids: Vec<&str> = grid
            .get_neighbors(1, 1)
            .iter()
            .map(|p| p.plant_id.as_str())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["basil", "carrot"]);
    }

    #[test]
    fn test_grid_ignores_out_of_bounds_plants() {
        let plants = vec![PlacedPlant::new("tomato", 9, 0)];
        let grid = GardenGrid::new(4, &plants);
        assert_eq!(grid.empty_cells().len(), 16);
    }

    #[test]
    fn test_missing_stage_defaults_to_seedling() {
        let json = r#"{ "id": "a", "plantId": "tomato", "x": 0, "y": 1 }"#;
        let placed: PlacedPlant = serde_json::from_str(json).unwrap();
        assert_eq!(placed.stage, Stage::Seedling);
        assert!(placed.planted_at.is_none());
    }
}
