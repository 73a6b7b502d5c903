use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetable,
    Herb,
    Fruit,
    Flower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SunNeeds {
    FullSun,
    PartialSun,
    Shade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeeds {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    #[default]
    Loamy,
    Silty,
    Peaty,
    Chalky,
}

/// Botanical grouping used for crop rotation.
///
/// `Herb`, `Fruit` and `Vegetable` are catch-alls for plants outside the classic
/// rotation families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlantFamily {
    Nightshade,
    Allium,
    Brassica,
    Cucurbit,
    Legume,
    Umbellifer,
    Aster,
    Mint,
    Herb,
    Fruit,
    Vegetable,
}

impl PlantFamily {
    pub const ALL: [PlantFamily; 11] = [
        PlantFamily::Nightshade,
        PlantFamily::Allium,
        PlantFamily::Brassica,
        PlantFamily::Cucurbit,
        PlantFamily::Legume,
        PlantFamily::Umbellifer,
        PlantFamily::Aster,
        PlantFamily::Mint,
        PlantFamily::Herb,
        PlantFamily::Fruit,
        PlantFamily::Vegetable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantFamily::Nightshade => "nightshade",
            PlantFamily::Allium => "allium",
            PlantFamily::Brassica => "brassica",
            PlantFamily::Cucurbit => "cucurbit",
            PlantFamily::Legume => "legume",
            PlantFamily::Umbellifer => "umbellifer",
            PlantFamily::Aster => "aster",
            PlantFamily::Mint => "mint",
            PlantFamily::Herb => "herb",
            PlantFamily::Fruit => "fruit",
            PlantFamily::Vegetable => "vegetable",
        }
    }
}

impl fmt::Display for PlantFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlantFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| format!("unknown plant family '{s}'"))
    }
}

/// Static catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub category: Category,
    /// `None` keeps the plant out of rotation tracking.
    pub family: Option<PlantFamily>,
    /// Recommended spacing between plants, in inches.
    pub spacing: u32,
    pub days_to_maturity: u32,
    pub sun_needs: SunNeeds,
    pub water_needs: WaterNeeds,
    pub companions: Vec<String>,
    pub antagonists: Vec<String>,
    /// Weeks before the last frost to start seeds indoors, 0 when sown outside.
    pub start_indoors_weeks: u32,
    /// Weeks after the last frost to transplant, 0 when direct-sown.
    pub transplant_weeks: u32,
    /// Expected harvest per plant, in pounds.
    pub yield_per_plant: f32,
}

impl Plant {
    pub fn lists_companion(&self, other_id: &str) -> bool {
        self.companions.iter().any(|c| c == other_id)
    }

    pub fn lists_antagonist(&self, other_id: &str) -> bool {
        self.antagonists.iter().any(|a| a == other_id)
    }

    pub fn category_label(&self) -> &'static str {
        match self.category {
            Category::Vegetable => "vegetable",
            Category::Herb => "herb",
            Category::Fruit => "fruit",
            Category::Flower => "flower",
        }
    }
}
