use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::PlantCatalog;
use crate::logic::companion::Affinity;
use crate::models::garden::PlacedPlant;

/// Physical width of one grid cell, in inches.
pub const INCHES_PER_CELL: u32 = 12;
pub const BASE_SCORE: i32 = 70;
pub const COMPANION_BONUS: i32 = 10;
pub const ANTAGONIST_PENALTY: i32 = 15;
pub const SPACING_PENALTY: i32 = 8;
/// Score reported when fewer than two plants are placed.
pub const EMPTY_GARDEN_SCORE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Companion,
    Antagonist,
    Spacing,
}

impl From<Affinity> for RelationshipKind {
    fn from(affinity: Affinity) -> Self {
        match affinity {
            Affinity::Companion => RelationshipKind::Companion,
            Affinity::Antagonist => RelationshipKind::Antagonist,
        }
    }
}

/// A line between two adjacent cells. For companion and antagonist links, `from` is
/// the plant that lists the other one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
    pub from_x: u32,
    pub from_y: u32,
    pub to_x: u32,
    pub to_y: u32,
}

impl Relationship {
    fn between(kind: RelationshipKind, from: &PlacedPlant, to: &PlacedPlant) -> Self {
        Self {
            kind,
            from_x: from.x,
            from_y: from.y,
            to_x: to.x,
            to_y: to.y,
        }
    }

    pub fn touches(&self, x: u32, y: u32) -> bool {
        (self.from_x == x && self.from_y == y) || (self.to_x == x && self.to_y == y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HarmonyReport {
    /// 0–100.
    pub score: i32,
    pub companion_count: u32,
    pub antagonist_count: u32,
    pub spacing_warnings: u32,
    pub relationships: Vec<Relationship>,
}

fn manhattan(a: &PlacedPlant, b: &PlacedPlant) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Scores every unordered pair of 4-directionally adjacent plants.
///
/// Plants missing from the catalog are skipped. A pair listed as companions on both
/// sides yields two companion links and counts twice; antagonists likewise.
pub fn analyze_relationships(plants: &[PlacedPlant], catalog: &PlantCatalog) -> HarmonyReport {
    let mut relationships = Vec::new();
    let mut companion_count = 0u32;
    let mut antagonist_count = 0u32;
    let mut spacing_warnings = 0u32;

    for (i, a) in plants.iter().enumerate() {
        let Some(plant_a) = catalog.get(&a.plant_id) else {
            continue;
        };
        for b in &plants[i + 1..] {
            let Some(plant_b) = catalog.get(&b.plant_id) else {
                continue;
            };
            let distance = manhattan(a, b);
            if distance != 1 {
                continue;
            }

            // distance < (spacing_a + spacing_b) / 2, kept in integers
            let distance_in_inches = distance * INCHES_PER_CELL;
            if 2 * distance_in_inches < plant_a.spacing + plant_b.spacing {
                relationships.push(Relationship::between(RelationshipKind::Spacing, a, b));
                spacing_warnings += 1;
            }

            for affinity in Affinity::ALL {
                for (from, to, lister, listed) in [(a, b, plant_a, plant_b), (b, a, plant_b, plant_a)]
                {
                    if !affinity.listed_by(lister, &listed.id) {
                        continue;
                    }
                    relationships.push(Relationship::between(affinity.into(), from, to));
                    match affinity {
                        Affinity::Companion => companion_count += 1,
                        Affinity::Antagonist => antagonist_count += 1,
                    }
                }
            }
        }
    }

    let score = if plants.len() < 2 {
        EMPTY_GARDEN_SCORE
    } else {
        (BASE_SCORE + COMPANION_BONUS * companion_count as i32
            - ANTAGONIST_PENALTY * antagonist_count as i32
            - SPACING_PENALTY * spacing_warnings as i32)
            .clamp(0, 100)
    };

    HarmonyReport {
        score,
        companion_count,
        antagonist_count,
        spacing_warnings,
        relationships,
    }
}

pub fn harmony_score(plants: &[PlacedPlant], catalog: &PlantCatalog) -> i32 {
    analyze_relationships(plants, catalog).score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::plants::test_plant;
    use crate::models::plant::{Plant, PlantFamily};

    fn placed(plant_id: &str, x: u32, y: u32) -> PlacedPlant {
        PlacedPlant::new(plant_id, x, y)
    }

    fn fixture() -> PlantCatalog {
        let tomato = Plant {
            antagonists: vec!["onion".into()],
            ..test_plant("tomato", Some(PlantFamily::Nightshade), 12)
        };
        let basil = Plant {
            companions: vec!["tomato".into()],
            ..test_plant("basil", Some(PlantFamily::Mint), 6)
        };
        let onion = test_plant("onion", Some(PlantFamily::Allium), 4);
        let bean = Plant {
            companions: vec!["corn".into()],
            ..test_plant("bean", Some(PlantFamily::Legume), 4)
        };
        let corn = Plant {
            companions: vec!["bean".into()],
            ..test_plant("corn", Some(PlantFamily::Vegetable), 12)
        };
        let squash = test_plant("squash", Some(PlantFamily::Cucurbit), 36);
        PlantCatalog::new(vec![tomato, basil, onion, bean, corn, squash])
    }

    #[test]
    fn test_tomato_basil_single_companion() {
        let plants = vec![placed("tomato", 0, 0), placed("basil", 1, 0)];
        let report = analyze_relationships(&plants, &fixture());
        assert_eq!(report.relationships.len(), 1);
        let rel = &report.relationships[0];
        assert_eq!(rel.kind, RelationshipKind::Companion);
        assert!(rel.touches(0, 0) && rel.touches(1, 0));
        assert_eq!(report.score, 80);
    }

    #[test]
    fn test_tomato_onion_antagonist() {
        let plants = vec![placed("tomato", 0, 0), placed("onion", 1, 0)];
        let report = analyze_relationships(&plants, &fixture());
        assert_eq!(report.relationships.len(), 1);
        assert_eq!(report.relationships[0].kind, RelationshipKind::Antagonist);
        assert_eq!(report.score, 55);
    }

    #[test]
    fn test_mutual_companions_counted_twice() {
        let plants = vec![placed("bean", 0, 0), placed("corn", 0, 1)];
        let report = analyze_relationships(&plants, &fixture());
        assert_eq!(report.companion_count, 2);
        assert_eq!(report.relationships.len(), 2);
        assert_eq!(report.score, 90);
        // one link per direction
        assert_eq!((report.relationships[0].from_x, report.relationships[0].from_y), (0, 0));
        assert_eq!((report.relationships[1].from_x, report.relationships[1].from_y), (0, 1));
    }

    #[test]
    fn test_spacing_warning_for_large_plants() {
        // (36 + 12) / 2 = 24 inches needed, only 12 available
        let plants = vec![placed("squash", 0, 0), placed("tomato", 1, 0)];
        let report = analyze_relationships(&plants, &fixture());
        assert_eq!(report.spacing_warnings, 1);
        assert_eq!(report.relationships[0].kind, RelationshipKind::Spacing);
        assert_eq!(report.score, 62);
    }

    #[test]
    fn test_spacing_exactly_one_cell_is_fine() {
        // (12 + 12) / 2 = 12 inches, not strictly more than the cell width
        let plants = vec![placed("tomato", 0, 0), placed("corn", 1, 0)];
        let report = analyze_relationships(&plants, &fixture());
        assert_eq!(report.spacing_warnings, 0);
        assert_eq!(report.score, 70);
    }

    #[test]
    fn test_diagonal_and_distant_pairs_ignored() {
        let plants = vec![
            placed("tomato", 0, 0),
            placed("onion", 1, 1),
            placed("basil", 2, 0),
        ];
        let report = analyze_relationships(&plants, &fixture());
        assert!(report.relationships.is_empty());
        assert_eq!(report.score, 70);
    }

    #[test]
    fn test_fewer_than_two_plants_scores_100() {
        let catalog = fixture();
        assert_eq!(harmony_score(&[], &catalog), 100);
        assert_eq!(harmony_score(&[placed("tomato", 3, 3)], &catalog), 100);
    }

    #[test]
    fn test_unknown_plants_are_skipped() {
        let plants = vec![placed("tomato", 0, 0), placed("mandrake", 1, 0)];
        let report = analyze_relationships(&plants, &fixture());
        assert!(report.relationships.is_empty());
        assert_eq!(report.score, 70);
    }

    #[test]
    fn test_score_clamped_to_zero() {
        // A row of alternating tomato/onion: every adjacent pair is antagonistic.
        let plants: Vec<PlacedPlant> = (0..8)
            .map(|x| placed(if x % 2 == 0 { "tomato" } else { "onion" }, x, 0))
            .collect();
        let report = analyze_relationships(&plants, &fixture());
        assert_eq!(report.antagonist_count, 7);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_score_clamped_to_hundred() {
        let plants: Vec<PlacedPlant> = (0..6)
            .map(|x| placed(if x % 2 == 0 { "bean" } else { "corn" }, x, 0))
            .collect();
        let report = analyze_relationships(&plants, &fixture());
        assert_eq!(report.companion_count, 10);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_relationships_only_reference_adjacent_pairs() {
        let catalog = PlantCatalog::builtin();
        let ids = ["tomato", "basil", "fennel", "squash", "bean", "onion"];
        let plants: Vec<PlacedPlant> = (0..16)
            .map(|i| placed(ids[i % ids.len()], (i % 4) as u32, (i / 4) as u32))
            .collect();
        let report = analyze_relationships(&plants, catalog);
        assert!((0..=100).contains(&report.score));
        for rel in &report.relationships {
            assert_eq!(rel.from_x.abs_diff(rel.to_x) + rel.from_y.abs_diff(rel.to_y), 1);
        }
    }
}
