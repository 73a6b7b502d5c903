//! Directed plant affinities, read from each plant's own companion and antagonist lists.

use crate::models::plant::Plant;

pub const COMPANION_WEIGHT: i32 = 2;
pub const ANTAGONIST_WEIGHT: i32 = -3;

/// What one plant's lists say about another. Not symmetric: basil may list tomato
/// while tomato lists nothing back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affinity {
    Companion,
    Antagonist,
}

impl Affinity {
    pub const ALL: [Affinity; 2] = [Affinity::Companion, Affinity::Antagonist];

    pub fn weight(self) -> i32 {
        match self {
            Affinity::Companion => COMPANION_WEIGHT,
            Affinity::Antagonist => ANTAGONIST_WEIGHT,
        }
    }

    /// Whether `plant` lists `other_id` under this affinity.
    pub fn listed_by(self, plant: &Plant, other_id: &str) -> bool {
        match self {
            Affinity::Companion => plant.lists_companion(other_id),
            Affinity::Antagonist => plant.lists_antagonist(other_id),
        }
    }
}

/// Score of `plant` against its neighbours, from its own lists only.
/// An id on both lists contributes both weights.
pub fn companion_score(plant: &Plant, neighbor_ids: &[&str]) -> i32 {
    neighbor_ids
        .iter()
        .flat_map(|id| Affinity::ALL.into_iter().filter(move |a| a.listed_by(plant, id)))
        .map(Affinity::weight)
        .sum()
}

/// False when either plant lists the other as an antagonist.
pub fn is_compatible(a: &Plant, b: &Plant) -> bool {
    !Affinity::Antagonist.listed_by(a, &b.id) && !Affinity::Antagonist.listed_by(b, &a.id)
}
