use std::collections::HashMap;
use std::sync::OnceLock;

use crate::data::plants::builtin_plants;
use crate::models::plant::Plant;

/// Id-indexed plant reference table.
#[derive(Debug, Clone, Default)]
pub struct PlantCatalog {
    plants: Vec<Plant>,
    index: HashMap<String, usize>,
}

static BUILTIN: OnceLock<PlantCatalog> = OnceLock::new();

impl PlantCatalog {
    /// Later entries with a duplicate id are dropped.
    pub fn new(plants: Vec<Plant>) -> Self {
        let mut kept = Vec::with_capacity(plants.len());
        let mut index = HashMap::with_capacity(plants.len());
        for plant in plants {
            if index.contains_key(&plant.id) {
                log::warn!("Duplicate catalog id '{}' ignored", plant.id);
                continue;
            }
            index.insert(plant.id.clone(), kept.len());
            kept.push(plant);
        }
        Self {
            plants: kept,
            index,
        }
    }

    pub fn builtin() -> &'static PlantCatalog {
        BUILTIN.get_or_init(|| PlantCatalog::new(builtin_plants()))
    }

    pub fn get(&self, id: &str) -> Option<&Plant> {
        self.index.get(id).map(|&i| &self.plants[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn all(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Resolves a plant's companion ids, dropping ids missing from the catalog.
    pub fn companions_of(&self, plant: &Plant) -> Vec<&Plant> {
        plant.companions.iter().filter_map(|id| self.get(id)).collect()
    }

    /// Resolves a plant's antagonist ids, dropping ids missing from the catalog.
    pub fn antagonists_of(&self, plant: &Plant) -> Vec<&Plant> {
        plant.antagonists.iter().filter_map(|id| self.get(id)).collect()
    }
}

pub fn get_plant_by_id(id: &str) -> Option<&'static Plant> {
    PlantCatalog::builtin().get(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plant::PlantFamily;

    #[test]
    fn test_builtin_catalog_ids_are_unique() {
        let catalog = PlantCatalog::builtin();
        assert_eq!(catalog.len(), builtin_plants().len());
    }

    #[test]
    fn test_builtin_catalog_has_tomato() {
        let tomato = get_plant_by_id("tomato").expect("tomato must be in the catalog");
        assert_eq!(tomato.family, Some(PlantFamily::Nightshade));
        assert!(tomato.lists_companion("basil"));
    }

    #[test]
    fn test_unknown_references_are_dropped() {
        let catalog = PlantCatalog::builtin();
        let basil = catalog.get("basil").unwrap();
        let resolved = catalog.companions_of(basil);
        assert!(resolved.iter().all(|p| catalog.contains(&p.id)));
        assert!(resolved.len() <= basil.companions.len());
    }

    #[test]
    fn test_builtin_references_resolve() {
        // Every companion/antagonist listed in the built-in data should exist.
        let catalog = PlantCatalog::builtin();
        for plant in catalog.all() {
            for id in plant.companions.iter().chain(plant.antagonists.iter()) {
                assert!(
                    catalog.contains(id),
                    "'{}' references unknown plant '{}'",
                    plant.id,
                    id
                );
            }
        }
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut plants = builtin_plants();
        let mut dup = plants[0].clone();
        dup.name = "Impostor".into();
        plants.push(dup);
        let catalog = PlantCatalog::new(plants);
        assert_ne!(catalog.all()[0].name, "Impostor");
        assert_eq!(catalog.len(), builtin_plants().len());
    }
}
