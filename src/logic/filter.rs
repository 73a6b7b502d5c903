use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::data::PlantCatalog;
use crate::models::plant::{Category, Plant, PlantFamily, SunNeeds, WaterNeeds};

/// Catalog search criteria; every provided field must match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlantQuery {
    pub category: Option<Category>,
    pub family: Option<PlantFamily>,
    pub sun: Option<SunNeeds>,
    pub water: Option<WaterNeeds>,
    /// Case-insensitive substring of the plant id or name.
    pub search: Option<String>,
}

pub fn matches(plant: &Plant, query: &PlantQuery) -> bool {
    if let Some(category) = query.category {
        if plant.category != category {
            return false;
        }
    }
    if let Some(family) = query.family {
        if plant.family != Some(family) {
            return false;
        }
    }
    if let Some(sun) = query.sun {
        if plant.sun_needs != sun {
            return false;
        }
    }
    if let Some(water) = query.water {
        if plant.water_needs != water {
            return false;
        }
    }
    if let Some(ref search) = query.search {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty()
            && !plant.id.to_lowercase().contains(&needle)
            && !plant.name.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    true
}

/// Filters the catalog and sorts the result by name.
pub fn filter_plants<'a>(catalog: &'a PlantCatalog, query: &PlantQuery) -> Vec<&'a Plant> {
    let mut filtered: Vec<&Plant> = catalog.all().iter().filter(|p| matches(p, query)).collect();
    filtered.sort_by(|a, b| a.name.cmp(&b.name));
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_everything_sorted() {
        let catalog = PlantCatalog::builtin();
        let result = filter_plants(catalog, &PlantQuery::default());
        assert_eq!(result.len(), catalog.len());
        assert!(result.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_filter_by_category() {
        let query = PlantQuery {
            category: Some(Category::Herb),
            ..Default::default()
        };
        let result = filter_plants(PlantCatalog::builtin(), &query);
        assert!(!result.is_empty());
        for p in &result {
            assert_eq!(p.category, Category::Herb, "{} is not a herb", p.id);
        }
    }

    #[test]
    fn test_filter_by_family() {
        let query = PlantQuery {
            family: Some(PlantFamily::Nightshade),
            ..Default::default()
        };
        let ids: Vec<&str> = filter_plants(PlantCatalog::builtin(), &query)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert!(ids.contains(&"tomato"));
        assert!(ids.contains(&"potato"));
        assert!(!ids.contains(&"basil"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = PlantQuery {
            search: Some("TOMA".into()),
            ..Default::default()
        };
        let result = filter_plants(PlantCatalog::builtin(), &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "tomato");
    }

    #[test]
    fn test_combined_filters() {
        let query = PlantQuery {
            sun: Some(SunNeeds::PartialSun),
            water: Some(WaterNeeds::High),
            ..Default::default()
        };
        for p in filter_plants(PlantCatalog::builtin(), &query) {
            assert_eq!(p.sun_needs, SunNeeds::PartialSun);
            assert_eq!(p.water_needs, WaterNeeds::High);
        }
    }
}
