use crate::models::plant::{Category, Plant, PlantFamily, SunNeeds, WaterNeeds};

#[allow(clippy::too_many_arguments)]
fn plant(
    id: &str,
    name: &str,
    emoji: &str,
    category: Category,
    family: Option<PlantFamily>,
    spacing: u32,
    days_to_maturity: u32,
    sun_needs: SunNeeds,
    water_needs: WaterNeeds,
    companions: &[&str],
    antagonists: &[&str],
    (start_indoors_weeks, transplant_weeks): (u32, u32),
    yield_per_plant: f32,
) -> Plant {
    Plant {
        id: id.into(),
        name: name.into(),
        emoji: emoji.into(),
        category,
        family,
        spacing,
        days_to_maturity,
        sun_needs,
        water_needs,
        companions: companions.iter().map(|s| s.to_string()).collect(),
        antagonists: antagonists.iter().map(|s| s.to_string()).collect(),
        start_indoors_weeks,
        transplant_weeks,
        yield_per_plant,
    }
}

/// Built-in plant reference data.
///
/// Spacing is in inches, timing offsets in weeks relative to the last frost.
pub fn builtin_plants() -> Vec<Plant> {
    use Category::*;
    use PlantFamily::{Allium, Aster, Brassica, Cucurbit, Legume, Mint, Nightshade, Umbellifer};
    use SunNeeds::*;
    use WaterNeeds::*;

    vec![
        // Nightshades
        plant(
            "tomato", "Tomato", "🍅", Vegetable, Some(Nightshade), 18, 75, FullSun, Moderate,
            &["basil", "carrot", "parsley", "marigold", "lettuce", "nasturtium"],
            &["potato", "fennel", "cabbage", "corn", "dill"],
            (6, 2), 10.0,
        ),
        plant(
            "pepper", "Bell Pepper", "🫑", Vegetable, Some(Nightshade), 12, 70, FullSun, Moderate,
            &["basil", "onion", "carrot", "spinach", "marigold"],
            &["fennel", "bean"],
            (8, 2), 3.0,
        ),
        plant(
            "eggplant", "Eggplant", "🍆", Vegetable, Some(Nightshade), 18, 80, FullSun, Moderate,
            &["bean", "marigold", "spinach", "thyme"],
            &["fennel"],
            (8, 2), 5.0,
        ),
        plant(
            "potato", "Potato", "🥔", Vegetable, Some(Nightshade), 12, 90, FullSun, Moderate,
            &["bean", "corn", "cabbage", "marigold"],
            &["tomato", "cucumber", "squash", "sunflower", "pumpkin", "zucchini", "watermelon", "spinach"],
            (0, 0), 2.0,
        ),
        // Alliums
        plant(
            "onion", "Onion", "🧅", Vegetable, Some(Allium), 4, 100, FullSun, Moderate,
            &["carrot", "lettuce", "beet", "cabbage", "pepper"],
            &["bean", "pea"],
            (10, 1), 0.3,
        ),
        plant(
            "garlic", "Garlic", "🧄", Vegetable, Some(Allium), 6, 240, FullSun, Low,
            &["tomato", "carrot", "beet", "lettuce"],
            &["bean", "pea"],
            (0, 0), 0.1,
        ),
        plant(
            "leek", "Leek", "🥬", Vegetable, Some(Allium), 6, 120, FullSun, Moderate,
            &["carrot", "onion", "celery"],
            &["bean", "pea"],
            (10, 2), 0.4,
        ),
        plant(
            "chive", "Chives", "🌱", Herb, Some(Allium), 4, 60, FullSun, Moderate,
            &["carrot", "tomato"],
            &["bean", "pea"],
            (6, 1), 0.2,
        ),
        // Brassicas
        plant(
            "cabbage", "Cabbage", "🥬", Vegetable, Some(Brassica), 18, 70, FullSun, High,
            &["onion", "dill", "celery", "thyme", "mint", "sage", "rosemary"],
            &["tomato", "strawberry"],
            (6, 1), 4.0,
        ),
        plant(
            "broccoli", "Broccoli", "🥦", Vegetable, Some(Brassica), 18, 70, FullSun, Moderate,
            &["onion", "dill", "celery", "potato"],
            &["tomato", "strawberry"],
            (6, 1), 1.5,
        ),
        plant(
            "cauliflower", "Cauliflower", "🥦", Vegetable, Some(Brassica), 18, 75, FullSun, Moderate,
            &["celery", "bean", "onion"],
            &["tomato", "strawberry"],
            (6, 1), 2.0,
        ),
        plant(
            "kale", "Kale", "🥬", Vegetable, Some(Brassica), 12, 55, PartialSun, Moderate,
            &["beet", "onion", "dill"],
            &["strawberry"],
            (4, 1), 2.0,
        ),
        plant(
            "radish", "Radish", "🔴", Vegetable, Some(Brassica), 3, 25, FullSun, Moderate,
            &["lettuce", "pea", "carrot", "cucumber", "spinach"],
            &[],
            (0, 0), 0.05,
        ),
        // Cucurbits
        plant(
            "cucumber", "Cucumber", "🥒", Vegetable, Some(Cucurbit), 12, 60, FullSun, High,
            &["bean", "pea", "radish", "corn", "sunflower", "dill", "marigold", "nasturtium"],
            &["potato", "sage"],
            (3, 2), 5.0,
        ),
        plant(
            "zucchini", "Zucchini", "🥒", Vegetable, Some(Cucurbit), 36, 50, FullSun, High,
            &["corn", "bean", "nasturtium", "radish"],
            &["potato"],
            (3, 2), 8.0,
        ),
        plant(
            "squash", "Winter Squash", "🎃", Vegetable, Some(Cucurbit), 36, 95, FullSun, High,
            &["corn", "bean", "nasturtium", "radish"],
            &["potato"],
            (0, 0), 10.0,
        ),
        plant(
            "pumpkin", "Pumpkin", "🎃", Vegetable, Some(Cucurbit), 48, 110, FullSun, High,
            &["corn", "bean", "marigold"],
            &["potato"],
            (0, 0), 12.0,
        ),
        plant(
            "watermelon", "Watermelon", "🍉", Fruit, Some(Cucurbit), 36, 85, FullSun, High,
            &["radish", "nasturtium", "marigold"],
            &["potato"],
            (4, 2), 15.0,
        ),
        // Legumes
        plant(
            "bean", "Bush Bean", "🫘", Vegetable, Some(Legume), 4, 55, FullSun, Moderate,
            &["corn", "cucumber", "potato", "carrot", "squash", "eggplant", "strawberry"],
            &["onion", "garlic", "leek", "chive", "pepper", "fennel"],
            (0, 0), 0.5,
        ),
        plant(
            "pea", "Pea", "🫛", Vegetable, Some(Legume), 3, 60, FullSun, Moderate,
            &["carrot", "radish", "cucumber", "corn", "bean", "lettuce", "spinach"],
            &["onion", "garlic", "leek", "chive"],
            (0, 0), 0.3,
        ),
        // Umbellifers
        plant(
            "carrot", "Carrot", "🥕", Vegetable, Some(Umbellifer), 3, 70, FullSun, Moderate,
            &["tomato", "onion", "lettuce", "pea", "rosemary", "chive"],
            &["dill"],
            (0, 0), 0.2,
        ),
        plant(
            "celery", "Celery", "🥬", Vegetable, Some(Umbellifer), 6, 120, FullSun, High,
            &["cabbage", "leek", "bean", "cauliflower", "broccoli"],
            &["corn"],
            (10, 2), 1.0,
        ),
        plant(
            "dill", "Dill", "🌿", Herb, Some(Umbellifer), 12, 70, FullSun, Low,
            &["cabbage", "broccoli", "cucumber", "lettuce", "onion"],
            &["carrot", "tomato"],
            (0, 0), 0.2,
        ),
        plant(
            "parsley", "Parsley", "🌿", Herb, Some(Umbellifer), 6, 75, PartialSun, Moderate,
            &["tomato", "corn"],
            &["mint"],
            (8, 1), 0.3,
        ),
        plant(
            "fennel", "Fennel", "🌿", Herb, Some(Umbellifer), 12, 90, FullSun, Moderate,
            &["dill"],
            &["tomato", "bean", "pepper", "eggplant"],
            (4, 1), 0.5,
        ),
        plant(
            "cilantro", "Cilantro", "🌿", Herb, Some(Umbellifer), 6, 50, PartialSun, Moderate,
            &["spinach", "bean", "pea"],
            &["fennel"],
            (0, 0), 0.1,
        ),
        // Asters
        plant(
            "lettuce", "Lettuce", "🥬", Vegetable, Some(Aster), 6, 45, PartialSun, Moderate,
            &["carrot", "radish", "strawberry", "cucumber", "onion", "chive"],
            &[],
            (0, 0), 0.5,
        ),
        plant(
            "sunflower", "Sunflower", "🌻", Flower, Some(Aster), 18, 80, FullSun, Low,
            &["cucumber", "corn"],
            &["potato"],
            (0, 0), 1.0,
        ),
        plant(
            "marigold", "Marigold", "🌼", Flower, Some(Aster), 6, 50, FullSun, Low,
            &["tomato", "potato", "cucumber", "squash", "eggplant", "basil"],
            &[],
            (6, 1), 0.0,
        ),
        // Mint family herbs
        plant(
            "basil", "Basil", "🌿", Herb, Some(Mint), 6, 60, FullSun, Moderate,
            &["tomato", "pepper", "marigold"],
            &["sage"],
            (4, 1), 0.5,
        ),
        plant(
            "mint", "Mint", "🌿", Herb, Some(Mint), 18, 90, PartialSun, High,
            &["cabbage", "tomato", "pea"],
            &["parsley"],
            (0, 1), 0.3,
        ),
        plant(
            "thyme", "Thyme", "🌿", Herb, Some(Mint), 12, 85, FullSun, Low,
            &["cabbage", "strawberry", "tomato", "eggplant"],
            &[],
            (8, 1), 0.1,
        ),
        plant(
            "rosemary", "Rosemary", "🌿", Herb, Some(Mint), 24, 90, FullSun, Low,
            &["cabbage", "bean", "carrot", "sage"],
            &[],
            (10, 2), 0.2,
        ),
        plant(
            "sage", "Sage", "🌿", Herb, Some(Mint), 18, 75, FullSun, Low,
            &["rosemary", "cabbage", "carrot"],
            &["cucumber", "basil"],
            (6, 1), 0.2,
        ),
        // Others
        plant(
            "spinach", "Spinach", "🥬", Vegetable, Some(PlantFamily::Vegetable), 4, 45, PartialSun, Moderate,
            &["strawberry", "pea", "radish", "cabbage"],
            &["potato"],
            (0, 0), 0.25,
        ),
        plant(
            "beet", "Beet", "🟣", Vegetable, Some(PlantFamily::Vegetable), 4, 60, FullSun, Moderate,
            &["onion", "lettuce", "cabbage", "kale", "garlic"],
            &["bean"],
            (0, 0), 0.3,
        ),
        plant(
            "corn", "Sweet Corn", "🌽", Vegetable, Some(PlantFamily::Vegetable), 12, 80, FullSun, High,
            &["bean", "pea", "squash", "cucumber", "pumpkin", "potato", "sunflower"],
            &["tomato", "celery"],
            (0, 0), 1.0,
        ),
        plant(
            "strawberry", "Strawberry", "🍓", Fruit, Some(PlantFamily::Fruit), 12, 90, FullSun, Moderate,
            &["bean", "lettuce", "spinach", "thyme"],
            &["cabbage", "broccoli", "cauliflower", "kale"],
            (0, 2), 1.0,
        ),
        plant(
            "nasturtium", "Nasturtium", "🏵️", Flower, None, 12, 55, FullSun, Low,
            &["cucumber", "squash", "zucchini", "tomato", "radish"],
            &[],
            (0, 0), 0.0,
        ),
    ]
}

/// Minimal plant for fixture catalogs: no companions, no antagonists, direct-sown.
#[cfg(test)]
pub(crate) fn test_plant(id: &str, family: Option<PlantFamily>, spacing: u32) -> Plant {
    plant(
        id,
        id,
        "🌱",
        Category::Vegetable,
        family,
        spacing,
        60,
        SunNeeds::FullSun,
        WaterNeeds::Moderate,
        &[],
        &[],
        (0, 0),
        1.0,
    )
}
