pub mod catalog;
pub mod plants;
pub mod zones;

pub use catalog::PlantCatalog;
