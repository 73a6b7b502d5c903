use thiserror::Error;

/// Errors raised at the store and storage boundaries.
///
/// The calculators in [`crate::logic`] never fail; they skip what they cannot resolve.
#[derive(Debug, Error)]
pub enum GardenError {
    #[error("Plant '{0}' not found in the catalog.")]
    UnknownPlant(String),

    #[error("Cell ({x}, {y}) is outside a {size}x{size} grid.")]
    OutOfBounds { x: u32, y: u32, size: u32 },

    #[error("Grid size {0} is not supported (expected 4, 8 or 12).")]
    InvalidGridSize(u32),

    #[error("USDA zone {0} is not supported (expected 3 to 11).")]
    InvalidZone(u8),

    #[error("Garden '{0}' not found.")]
    UnknownGarden(String),

    #[error("{kind} '{id}' not found.")]
    UnknownRecord { kind: &'static str, id: String },

    #[error("The last remaining garden cannot be deleted.")]
    LastGarden,

    #[error("Invalid share link: {0}")]
    InvalidShareLink(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GardenError>;
