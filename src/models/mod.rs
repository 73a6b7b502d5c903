use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod garden;
pub mod plant;
pub mod reminder;
pub mod request;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// A zero-based (x, y) cell within the garden grid; `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}
