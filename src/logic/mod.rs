pub mod calendar;
pub mod care;
pub mod companion;
pub mod filter;
pub mod placement;
pub mod relationships;
pub mod rotation;
