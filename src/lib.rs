pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod models;
pub mod storage;
pub mod store;

pub use error::{GardenError, Result};
