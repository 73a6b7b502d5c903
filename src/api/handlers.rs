pub mod garden;
pub mod gardens;
pub mod insights;
pub mod logs;
pub mod plants;
pub mod preferences;
pub mod transfer;

use chrono::{Datelike, NaiveDate, Utc};

pub(crate) fn current_year() -> i32 {
    Utc::now().year()
}

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
