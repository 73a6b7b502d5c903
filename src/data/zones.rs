use chrono::NaiveDate;

pub const MIN_ZONE: u8 = 3;
pub const MAX_ZONE: u8 = 11;
pub const DEFAULT_ZONE: u8 = 6;

/// Average last spring frost (month, day) per USDA hardiness zone.
const LAST_FROST: [(u8, u32, u32); 9] = [
    (3, 5, 15),
    (4, 5, 1),
    (5, 4, 15),
    (6, 4, 1),
    (7, 3, 15),
    (8, 3, 1),
    (9, 2, 15),
    (10, 1, 31),
    (11, 1, 15),
];

pub fn is_supported_zone(zone: u8) -> bool {
    (MIN_ZONE..=MAX_ZONE).contains(&zone)
}

/// Last frost (month, day) for `zone`, `None` outside 3–11.
pub fn last_frost(zone: u8) -> Option<(u32, u32)> {
    LAST_FROST
        .iter()
        .find(|(z, _, _)| *z == zone)
        .map(|&(_, month, day)| (month, day))
}

pub fn last_frost_date(zone: u8, year: i32) -> Option<NaiveDate> {
    let (month, day) = last_frost(zone)?;
    NaiveDate::from_ymd_opt(year, month, day)
}
