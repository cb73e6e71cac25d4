use chrono::{Datelike, NaiveDate, TimeDelta};

/// Offsets of the four visible days relative to today.
const VISIBLE_DAYS: [i64; 4] = [-1, 0, 1, 2];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    pub date: NaiveDate,
    pub day: u32,
    pub month: String,
    pub is_today: bool,
    pub pending: Vec<String>,
}

/// Yesterday, today and the next two days.
pub fn day_cards(today: NaiveDate) -> Vec<DayCard> {
    VISIBLE_DAYS
        .iter()
        .filter_map(|offset| {
            today
                .checked_add_signed(TimeDelta::days(*offset))
                .map(|date| DayCard {
                    date,
                    day: date.day(),
                    month: date.format("%b").to_string(),
                    is_today: *offset == 0,
                    pending: Vec::new(),
                })
        })
        .collect()
}
