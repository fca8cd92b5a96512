use std::cmp::Ordering;

use chrono::{DateTime, Datelike, NaiveDate};

use crate::model::player::PlayerRecord;

/// Birthdays within this many days of the reference date count as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 15;

/// A roster record annotated with its birthday proximity for one reference date.
#[derive(Debug, Clone)]
pub struct RankedPlayer {
    pub record: PlayerRecord,
    /// Whole days until the next birthday. None when the date of birth is
    /// absent or unparseable; such records sort after every known birthday.
    pub days_until_birthday: Option<i64>,
    pub birthday_upcoming: bool,
}

/// Parse a stored date of birth. Accepts a plain calendar date and falls
/// back to the date part of an RFC 3339 timestamp.
pub fn parse_date_of_birth(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

fn birthday_in_year(year: i32, date_of_birth: NaiveDate) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, date_of_birth.month(), date_of_birth.day()) {
        Some(d) => d,
        // Feb 29 in a non-leap year lands on Mar 1.
        None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(date_of_birth),
    }
}

/// This year's occurrence of the birthday, advanced to next year once it has
/// already passed. A birthday falling on `today` stays at `today` (day 0).
fn next_birthday(date_of_birth: NaiveDate, today: NaiveDate) -> NaiveDate {
    let candidate = birthday_in_year(today.year(), date_of_birth);
    if candidate < today {
        birthday_in_year(today.year() + 1, date_of_birth)
    } else {
        candidate
    }
}

/// Whole days from `today` until the record's next birthday, or None when no
/// usable date of birth is stored. Never negative.
pub fn days_until_birthday(date_of_birth: Option<&str>, today: NaiveDate) -> Option<i64> {
    let dob = date_of_birth.and_then(parse_date_of_birth)?;
    Some((next_birthday(dob, today) - today).num_days())
}

/// A birthday is upcoming when it falls within the next
/// [`UPCOMING_WINDOW_DAYS`] days, today included.
pub fn is_upcoming(days_until_birthday: Option<i64>) -> bool {
    matches!(days_until_birthday, Some(d) if (0..=UPCOMING_WINDOW_DAYS).contains(&d))
}

/// Annotate every record in the snapshot with its birthday proximity,
/// preserving snapshot order.
pub fn rank_players(players: &[PlayerRecord], today: NaiveDate) -> Vec<RankedPlayer> {
    players
        .iter()
        .map(|record| {
            let days = days_until_birthday(record.date_of_birth.as_deref(), today);
            RankedPlayer {
                record: record.clone(),
                days_until_birthday: days,
                birthday_upcoming: is_upcoming(days),
            }
        })
        .collect()
}

/// Order the roster with upcoming birthdays first, soonest birthday leading.
/// Non-upcoming records compare equal; the stable sort keeps them in
/// snapshot order.
pub fn sort_roster(mut ranked: Vec<RankedPlayer>) -> Vec<RankedPlayer> {
    ranked.sort_by(|a, b| match (a.birthday_upcoming, b.birthday_upcoming) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.days_until_birthday.cmp(&b.days_until_birthday),
        (false, false) => Ordering::Equal,
    });
    ranked
}

/// Keep the records whose name or role contains the query,
/// case-insensitively. An empty query keeps everything. Absent fields behave
/// as empty strings. Order is preserved; the input is never re-sorted.
pub fn filter_roster(ranked: &[RankedPlayer], query: &str) -> Vec<RankedPlayer> {
    let query = query.to_lowercase();
    ranked
        .iter()
        .filter(|p| {
            let name = p.record.player_name.as_deref().unwrap_or("");
            let role = p.record.player_role.as_deref().unwrap_or("");
            name.to_lowercase().contains(&query) || role.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
