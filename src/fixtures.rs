use chrono::NaiveDate;
use tracing::warn;

use crate::model::fixture::FixtureRecord;

/// A fixture whose date field parsed, paired with the parsed date it sorts by.
#[derive(Debug, Clone)]
pub struct RankedFixture {
    pub date: NaiveDate,
    pub record: FixtureRecord,
}

/// Parse a fixture date in day/month/year form, e.g. "05/03/2025".
/// Unpadded day and month ("5/3/2025") are accepted.
pub fn parse_fixture_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok()
}

/// Order fixtures by calendar date, earliest first. A record with a missing
/// or unparseable date is dropped from the output and reported; it never
/// takes part in the sort.
pub fn rank_fixtures(records: &[FixtureRecord]) -> Vec<RankedFixture> {
    let mut ranked: Vec<RankedFixture> = Vec::with_capacity(records.len());

    for record in records {
        match record.date.as_deref().and_then(parse_fixture_date) {
            Some(date) => ranked.push(RankedFixture {
                date,
                record: record.clone(),
            }),
            None => {
                warn!(date = ?record.date, ground = ?record.ground, "Dropping fixture with unparseable date");
            }
        }
    }

    // Stable sort: fixtures on the same day keep their snapshot order.
    ranked.sort_by_key(|f| f.date);
    ranked
}
