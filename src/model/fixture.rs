use serde::{Deserialize, Serialize};

/// One scheduled match as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureRecord {
    /// Day/month/year textual form, e.g. "05/03/2025".
    pub date: Option<String>,
    /// Weekday label, e.g. "Wednesday".
    pub day: Option<String>,
    pub time: Option<String>,
    pub ground: Option<String>,
    /// Match category label, e.g. "League" or "Friendly".
    #[serde(rename = "type")]
    pub match_type: Option<String>,
}
