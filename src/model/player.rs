use std::fmt;

use serde::{Deserialize, Serialize};

/// One roster entry as stored in the database. Every field is optional;
/// records carry no identity beyond their position in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub player_name: Option<String>,
    pub player_role: Option<String>,
    pub date_of_birth: Option<String>,
    pub t_shirt_number: Option<ShirtNumber>,
}

/// Shirt numbers appear in the database both as strings and as numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShirtNumber {
    Text(String),
    Number(i64),
}

impl fmt::Display for ShirtNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShirtNumber::Text(s) => f.write_str(s),
            ShirtNumber::Number(n) => write!(f, "{}", n),
        }
    }
}
