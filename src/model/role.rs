/// Broad playing-style categories derived from the free-form role text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCategory {
    Batsman,
    Bowler,
    AllRounder,
    Wicketkeeper,
    Default,
}

impl RoleCategory {
    /// Classify a free-form role descriptor by case-insensitive substring.
    /// First match wins; "bat" is checked before "bowl" before "all" before
    /// "keeper", so e.g. "Batting all-rounder" lands on Batsman.
    pub fn classify(role: &str) -> Self {
        let role = role.to_lowercase();

        if role.contains("bat") {
            RoleCategory::Batsman
        } else if role.contains("bowl") {
            RoleCategory::Bowler
        } else if role.contains("all") {
            RoleCategory::AllRounder
        } else if role.contains("keeper") {
            RoleCategory::Wicketkeeper
        } else {
            RoleCategory::Default
        }
    }

    /// Badge class name used by the card styling.
    pub fn badge_class(&self) -> &'static str {
        match self {
            RoleCategory::Batsman => "batsman",
            RoleCategory::Bowler => "bowler",
            RoleCategory::AllRounder => "allrounder",
            RoleCategory::Wicketkeeper => "wicketkeeper",
            RoleCategory::Default => "default-role",
        }
    }
}
