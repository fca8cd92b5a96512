use crate::fixtures::RankedFixture;
use crate::model::role::RoleCategory;
use crate::roster::{RankedPlayer, parse_date_of_birth};

/// One roster card, fully resolved to display strings. Pure data; writing it
/// to a screen is the caller's business.
#[derive(Debug, Clone)]
pub struct PlayerCard {
    pub avatar_letter: char,
    pub name: String,
    pub dob_display: String,
    pub shirt_display: String,
    pub role: RoleCategory,
    pub role_text: String,
    pub birthday_upcoming: bool,
}

/// One fixture card, fully resolved to display strings.
#[derive(Debug, Clone)]
pub struct FixtureCard {
    pub date_display: String,
    pub day: String,
    pub time: String,
    pub ground: String,
    pub match_type: String,
}

/// What the roster pane shows.
#[derive(Debug, Clone)]
pub enum RosterView {
    Loading,
    Unavailable(String),
    Players {
        /// Cards for the visible (post-filter) records, in ranked order.
        cards: Vec<PlayerCard>,
        /// Total roster size, independent of the active filter.
        team_count: usize,
    },
}

/// What the fixtures pane shows.
#[derive(Debug, Clone)]
pub enum FixturesView {
    Loading,
    Unavailable(String),
    Fixtures { cards: Vec<FixtureCard> },
}

/// Day and full month name, e.g. "5 March". Unparseable dates fall back to
/// the same placeholder as absent ones.
pub fn format_dob(date_of_birth: Option<&str>) -> String {
    date_of_birth
        .and_then(parse_date_of_birth)
        .map(|d| d.format("%-d %B").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Display label for a role descriptor. The opener/strike-rate combination
/// collapses to one canonical label; anything else non-empty passes through
/// verbatim behind the bat prefix; no role at all reads "Player".
pub fn format_role_text(role: Option<&str>) -> String {
    let role = role.unwrap_or("").trim();
    if role.is_empty() {
        return "Player".to_string();
    }

    let lower = role.to_lowercase();
    if lower.contains("opener") && lower.contains("strike rate") {
        return "Opener batsman, strike rate > 125".to_string();
    }

    format!("🏏 {}", role)
}

pub fn player_card(player: &RankedPlayer) -> PlayerCard {
    let record = &player.record;
    let name = record.player_name.as_deref().unwrap_or("");
    let role = record.player_role.as_deref().unwrap_or("");

    PlayerCard {
        avatar_letter: name.chars().flat_map(char::to_uppercase).next().unwrap_or('?'),
        name: if name.is_empty() { "Unknown".to_string() } else { name.to_string() },
        dob_display: format_dob(record.date_of_birth.as_deref()),
        shirt_display: record
            .t_shirt_number
            .as_ref()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        role: RoleCategory::classify(role),
        role_text: format_role_text(record.player_role.as_deref()),
        birthday_upcoming: player.birthday_upcoming,
    }
}

pub fn fixture_card(fixture: &RankedFixture) -> FixtureCard {
    let record = &fixture.record;
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());

    FixtureCard {
        date_display: fixture.date.format("%-d %B %Y").to_string(),
        day: field(&record.day),
        time: field(&record.time),
        ground: field(&record.ground),
        match_type: field(&record.match_type),
    }
}

impl PlayerCard {
    fn push_text(&self, out: &mut String) {
        let badge = if self.birthday_upcoming { " 🎂" } else { "" };
        out.push_str(&format!(
            "[{}] {}{}\n    DOB: {}\n    T-Shirt No: {}\n    {} ({})\n",
            self.avatar_letter,
            self.name,
            badge,
            self.dob_display,
            self.shirt_display,
            self.role_text,
            self.role.badge_class(),
        ));
    }
}

impl RosterView {
    /// Console rendering of the roster pane.
    pub fn to_text(&self) -> String {
        match self {
            RosterView::Loading => "Loading players...\n".to_string(),
            RosterView::Unavailable(reason) => format!("Unable to load players: {}\n", reason),
            RosterView::Players { cards, team_count } => {
                let mut out = format!("Team size: {}\n", team_count);
                if cards.is_empty() {
                    out.push_str("No players found\n");
                } else {
                    for card in cards {
                        card.push_text(&mut out);
                    }
                }
                out
            }
        }
    }
}

impl FixturesView {
    /// Console rendering of the fixtures pane.
    pub fn to_text(&self) -> String {
        match self {
            FixturesView::Loading => "Loading fixtures...\n".to_string(),
            FixturesView::Unavailable(reason) => format!("Unable to load fixtures: {}\n", reason),
            FixturesView::Fixtures { cards } => {
                if cards.is_empty() {
                    return "No upcoming matches\n".to_string();
                }
                let mut out = String::new();
                for card in cards {
                    out.push_str(&format!(
                        "{} ({})  {}  {}  [{}]\n",
                        card.date_display, card.day, card.time, card.ground, card.match_type,
                    ));
                }
                out
            }
        }
    }
}

/// Navigation menu state line. The menu carries no data; only its visibility
/// toggles.
pub fn nav_state_text(open: bool) -> &'static str {
    if open { "Menu: shown" } else { "Menu: hidden" }
}
