use chrono::NaiveDate;
use tracing::info;

use crate::fixtures::rank_fixtures;
use crate::model::fixture::FixtureRecord;
use crate::model::player::PlayerRecord;
use crate::render::{FixturesView, RosterView, fixture_card, player_card};
use crate::roster::{filter_roster, rank_players, sort_roster};
use crate::store::{FeedStore, SnapshotState};

/// Everything that can happen to the page: a feed emission, a feed failure,
/// a search keystroke, or the menu button.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    Roster(Vec<PlayerRecord>),
    RosterUnavailable(String),
    Fixtures(Vec<FixtureRecord>),
    FixturesUnavailable(String),
    Query(String),
    NavToggle,
}

/// Composition root: owns the latest snapshot of each feed, the active
/// search query, and the navigation menu state. Events are applied one at a
/// time; views are recomputed from scratch on demand.
#[derive(Debug, Default)]
pub struct App {
    roster: FeedStore<PlayerRecord>,
    fixtures: FeedStore<FixtureRecord>,
    query: String,
    nav_open: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Runs to completion; the caller processes events
    /// strictly one after another.
    pub fn apply(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Roster(players) => {
                info!(players = players.len(), "Roster snapshot replaced");
                self.roster.replace(players);
            }
            FeedEvent::RosterUnavailable(reason) => self.roster.fail(reason),
            FeedEvent::Fixtures(fixtures) => {
                info!(fixtures = fixtures.len(), "Fixtures snapshot replaced");
                self.fixtures.replace(fixtures);
            }
            FeedEvent::FixturesUnavailable(reason) => self.fixtures.fail(reason),
            FeedEvent::Query(query) => self.query = query,
            FeedEvent::NavToggle => self.nav_open = !self.nav_open,
        }
    }

    /// Rank, sort, and filter the roster snapshot for the given reference
    /// date and build the view. The team count stays the full snapshot size
    /// regardless of the filter.
    pub fn roster_view(&self, today: NaiveDate) -> RosterView {
        match self.roster.state() {
            SnapshotState::Loading => RosterView::Loading,
            SnapshotState::Unavailable(reason) => RosterView::Unavailable(reason.clone()),
            SnapshotState::Live(players) => {
                let ranked = sort_roster(rank_players(players, today));
                let visible = filter_roster(&ranked, &self.query);
                RosterView::Players {
                    cards: visible.iter().map(player_card).collect(),
                    team_count: players.len(),
                }
            }
        }
    }

    /// Order the fixtures snapshot by date and build the view.
    pub fn fixtures_view(&self) -> FixturesView {
        match self.fixtures.state() {
            SnapshotState::Loading => FixturesView::Loading,
            SnapshotState::Unavailable(reason) => FixturesView::Unavailable(reason.clone()),
            SnapshotState::Live(fixtures) => FixturesView::Fixtures {
                cards: rank_fixtures(fixtures).iter().map(fixture_card).collect(),
            },
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn nav_open(&self) -> bool {
        self.nav_open
    }
}
