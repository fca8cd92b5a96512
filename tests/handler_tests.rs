use chrono::NaiveDate;

use cricket_roster_live::handler::{App, FeedEvent};
use cricket_roster_live::model::fixture::FixtureRecord;
use cricket_roster_live::model::player::PlayerRecord;
use cricket_roster_live::render::{FixturesView, RosterView};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn player(name: &str, role: &str, dob: Option<&str>) -> PlayerRecord {
    PlayerRecord {
        player_name: Some(name.to_string()),
        player_role: Some(role.to_string()),
        date_of_birth: dob.map(|s| s.to_string()),
        t_shirt_number: None,
    }
}

fn card_names(view: &RosterView) -> Vec<String> {
    match view {
        RosterView::Players { cards, .. } => cards.iter().map(|c| c.name.clone()).collect(),
        other => panic!("expected a Players view, got {:?}", other),
    }
}

#[test]
fn views_are_loading_before_the_first_snapshot() {
    let app = App::new();
    assert!(matches!(app.roster_view(date(2025, 3, 1)), RosterView::Loading));
    assert!(matches!(app.fixtures_view(), FixturesView::Loading));
}

#[test]
fn empty_roster_snapshot_is_a_valid_state_with_count_zero() {
    // Arrange
    let mut app = App::new();

    // Act: the feed reports no players at all.
    app.apply(FeedEvent::Roster(Vec::new()));

    // Assert
    let view = app.roster_view(date(2025, 3, 1));
    match &view {
        RosterView::Players { cards, team_count } => {
            assert!(cards.is_empty());
            assert_eq!(*team_count, 0);
        }
        other => panic!("expected a Players view, got {:?}", other),
    }
    assert!(view.to_text().contains("No players found"));
}

#[test]
fn a_new_snapshot_discards_the_previous_one() {
    let mut app = App::new();
    app.apply(FeedEvent::Roster(vec![player("Old", "Batsman", None)]));
    app.apply(FeedEvent::Roster(vec![player("New", "Bowler", None)]));

    let view = app.roster_view(date(2025, 3, 1));
    assert_eq!(card_names(&view), vec!["New"], "stale records must not linger");
}

#[test]
fn roster_view_ranks_then_filters() {
    // Arrange: today = 2025-03-01; B's birthday is tomorrow, A's in 9 days.
    let mut app = App::new();
    app.apply(FeedEvent::Roster(vec![
        player("A", "Batsman", Some("1995-03-10")),
        player("B", "Bowler", Some("1990-03-02")),
        player("C", "All-rounder", Some("1988-09-01")),
    ]));

    // Act: no query yet — full ranked order.
    let unfiltered = app.roster_view(date(2025, 3, 1));
    assert_eq!(card_names(&unfiltered), vec!["B", "A", "C"]);

    // Act: a query narrows the cards but not the team count.
    app.apply(FeedEvent::Query("bowl".to_string()));
    let filtered = app.roster_view(date(2025, 3, 1));
    match &filtered {
        RosterView::Players { cards, team_count } => {
            assert_eq!(cards.len(), 1);
            assert_eq!(cards[0].name, "B");
            assert_eq!(*team_count, 3, "count reflects the whole snapshot");
        }
        other => panic!("expected a Players view, got {:?}", other),
    }
}

#[test]
fn query_edits_replace_the_previous_query() {
    let mut app = App::new();
    app.apply(FeedEvent::Roster(vec![
        player("A", "Batsman", None),
        player("B", "Bowler", None),
    ]));
    app.apply(FeedEvent::Query("bat".to_string()));
    app.apply(FeedEvent::Query("".to_string()));

    // Clearing the query shows everything again.
    assert_eq!(card_names(&app.roster_view(date(2025, 3, 1))).len(), 2);
    assert_eq!(app.query(), "");
}

#[test]
fn feed_failure_shows_the_fallback_and_is_not_retried() {
    let mut app = App::new();
    app.apply(FeedEvent::RosterUnavailable("dns failure".to_string()));

    match app.roster_view(date(2025, 3, 1)) {
        RosterView::Unavailable(reason) => assert_eq!(reason, "dns failure"),
        other => panic!("expected Unavailable, got {:?}", other),
    }
}

#[test]
fn fixtures_snapshot_renders_in_date_order() {
    let mut app = App::new();
    app.apply(FeedEvent::Fixtures(vec![
        FixtureRecord {
            date: Some("10/05/2025".to_string()),
            day: None,
            time: None,
            ground: Some("Eden Gardens".to_string()),
            match_type: None,
        },
        FixtureRecord {
            date: Some("01/04/2025".to_string()),
            day: None,
            time: None,
            ground: Some("Wankhede".to_string()),
            match_type: None,
        },
    ]));

    match app.fixtures_view() {
        FixturesView::Fixtures { cards } => {
            let grounds: Vec<_> = cards.iter().map(|c| c.ground.clone()).collect();
            assert_eq!(grounds, vec!["Wankhede", "Eden Gardens"]);
        }
        other => panic!("expected a Fixtures view, got {:?}", other),
    }
}

#[test]
fn nav_toggle_flips_the_menu_state() {
    let mut app = App::new();
    assert!(!app.nav_open());
    app.apply(FeedEvent::NavToggle);
    assert!(app.nav_open());
    app.apply(FeedEvent::NavToggle);
    assert!(!app.nav_open());
}
