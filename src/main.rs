use std::env;
use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use chrono::{NaiveDate, Utc};
use chrono_tz::Asia::Kolkata;
use tracing::info;

use cricket_roster_live::firebase::{FirebaseFeed, fixtures_from_value, roster_from_value};
use cricket_roster_live::handler::{App, FeedEvent};
use cricket_roster_live::render::nav_state_text;

const DEFAULT_DATABASE_URL: &str = "https://royalintruders-default-rtdb.firebaseio.com";

/// Reference date for birthday proximity: the current calendar date at the
/// club's home ground, not UTC.
fn local_today() -> NaiveDate {
    Utc::now().with_timezone(&Kolkata).date_naive()
}

/// Run one feed subscription on its own thread, forwarding snapshots into
/// the event channel. A connect failure is forwarded once; there is no
/// retry.
fn spawn_feed(
    feed: FirebaseFeed,
    tx: mpsc::Sender<FeedEvent>,
    on_value: fn(serde_json::Value) -> FeedEvent,
    on_failure: fn(String) -> FeedEvent,
) {
    thread::spawn(move || {
        let snapshot_tx = tx.clone();
        if let Err(e) = feed.subscribe(move |value| {
            let _ = snapshot_tx.send(on_value(value));
        }) {
            let _ = tx.send(on_failure(e));
        }
    });
}

/// Forward stdin lines as search-query events. The line ":menu" stands in
/// for the navigation menu button.
fn spawn_query_input(tx: mpsc::Sender<FeedEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let event = if line.trim() == ":menu" {
                FeedEvent::NavToggle
            } else {
                FeedEvent::Query(line)
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    });
}

enum Pane {
    Roster,
    Fixtures,
    Nav,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    info!(database_url = %database_url, "Starting roster page");

    let (tx, rx) = mpsc::channel();
    spawn_feed(
        FirebaseFeed::new(&database_url, "players"),
        tx.clone(),
        |value| FeedEvent::Roster(roster_from_value(value)),
        FeedEvent::RosterUnavailable,
    );
    spawn_feed(
        FirebaseFeed::new(&database_url, "fixtures"),
        tx.clone(),
        |value| FeedEvent::Fixtures(fixtures_from_value(value)),
        FeedEvent::FixturesUnavailable,
    );
    spawn_query_input(tx);

    let mut app = App::new();
    print!("{}", app.roster_view(local_today()).to_text());
    print!("{}", app.fixtures_view().to_text());

    // Single consumer: each event is handled to completion before the next
    // one is taken, and only the affected pane is re-rendered.
    for event in rx {
        let pane = match &event {
            FeedEvent::Roster(_) | FeedEvent::RosterUnavailable(_) | FeedEvent::Query(_) => {
                Pane::Roster
            }
            FeedEvent::Fixtures(_) | FeedEvent::FixturesUnavailable(_) => Pane::Fixtures,
            FeedEvent::NavToggle => Pane::Nav,
        };
        app.apply(event);
        match pane {
            Pane::Roster => print!("{}", app.roster_view(local_today()).to_text()),
            Pane::Fixtures => print!("{}", app.fixtures_view().to_text()),
            Pane::Nav => println!("{}", nav_state_text(app.nav_open())),
        }
    }
}
