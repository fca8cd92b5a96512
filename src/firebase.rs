use std::collections::BTreeMap;
use std::io::{BufRead, BufReader};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::model::fixture::FixtureRecord;
use crate::model::player::PlayerRecord;

/// One node of the hosted realtime database, addressed as
/// `{database_url}/{node}.json`.
#[derive(Debug, Clone)]
pub struct FirebaseFeed {
    node_url: String,
}

impl FirebaseFeed {
    pub fn new(database_url: &str, node: &str) -> Self {
        let base = database_url.trim_end_matches('/');
        Self {
            node_url: format!("{}/{}.json", base, node),
        }
    }

    /// One-shot GET of the node's current value.
    pub fn fetch(&self) -> Result<Value, String> {
        match ureq::get(&self.node_url).call() {
            Ok(response) => {
                let mut body = response.into_body();
                match body.read_to_string() {
                    Ok(text) => match serde_json::from_str::<Value>(&text) {
                        Ok(value) => Ok(value),
                        Err(e) => {
                            error!(error = %e, url = %self.node_url, "Failed to parse node value");
                            Err(format!("Failed to parse node value: {}", e))
                        }
                    },
                    Err(e) => {
                        error!(error = %e, url = %self.node_url, "Failed to read response body");
                        Err(format!("Failed to read response body: {}", e))
                    }
                }
            }
            Err(e) => {
                error!(error = %e, url = %self.node_url, "Request failed");
                Err(format!("Request failed: {}", e))
            }
        }
    }

    /// Open the node's event stream and invoke `on_snapshot` with the full
    /// node value on the initial `put` and on every subsequent change.
    ///
    /// Blocks for the life of the stream. An initial connect failure is
    /// returned as an error; a stream that ends later just returns Ok after
    /// logging. There is no reconnect.
    #[instrument(level = "info", skip(self, on_snapshot), fields(url = %self.node_url))]
    pub fn subscribe(&self, mut on_snapshot: impl FnMut(Value)) -> Result<(), String> {
        let response = ureq::get(&self.node_url)
            .header("Accept", "text/event-stream")
            .call()
            .map_err(|e| {
                error!(error = %e, url = %self.node_url, "Stream request failed");
                format!("Stream request failed: {}", e)
            })?;
        info!(url = %self.node_url, "Subscribed to event stream");

        // The stream has no content length and stays open indefinitely;
        // lift the default body read cap.
        let reader = BufReader::new(
            response
                .into_body()
                .into_with_config()
                .limit(u64::MAX)
                .reader(),
        );
        let mut collector = SseCollector::new();

        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, url = %self.node_url, "Event stream read error");
                    break;
                }
            };
            let Some(event) = collector.push(&line) else {
                continue;
            };

            match event.name.as_str() {
                "put" | "patch" => match self.snapshot_for_change(&event) {
                    Ok(value) => on_snapshot(value),
                    Err(e) => warn!(error = %e, "Skipping change event without a snapshot"),
                },
                "keep-alive" => {}
                "cancel" | "auth_revoked" => {
                    warn!(event = %event.name, url = %self.node_url, "Event stream cancelled by server");
                    break;
                }
                other => warn!(event = %other, "Ignoring unknown stream event"),
            }
        }

        info!(url = %self.node_url, "Event stream ended");
        Ok(())
    }

    /// Resolve a change event to the complete node value. A `put` at the
    /// node root already carries it; anything else (a `patch`, or a `put`
    /// below the root) triggers a re-fetch so the handler only ever sees
    /// whole-snapshot replacements.
    fn snapshot_for_change(&self, event: &SseEvent) -> Result<Value, String> {
        if event.name == "put" {
            if let Ok(change) = serde_json::from_str::<StreamChange>(&event.data) {
                if change.path == "/" {
                    return Ok(change.data);
                }
            }
        }
        self.fetch()
    }
}

#[derive(Debug, Deserialize)]
struct StreamChange {
    path: String,
    data: Value,
}

/// One server-sent event, reassembled from its wire lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub name: String,
    pub data: String,
}

/// Line-by-line reassembly of server-sent events. Events are dispatched at
/// blank-line boundaries; multiple `data:` lines concatenate with newlines.
#[derive(Debug, Default)]
pub struct SseCollector {
    name: String,
    data: String,
}

impl SseCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line of the stream; returns a complete event when the line
    /// closes one.
    pub fn push(&mut self, line: &str) -> Option<SseEvent> {
        if line.is_empty() {
            if self.name.is_empty() && self.data.is_empty() {
                return None;
            }
            return Some(SseEvent {
                name: std::mem::take(&mut self.name),
                data: std::mem::take(&mut self.data),
            });
        }

        if let Some(rest) = line.strip_prefix("event:") {
            self.name = rest.trim_start().to_string();
        } else if let Some(rest) = line.strip_prefix("data:") {
            if !self.data.is_empty() {
                self.data.push('\n');
            }
            self.data.push_str(rest.trim_start());
        }
        // Comment lines and unknown fields are ignored.
        None
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NodeDocument<T> {
    Keyed(BTreeMap<String, T>),
    List(Vec<Option<T>>),
}

/// Decode a node value into its records. External keys are discarded and
/// values taken in ascending key order, which is the database's export
/// order; null holes in an array node are dropped; a null node is an empty
/// collection.
pub fn records_from_value<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, String> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    match serde_json::from_value::<NodeDocument<T>>(value) {
        Ok(NodeDocument::Keyed(map)) => Ok(map.into_values().collect()),
        Ok(NodeDocument::List(items)) => Ok(items.into_iter().flatten().collect()),
        Err(e) => Err(format!("Unexpected node shape: {}", e)),
    }
}

/// Decode a players node value, treating a wholly foreign shape as an empty
/// roster after logging it.
pub fn roster_from_value(value: Value) -> Vec<PlayerRecord> {
    match records_from_value(value) {
        Ok(players) => players,
        Err(e) => {
            error!(error = %e, "Failed to decode players snapshot");
            Vec::new()
        }
    }
}

/// Decode a fixtures node value, same policy as [`roster_from_value`].
pub fn fixtures_from_value(value: Value) -> Vec<FixtureRecord> {
    match records_from_value(value) {
        Ok(fixtures) => fixtures,
        Err(e) => {
            error!(error = %e, "Failed to decode fixtures snapshot");
            Vec::new()
        }
    }
}
