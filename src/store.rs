/// Lifecycle of one feed's snapshot.
#[derive(Debug, Clone)]
pub enum SnapshotState<T> {
    /// Nothing received yet; the subscription may still be connecting.
    Loading,
    /// The most recent complete snapshot. An empty snapshot is a valid
    /// state, distinct from Loading.
    Live(Vec<T>),
    /// The subscription failed; carries the failure text for display.
    Unavailable(String),
}

/// Latest-snapshot holder for one feed. Each incoming snapshot replaces the
/// previous one wholesale; there is no incremental patching.
#[derive(Debug)]
pub struct FeedStore<T> {
    state: SnapshotState<T>,
}

impl<T> FeedStore<T> {
    pub fn new() -> Self {
        Self {
            state: SnapshotState::Loading,
        }
    }

    /// Install a new snapshot, discarding whatever was held before.
    pub fn replace(&mut self, records: Vec<T>) {
        self.state = SnapshotState::Live(records);
    }

    /// Record a subscription failure.
    pub fn fail(&mut self, reason: String) {
        self.state = SnapshotState::Unavailable(reason);
    }

    pub fn state(&self) -> &SnapshotState<T> {
        &self.state
    }

    /// The held records, when a snapshot has arrived.
    pub fn records(&self) -> Option<&[T]> {
        match &self.state {
            SnapshotState::Live(records) => Some(records),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.records().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for FeedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
