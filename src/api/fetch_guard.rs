use serde::{Deserialize, Serialize};

use crate::error::HeatmapError;

/// Identifies one in-flight heatmap fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchTicket {
    generation: u64,
    repo_id: String,
}

impl FetchTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }
}

/// What happened to a fetch completion.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The payload replaced the rendered data.
    Applied,
    /// A newer fetch was started after this one; the completion was dropped.
    Stale,
    /// The latest fetch failed; the previous grid stays on screen.
    Failed(HeatmapError),
}

impl FetchOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }
}

/// Monotonic generation counter: only the newest ticket may land.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    latest: u64,
    in_flight: bool,
}

impl FetchGuard {
    pub fn issue(&mut self, repo_id: impl Into<String>) -> FetchTicket {
        self.latest += 1;
        self.in_flight = true;
        FetchTicket {
            generation: self.latest,
            repo_id: repo_id.into(),
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.in_flight && ticket.generation == self.latest
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Supersedes any outstanding ticket without issuing a new one.
    ///
    /// Returns whether a fetch was in flight.
    pub fn invalidate(&mut self) -> bool {
        self.latest += 1;
        std::mem::replace(&mut self.in_flight, false)
    }

    /// Marks `ticket` as settled if it is the newest one.
    pub fn settle(&mut self, ticket: &FetchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = false;
        true
    }
}
