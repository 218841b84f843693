use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Granularity;

/// One-shot token for a daily-view switch waiting on authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingSwitch {
    id: u64,
    target: Granularity,
}

impl PendingSwitch {
    #[must_use]
    pub fn id(self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn target(self) -> Granularity {
        self.target
    }
}

/// Result of a granularity request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GranularityRequest {
    /// The view now shows `Granularity` (possibly unchanged).
    Completed(Granularity),
    /// The switch waits for authentication; resolve it with the token.
    PendingAuthentication(PendingSwitch),
}

impl GranularityRequest {
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::PendingAuthentication(_))
    }
}

/// Granularity state machine owned by the engine.
///
/// `Weekly -> Daily` needs authorization; `Daily -> Weekly` never does. At
/// most one pending switch exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    granularity: Granularity,
    pending: Option<PendingSwitch>,
    next_id: u64,
}

/// What a request did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ViewTransition {
    Unchanged,
    Switched(Granularity),
    AwaitingAuthentication { pending: PendingSwitch, fresh: bool },
}

impl ViewState {
    #[must_use]
    pub fn granularity(self) -> Granularity {
        self.granularity
    }

    #[must_use]
    pub fn pending(self) -> Option<PendingSwitch> {
        self.pending
    }

    pub(super) fn request(&mut self, target: Granularity, authorized: bool) -> ViewTransition {
        match target {
            Granularity::Weekly => {
                if self.pending.take().is_some() {
                    debug!("weekly request cancels pending daily switch");
                }
                self.switch_to(Granularity::Weekly)
            }
            Granularity::Daily if self.granularity == Granularity::Daily => {
                self.pending = None;
                ViewTransition::Unchanged
            }
            Granularity::Daily if authorized => {
                self.pending = None;
                self.switch_to(Granularity::Daily)
            }
            Granularity::Daily => {
                if let Some(pending) = self.pending {
                    return ViewTransition::AwaitingAuthentication {
                        pending,
                        fresh: false,
                    };
                }
                self.next_id += 1;
                let pending = PendingSwitch {
                    id: self.next_id,
                    target,
                };
                self.pending = Some(pending);
                ViewTransition::AwaitingAuthentication {
                    pending,
                    fresh: true,
                }
            }
        }
    }

    /// Consumes the pending switch matching `token`; later calls are no-ops.
    pub(super) fn resolve(&mut self, token: PendingSwitch) -> ViewTransition {
        match self.pending {
            Some(pending) if pending == token => {
                self.pending = None;
                self.switch_to(pending.target)
            }
            _ => ViewTransition::Unchanged,
        }
    }

    /// Drops the pending switch; returns whether one existed.
    pub(super) fn dismiss(&mut self) -> bool {
        self.pending.take().is_some()
    }

    fn switch_to(&mut self, target: Granularity) -> ViewTransition {
        if self.granularity == target {
            return ViewTransition::Unchanged;
        }
        self.granularity = target;
        ViewTransition::Switched(target)
    }
}
