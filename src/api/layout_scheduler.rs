use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Work collected for one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPass {
    /// Latest container size reported since the previous frame, if any.
    pub container: Option<Viewport>,
    /// Number of resize/relayout requests folded into this pass.
    pub coalesced_requests: usize,
}

/// Defers geometry recomputation to the next frame and collapses bursts.
///
/// Any number of resize notifications and relayout requests between two
/// frames produce exactly one pass carrying the last reported size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutScheduler {
    container: Option<Viewport>,
    requests: usize,
}

impl LayoutScheduler {
    pub fn notify_resize(&mut self, container: Viewport) {
        self.container = Some(container);
        self.requests += 1;
    }

    pub fn request_relayout(&mut self) {
        self.requests += 1;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.requests > 0
    }

    /// Takes the pending pass, leaving the scheduler idle.
    pub fn take(&mut self) -> Option<LayoutPass> {
        if self.requests == 0 {
            return None;
        }
        let pass = LayoutPass {
            container: self.container.take(),
            coalesced_requests: self.requests,
        };
        self.requests = 0;
        Some(pass)
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutScheduler;
    use crate::core::Viewport;

    #[test]
    fn burst_of_resizes_collapses_to_last_size() {
        let mut scheduler = LayoutScheduler::default();
        scheduler.notify_resize(Viewport::new(400, 100));
        scheduler.notify_resize(Viewport::new(500, 100));
        scheduler.notify_resize(Viewport::new(640, 120));

        let pass = scheduler.take().expect("pending pass");
        assert_eq!(pass.container, Some(Viewport::new(640, 120)));
        assert_eq!(pass.coalesced_requests, 3);
        assert!(scheduler.take().is_none());
    }

    #[test]
    fn relayout_without_resize_keeps_size_unset() {
        let mut scheduler = LayoutScheduler::default();
        scheduler.request_relayout();
        let pass = scheduler.take().expect("pending pass");
        assert_eq!(pass.container, None);
    }
}
