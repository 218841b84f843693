use tracing::debug;

use crate::core::Granularity;
use crate::error::HeatmapResult;
use crate::render::Renderer;

use super::{
    AuthorizationGate, GranularityRequest, HeatmapEngine, PendingSwitch,
    view_state::ViewTransition,
};

impl<R: Renderer> HeatmapEngine<R> {
    /// Requests a granularity change.
    ///
    /// Switching to daily asks `gate` first; without authorization the switch
    /// is parked behind a one-shot token and `gate` is asked to authenticate.
    /// Asking again while a switch is parked returns the same token without
    /// re-prompting.
    pub fn request_granularity<G>(
        &mut self,
        target: Granularity,
        gate: &mut G,
    ) -> HeatmapResult<GranularityRequest>
    where
        G: AuthorizationGate + ?Sized,
    {
        let authorized = target == Granularity::Daily && gate.is_authorized();
        match self.core.view.request(target, authorized) {
            ViewTransition::Unchanged => Ok(GranularityRequest::Completed(self.granularity())),
            ViewTransition::Switched(granularity) => {
                self.apply_granularity_switch()?;
                Ok(GranularityRequest::Completed(granularity))
            }
            ViewTransition::AwaitingAuthentication { pending, fresh } => {
                if fresh {
                    debug!(token = pending.id(), "daily view requires authentication");
                    gate.request_authentication(pending);
                }
                Ok(GranularityRequest::PendingAuthentication(pending))
            }
        }
    }

    /// Completes the parked switch for `token`.
    ///
    /// Returns `false` when the token is unknown or was already resolved.
    pub fn on_authentication_succeeded(&mut self, token: PendingSwitch) -> HeatmapResult<bool> {
        match self.core.view.resolve(token) {
            ViewTransition::Switched(_) => {
                self.apply_granularity_switch()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Drops the parked switch; the view stays weekly.
    pub fn on_authentication_dismissed(&mut self) -> bool {
        let cleared = self.core.view.dismiss();
        if cleared {
            debug!("pending daily switch dismissed");
        }
        cleared
    }

    fn apply_granularity_switch(&mut self) -> HeatmapResult<()> {
        debug!(granularity = ?self.granularity(), "heatmap granularity switched");
        let width = self.scroll_viewport_width();
        self.core.drag.set_scroll_left(0.0, width, 0.0);
        self.rebuild_grid();
        self.render()
    }
}
