use crate::error::HeatmapResult;

use super::{HeatmapPayload, PendingSwitch};

/// Supplies per-repository heatmap data.
pub trait HeatmapSource {
    fn fetch_heatmap(&mut self, repo_id: &str) -> HeatmapResult<HeatmapPayload>;
}

/// Gates the daily view behind an authorization capability.
///
/// When authentication is requested, the host later reports the outcome
/// through `HeatmapEngine::on_authentication_succeeded` with the same token,
/// or through `HeatmapEngine::on_authentication_dismissed`.
pub trait AuthorizationGate {
    fn is_authorized(&self) -> bool;

    fn request_authentication(&mut self, pending: PendingSwitch);
}
