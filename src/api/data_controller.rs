use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::core::{CommitIndex, DateRange, DerivedStats};
use crate::error::HeatmapResult;
use crate::render::Renderer;

use super::{
    FetchOutcome, FetchTicket, HeatmapEngine, HeatmapPayload, HeatmapSource,
    engine_core::LoadedData,
};

impl<R: Renderer> HeatmapEngine<R> {
    /// Shows `payload`, anchoring its window on the local wall-clock date.
    pub fn load_payload(&mut self, payload: HeatmapPayload) -> HeatmapResult<()> {
        self.load_payload_at(payload, Local::now().date_naive())
    }

    /// Shows `payload` with an explicit `today`.
    pub fn load_payload_at(
        &mut self,
        payload: HeatmapPayload,
        today: NaiveDate,
    ) -> HeatmapResult<()> {
        let range = DateRange::new(payload.since_date, today);
        debug!(
            repo = payload.repo.as_deref().unwrap_or(""),
            buckets = payload.commits.len(),
            since = %range.since,
            today = %range.today,
            "loading heatmap payload"
        );
        self.replace_data(LoadedData {
            repo: payload.repo.or(payload.repo_name),
            index: payload.commits,
            range,
            stats: payload.stats,
        })
    }

    /// Replaces the commit index and window, keeping the granularity.
    pub fn on_repository_switch(
        &mut self,
        index: CommitIndex,
        range: DateRange,
    ) -> HeatmapResult<()> {
        debug!(buckets = index.len(), since = %range.since, "repository switched");
        self.replace_data(LoadedData {
            repo: None,
            index,
            range,
            stats: DerivedStats::default(),
        })
    }

    /// Re-anchors the window on the current wall-clock date.
    ///
    /// Returns whether the date changed and the grid was rebuilt.
    pub fn refresh_today(&mut self) -> HeatmapResult<bool> {
        self.refresh_today_at(Local::now().date_naive())
    }

    pub fn refresh_today_at(&mut self, today: NaiveDate) -> HeatmapResult<bool> {
        let Some(data) = self.core.data.as_mut() else {
            return Ok(false);
        };
        if data.range.today == today {
            return Ok(false);
        }
        data.range.today = today;
        self.rebuild_grid();
        self.render()?;
        Ok(true)
    }

    /// Starts a fetch; any earlier in-flight fetch becomes stale.
    pub fn begin_fetch(&mut self, repo_id: impl Into<String>) -> FetchTicket {
        let ticket = self.core.fetch_guard.issue(repo_id);
        debug!(
            generation = ticket.generation(),
            repo_id = ticket.repo_id(),
            "heatmap fetch started"
        );
        ticket
    }

    /// Settles a fetch started with [`Self::begin_fetch`].
    ///
    /// Only the newest ticket is applied. A failure keeps the previous grid.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: HeatmapResult<HeatmapPayload>,
    ) -> HeatmapResult<FetchOutcome> {
        if !self.core.fetch_guard.settle(ticket) {
            debug!(
                generation = ticket.generation(),
                repo_id = ticket.repo_id(),
                "discarding stale heatmap response"
            );
            return Ok(FetchOutcome::Stale);
        }

        match result {
            Ok(mut payload) => {
                if payload.repo.is_none() {
                    payload.repo = Some(ticket.repo_id().to_owned());
                }
                self.load_payload(payload)?;
                Ok(FetchOutcome::Applied)
            }
            Err(err) => {
                warn!(
                    repo_id = ticket.repo_id(),
                    error = %err,
                    "heatmap fetch failed, keeping previous grid"
                );
                Ok(FetchOutcome::Failed(err))
            }
        }
    }

    /// Fetches and applies `repo_id` synchronously through `source`.
    pub fn load_repository<S>(
        &mut self,
        source: &mut S,
        repo_id: &str,
    ) -> HeatmapResult<FetchOutcome>
    where
        S: HeatmapSource + ?Sized,
    {
        let ticket = self.begin_fetch(repo_id);
        let result = source.fetch_heatmap(repo_id);
        self.complete_fetch(&ticket, result)
    }

    /// Installs `data`; a fetch still in flight can no longer overwrite it.
    fn replace_data(&mut self, data: LoadedData) -> HeatmapResult<()> {
        if self.core.fetch_guard.invalidate() {
            debug!("in-flight heatmap fetch superseded by newer data");
        }
        self.core.data = Some(data);
        let width = self.scroll_viewport_width();
        self.core.drag.set_scroll_left(0.0, width, 0.0);
        self.rebuild_grid();
        self.render()
    }
}
