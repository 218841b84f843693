mod collaborators;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod fetch_guard;
mod interaction_controller;
mod layout_controller;
mod layout_scheduler;
mod payload;
mod render_frame_builder;
mod render_style;
mod snapshot_controller;
mod view_controller;
mod view_state;

pub use collaborators::{AuthorizationGate, HeatmapSource};
pub use engine::HeatmapEngine;
pub use engine_config::HeatmapEngineConfig;
pub use engine_snapshot::HeatmapSnapshot;
pub use fetch_guard::{FetchGuard, FetchOutcome, FetchTicket};
pub use layout_scheduler::{LayoutPass, LayoutScheduler};
pub use payload::HeatmapPayload;
pub use render_style::HeatmapStyle;
pub use view_state::{GranularityRequest, PendingSwitch, ViewState};
