//! commit-heatmap: commit-activity calendar engine.
//!
//! Turns a sparse bucketed commit index into a weekly (day cells) or daily
//! (hour cells) grid, sizes it for a container and emits backend-agnostic
//! render frames.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{HeatmapEngine, HeatmapEngineConfig};
pub use error::{HeatmapError, HeatmapResult};
