use serde::{Deserialize, Serialize};

/// Content-box size of the element hosting the grid, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Time resolution of the rendered grid.
///
/// `Weekly` renders one column per calendar week with one cell per day.
/// `Daily` renders one column per day with one cell per hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    Weekly,
    Daily,
}

impl Granularity {
    /// Number of cells stacked in every column.
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::Weekly => 7,
            Self::Daily => 24,
        }
    }
}
