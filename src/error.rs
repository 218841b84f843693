use thiserror::Error;

pub type HeatmapResult<T> = Result<T, HeatmapError>;

#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid bucket key `{0}`")]
    InvalidBucketKey(String),

    #[error("failed to fetch heatmap for repository `{repo_id}`: {message}")]
    Fetch { repo_id: String, message: String },

    #[error("invalid heatmap payload: {0}")]
    Json(#[from] serde_json::Error),
}
