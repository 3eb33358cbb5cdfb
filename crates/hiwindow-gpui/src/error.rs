use hiwindow_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("failed to encode window layout: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Gpui(#[from] GpuiError),
}

/// Failures raised by the GPUI backend while presenting a frame.
#[derive(Debug, Error)]
pub enum GpuiError {
    #[error("frame has no size or position")]
    Unplaced,

    #[error("failed to open window: {0}")]
    OpenWindow(String),
}
