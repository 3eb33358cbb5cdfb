use crate::setup::SetupStep;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot center within an empty area ({width}x{height})")]
    InvalidReference { width: f32, height: f32 },

    #[error("toolkit failed during '{step}': {source}")]
    Toolkit {
        step: SetupStep,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CoreError {
    pub fn toolkit(
        step: SetupStep,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Toolkit {
            step,
            source: source.into(),
        }
    }
}
