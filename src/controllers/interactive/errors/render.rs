use crate::core::data::render_parameters::RenderParametersError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render parameters: {0}")]
    InvalidParameters(#[from] RenderParametersError),
    #[error("failed to start render worker: {0}")]
    SpawnWorker(#[from] std::io::Error),
}
