//! Errors that end a session

use crate::chart::RenderError;
use crate::config::ConfigError;
use crate::dataset::LoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Dataset loader stopped before reporting a result")]
    LoaderClosed,
}

impl SessionError {
    /// Short headline for CLI error output.
    pub fn title(&self) -> &'static str {
        match self {
            SessionError::Io(_) => "Terminal error",
            SessionError::Load(_) | SessionError::LoaderClosed => "Failed to load dataset",
            SessionError::Config(_) => "Invalid configuration",
            SessionError::Render(_) => "Render failed",
        }
    }
}
