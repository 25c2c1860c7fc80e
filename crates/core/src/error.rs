use std::io;

/// Errors that can occur during ato-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Descriptor error: {0}")]
    DescriptorError(#[from] serde_yaml::Error),

    #[error("Settings error: {0}")]
    SettingsError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),
}

/// Result type alias for ato-runner operations
pub type Result<T> = std::result::Result<T, Error>;
