pub mod bridge;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum QuickRecipeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Channel error: {0}")]
    ChannelError(String),

    #[error("Voice bridge error: {0}")]
    BridgeError(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for QuickRecipeError {
    fn from(e: std::io::Error) -> Self {
        QuickRecipeError::IOError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuickRecipeError>;
