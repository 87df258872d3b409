use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The UI side of the response channel is gone
    #[error("Response channel closed")]
    ChannelClosed,

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}
