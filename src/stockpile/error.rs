use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Terminal error: {0}")]
    Terminal(std::io::Error),

    #[error("Interrupted")]
    Interrupted,
}

impl StockError {
    /// Errors the interactive menu can report and then carry on from.
    ///
    /// Terminal failures and interruption end the session instead.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, StockError::Interrupted | StockError::Terminal(_))
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
