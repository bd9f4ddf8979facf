use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreditError {
    #[error("invalid evaluation mode: {0} (expected all, proportional or one)")]
    InvalidMode(String),

    #[error("invalid reviewer restriction: restriction set must not be empty")]
    InvalidRestriction,

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("data parse error: {0}")]
    DataParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CreditError>;
