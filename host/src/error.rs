use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Settings format error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}
