use thiserror::Error;

#[derive(Error, Debug)]
pub enum BabelpostError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config file write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, BabelpostError>;
