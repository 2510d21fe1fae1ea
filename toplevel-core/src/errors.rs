use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Unknown edge name: {0:?}")]
    InvalidEdge(String),
    #[error("Logging setup error: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}
