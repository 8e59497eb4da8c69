use thiserror::Error;

#[derive(Debug, Error)]
pub enum RallyError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Unsupported schema version: expected {expected}, found {found}")]
    SchemaVersion { expected: u8, found: u8 },
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for RallyError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            RallyError::Deserialization(err.to_string())
        } else {
            RallyError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, RallyError>;
