#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
    #[error("{field} must be an array, found {found}")]
    NotASequence {
        field: &'static str,
        found: &'static str,
    },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
