use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Validation errors raised before any identifier is generated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("count must be at least {min}, got {count}")]
    CountTooSmall { count: i64, min: usize },
    #[error("count cannot exceed {max}, got {count}")]
    CountTooLarge { count: i64, max: usize },
}
