use jiff::Timestamp;
use thiserror::Error;
use uuidgen_core::CoreError;

/// Errors returned by identifier generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error(transparent)]
    InvalidRequest(#[from] CoreError),
    #[error("clock reads {now}, which is before the unix epoch")]
    ClockBeforeEpoch { now: Timestamp },
}
