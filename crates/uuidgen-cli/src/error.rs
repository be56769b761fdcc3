use std::path::PathBuf;
use thiserror::Error;
use uuidgen_core::{CoreError, Variant};
use uuidgen_generator::GeneratorError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    InvalidCount(#[from] CoreError),
    #[error("--name is required for {variant}")]
    MissingName { variant: Variant },
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error("could not write {}: {error}", path.display())]
    Save { path: PathBuf, error: std::io::Error },
    #[error("console i/o failed: {0}")]
    Console(#[from] std::io::Error),
}
