use crate::{error::GeneratorError, Generator};
use uuid::Uuid;
use uuidgen_core::Identifier;

/// Version 4 generator backed by the operating system's random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct Random;

impl Generator for Random {
    fn generate(&self, _index: usize) -> Result<Identifier, GeneratorError> {
        Ok(Uuid::new_v4().into())
    }
}
