//! Identifier generators.
//!
//! One generator per variant, plus the batch functions the command-line
//! front end calls. Every batch function validates its count through
//! [`BatchSize`] before producing anything.

mod clock;
pub mod error;
mod name_based;
mod random;
mod time_based;

pub use clock::{Clock, SystemClock};
pub use error::GeneratorError;
pub use name_based::{HashAlgorithm, NameBased};
pub use random::Random;
pub use time_based::{TimeBased, TimeBasedSettings};

use tracing::debug;
use uuidgen_core::{Batch, BatchSize, Identifier, Namespace, Variant};

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Trait for generating identifiers.
///
/// Implementations are pure generators with no storage or coordination.
pub trait Generator: Send + Sync {
    /// Generates the identifier at position `index` of a batch.
    ///
    /// Only name-based generators depend on `index`.
    fn generate(&self, index: usize) -> Result<Identifier>;

    /// Generates `size` identifiers in batch order.
    fn generate_batch(&self, size: BatchSize) -> Result<Batch> {
        (0..size.get()).map(|index| self.generate(index)).collect()
    }
}

/// A fully specified generation request, minus the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    TimeBased,
    Random,
    NameBased(NameBased),
}

impl GenerationRequest {
    /// Builds the request for `variant`. `namespace` and `name` are only read
    /// by the name-based variants.
    pub fn new(variant: Variant, namespace: Namespace, name: impl Into<String>) -> Self {
        match variant {
            Variant::TimeBased => Self::TimeBased,
            Variant::Random => Self::Random,
            Variant::NameBasedMd5 => Self::name_based(HashAlgorithm::Md5, namespace, name),
            Variant::NameBasedSha1 => Self::name_based(HashAlgorithm::Sha1, namespace, name),
        }
    }

    pub fn name_based(hash: HashAlgorithm, namespace: Namespace, name: impl Into<String>) -> Self {
        Self::NameBased(
            NameBased::builder()
                .namespace(namespace)
                .name(name)
                .hash(hash)
                .build(),
        )
    }

    pub fn variant(&self) -> Variant {
        match self {
            GenerationRequest::TimeBased => Variant::TimeBased,
            GenerationRequest::Random => Variant::Random,
            GenerationRequest::NameBased(gen) => gen.hash().variant(),
        }
    }
}

/// Generates a batch for `request`.
pub fn generate(request: &GenerationRequest, size: BatchSize) -> Result<Batch> {
    debug!(variant = %request.variant(), count = size.get(), "generating batch");

    match request {
        GenerationRequest::TimeBased => {
            TimeBased::new(TimeBasedSettings::default()).generate_batch(size)
        }
        GenerationRequest::Random => Random.generate_batch(size),
        GenerationRequest::NameBased(gen) => gen.generate_batch(size),
    }
}

/// Generates `count` version 1 identifiers.
pub fn time_based(count: usize) -> Result<Batch> {
    generate(&GenerationRequest::TimeBased, BatchSize::try_from(count)?)
}

/// Generates `count` version 4 identifiers.
pub fn random(count: usize) -> Result<Batch> {
    generate(&GenerationRequest::Random, BatchSize::try_from(count)?)
}

/// Generates `count` version 3 identifiers from `"{name}_{i}"`.
pub fn name_based_md5(namespace: Namespace, name: &str, count: usize) -> Result<Batch> {
    let size = BatchSize::try_from(count)?;
    generate(
        &GenerationRequest::name_based(HashAlgorithm::Md5, namespace, name),
        size,
    )
}

/// Generates `count` version 5 identifiers from `"{name}_{i}"`.
pub fn name_based_sha1(namespace: Namespace, name: &str, count: usize) -> Result<Batch> {
    let size = BatchSize::try_from(count)?;
    generate(
        &GenerationRequest::name_based(HashAlgorithm::Sha1, namespace, name),
        size,
    )
}
