use crate::error::{CoreError, Result};
use crate::identifier::Identifier;

/// Smallest number of identifiers a single request may produce.
pub const MIN_BATCH_SIZE: usize = 1;
/// Largest number of identifiers a single request may produce.
pub const MAX_BATCH_SIZE: usize = 10_000;

/// A validated batch size in the range `[MIN_BATCH_SIZE, MAX_BATCH_SIZE]`.
///
/// Every generation path takes a `BatchSize`, so an out-of-range count is
/// rejected before any identifier is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchSize(usize);

impl BatchSize {
    /// A batch of exactly one identifier.
    pub const ONE: BatchSize = BatchSize(1);

    pub fn new(count: i64) -> Result<Self> {
        if count < MIN_BATCH_SIZE as i64 {
            return Err(CoreError::CountTooSmall {
                count,
                min: MIN_BATCH_SIZE,
            });
        }
        if count > MAX_BATCH_SIZE as i64 {
            return Err(CoreError::CountTooLarge {
                count,
                max: MAX_BATCH_SIZE,
            });
        }
        Ok(Self(count as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for BatchSize {
    type Error = CoreError;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self::ONE
    }
}

/// An ordered sequence of identifiers produced by one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Batch {
    ids: Vec<Identifier>,
}

impl Batch {
    pub fn new(ids: Vec<Identifier>) -> Self {
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.ids.iter()
    }

    /// Canonical string renderings, in batch order.
    pub fn to_strings(&self) -> Vec<String> {
        self.ids.iter().map(Identifier::to_string).collect()
    }

    /// Renders the batch as newline-terminated lines, one identifier each.
    pub fn to_lines(&self) -> String {
        let mut out = String::with_capacity(self.ids.len() * (Identifier::CANONICAL_LEN + 1));
        for id in &self.ids {
            out.push_str(&id.to_string());
            out.push('\n');
        }
        out
    }
}

impl FromIterator<Identifier> for Batch {
    fn from_iter<T: IntoIterator<Item = Identifier>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl IntoIterator for Batch {
    type Item = Identifier;
    type IntoIter = std::vec::IntoIter<Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}
