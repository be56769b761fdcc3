use std::fmt::Display;
use uuid::Uuid;

/// A generated 128-bit identifier.
///
/// Renders in the canonical hyphenated lowercase form
/// (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier(Uuid);

impl Identifier {
    /// Length of the canonical rendering.
    pub const CANONICAL_LEN: usize = 36;

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The RFC 4122 version number carried in the identifier.
    pub fn version(&self) -> usize {
        self.0.get_version_num()
    }

    /// Returns `true` if `s` is an 8-4-4-4-12 group of lowercase hex digits.
    pub fn is_canonical(s: &str) -> bool {
        const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

        if s.len() != Self::CANONICAL_LEN {
            return false;
        }

        let mut parts = s.split('-');
        for expected in GROUPS {
            match parts.next() {
                Some(part)
                    if part.len() == expected
                        && part
                            .bytes()
                            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) => {}
                _ => return false,
            }
        }
        parts.next().is_none()
    }
}

impl From<Uuid> for Identifier {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Identifier")
            .field(&self.0.hyphenated().to_string())
            .finish()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
